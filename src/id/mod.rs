pub mod checksum;
pub mod error;
pub mod format;
pub mod generate;
pub mod validate;

pub use checksum::check_digit;
pub use error::IdError;
pub use format::{format_thai_id, strip_id};
pub use generate::{
    generate_formatted_thai_id, generate_thai_id, generate_thai_id_with, generate_thai_ids,
    FirstDigitPolicy, ThaiIdGenerator,
};
pub use validate::validate_thai_id;

/// A Thai national ID is always 13 digits: 12 assigned digits plus a check digit.
pub const ID_LENGTH: usize = 13;
