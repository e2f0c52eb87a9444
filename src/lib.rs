//! Thai national ID toolkit: generation, validation, and card-layout
//! formatting of 13-digit citizen IDs.
//!
//! The check digit is the Ministry of Interior mod-11 scheme over the first
//! 12 digits; see [`id::check_digit`]. Validation treats malformed input as
//! an ordinary `false`, and formatting gates on length alone.

pub mod config;
pub mod id;
pub mod logger;

pub use id::{
    format_thai_id, generate_formatted_thai_id, generate_thai_id, generate_thai_ids,
    validate_thai_id,
};
