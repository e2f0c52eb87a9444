use thiserror::Error;

/// Errors raised by ID formatting.
///
/// Validation never errors: malformed input is an ordinary `false` from
/// [`validate_thai_id`](super::validate_thai_id).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The input did not contain exactly 13 characters after stripping
    /// separators and whitespace. Carries the cleaned length.
    #[error("expected a 13-digit ID, got {0} characters")]
    InvalidLength(usize),
}
