use super::error::IdError;
use super::ID_LENGTH;

// Digit group sizes of the printed card layout: d-dddd-ddddd-dd-d.
const GROUPS: [usize; 5] = [1, 4, 5, 2, 1];

/// Removes separators and whitespace from a candidate ID, leaving the bare
/// characters for validation or formatting.
pub fn strip_id(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Renders an ID in the 1-4-5-2-1 card layout.
///
/// Existing separators and whitespace are stripped first; the cleaned input
/// must then be exactly 13 characters. Grouping does not check the check
/// digit, so an ID can format cleanly and still fail validation.
pub fn format_thai_id(input: &str) -> Result<String, IdError> {
    let cleaned = strip_id(input);
    let count = cleaned.chars().count();
    if count != ID_LENGTH {
        return Err(IdError::InvalidLength(count));
    }
    Ok(group_digits(&cleaned))
}

/// Inserts the card-layout separators into a cleaned 13-character string.
pub(crate) fn group_digits(cleaned: &str) -> String {
    debug_assert_eq!(cleaned.chars().count(), ID_LENGTH);
    let chars: Vec<char> = cleaned.chars().collect();
    let mut formatted = String::with_capacity(cleaned.len() + GROUPS.len() - 1);
    let mut pos = 0;
    for (i, &size) in GROUPS.iter().enumerate() {
        if i > 0 {
            formatted.push('-');
        }
        for _ in 0..size {
            formatted.push(chars[pos]);
            pos += 1;
        }
    }
    formatted
}
