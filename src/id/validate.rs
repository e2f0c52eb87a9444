use super::checksum::check_digit;
use super::format::strip_id;
use super::ID_LENGTH;

/// Checks a candidate Thai national ID.
///
/// Separators and whitespace are stripped before checking, so formatted and
/// bare inputs are treated alike. Anything that is not exactly 13 ASCII
/// digits afterwards is invalid, as is a mismatched check digit. Malformed
/// input is an ordinary `false`, never an error.
pub fn validate_thai_id(input: &str) -> bool {
    let cleaned = strip_id(input);
    if cleaned.len() != ID_LENGTH {
        return false;
    }
    let mut digits = [0u8; ID_LENGTH];
    for (slot, byte) in digits.iter_mut().zip(cleaned.bytes()) {
        if !byte.is_ascii_digit() {
            return false;
        }
        *slot = byte - b'0';
    }
    check_digit(&digits[..ID_LENGTH - 1]) == digits[ID_LENGTH - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_valid_ids() {
        for id in [
            "1101700230708",
            "1234567890121",
            "8450150007681",
            "3101202896000",
            "0000000000001",
            "0000000000060",
        ] {
            assert!(validate_thai_id(id), "{id} should validate");
        }
    }

    #[test]
    fn accepts_formatted_and_padded_input() {
        assert!(validate_thai_id("1-1017-00230-70-8"));
        assert!(validate_thai_id(" 1101700230708 "));
        assert!(validate_thai_id("1 1017 00230 70 8"));
        assert!(validate_thai_id("\t0000000000060\n"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        // The correct check digit for this prefix is 8.
        assert!(!validate_thai_id("1101700230705"));
        assert!(!validate_thai_id("1234567890123"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!validate_thai_id(""));
        assert!(!validate_thai_id("123"));
        assert!(!validate_thai_id("110170023070"));
        assert!(!validate_thai_id("11017002307081"));
        assert!(!validate_thai_id("12345678901234"));
        assert!(!validate_thai_id("1-1017-00230-70"));
    }

    #[test]
    fn rejects_non_digit_content() {
        assert!(!validate_thai_id("12345678901ab"));
        assert!(!validate_thai_id("11017oo230708"));
        // Thai numerals are not ASCII digits.
        assert!(!validate_thai_id("๑๑๐๑๗๐๐๒๓๐๗๐๘"));
    }

    #[test]
    fn detects_every_mutation_outside_the_third_digit() {
        // Positions 0, 1 and 3..12 carry weights coprime to 11 (or are the
        // check digit itself), so any single-digit change there must flip
        // validation to false.
        let fixture = "1101700230708";
        let bytes = fixture.as_bytes();
        for pos in 0..bytes.len() {
            if pos == 2 {
                continue;
            }
            for digit in b'0'..=b'9' {
                if digit == bytes[pos] {
                    continue;
                }
                let mut mutated = bytes.to_vec();
                mutated[pos] = digit;
                let mutated = String::from_utf8(mutated).unwrap();
                assert!(
                    !validate_thai_id(&mutated),
                    "mutation {fixture} -> {mutated} at position {pos} passed"
                );
            }
        }
    }

    #[test]
    fn third_digit_is_the_checksum_blind_spot() {
        // d3 is weighted 11, which is 0 mod 11: no substitution there moves
        // the weighted sum's remainder, so the scheme cannot detect it.
        let fixture = "1101700230708";
        for digit in b'0'..=b'9' {
            let mut mutated = fixture.as_bytes().to_vec();
            mutated[2] = digit;
            let mutated = String::from_utf8(mutated).unwrap();
            assert!(validate_thai_id(&mutated), "{mutated} should still validate");
        }
    }
}
