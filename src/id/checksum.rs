// Ministry of Interior weights for the first 12 digits: position i (1-based)
// is weighted 14 - i, so d1 carries 13 and d12 carries 2.
const WEIGHTS: [u32; 12] = [13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes the mod-11 check digit over the first 12 digits of a Thai
/// national ID.
///
/// `digits` holds digit values 0-9, not ASCII bytes. With `S` the weighted
/// sum, the check digit is `(11 - (S mod 11)) mod 10`; remainders 0 and 10
/// both map to 1, which is inherent to the national scheme.
pub fn check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0u32;
    for (&digit, &weight) in digits.iter().zip(WEIGHTS.iter()) {
        sum += digit as u32 * weight;
    }
    ((11 - (sum % 11)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_prefixes() {
        // S = 146, r = 3
        assert_eq!(check_digit(&[1, 1, 0, 1, 7, 0, 0, 2, 3, 0, 7, 0]), 8);
        // S = 352, r = 0 collapses to check digit 1
        assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2]), 1);
        // S = 318, r = 10 also collapses to 1
        assert_eq!(check_digit(&[8, 4, 5, 0, 1, 5, 0, 0, 0, 7, 6, 8]), 1);
        // S = 12, r = 1 gives check digit 0
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6]), 0);
        // All-zero prefix: S = 0
        assert_eq!(check_digit(&[0; 12]), 1);
    }

    #[test]
    fn deterministic_for_fixed_prefix() {
        let prefix = [3, 1, 0, 1, 2, 0, 2, 8, 9, 6, 0, 0];
        let first = check_digit(&prefix);
        for _ in 0..10 {
            assert_eq!(check_digit(&prefix), first);
        }
        assert_eq!(first, 0);
    }
}
