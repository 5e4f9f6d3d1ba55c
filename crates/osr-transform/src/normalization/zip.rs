//! Zip code normalization.

use super::digits_only;

const MISSING_PLUS_FOUR: &str = "0000";

/// Normalizes a zip code to `XXXXX` or `XXXXX-XXXX`.
///
/// A nine-or-more digit code ending in `0000` is treated as a zip with an
/// unknown +4 suffix and trimmed. Anything else that is not exactly nine
/// digits is returned as its digit string.
///
/// ```
/// use osr_transform::normalize_zip;
///
/// assert_eq!(normalize_zip("12345-6789"), "12345-6789");
/// assert_eq!(normalize_zip("123450000"), "12345");
/// assert_eq!(normalize_zip("1234"), "1234");
/// ```
pub fn normalize_zip(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() >= 9 && digits.ends_with(MISSING_PLUS_FOUR) {
        return digits[..digits.len() - MISSING_PLUS_FOUR.len()].to_string();
    }
    if digits.len() == 9 {
        return format!("{}-{}", &digits[..5], &digits[5..]);
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_digits_get_a_hyphen() {
        assert_eq!(normalize_zip("123456789"), "12345-6789");
        assert_eq!(normalize_zip(" 12345 6789 "), "12345-6789");
    }

    #[test]
    fn trailing_zero_suffix_is_dropped() {
        assert_eq!(normalize_zip("123450000"), "12345");
        assert_eq!(normalize_zip("12345-0000"), "12345");
    }

    #[test]
    fn short_codes_keep_their_zeros() {
        assert_eq!(normalize_zip("10000"), "10000");
        assert_eq!(normalize_zip("94103"), "94103");
    }

    #[test]
    fn malformed_codes_pass_through_as_digits() {
        assert_eq!(normalize_zip("1234"), "1234");
        assert_eq!(normalize_zip("ABC"), "");
        assert_eq!(normalize_zip("1234567890"), "1234567890");
    }
}
