//! Phone number normalization.

use super::digits_only;

/// Normalizes a phone number to `(XXX) XXX-XXXX`, keeping an eleventh
/// leading country digit as a bare prefix (`1(XXX) XXX-XXXX`).
///
/// Other lengths are returned as their digit string.
pub fn normalize_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    match digits.len() {
        10 => format_local(&digits),
        11 => format!("{}{}", &digits[..1], format_local(&digits[1..])),
        _ => digits,
    }
}

fn format_local(digits: &str) -> String {
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
