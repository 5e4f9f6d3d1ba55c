//! Total, stateless normalizers for semi-structured text fields.
//!
//! None of these functions fail: input that cannot be brought into canonical
//! form is returned as its bare digit string and left for later stages to
//! judge.

pub mod numeric;
pub mod phone;
pub mod zip;

/// Keeps only the ASCII digits of `raw`.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
