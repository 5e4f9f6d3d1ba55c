//! Property tests for the zip and phone normalizers.

use osr_transform::{digits_only, normalize_phone, normalize_zip};
use proptest::prelude::*;

#[test]
fn documented_examples() {
    assert_eq!(normalize_zip("123456789"), "12345-6789");
    assert_eq!(normalize_zip("123450000"), "12345");
    assert_eq!(normalize_zip("1234"), "1234");
    assert_eq!(normalize_phone("5551234567"), "(555) 123-4567");
    assert_eq!(normalize_phone("15551234567"), "1(555) 123-4567");
    assert_eq!(normalize_phone("555"), "555");
}

fn is_canonical_zip(value: &str) -> bool {
    let bytes = value.as_bytes();
    let hyphenated = bytes.len() == 10
        && bytes[5] == b'-'
        && bytes[..5].iter().all(u8::is_ascii_digit)
        && bytes[6..].iter().all(u8::is_ascii_digit);
    hyphenated || bytes.iter().all(u8::is_ascii_digit)
}

proptest! {
    #[test]
    fn zip_output_is_canonical_or_digits(raw in ".{0,20}") {
        let zip = normalize_zip(&raw);
        prop_assert!(is_canonical_zip(&zip));
    }

    #[test]
    fn nine_digit_zip_round_trips_digits(digits in "[0-9]{9}") {
        let zip = normalize_zip(&digits);
        if digits.ends_with("0000") {
            prop_assert_eq!(zip, digits[..5].to_string());
        } else {
            prop_assert_eq!(digits_only(&zip), digits);
            prop_assert_eq!(zip.len(), 10);
        }
    }

    #[test]
    fn zip_normalization_is_idempotent(raw in "[0-9 -]{0,11}") {
        let once = normalize_zip(&raw);
        prop_assert_eq!(normalize_zip(&once), once);
    }

    #[test]
    fn ten_digit_phone_is_formatted(digits in "[0-9]{10}") {
        let phone = normalize_phone(&digits);
        prop_assert_eq!(phone.len(), 14);
        prop_assert!(phone.starts_with('('));
        prop_assert_eq!(digits_only(&phone), digits);
    }

    #[test]
    fn phone_keeps_all_digits(raw in ".{0,24}") {
        prop_assert_eq!(digits_only(&normalize_phone(&raw)), digits_only(&raw));
    }
}
