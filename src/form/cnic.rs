//! CNIC number formatting
//!
//! A CNIC is 13 digits written in 5-7-1 groups: `12345-1234567-1`.

use std::sync::OnceLock;

use regex::Regex;

/// Placeholder shown in an empty CNIC field
pub const CNIC_PLACEHOLDER: &str = "12345-1234567-1";

/// Length of a complete formatted CNIC, hyphens included
pub const CNIC_FORMATTED_LEN: usize = 15;

const CNIC_DIGITS: usize = 13;
const CNIC_PATTERN: &str = r"^[0-9]{5}-[0-9]{7}-[0-9]$";

fn cnic_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CNIC_PATTERN).ok()).as_ref()
}

/// Reformat raw input into CNIC groups.
///
/// Non-digits are dropped first, so formatting is idempotent and can run on
/// every keystroke. Digits past the thirteenth are discarded.
pub fn format_cnic(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(CNIC_DIGITS)
        .collect();

    match digits.len() {
        0..=5 => digits,
        6..=12 => format!("{}-{}", &digits[..5], &digits[5..]),
        _ => format!("{}-{}-{}", &digits[..5], &digits[5..12], &digits[12..]),
    }
}

/// Whether `value` is a complete, well-formed CNIC
pub fn is_valid_cnic(value: &str) -> bool {
    cnic_regex().is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_full_number() {
        assert_eq!(format_cnic("3520112345671"), "35201-1234567-1");
    }

    #[test]
    fn test_format_partial_groups() {
        assert_eq!(format_cnic(""), "");
        assert_eq!(format_cnic("352"), "352");
        assert_eq!(format_cnic("35201"), "35201");
        assert_eq!(format_cnic("352011"), "35201-1");
        assert_eq!(format_cnic("352011234567"), "35201-1234567");
    }

    #[test]
    fn test_format_strips_noise_and_truncates() {
        assert_eq!(format_cnic("35201-1234567-1"), "35201-1234567-1");
        assert_eq!(format_cnic(" 35 201 abc 1234567 1"), "35201-1234567-1");
        assert_eq!(format_cnic("35201123456719999"), "35201-1234567-1");
        assert_eq!(format_cnic("35201-"), "35201");
    }

    #[test]
    fn test_validity() {
        assert!(is_valid_cnic("35201-1234567-1"));
        assert!(!is_valid_cnic("35201-1234567"));
        assert!(!is_valid_cnic("3520112345671"));
        assert!(!is_valid_cnic("35201-1234567-12"));
        assert!(!is_valid_cnic("3520a-1234567-1"));
    }

    proptest! {
        #[test]
        fn prop_format_is_idempotent(raw in ".{0,40}") {
            let once = format_cnic(&raw);
            prop_assert_eq!(format_cnic(&once), once);
        }

        #[test]
        fn prop_formatted_length_bounded(raw in "[0-9 -]{0,40}") {
            prop_assert!(format_cnic(&raw).len() <= CNIC_FORMATTED_LEN);
        }

        #[test]
        fn prop_thirteen_digits_always_valid(digits in "[0-9]{13,20}") {
            let formatted = format_cnic(&digits);
            prop_assert_eq!(formatted.len(), CNIC_FORMATTED_LEN);
            prop_assert!(is_valid_cnic(&formatted));
        }
    }
}
