//! Property-based tests for phone validation.
//!
//! Uses proptest to generate phone-like strings and verify that:
//! 1. Every string of exactly ten ASCII digits is accepted
//! 2. Changing the length or introducing a non-digit is always rejected
//! 3. Rejection never touches a record's phone list

use address_book_bot::{Field, Name, Phone, Record};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn valid_phone_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{10}").expect("valid regex")
}

/// Digit strings of any length other than ten.
fn wrong_length_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[0-9]{0,9}").expect("valid regex"),
        prop::string::string_regex("[0-9]{11,20}").expect("valid regex"),
    ]
}

/// A valid phone with one position replaced by a non-digit character.
fn one_bad_char_strategy() -> impl Strategy<Value = String> {
    (
        valid_phone_strategy(),
        0usize..10,
        any::<char>().prop_filter("non-digit", |c| !c.is_ascii_digit()),
    )
        .prop_map(|(digits, index, bad)| {
            digits
                .chars()
                .enumerate()
                .map(|(i, c)| if i == index { bad } else { c })
                .collect()
        })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn ten_digits_always_validate(raw in valid_phone_strategy()) {
        prop_assert!(Phone::validate(&raw));
        let phone = Phone::new(raw.clone()).unwrap();
        prop_assert_eq!(phone.value(), raw.as_str());
    }

    #[test]
    fn wrong_length_never_validates(raw in wrong_length_strategy()) {
        prop_assert!(!Phone::validate(&raw));
        prop_assert!(Phone::new(raw).is_err());
    }

    #[test]
    fn any_non_digit_never_validates(raw in one_bad_char_strategy()) {
        prop_assert!(!Phone::validate(&raw));
    }

    #[test]
    fn surrounding_whitespace_never_validates(raw in valid_phone_strategy(), pad in "[ \t\n]{1,3}") {
        let padded_front = format!("{}{}", pad, raw);
        let padded_back = format!("{}{}", raw, pad);
        prop_assert!(!Phone::validate(&padded_front));
        prop_assert!(!Phone::validate(&padded_back));
    }

    #[test]
    fn rejected_phone_leaves_record_unchanged(
        existing in valid_phone_strategy(),
        bad in one_bad_char_strategy(),
    ) {
        let mut record = Record::new(Name::new("alice").unwrap());
        record.add_phone(&existing).unwrap();

        let err = record.add_phone(&bad).unwrap_err();
        prop_assert_eq!(err.to_string(), "Phone number must contain exactly 10 digits.");
        prop_assert_eq!(record.phones_display(), existing);
    }
}
