use cardform::scheme::SchemeTable;
use cardform::types::CardScheme;
use cardform::validation::{ValidationError, validate_card_number};
use proptest::prelude::*;

use crate::common::fixtures::test_cards;

fn validate(number: &str) -> Option<ValidationError> {
    validate_card_number(number, &SchemeTable::builtin(), &CardScheme::ALL).reason
}

#[test]
fn luhn_examples() {
    assert_eq!(validate("4111111111111111"), None);
    assert_eq!(
        validate("4111111111111112"),
        Some(ValidationError::InvalidCardNumber)
    );
}

#[test]
fn every_test_card_is_valid() {
    for (number, _) in test_cards() {
        assert_eq!(validate(number), None, "{}", number);
    }
}

#[test]
fn amex_length_is_fifteen() {
    // Sixteen digits with an Amex prefix, Luhn-valid
    assert_eq!(
        validate("3700000000000007"),
        Some(ValidationError::InvalidCardNumber)
    );
}

proptest! {
    #[test]
    fn validator_never_panics(s in ".{0,40}") {
        let _ = validate(&s);
    }

    #[test]
    fn too_long_is_always_rejected(s in "[0-9]{20,30}") {
        prop_assert_eq!(validate(&s), Some(ValidationError::InvalidCardNumber));
    }
}
