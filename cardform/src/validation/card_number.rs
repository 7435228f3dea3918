// cardform-rs/cardform/src/validation/card_number.rs

use super::luhn::is_luhn_valid;
use super::{ValidationError, ValidationOutcome};
use crate::constants::{GENERIC_MAX_CARD_LENGTH, GENERIC_MIN_CARD_LENGTH};
use crate::scheme::SchemeTable;
use crate::types::CardScheme;
use crate::utils::strip_non_digits;

/// Validate a card number as typed.
///
/// Non-digits are stripped. The digit count must be one of the detected
/// scheme's lengths (or within 12..=19 when no scheme matches), the Luhn
/// checksum must hold, and a detected scheme must be in `supported`.
pub fn validate_card_number(
    input: &str,
    table: &SchemeTable,
    supported: &[CardScheme],
) -> ValidationOutcome {
    let digits = strip_non_digits(input);
    let scheme = table.detect(&digits);

    let length_ok = match scheme.and_then(|s| table.rule_for(s)) {
        Some(rule) => rule.accepts_length(digits.len()),
        None => (GENERIC_MIN_CARD_LENGTH..=GENERIC_MAX_CARD_LENGTH).contains(&digits.len()),
    };
    if !length_ok || !is_luhn_valid(&digits) {
        return ValidationOutcome::invalid(ValidationError::InvalidCardNumber);
    }

    if let Some(s) = scheme {
        if !supported.contains(&s) {
            log::trace!("card number passes checks but scheme {} is not supported", s);
            return ValidationOutcome::invalid(ValidationError::InvalidCardNumber);
        }
    }

    ValidationOutcome::valid()
}
