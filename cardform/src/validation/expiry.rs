// cardform-rs/cardform/src/validation/expiry.rs

use super::{ValidationError, ValidationOutcome};
use crate::types::{ExpiryDate, YearMonth};

/// Validate an expiry date against the current month.
///
/// A card is still valid during its expiry month.
pub fn validate_expiry(date: &ExpiryDate, today: YearMonth) -> ValidationOutcome {
    if !(1..=12).contains(&date.month()) {
        return ValidationOutcome::invalid(ValidationError::InvalidExpiryMonth);
    }
    if date.as_year_month() < today {
        return ValidationOutcome::invalid(ValidationError::ExpiredCard);
    }
    ValidationOutcome::valid()
}
