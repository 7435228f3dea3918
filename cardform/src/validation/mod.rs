// cardform-rs/cardform/src/validation/mod.rs

//! Stateless field validators.
//!
//! Each validator takes the raw value plus whatever context it needs and
//! returns a [`ValidationOutcome`]. None of them keep state between calls.

use thiserror::Error;

/// Configurable billing field rules.
pub mod billing;
/// Card number check.
pub mod card_number;
/// Expiry date check.
pub mod expiry;
/// Luhn (mod 10) checksum.
pub mod luhn;
/// Security code check.
pub mod security_code;

pub use billing::{BillingFieldRule, BillingFieldValidator, validate_billing_field};
pub use card_number::validate_card_number;
pub use expiry::validate_expiry;
pub use luhn::{is_luhn_valid, luhn_sum};
pub use security_code::validate_security_code;

/// Reason a field failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Wrong length, failed Luhn, or unsupported scheme.
    #[error("invalid card number")]
    InvalidCardNumber,
    /// Month outside 1 to 12.
    #[error("invalid expiry month")]
    InvalidExpiryMonth,
    /// Expiry month is in the past.
    #[error("card has expired")]
    ExpiredCard,
    /// Wrong length or not all digits.
    #[error("invalid security code")]
    InvalidSecurityCode,
    /// Empty field that must be filled.
    #[error("required field missing")]
    RequiredFieldMissing,
    /// Value does not match the configured pattern.
    #[error("invalid format")]
    InvalidFormat,
}

/// Result of running one validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the value passed.
    pub valid: bool,
    /// Why it failed; `None` when valid.
    pub reason: Option<ValidationError>,
}

impl ValidationOutcome {
    /// Passing outcome.
    pub const VALID: Self = Self {
        valid: true,
        reason: None,
    };

    /// Same as [`ValidationOutcome::VALID`].
    pub fn valid() -> Self {
        Self::VALID
    }

    /// Failing outcome with `reason`.
    pub fn invalid(reason: ValidationError) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Convert into a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.reason {
            Some(reason) if !self.valid => Err(reason),
            _ => Ok(()),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationOutcome {
    fn from(r: Result<(), ValidationError>) -> Self {
        match r {
            Ok(()) => Self::VALID,
            Err(e) => Self::invalid(e),
        }
    }
}
