// cardform-rs/cardform/src/validation/security_code.rs

use super::{ValidationError, ValidationOutcome};
use crate::scheme::SchemeTable;
use crate::types::CardScheme;
use crate::utils::is_all_digits;

/// Validate a security code for the scheme of the card it belongs to.
///
/// The code must be digits only and exactly as long as the scheme requires
/// (3 when the scheme is unknown).
pub fn validate_security_code(
    code: &str,
    scheme: Option<CardScheme>,
    table: &SchemeTable,
) -> ValidationOutcome {
    let required = table.security_code_length(scheme);
    if is_all_digits(code) && code.len() == required {
        ValidationOutcome::valid()
    } else {
        ValidationOutcome::invalid(ValidationError::InvalidSecurityCode)
    }
}
