// fixtures.rs: commonly used configs and card details

use cardform::config::FormConfig;
use cardform::types::{BillingFieldKind, CardScheme};
use cardform::validation::BillingFieldRule;

pub const US_ZIP_PATTERN: &str = r"\d{5}(-\d{4})?";

/// Config with a required name and a pattern-checked postal code.
pub fn billing_config() -> FormConfig {
    FormConfig::builder()
        .billing_field(BillingFieldRule::required(BillingFieldKind::CardholderName))
        .billing_field(BillingFieldRule::optional(BillingFieldKind::AddressLine1))
        .billing_field(
            BillingFieldRule::optional(BillingFieldKind::PostalCode).with_pattern(US_ZIP_PATTERN),
        )
        .build()
        .unwrap()
}

/// Same fields as `billing_config` but billing as a whole is required.
pub fn required_billing_config() -> FormConfig {
    FormConfig::builder()
        .billing_field(BillingFieldRule::required(BillingFieldKind::CardholderName))
        .billing_field(BillingFieldRule::optional(BillingFieldKind::AddressLine1))
        .billing_field(
            BillingFieldRule::optional(BillingFieldKind::PostalCode).with_pattern(US_ZIP_PATTERN),
        )
        .require_billing(true)
        .build()
        .unwrap()
}

pub fn visa_only_config() -> FormConfig {
    FormConfig::builder()
        .supported_schemes([CardScheme::Visa])
        .build()
        .unwrap()
}

pub fn default_config() -> FormConfig {
    FormConfig::builder().build().unwrap()
}

/// (number, scheme) pairs of Luhn-valid test cards.
pub fn test_cards() -> Vec<(&'static str, CardScheme)> {
    vec![
        ("4111111111111111", CardScheme::Visa),
        ("4222222222222", CardScheme::Visa),
        ("5555555555554444", CardScheme::Mastercard),
        ("2223003122003222", CardScheme::Mastercard),
        ("378282246310005", CardScheme::Amex),
        ("371449635398431", CardScheme::Amex),
        ("6011111111111117", CardScheme::Discover),
        ("30569309025904", CardScheme::DinersClub),
        ("3530111333300000", CardScheme::Jcb),
        ("6759649826438453", CardScheme::Maestro),
    ]
}
