// cardform-rs/cardform/src/validation/billing.rs

use regex::Regex;

use super::{ValidationError, ValidationOutcome};
use crate::types::BillingFieldKind;
use crate::{Error, Result};

/// Host-supplied rule for one billing field.
///
/// `pattern` is matched against the whole trimmed value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingFieldRule {
    /// Which field.
    pub kind: BillingFieldKind,
    /// Must be non-empty.
    pub required: bool,
    /// Regex the whole trimmed value must match.
    pub pattern: Option<String>,
}

impl BillingFieldRule {
    /// Mandatory field without a pattern.
    pub fn required(kind: BillingFieldKind) -> Self {
        Self {
            kind,
            required: true,
            pattern: None,
        }
    }

    /// Optional field without a pattern.
    pub fn optional(kind: BillingFieldKind) -> Self {
        Self {
            kind,
            required: false,
            pattern: None,
        }
    }

    /// Require non-empty values to match `pattern`.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// Compiled form of a [`BillingFieldRule`].
#[derive(Debug, Clone)]
pub struct BillingFieldValidator {
    kind: BillingFieldKind,
    required: bool,
    pattern: Option<Regex>,
}

impl BillingFieldValidator {
    /// Compile `rule`. `force_required` makes the field required regardless
    /// of the rule's own flag.
    pub fn compile(rule: &BillingFieldRule, force_required: bool) -> Result<Self> {
        let pattern = match &rule.pattern {
            Some(src) => Some(Regex::new(&format!("^(?:{})$", src)).map_err(|source| {
                Error::InvalidPattern {
                    field: rule.kind,
                    source,
                }
            })?),
            None => None,
        };
        Ok(Self {
            kind: rule.kind,
            required: rule.required || force_required,
            pattern,
        })
    }

    /// Field this validator checks.
    pub fn kind(&self) -> BillingFieldKind {
        self.kind
    }

    /// Required after applying the form-wide billing requirement.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Validate one billing value.
///
/// Empty (after trimming) fails only when required; a configured pattern is
/// checked only for non-empty values.
pub fn validate_billing_field(value: &str, validator: &BillingFieldValidator) -> ValidationOutcome {
    let value = value.trim();
    if value.is_empty() {
        return if validator.required {
            ValidationOutcome::invalid(ValidationError::RequiredFieldMissing)
        } else {
            ValidationOutcome::valid()
        };
    }
    match &validator.pattern {
        Some(re) if !re.is_match(value) => ValidationOutcome::invalid(ValidationError::InvalidFormat),
        _ => ValidationOutcome::valid(),
    }
}
