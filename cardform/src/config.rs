// cardform-rs/cardform/src/config.rs

//! Host configuration, read once when the form is built.

use std::collections::HashSet;

use crate::scheme::SchemeTable;
use crate::types::{BillingFieldKind, CardScheme};
use crate::validation::{BillingFieldRule, BillingFieldValidator};
use crate::{Error, Result};

/// Immutable form configuration. Build it with [`FormConfig::builder`].
#[derive(Debug, Clone)]
pub struct FormConfig {
    scheme_table: SchemeTable,
    supported_schemes: Vec<CardScheme>,
    billing_fields: Vec<BillingFieldValidator>,
    require_billing: bool,
}

impl FormConfig {
    /// Start a [`FormConfigBuilder`].
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder::new()
    }

    /// Rule table used for detection and length checks.
    pub fn scheme_table(&self) -> &SchemeTable {
        &self.scheme_table
    }

    /// Schemes the merchant accepts, in display order.
    pub fn supported_schemes(&self) -> &[CardScheme] {
        &self.supported_schemes
    }

    /// Compiled billing fields in the order the host configured them.
    pub fn billing_fields(&self) -> &[BillingFieldValidator] {
        &self.billing_fields
    }

    /// Compiled rule for `kind`, if it is on the form.
    pub fn billing_field(&self, kind: BillingFieldKind) -> Option<&BillingFieldValidator> {
        self.billing_fields.iter().find(|v| v.kind() == kind)
    }

    /// Whether every billing field is mandatory.
    pub fn require_billing(&self) -> bool {
        self.require_billing
    }
}

/// Builder for [`FormConfig`].
#[derive(Debug, Default)]
pub struct FormConfigBuilder {
    scheme_table: Option<SchemeTable>,
    supported_schemes: Option<Vec<CardScheme>>,
    billing_fields: Vec<BillingFieldRule>,
    require_billing: bool,
}

impl FormConfigBuilder {
    /// Builder with the built-in scheme table and no billing fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the built-in scheme table.
    pub fn scheme_table(mut self, table: SchemeTable) -> Self {
        self.scheme_table = Some(table);
        self
    }

    /// Restrict accepted cards to these schemes. Defaults to every scheme in
    /// the table.
    pub fn supported_schemes(mut self, schemes: impl IntoIterator<Item = CardScheme>) -> Self {
        self.supported_schemes = Some(schemes.into_iter().collect());
        self
    }

    /// Add one billing field. Fields are shown in insertion order.
    pub fn billing_field(mut self, rule: BillingFieldRule) -> Self {
        self.billing_fields.push(rule);
        self
    }

    /// Add several billing fields at once.
    pub fn billing_fields(mut self, rules: impl IntoIterator<Item = BillingFieldRule>) -> Self {
        self.billing_fields.extend(rules);
        self
    }

    /// When set, every configured billing field must be present and valid.
    pub fn require_billing(mut self, required: bool) -> Self {
        self.require_billing = required;
        self
    }

    /// Validate and compile the configuration.
    ///
    /// Fails with [`Error::Configuration`] for an empty table or scheme list,
    /// a supported scheme without a rule, or a duplicated billing field, and
    /// with [`Error::InvalidPattern`] when a pattern does not compile.
    pub fn build(self) -> Result<FormConfig> {
        let scheme_table = self.scheme_table.unwrap_or_else(SchemeTable::builtin);
        if scheme_table.is_empty() {
            return Err(Error::Configuration("scheme table is empty".to_string()));
        }

        let supported_schemes = match self.supported_schemes {
            Some(list) => list,
            None => scheme_table.rules().iter().map(|r| r.scheme).collect(),
        };
        if supported_schemes.is_empty() {
            return Err(Error::Configuration(
                "no supported card schemes configured".to_string(),
            ));
        }
        if let Some(missing) = supported_schemes
            .iter()
            .find(|s| scheme_table.rule_for(**s).is_none())
        {
            return Err(Error::Configuration(format!(
                "supported scheme {} has no rule in the scheme table",
                missing
            )));
        }
        if let Some(rule) = scheme_table
            .rules()
            .iter()
            .find(|r| r.prefixes.is_empty() || r.lengths.is_empty())
        {
            return Err(Error::Configuration(format!(
                "scheme rule for {} needs at least one prefix and one length",
                rule.scheme
            )));
        }

        let mut seen = HashSet::new();
        let mut billing_fields = Vec::with_capacity(self.billing_fields.len());
        for rule in &self.billing_fields {
            if !seen.insert(rule.kind) {
                return Err(Error::Configuration(format!(
                    "billing field {} configured twice",
                    rule.kind
                )));
            }
            billing_fields.push(BillingFieldValidator::compile(rule, self.require_billing)?);
        }

        log::debug!(
            "form config built: {} schemes supported, {} billing fields, billing required={}",
            supported_schemes.len(),
            billing_fields.len(),
            self.require_billing
        );

        Ok(FormConfig {
            scheme_table,
            supported_schemes,
            billing_fields,
            require_billing: self.require_billing,
        })
    }
}
