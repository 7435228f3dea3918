// cardform-rs/cardform/src/form/state.rs

use crate::config::FormConfig;
use crate::types::{BillingFieldKind, ExpiryDate};

/// Identifies one field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    /// Primary account number.
    CardNumber,
    /// Expiry month and year.
    ExpiryDate,
    /// CVV / CVC / CID.
    SecurityCode,
    /// A configured billing field.
    Billing(BillingFieldKind),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Field<T> {
    value: T,
    touched: bool,
}

impl<T: Default> Field<T> {
    fn set(&mut self, value: T) {
        self.value = value;
        self.touched = true;
    }

    fn clear(&mut self) {
        self.value = T::default();
        self.touched = false;
    }
}

/// Current values of every field on the form, each with a touched flag.
///
/// A field is pristine until its first edit. Clearing a touched field does
/// not make it pristine again; only [`FormState::reset`] does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    card_number: Field<String>,
    expiry_date: Field<Option<ExpiryDate>>,
    security_code: Field<String>,
    billing: Vec<(BillingFieldKind, Field<String>)>,
}

impl FormState {
    /// Empty, pristine state with one billing entry per configured field.
    pub fn new(config: &FormConfig) -> Self {
        Self {
            card_number: Field::default(),
            expiry_date: Field::default(),
            security_code: Field::default(),
            billing: config
                .billing_fields()
                .iter()
                .map(|v| (v.kind(), Field::default()))
                .collect(),
        }
    }

    /// Store the card number as typed and mark it touched.
    pub fn set_card_number(&mut self, value: impl Into<String>) {
        self.card_number.set(value.into());
    }

    /// `None` clears the expiry but still marks it touched.
    pub fn set_expiry_date(&mut self, value: Option<ExpiryDate>) {
        self.expiry_date.set(value);
    }

    /// Store the security code and mark it touched.
    pub fn set_security_code(&mut self, value: impl Into<String>) {
        self.security_code.set(value.into());
    }

    /// Returns `false` (and changes nothing) if `kind` is not on this form.
    pub fn set_billing_field(&mut self, kind: BillingFieldKind, value: impl Into<String>) -> bool {
        match self.billing.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, field)) => {
                field.set(value.into());
                true
            }
            None => false,
        }
    }

    /// Card number exactly as typed.
    pub fn card_number(&self) -> &str {
        &self.card_number.value
    }

    pub fn expiry_date(&self) -> Option<ExpiryDate> {
        self.expiry_date.value
    }

    pub fn security_code(&self) -> &str {
        &self.security_code.value
    }

    /// Value of a billing field; `None` if it is not on the form.
    pub fn billing_field(&self, kind: BillingFieldKind) -> Option<&str> {
        self.billing
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, f)| f.value.as_str())
    }

    /// Billing values in configured order.
    pub fn billing_values(&self) -> impl Iterator<Item = (BillingFieldKind, &str)> {
        self.billing.iter().map(|(k, f)| (*k, f.value.as_str()))
    }

    /// Every field on the form, in display order.
    pub fn field_ids(&self) -> Vec<FieldId> {
        let mut ids = vec![FieldId::CardNumber, FieldId::ExpiryDate, FieldId::SecurityCode];
        ids.extend(self.billing.iter().map(|(k, _)| FieldId::Billing(*k)));
        ids
    }

    /// Edited at least once since creation or the last reset.
    pub fn is_touched(&self, id: FieldId) -> bool {
        match id {
            FieldId::CardNumber => self.card_number.touched,
            FieldId::ExpiryDate => self.expiry_date.touched,
            FieldId::SecurityCode => self.security_code.touched,
            FieldId::Billing(kind) => self
                .billing
                .iter()
                .any(|(k, f)| *k == kind && f.touched),
        }
    }

    /// Blank after trimming, or no expiry set.
    pub fn is_empty(&self, id: FieldId) -> bool {
        match id {
            FieldId::CardNumber => self.card_number.value.trim().is_empty(),
            FieldId::ExpiryDate => self.expiry_date.value.is_none(),
            FieldId::SecurityCode => self.security_code.value.trim().is_empty(),
            FieldId::Billing(kind) => self.billing_field(kind).is_none_or(|v| v.trim().is_empty()),
        }
    }

    /// Pristine: never edited and still empty.
    pub fn is_pristine(&self, id: FieldId) -> bool {
        !self.is_touched(id) && self.is_empty(id)
    }

    /// Clear every value and touched flag.
    pub fn reset(&mut self) {
        self.card_number.clear();
        self.expiry_date.clear();
        self.security_code.clear();
        for (_, field) in &mut self.billing {
            field.clear();
        }
    }
}
