// cardform-rs/cardform/src/tokenization/source.rs

use std::fmt;

use crate::types::{BillingFieldKind, CardScheme, ExpiryDate};
use crate::utils::mask_pan;

/// Card details handed to the tokenization client.
///
/// Lives only for the duration of one request. `Debug` masks the card number
/// and hides the security code.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentSource {
    /// Card number, digits only.
    pub number: String,
    /// Expiry date.
    pub expiry: ExpiryDate,
    /// Security code as entered.
    pub security_code: String,
    /// Detected scheme, if any.
    pub scheme: Option<CardScheme>,
    /// Non-empty billing values in configured order.
    pub billing: Vec<(BillingFieldKind, String)>,
}

impl PaymentSource {
    /// Value sent for `kind`; `None` when it was left blank.
    pub fn billing_value(&self, kind: BillingFieldKind) -> Option<&str> {
        self.billing
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for PaymentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentSource")
            .field("number", &mask_pan(&self.number))
            .field("expiry", &self.expiry)
            .field("security_code", &"***")
            .field("scheme", &self.scheme)
            .field("billing", &self.billing)
            .finish()
    }
}
