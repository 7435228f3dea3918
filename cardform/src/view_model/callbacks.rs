// cardform-rs/cardform/src/view_model/callbacks.rs

use std::fmt;

use crate::tokenization::{TokenDetails, TokenizationError};
use crate::types::{BillingFieldKind, CardScheme};
use crate::validation::ValidationError;

/// Header region: the card networks the form accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Accepted schemes, for the card logo row.
    pub supported_schemes: Vec<CardScheme>,
}

/// Card number region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardNumberView {
    /// Detected scheme, for the card logo.
    pub scheme: Option<CardScheme>,
    /// Current value passes validation.
    pub valid: bool,
    /// Error to show; `None` while the field is pristine.
    pub error: Option<ValidationError>,
}

/// Expiry date region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDateView {
    /// Current value passes validation.
    pub valid: bool,
    /// Error to show; `None` while the field is pristine.
    pub error: Option<ValidationError>,
}

/// Security code region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityCodeView {
    /// Detected scheme the length applies to.
    pub scheme: Option<CardScheme>,
    /// Digits the code must have, e.g. 4 for American Express.
    pub required_length: usize,
    /// Current value passes validation.
    pub valid: bool,
    /// Error to show; `None` while the field is pristine.
    pub error: Option<ValidationError>,
}

/// Billing region. With no values entered the host shows an "add billing
/// details" prompt, otherwise a summary of the entered lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingSummaryView {
    /// Non-empty billing values, in configured order.
    pub lines: Vec<String>,
    /// Errors currently shown on billing fields.
    pub errors: Vec<(BillingFieldKind, ValidationError)>,
}

impl BillingSummaryView {
    /// Nothing entered yet: show the add-details prompt.
    pub fn shows_add_prompt(&self) -> bool {
        self.lines.is_empty()
    }
}

type Callback<T> = Option<Box<dyn FnMut(&T)>>;

/// Optional per-region callbacks registered by the host.
///
/// Each one may fire repeatedly with identical content; hosts should simply
/// redraw.
#[derive(Default)]
pub struct UpdateCallbacks {
    header: Callback<HeaderView>,
    card_number: Callback<CardNumberView>,
    expiry_date: Callback<ExpiryDateView>,
    security_code: Callback<SecurityCodeView>,
    billing_summary: Callback<BillingSummaryView>,
    pay_button: Option<Box<dyn FnMut(bool)>>,
    token_success: Callback<TokenDetails>,
    token_failure: Callback<TokenizationError>,
}

impl UpdateCallbacks {
    /// No callbacks registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Header region callback.
    pub fn on_header(mut self, f: impl FnMut(&HeaderView) + 'static) -> Self {
        self.header = Some(Box::new(f));
        self
    }

    /// Fires when card number validity, its shown error or the scheme changes.
    pub fn on_card_number(mut self, f: impl FnMut(&CardNumberView) + 'static) -> Self {
        self.card_number = Some(Box::new(f));
        self
    }

    /// Fires when expiry validity or its shown error changes.
    pub fn on_expiry_date(mut self, f: impl FnMut(&ExpiryDateView) + 'static) -> Self {
        self.expiry_date = Some(Box::new(f));
        self
    }

    /// Fires when security code validity, its shown error or the scheme changes.
    pub fn on_security_code(mut self, f: impl FnMut(&SecurityCodeView) + 'static) -> Self {
        self.security_code = Some(Box::new(f));
        self
    }

    /// Fires when the billing summary content changes.
    pub fn on_billing_summary(mut self, f: impl FnMut(&BillingSummaryView) + 'static) -> Self {
        self.billing_summary = Some(Box::new(f));
        self
    }

    /// Called with whether the pay button should be enabled.
    pub fn on_pay_button(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.pay_button = Some(Box::new(f));
        self
    }

    /// Receives the token once a request succeeds.
    pub fn on_token_success(mut self, f: impl FnMut(&TokenDetails) + 'static) -> Self {
        self.token_success = Some(Box::new(f));
        self
    }

    /// Receives the client's error once a request fails.
    pub fn on_token_failure(mut self, f: impl FnMut(&TokenizationError) + 'static) -> Self {
        self.token_failure = Some(Box::new(f));
        self
    }

    pub(crate) fn header(&mut self, view: &HeaderView) {
        fire(&mut self.header, view);
    }

    pub(crate) fn card_number(&mut self, view: &CardNumberView) {
        fire(&mut self.card_number, view);
    }

    pub(crate) fn expiry_date(&mut self, view: &ExpiryDateView) {
        fire(&mut self.expiry_date, view);
    }

    pub(crate) fn security_code(&mut self, view: &SecurityCodeView) {
        fire(&mut self.security_code, view);
    }

    pub(crate) fn billing_summary(&mut self, view: &BillingSummaryView) {
        fire(&mut self.billing_summary, view);
    }

    pub(crate) fn pay_button(&mut self, enabled: bool) {
        if let Some(f) = self.pay_button.as_mut() {
            f(enabled);
        }
    }

    pub(crate) fn token_success(&mut self, token: &TokenDetails) {
        fire(&mut self.token_success, token);
    }

    pub(crate) fn token_failure(&mut self, error: &TokenizationError) {
        fire(&mut self.token_failure, error);
    }
}

fn fire<T>(slot: &mut Callback<T>, value: &T) {
    if let Some(f) = slot.as_mut() {
        f(value);
    }
}

impl fmt::Debug for UpdateCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateCallbacks")
            .field("header", &self.header.is_some())
            .field("card_number", &self.card_number.is_some())
            .field("expiry_date", &self.expiry_date.is_some())
            .field("security_code", &self.security_code.is_some())
            .field("billing_summary", &self.billing_summary.is_some())
            .field("pay_button", &self.pay_button.is_some())
            .field("token_success", &self.token_success.is_some())
            .field("token_failure", &self.token_failure.is_some())
            .finish()
    }
}
