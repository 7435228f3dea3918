//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common view model setup (mock client, fixed
//! clock, recording callbacks) so tests across the crate and tests/
//! directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::FormConfig;
use crate::tokenization::{
    MockTokenizationClient, TokenDetails, TokenizationClient, TokenizationError,
};
use crate::types::{CardScheme, ExpiryDate, YearMonth};
use crate::utils::FixedClock;
use crate::view_model::{
    BillingSummaryView, CardNumberView, ExpiryDateView, HeaderView, PaymentViewModel,
    PaymentViewModelBuilder, SecurityCodeView, UpdateCallbacks,
};
use crate::{Result, events::RecordingEventSink};

/// Luhn-valid Visa test number.
pub const VISA_NUMBER: &str = "4111111111111111";
/// Luhn-valid American Express test number.
pub const AMEX_NUMBER: &str = "378282246310005";
/// Luhn-valid Mastercard test number.
pub const MASTERCARD_NUMBER: &str = "5555555555554444";

/// Month every test clock is fixed to.
#[doc(hidden)]
pub const TEST_MONTH: YearMonth = YearMonth::new(2026, 10);

#[doc(hidden)]
pub fn fixed_clock() -> FixedClock {
    FixedClock(TEST_MONTH)
}

/// An expiry a few years after [`TEST_MONTH`].
#[doc(hidden)]
pub fn future_expiry() -> ExpiryDate {
    ExpiryDate::new(12, 2030)
}

#[doc(hidden)]
pub fn sample_token() -> TokenDetails {
    TokenDetails {
        token: "tok_test_4f2a".to_string(),
        expires_on: Some("2026-10-18T12:15:00Z".to_string()),
        scheme: Some(CardScheme::Visa),
        last4: Some("1111".to_string()),
        bin: Some("411111".to_string()),
        expiry: Some(future_expiry()),
    }
}

/// Convenience error used by tests that only need *some* failure.
#[doc(hidden)]
pub fn sample_network_error() -> TokenizationError {
    TokenizationError::Network("connection lost".to_string())
}

/// Everything the view model reported through its callbacks.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct RecordedUpdates {
    pub headers: Vec<HeaderView>,
    pub card_numbers: Vec<CardNumberView>,
    pub expiry_dates: Vec<ExpiryDateView>,
    pub security_codes: Vec<SecurityCodeView>,
    pub billing_summaries: Vec<BillingSummaryView>,
    pub pay_button: Vec<bool>,
    pub tokens: Vec<TokenDetails>,
    pub failures: Vec<TokenizationError>,
}

impl RecordedUpdates {
    /// Total number of region callbacks fired, excluding token results.
    pub fn region_updates(&self) -> usize {
        self.headers.len()
            + self.card_numbers.len()
            + self.expiry_dates.len()
            + self.security_codes.len()
            + self.billing_summaries.len()
            + self.pay_button.len()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Callbacks that push every update into a shared [`RecordedUpdates`].
#[doc(hidden)]
pub fn recording_callbacks() -> (UpdateCallbacks, Rc<RefCell<RecordedUpdates>>) {
    let rec = Rc::new(RefCell::new(RecordedUpdates::default()));
    let (r1, r2, r3, r4, r5, r6, r7, r8) = (
        rec.clone(),
        rec.clone(),
        rec.clone(),
        rec.clone(),
        rec.clone(),
        rec.clone(),
        rec.clone(),
        rec.clone(),
    );
    let callbacks = UpdateCallbacks::new()
        .on_header(move |v| r1.borrow_mut().headers.push(v.clone()))
        .on_card_number(move |v| r2.borrow_mut().card_numbers.push(*v))
        .on_expiry_date(move |v| r3.borrow_mut().expiry_dates.push(*v))
        .on_security_code(move |v| r4.borrow_mut().security_codes.push(*v))
        .on_billing_summary(move |v| r5.borrow_mut().billing_summaries.push(v.clone()))
        .on_pay_button(move |enabled| r6.borrow_mut().pay_button.push(enabled))
        .on_token_success(move |t| r7.borrow_mut().tokens.push(t.clone()))
        .on_token_failure(move |e| r8.borrow_mut().failures.push(e.clone()));
    (callbacks, rec)
}

/// View model wired to a mock client, a fixed clock, a recording event sink
/// and recording callbacks.
#[doc(hidden)]
pub struct MockHarness {
    pub vm: PaymentViewModel,
    pub client: MockTokenizationClient,
    pub updates: Rc<RefCell<RecordedUpdates>>,
    pub events: RecordingEventSink,
}

#[doc(hidden)]
pub fn mock_harness(config: FormConfig, client: MockTokenizationClient) -> Result<MockHarness> {
    let (callbacks, updates) = recording_callbacks();
    let events = RecordingEventSink::new();
    let vm = PaymentViewModelBuilder::new()
        .config(config)
        .client(client.clone())
        .clock(fixed_clock())
        .event_sink(events.clone())
        .callbacks(callbacks)
        .build()?;
    Ok(MockHarness {
        vm,
        client,
        updates,
        events,
    })
}

/// Like [`mock_harness`] for any client; events go to the default log sink.
#[doc(hidden)]
pub fn mock_harness_with(
    config: FormConfig,
    client: impl TokenizationClient + 'static,
) -> Result<(PaymentViewModel, Rc<RefCell<RecordedUpdates>>)> {
    let (callbacks, updates) = recording_callbacks();
    let vm = PaymentViewModelBuilder::new()
        .config(config)
        .client(client)
        .clock(fixed_clock())
        .callbacks(callbacks)
        .build()?;
    Ok((vm, updates))
}

/// Fill card number, expiry and security code with valid Visa details.
#[doc(hidden)]
pub fn fill_valid_card(vm: &mut PaymentViewModel) {
    vm.update_card_number(VISA_NUMBER);
    vm.update_expiry_date(Some(future_expiry()));
    vm.update_security_code("123");
}
