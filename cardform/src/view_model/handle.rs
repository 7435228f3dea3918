// cardform-rs/cardform/src/view_model/handle.rs

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use derive_more::Display;

use super::callbacks::{
    BillingSummaryView, CardNumberView, ExpiryDateView, HeaderView, SecurityCodeView,
    UpdateCallbacks,
};
use crate::config::FormConfig;
use crate::events::{EventSink, FormEvent};
use crate::form::{Aggregator, Evaluation, FieldId, FieldStatus, FormState};
use crate::tokenization::{PaymentSource, TokenResult, TokenizationClient};
use crate::types::{BillingFieldKind, CardScheme, ExpiryDate};
use crate::utils::{Clock, mask_pan, strip_non_digits};
use crate::validation::ValidationOutcome;

/// Payment form state machine states.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    /// Form is being filled in.
    Editing,
    /// A token request is in flight.
    Submitting,
    /// A token was returned.
    Completed,
    /// The last request failed; the user may retry.
    Failed,
}

/// Holds the form values, re-validates on every edit, notifies the host
/// through [`UpdateCallbacks`] and drives tokenization on submit.
///
/// Single-threaded. Token results may be produced on any thread; they are
/// queued and only applied on the thread that owns the view model, from
/// [`PaymentViewModel::submit`], [`PaymentViewModel::process_completions`] or
/// [`PaymentViewModel::wait_for_completion`].
pub struct PaymentViewModel {
    config: FormConfig,
    client: Box<dyn TokenizationClient>,
    clock: Box<dyn Clock>,
    events: Box<dyn EventSink>,
    callbacks: UpdateCallbacks,
    form: FormState,
    aggregator: Aggregator,
    evaluation: Evaluation,
    state: PaymentState,
    pay_enabled: bool,
    billing_summary: BillingSummaryView,
    in_flight_scheme: Option<CardScheme>,
    completions_tx: Sender<TokenResult>,
    completions_rx: Receiver<TokenResult>,
}

impl PaymentViewModel {
    pub(crate) fn new(
        config: FormConfig,
        client: Box<dyn TokenizationClient>,
        clock: Box<dyn Clock>,
        events: Box<dyn EventSink>,
        callbacks: UpdateCallbacks,
    ) -> Self {
        let form = FormState::new(&config);
        let mut aggregator = Aggregator::new();
        let evaluation = aggregator.evaluate(&form, &config, clock.current_month());
        let (completions_tx, completions_rx) = mpsc::channel();

        let mut vm = Self {
            config,
            client,
            clock,
            events,
            callbacks,
            form,
            aggregator,
            pay_enabled: evaluation.submittable,
            evaluation,
            state: PaymentState::Editing,
            billing_summary: BillingSummaryView::default(),
            in_flight_scheme: None,
            completions_tx,
            completions_rx,
        };
        vm.billing_summary = vm.billing_summary_view();
        vm
    }

    /// Current state.
    pub fn state(&self) -> PaymentState {
        self.state
    }

    /// Every field is currently valid.
    pub fn is_submittable(&self) -> bool {
        self.evaluation.submittable
    }

    /// Submittable and no request in flight.
    pub fn pay_button_enabled(&self) -> bool {
        self.pay_enabled
    }

    /// Scheme detected from the card number typed so far.
    pub fn detected_scheme(&self) -> Option<CardScheme> {
        self.evaluation.scheme
    }

    /// Result of the latest validation pass.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Latest status of one field; `None` if it is not on the form.
    pub fn field_status(&self, id: FieldId) -> Option<FieldStatus> {
        self.evaluation.status(id).copied()
    }

    /// Current field values.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The payment form became visible: report it and draw every region.
    pub fn view_will_appear(&mut self) {
        self.events.log_event(&FormEvent::PaymentFormPresented);
        self.update_all();
    }

    /// The billing details form became visible.
    pub fn billing_form_will_appear(&mut self) {
        self.events.log_event(&FormEvent::BillingFormPresented);
    }

    /// Card number as typed, separators allowed.
    pub fn update_card_number(&mut self, value: &str) {
        self.form.set_card_number(value);
        self.after_edit();
    }

    /// `None` clears the expiry.
    pub fn update_expiry_date(&mut self, value: Option<ExpiryDate>) {
        self.form.set_expiry_date(value);
        self.after_edit();
    }

    /// Security code as typed.
    pub fn update_security_code(&mut self, value: &str) {
        self.form.set_security_code(value);
        self.after_edit();
    }

    /// Returns `false` if `kind` is not configured on this form.
    pub fn update_billing_field(&mut self, kind: BillingFieldKind, value: &str) -> bool {
        if !self.form.set_billing_field(kind, value) {
            log::warn!("billing field {} is not configured; update ignored", kind);
            return false;
        }
        self.after_edit();
        true
    }

    /// Clear the form. While a request is in flight the state stays
    /// `Submitting` so the pending result still resolves it.
    pub fn reset(&mut self) {
        self.form.reset();
        if self.state != PaymentState::Submitting {
            self.transition(PaymentState::Editing);
        }
        self.reevaluate();
    }

    /// Fire every registered region callback with the current state.
    pub fn update_all(&mut self) {
        let header = HeaderView {
            supported_schemes: self.config.supported_schemes().to_vec(),
        };
        self.callbacks.header(&header);
        let card = self.card_number_view();
        self.callbacks.card_number(&card);
        let expiry = self.expiry_date_view();
        self.callbacks.expiry_date(&expiry);
        let code = self.security_code_view();
        self.callbacks.security_code(&code);
        self.billing_summary = self.billing_summary_view();
        self.callbacks.billing_summary(&self.billing_summary);
        self.callbacks.pay_button(self.pay_enabled);
    }

    /// Request a token for the current form.
    ///
    /// Ignored (returns `false`) while a request is in flight or when the
    /// form is not submittable.
    pub fn submit(&mut self) -> bool {
        if self.state == PaymentState::Submitting {
            log::warn!("submit ignored: a token request is already in flight");
            return false;
        }
        self.reevaluate();
        if !self.evaluation.submittable {
            log::warn!("submit ignored: form is not submittable");
            return false;
        }
        let Some(source) = self.payment_source() else {
            log::warn!("submit ignored: expiry date missing");
            return false;
        };

        log::debug!(
            "requesting token for card {} ({:?})",
            mask_pan(&source.number),
            source.scheme
        );
        self.in_flight_scheme = source.scheme;
        self.transition(PaymentState::Submitting);
        self.events.log_event(&FormEvent::TokenRequested {
            scheme: source.scheme,
        });
        self.refresh_pay_button();

        let tx = self.completions_tx.clone();
        self.client.create_token(
            source,
            Box::new(move |result| {
                // The receiver lives as long as the view model
                let _ = tx.send(result);
            }),
        );

        // Clients that complete synchronously resolve right away
        self.process_completions();
        true
    }

    /// Apply any token results that have arrived. Returns how many were
    /// applied.
    pub fn process_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.completions_rx.try_recv() {
            self.apply_result(result);
            applied += 1;
        }
        applied
    }

    /// Block for up to `timeout` waiting for a token result, then apply it
    /// along with anything else queued. Returns `true` if a result was
    /// applied.
    pub fn wait_for_completion(&mut self, timeout: Duration) -> bool {
        match self.completions_rx.recv_timeout(timeout) {
            Ok(result) => {
                self.apply_result(result);
                self.process_completions();
                true
            }
            Err(_) => false,
        }
    }

    fn apply_result(&mut self, result: TokenResult) {
        if self.state != PaymentState::Submitting {
            log::warn!("token result dropped: no request in flight (state {})", self.state);
            return;
        }
        let scheme = self.in_flight_scheme.take();
        self.events.log_event(&FormEvent::TokenResponse {
            scheme,
            success: result.is_ok(),
        });

        match result {
            Ok(token) => {
                self.transition(PaymentState::Completed);
                self.refresh_pay_button();
                self.callbacks.token_success(&token);
            }
            Err(error) => {
                log::debug!("tokenization failed: {}", error);
                self.transition(PaymentState::Failed);
                self.refresh_pay_button();
                self.callbacks.token_failure(&error);
            }
        }
    }

    fn after_edit(&mut self) {
        if matches!(self.state, PaymentState::Completed | PaymentState::Failed) {
            self.transition(PaymentState::Editing);
        }
        self.reevaluate();
    }

    fn transition(&mut self, next: PaymentState) {
        if self.state != next {
            log::debug!("payment state {} -> {}", self.state, next);
            self.state = next;
        }
    }

    fn reevaluate(&mut self) {
        let today = self.clock.current_month();
        self.evaluation = self.aggregator.evaluate(&self.form, &self.config, today);
        let diff = self.evaluation.diff.clone();

        if diff.contains(FieldId::CardNumber) || diff.scheme_changed {
            let view = self.card_number_view();
            self.callbacks.card_number(&view);
        }
        if diff.contains(FieldId::ExpiryDate) {
            let view = self.expiry_date_view();
            self.callbacks.expiry_date(&view);
        }
        if diff.contains(FieldId::SecurityCode) || diff.scheme_changed {
            let view = self.security_code_view();
            self.callbacks.security_code(&view);
        }

        let summary = self.billing_summary_view();
        if diff.touches_billing() || summary != self.billing_summary {
            self.billing_summary = summary;
            self.callbacks.billing_summary(&self.billing_summary);
        }

        self.refresh_pay_button();
    }

    fn refresh_pay_button(&mut self) {
        let enabled = self.evaluation.submittable && self.state != PaymentState::Submitting;
        if enabled != self.pay_enabled {
            self.pay_enabled = enabled;
            self.callbacks.pay_button(enabled);
        }
    }

    fn status_of(&self, id: FieldId) -> FieldStatus {
        self.evaluation.status(id).copied().unwrap_or(FieldStatus {
            outcome: ValidationOutcome::valid(),
            displayed_error: None,
        })
    }

    fn card_number_view(&self) -> CardNumberView {
        let status = self.status_of(FieldId::CardNumber);
        CardNumberView {
            scheme: self.evaluation.scheme,
            valid: status.is_valid(),
            error: status.displayed_error,
        }
    }

    fn expiry_date_view(&self) -> ExpiryDateView {
        let status = self.status_of(FieldId::ExpiryDate);
        ExpiryDateView {
            valid: status.is_valid(),
            error: status.displayed_error,
        }
    }

    fn security_code_view(&self) -> SecurityCodeView {
        let status = self.status_of(FieldId::SecurityCode);
        SecurityCodeView {
            scheme: self.evaluation.scheme,
            required_length: self
                .config
                .scheme_table()
                .security_code_length(self.evaluation.scheme),
            valid: status.is_valid(),
            error: status.displayed_error,
        }
    }

    fn billing_summary_view(&self) -> BillingSummaryView {
        let lines = self
            .form
            .billing_values()
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        let errors = self
            .evaluation
            .statuses
            .iter()
            .filter_map(|(id, status)| match (id, status.displayed_error) {
                (FieldId::Billing(kind), Some(err)) => Some((*kind, err)),
                _ => None,
            })
            .collect();
        BillingSummaryView { lines, errors }
    }

    fn payment_source(&self) -> Option<PaymentSource> {
        let expiry = self.form.expiry_date()?;
        Some(PaymentSource {
            number: strip_non_digits(self.form.card_number()),
            expiry,
            security_code: self.form.security_code().to_string(),
            scheme: self.evaluation.scheme,
            billing: self
                .form
                .billing_values()
                .filter(|(_, v)| !v.trim().is_empty())
                .map(|(k, v)| (k, v.trim().to_string()))
                .collect(),
        })
    }
}

impl std::fmt::Debug for PaymentViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentViewModel")
            .field("state", &self.state)
            .field("submittable", &self.evaluation.submittable)
            .field("scheme", &self.evaluation.scheme)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
