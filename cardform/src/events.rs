// cardform-rs/cardform/src/events.rs

//! Form lifecycle events.
//!
//! The view model reports what the user saw and did through an
//! [`EventSink`]. The default sink writes them to the `log` facade; hosts
//! with their own analytics pipeline plug in a different sink.

use std::cell::RefCell;
use std::rc::Rc;

use derive_more::Display;

use crate::types::CardScheme;

/// Something worth reporting about the form's lifecycle.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The payment form became visible.
    #[display(fmt = "payment form presented")]
    PaymentFormPresented,
    /// The billing details form became visible.
    #[display(fmt = "billing form presented")]
    BillingFormPresented,
    /// A token request was sent.
    #[display(fmt = "token requested (scheme: {:?})", scheme)]
    TokenRequested { scheme: Option<CardScheme> },
    /// A token request finished.
    #[display(fmt = "token response (scheme: {:?}, success: {})", scheme, success)]
    TokenResponse {
        /// Detected scheme of the submitted card.
        scheme: Option<CardScheme>,
        /// `true` when a token was returned.
        success: bool,
    },
}

/// Receiver of [`FormEvent`]s.
pub trait EventSink {
    /// Record one event.
    fn log_event(&self, event: &FormEvent);
}

/// Sink that writes events at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn log_event(&self, event: &FormEvent) {
        log::info!("form event: {}", event);
    }
}

/// Sink that keeps every event in memory; clones share the same list.
#[derive(Debug, Default, Clone)]
pub struct RecordingEventSink {
    events: Rc<RefCell<Vec<FormEvent>>>,
}

impl RecordingEventSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> Vec<FormEvent> {
        self.events.borrow().clone()
    }
}

impl EventSink for RecordingEventSink {
    fn log_event(&self, event: &FormEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
