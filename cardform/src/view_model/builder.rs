// cardform-rs/cardform/src/view_model/builder.rs

use super::callbacks::UpdateCallbacks;
use super::handle::PaymentViewModel;
use crate::config::FormConfig;
use crate::events::{EventSink, LogEventSink};
use crate::tokenization::TokenizationClient;
use crate::utils::{Clock, SystemClock};
use crate::{Error, Result};

/// Helper to construct a [`PaymentViewModel`] with optional configuration.
pub struct PaymentViewModelBuilder {
    config: Option<FormConfig>,
    client: Option<Box<dyn TokenizationClient>>,
    clock: Option<Box<dyn Clock>>,
    events: Option<Box<dyn EventSink>>,
    callbacks: UpdateCallbacks,
}

impl PaymentViewModelBuilder {
    /// Empty builder; a client must be set before `build`.
    pub fn new() -> Self {
        Self {
            config: None,
            client: None,
            clock: None,
            events: None,
            callbacks: UpdateCallbacks::default(),
        }
    }

    /// Defaults to [`FormConfig::builder`]'s defaults.
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Required.
    pub fn client(mut self, client: impl TokenizationClient + 'static) -> Self {
        self.client = Some(Box::new(client));
        self
    }

    /// Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Defaults to [`LogEventSink`].
    pub fn event_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.events = Some(Box::new(sink));
        self
    }

    /// Host callbacks. Defaults to none.
    pub fn callbacks(mut self, callbacks: UpdateCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Consume the builder. Fails if no client was provided or the default
    /// configuration cannot be built.
    pub fn build(self) -> Result<PaymentViewModel> {
        let client = self
            .client
            .ok_or_else(|| Error::Configuration("no tokenization client provided".to_string()))?;
        let config = match self.config {
            Some(c) => c,
            None => FormConfig::builder().build()?,
        };
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let events = self.events.unwrap_or_else(|| Box::new(LogEventSink));
        Ok(PaymentViewModel::new(
            config,
            client,
            clock,
            events,
            self.callbacks,
        ))
    }
}

impl Default for PaymentViewModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
