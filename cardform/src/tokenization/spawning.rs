// cardform-rs/cardform/src/tokenization/spawning.rs

//! Adapter for clients that expose an `async` API.
//!
//! The request runs as a task on a tokio runtime; its result comes back
//! through the regular [`TokenCompletion`], so the view model still applies
//! it on its own thread.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;

use super::source::PaymentSource;
use super::token::TokenResult;
use super::traits::{TokenCompletion, TokenizationClient};

/// Async tokenization client.
#[async_trait]
pub trait AsyncTokenizationClient: Send + Sync + 'static {
    /// Exchange card details for a token.
    async fn create_token(&self, source: PaymentSource) -> TokenResult;
}

/// Runs an [`AsyncTokenizationClient`] on a tokio runtime.
pub struct SpawningClient<C> {
    inner: Arc<C>,
    handle: Handle,
}

impl<C: AsyncTokenizationClient> SpawningClient<C> {
    /// Spawn requests onto `handle`.
    pub fn new(inner: C, handle: Handle) -> Self {
        Self {
            inner: Arc::new(inner),
            handle,
        }
    }

    /// Use the runtime the caller is currently running in.
    ///
    /// Panics outside a tokio runtime, like [`Handle::current`].
    pub fn on_current_runtime(inner: C) -> Self {
        Self::new(inner, Handle::current())
    }
}

impl<C: AsyncTokenizationClient> TokenizationClient for SpawningClient<C> {
    fn create_token(&self, source: PaymentSource, completion: TokenCompletion) {
        let inner = Arc::clone(&self.inner);
        self.handle.spawn(async move {
            let result = inner.create_token(source).await;
            completion(result);
        });
    }
}
