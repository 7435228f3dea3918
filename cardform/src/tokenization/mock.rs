// cardform-rs/cardform/src/tokenization/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::source::PaymentSource;
use super::token::TokenResult;
use super::traits::{TokenCompletion, TokenizationClient};

#[derive(Default)]
struct MockState {
    requests: Vec<PaymentSource>,
    results: VecDeque<TokenResult>,
    pending: VecDeque<TokenCompletion>,
    deferred: bool,
}

/// Mock client for unit tests. It records requests and answers with queued
/// results.
///
/// Clones share state, so a test can keep a handle after giving a clone to
/// the view model. In deferred mode completions are held until the test
/// calls [`MockTokenizationClient::complete_next`]; otherwise a queued result
/// is delivered immediately, and with nothing queued the completion is held.
#[derive(Clone, Default)]
pub struct MockTokenizationClient {
    inner: Rc<RefCell<MockState>>,
}

impl MockTokenizationClient {
    /// Mock answering from queued results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that holds every completion until `complete_next`.
    pub fn deferred() -> Self {
        let mock = Self::new();
        mock.set_deferred(true);
        mock
    }

    /// Switch deferred mode on or off for later requests.
    pub fn set_deferred(&self, deferred: bool) {
        self.inner.borrow_mut().deferred = deferred;
    }

    /// Queue a result for a future request.
    pub fn push_result(&self, result: TokenResult) {
        self.inner.borrow_mut().results.push_back(result);
    }

    /// Number of requests received.
    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }

    /// Every request received, oldest first.
    pub fn requests(&self) -> Vec<PaymentSource> {
        self.inner.borrow().requests.clone()
    }

    /// Most recent request.
    pub fn last_request(&self) -> Option<PaymentSource> {
        self.inner.borrow().requests.last().cloned()
    }

    /// Completions held and not yet resolved.
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Take the oldest held completion, for tests that want to call it
    /// themselves (e.g. from another thread).
    pub fn take_pending(&self) -> Option<TokenCompletion> {
        self.inner.borrow_mut().pending.pop_front()
    }

    /// Resolve the oldest held completion with `result`. Returns `false`
    /// when nothing is pending.
    pub fn complete_next(&self, result: TokenResult) -> bool {
        match self.take_pending() {
            Some(completion) => {
                completion(result);
                true
            }
            None => false,
        }
    }
}

impl TokenizationClient for MockTokenizationClient {
    fn create_token(&self, source: PaymentSource, completion: TokenCompletion) {
        let ready = {
            let mut state = self.inner.borrow_mut();
            state.requests.push(source);
            if state.deferred {
                None
            } else {
                state.results.pop_front()
            }
        };

        match ready {
            Some(result) => completion(result),
            None => self.inner.borrow_mut().pending.push_back(completion),
        }
    }
}

impl std::fmt::Debug for MockTokenizationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("MockTokenizationClient")
            .field("requests", &state.requests.len())
            .field("queued_results", &state.results.len())
            .field("pending", &state.pending.len())
            .field("deferred", &state.deferred)
            .finish()
    }
}
