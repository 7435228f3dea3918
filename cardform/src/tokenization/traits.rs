// cardform-rs/cardform/src/tokenization/traits.rs

use super::source::PaymentSource;
use super::token::TokenResult;

/// Completion handed to a client. It may be called from any thread, exactly
/// once.
pub type TokenCompletion = Box<dyn FnOnce(TokenResult) + Send + 'static>;

/// Tokenization client trait abstracts the remote payment API away from the
/// form logic.
///
/// Implementations must eventually call `completion` exactly once, with
/// either a token or an error. There is no cancellation.
pub trait TokenizationClient {
    /// Start a tokenization request for `source`.
    fn create_token(&self, source: PaymentSource, completion: TokenCompletion);
}

impl<T: TokenizationClient + ?Sized> TokenizationClient for Box<T> {
    fn create_token(&self, source: PaymentSource, completion: TokenCompletion) {
        (**self).create_token(source, completion)
    }
}
