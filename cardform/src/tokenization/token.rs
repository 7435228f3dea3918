// cardform-rs/cardform/src/tokenization/token.rs

use thiserror::Error;

use crate::types::{CardScheme, ExpiryDate};

/// Successful tokenization payload. The token is opaque to this crate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDetails {
    /// Opaque token to hand to the merchant backend.
    pub token: String,
    /// Token expiry timestamp as reported by the server.
    pub expires_on: Option<String>,
    /// Scheme the server identified.
    pub scheme: Option<CardScheme>,
    /// Last four digits of the card.
    pub last4: Option<String>,
    /// Bank identification number (first six digits).
    pub bin: Option<String>,
    /// Card expiry echoed back by the server.
    pub expiry: Option<ExpiryDate>,
}

impl TokenDetails {
    /// Token with no metadata.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_on: None,
            scheme: None,
            last4: None,
            bin: None,
            expiry: None,
        }
    }
}

/// Error reported by the tokenization client, forwarded to the host as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizationError {
    /// Request never reached the server or the response was lost.
    #[error("network error: {0}")]
    Network(String),

    /// Server rejected the request.
    #[error("server error {error_type} (request {request_id}): {}", .error_codes.join(", "))]
    Server {
        /// Server-side request identifier.
        request_id: String,
        /// Error category, e.g. `request_invalid`.
        error_type: String,
        /// Individual error codes.
        error_codes: Vec<String>,
    },

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Outcome of one tokenization request.
pub type TokenResult = std::result::Result<TokenDetails, TokenizationError>;
