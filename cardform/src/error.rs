// cardform-rs/cardform/src/error.rs

use thiserror::Error;

use crate::tokenization::TokenizationError;
use crate::types::BillingFieldKind;

/// 共通エラー型
///
/// Field-level problems are reported as [`crate::validation::ValidationError`]
/// inside the form state and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Host configuration rejected at construction time.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A billing field pattern supplied by the host did not compile.
    #[error("invalid pattern for billing field {field}: {source}")]
    InvalidPattern {
        /// Field the pattern was configured for.
        field: BillingFieldKind,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Error forwarded verbatim from the tokenization client.
    #[error("tokenization failed: {0}")]
    Tokenization(#[from] TokenizationError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
