// cardform-rs/cardform/src/tokenization/mod.rs

/// In-memory client for tests.
pub mod mock;
/// Card details sent for tokenization.
pub mod source;
#[cfg(feature = "async")]
pub mod spawning;
/// Token payload and client errors.
pub mod token;
/// Client trait.
pub mod traits;

pub use mock::MockTokenizationClient;
pub use source::PaymentSource;
#[cfg(feature = "async")]
pub use spawning::{AsyncTokenizationClient, SpawningClient};
pub use token::{TokenDetails, TokenResult, TokenizationError};
pub use traits::{TokenCompletion, TokenizationClient};
