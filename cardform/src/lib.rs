// cardform-rs/cardform/src/lib.rs

//! cardform
//!
//! Card-entry form core: scheme detection, field validation, form
//! aggregation and a payment view model that drives tokenization through an
//! external client.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
/// Crate error type and `Result` alias.
pub mod error;
pub mod events;
/// Form values, touched tracking and the validating aggregator.
pub mod form;
/// Common re-exports.
pub mod prelude;
/// Card scheme rules and detection.
pub mod scheme;
pub mod test_support;
/// Tokenization client contract, request and result types.
pub mod tokenization;
/// Core value types.
pub mod types;
pub mod utils;
pub mod validation;
/// Payment view model driving the host UI.
pub mod view_model;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
