// cardform-rs/cardform/src/form/mod.rs

/// Validation pass over the whole form.
pub mod aggregator;
/// Field values and touched flags.
pub mod state;

pub use aggregator::{Aggregator, Evaluation, FieldStatus, FormDiff};
pub use state::{FieldId, FormState};
