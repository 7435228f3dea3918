// cardform-rs/cardform/src/scheme/mod.rs

/// Detection against the built-in table.
pub mod detector;
/// Prefix ranges, per-scheme rules and the rule table.
pub mod rules;

pub use detector::{builtin_table, detect_scheme};
pub use rules::{PrefixRange, SchemeRule, SchemeTable};
