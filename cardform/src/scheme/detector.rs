// cardform-rs/cardform/src/scheme/detector.rs

use std::sync::OnceLock;

use super::rules::SchemeTable;
use crate::types::CardScheme;

static BUILTIN: OnceLock<SchemeTable> = OnceLock::new();

/// Shared instance of [`SchemeTable::builtin`].
pub fn builtin_table() -> &'static SchemeTable {
    BUILTIN.get_or_init(SchemeTable::builtin)
}

/// Detect the scheme of a (partial) card number against the built-in table.
///
/// Total and pure: empty or unmatched input returns `None`.
pub fn detect_scheme(digits: &str) -> Option<CardScheme> {
    builtin_table().detect(digits)
}
