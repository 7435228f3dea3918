//! Masking helpers so card numbers never reach a log line in full.

use crate::constants::MASK_VISIBLE_DIGITS;

use super::digits::strip_non_digits;

/// Mask every digit except the last four.
///
/// Example: `"4111 1111 1111 1234"` -> `"************1234"`. Inputs of four
/// digits or fewer are masked entirely.
pub fn mask_pan(input: &str) -> String {
    let digits = strip_non_digits(input);
    if digits.len() <= MASK_VISIBLE_DIGITS {
        return "*".repeat(digits.len());
    }
    let hidden = digits.len() - MASK_VISIBLE_DIGITS;
    let mut out = "*".repeat(hidden);
    out.push_str(&digits[hidden..]);
    out
}

/// Last four digits of a card number, if it has at least four.
pub fn last_four(input: &str) -> Option<String> {
    let digits = strip_non_digits(input);
    (digits.len() >= MASK_VISIBLE_DIGITS).then(|| digits[digits.len() - MASK_VISIBLE_DIGITS..].to_string())
}
