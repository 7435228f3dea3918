//! Digit normalisation helpers.

/// Keep only ASCII digits, dropping spaces, dashes and anything else a user
/// may have typed or pasted.
///
/// Example: `"4111 1111-1111 1111"` -> `"4111111111111111"`
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Number of ASCII digits in `input`, ignoring everything else.
pub fn digit_count(input: &str) -> usize {
    input.bytes().filter(u8::is_ascii_digit).count()
}

/// True when `input` is non-empty and consists of ASCII digits only.
pub fn is_all_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}
