// cardform-rs/cardform/src/validation/luhn.rs

/// Luhn sum of a digit string: every second digit from the right is
/// doubled, and doubled values of 10 or more have 9 subtracted.
///
/// Returns `None` if `digits` contains anything other than ASCII digits.
pub fn luhn_sum(digits: &str) -> Option<u32> {
    let mut sum = 0u32;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let mut d = u32::from(b - b'0');
        if i % 2 == 1 {
            d *= 2;
            if d >= 10 {
                d -= 9;
            }
        }
        sum += d;
    }
    Some(sum)
}

/// True when `digits` is non-empty, all ASCII digits, and its Luhn sum is
/// divisible by 10.
pub fn is_luhn_valid(digits: &str) -> bool {
    !digits.is_empty() && luhn_sum(digits).is_some_and(|s| s % 10 == 0)
}
