// cardform-rs/cardform/src/constants.rs
//! Common card rule constants used across the crate

/// Shortest card number accepted when no scheme could be detected
pub const GENERIC_MIN_CARD_LENGTH: usize = 12;

/// Longest card number accepted when no scheme could be detected
pub const GENERIC_MAX_CARD_LENGTH: usize = 19;

/// Security code length used when the scheme is unknown
pub const DEFAULT_SECURITY_CODE_LENGTH: usize = 3;

/// Two-digit expiry years are offset into this century
pub const EXPIRY_CENTURY: u32 = 2000;

/// Number of trailing digits kept visible when masking a card number
pub const MASK_VISIBLE_DIGITS: usize = 4;
