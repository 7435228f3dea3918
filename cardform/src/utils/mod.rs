//! Utilities for cardform: small, reusable helpers used across the crate.
//!
//! This module contains the digit normalisation applied before every card
//! rule, the masking used whenever a card number reaches a log line, and the
//! month source used for expiry checks.

pub mod clock;
pub mod digits;
pub mod mask;

pub use clock::*;
pub use digits::*;
pub use mask::*;
