//! Month source for expiry checks.

use chrono::{Datelike, Utc};

use crate::types::YearMonth;

/// Supplies the current (year, month).
pub trait Clock {
    /// Current month.
    fn current_month(&self) -> YearMonth;
}

/// Wall clock in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> YearMonth {
        let now = Utc::now();
        YearMonth::new(u32::try_from(now.year()).unwrap_or(0), now.month())
    }
}

/// Clock stuck at one month, for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub YearMonth);

impl Clock for FixedClock {
    fn current_month(&self) -> YearMonth {
        self.0
    }
}
