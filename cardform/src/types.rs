// cardform-rs/cardform/src/types.rs

use derive_more::Display;

use crate::constants::EXPIRY_CENTURY;

/// Card network identified by number prefix rules.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardScheme {
    /// Visa.
    #[display(fmt = "Visa")]
    Visa,
    /// Mastercard, including the 2-series range.
    #[display(fmt = "Mastercard")]
    Mastercard,
    /// American Express. Four-digit security code.
    #[display(fmt = "American Express")]
    Amex,
    /// Discover, including the China UnionPay co-branded range.
    #[display(fmt = "Discover")]
    Discover,
    /// Diners Club International.
    #[display(fmt = "Diners Club")]
    DinersClub,
    /// JCB.
    #[display(fmt = "JCB")]
    Jcb,
    /// Maestro.
    #[display(fmt = "Maestro")]
    Maestro,
}

impl CardScheme {
    /// Every scheme known to the built-in rule table, in table order.
    pub const ALL: [CardScheme; 7] = [
        CardScheme::Visa,
        CardScheme::Mastercard,
        CardScheme::Amex,
        CardScheme::Discover,
        CardScheme::DinersClub,
        CardScheme::Jcb,
        CardScheme::Maestro,
    ];
}

/// Calendar month - (year, month) ペア
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{:04}-{:02}", year, month)]
pub struct YearMonth {
    // Field order matters: derived Ord compares year first.
    year: u32,
    month: u32,
}

impl YearMonth {
    /// `month` is not range checked.
    pub const fn new(year: u32, month: u32) -> Self {
        Self { year, month }
    }

    /// Full year, e.g. 2026.
    pub fn year(&self) -> u32 {
        self.year
    }

    /// Month, 1 to 12 when valid.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month before this one. Returns `self` unchanged for year 0 January.
    pub fn previous(&self) -> Self {
        match (self.year, self.month) {
            (0, 1) => *self,
            (y, 1) => Self::new(y - 1, 12),
            (y, m) => Self::new(y, m - 1),
        }
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        match self.month {
            12 => Self::new(self.year + 1, 1),
            m => Self::new(self.year, m + 1),
        }
    }
}

/// Card expiry as typed by the user.
///
/// The month is stored unchecked so an out-of-range value can reach the
/// validator and be reported as such.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:02}/{:04}", month, year)]
pub struct ExpiryDate {
    month: u32,
    year: u32,
}

impl ExpiryDate {
    /// Two-digit years (< 100) are placed in the 2000s.
    pub fn new(month: u32, year: u32) -> Self {
        let year = if year < 100 { EXPIRY_CENTURY + year } else { year };
        Self { month, year }
    }

    /// Month as entered; may be out of range.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Four-digit year.
    pub fn year(&self) -> u32 {
        self.year
    }

    /// The expiry month as a [`YearMonth`].
    pub fn as_year_month(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    /// Parse `MM/YY`, `MM/YYYY`, `MMYY` or `MMYYYY`.
    ///
    /// Only the shape is checked here; month range is left to
    /// [`crate::validation::validate_expiry`].
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let separated = trimmed
            .split_once(['/', '-'])
            .or_else(|| trimmed.split_once(' '));
        let (month, year) = match separated {
            Some((m, y)) => (m.trim(), y.trim()),
            // Byte length only means digit count for ASCII input
            None if trimmed.is_ascii() && (trimmed.len() == 4 || trimmed.len() == 6) => {
                trimmed.split_at(2)
            }
            None => return None,
        };

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(month) || !all_digits(year) {
            return None;
        }
        if month.len() > 2 || !(year.len() == 2 || year.len() == 4) {
            return None;
        }

        let month = month.parse().ok()?;
        let year = year.parse().ok()?;
        Some(Self::new(month, year))
    }
}

/// Billing detail fields a host may put on the form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BillingFieldKind {
    /// Name as printed on the card.
    #[display(fmt = "cardholder name")]
    CardholderName,
    /// First street address line.
    #[display(fmt = "address line 1")]
    AddressLine1,
    /// Second street address line.
    #[display(fmt = "address line 2")]
    AddressLine2,
    /// City or town.
    #[display(fmt = "city")]
    City,
    /// State, province or region.
    #[display(fmt = "state")]
    State,
    /// Postal or ZIP code.
    #[display(fmt = "postal code")]
    PostalCode,
    /// Country.
    #[display(fmt = "country")]
    Country,
    /// Contact phone number.
    #[display(fmt = "phone")]
    Phone,
}
