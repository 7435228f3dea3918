// cardform-rs/cardform/src/scheme/rules.rs

use std::ops::RangeInclusive;

use crate::constants::DEFAULT_SECURITY_CODE_LENGTH;
use crate::types::CardScheme;
use crate::utils::strip_non_digits;

/// Inclusive numeric prefix range where both ends have the same number of
/// digits, e.g. `2221..=2720`. A single prefix such as `4` is `4..=4`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRange {
    low: u32,
    high: u32,
    width: usize,
}

impl PrefixRange {
    /// Exactly one prefix, e.g. `4` or `6011`.
    pub fn single(prefix: u32) -> Self {
        Self::range(prefix, prefix)
    }

    /// `low` and `high` are expected to have the same digit count; the width
    /// is taken from `low`.
    pub fn range(low: u32, high: u32) -> Self {
        Self {
            low,
            high,
            width: decimal_width(low),
        }
    }

    /// Number of leading digits this range inspects.
    pub fn width(&self) -> usize {
        self.width
    }

    /// True when the leading `width` characters of `digits` are ASCII digits
    /// falling in the range. Inputs shorter than the prefix never match.
    pub fn matches(&self, digits: &str) -> bool {
        let Some(lead) = digits.get(..self.width) else {
            return false;
        };
        if !lead.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match lead.parse::<u32>() {
            Ok(lead) => (self.low..=self.high).contains(&lead),
            Err(_) => false,
        }
    }
}

fn decimal_width(mut n: u32) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Prefix and length rules for one scheme.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeRule {
    /// Scheme this rule identifies.
    pub scheme: CardScheme,
    /// Leading digit ranges; any one may match.
    pub prefixes: Vec<PrefixRange>,
    /// Accepted total digit counts.
    pub lengths: Vec<usize>,
    /// Required security code length.
    pub security_code_length: usize,
}

impl SchemeRule {
    /// Rule from its parts. No checks here; `FormConfigBuilder::build` rejects empty prefix or length lists.
    pub fn new(
        scheme: CardScheme,
        prefixes: Vec<PrefixRange>,
        lengths: Vec<usize>,
        security_code_length: usize,
    ) -> Self {
        Self {
            scheme,
            prefixes,
            lengths,
            security_code_length,
        }
    }

    /// Width of the longest prefix of this rule matching `digits`.
    pub fn longest_match(&self, digits: &str) -> Option<usize> {
        self.prefixes
            .iter()
            .filter(|p| p.matches(digits))
            .map(PrefixRange::width)
            .max()
    }

    /// Whether `len` digits is a valid card length for this scheme.
    pub fn accepts_length(&self, len: usize) -> bool {
        self.lengths.contains(&len)
    }
}

/// Ordered scheme rule table. Order is the tie-break when two schemes match
/// prefixes of the same width.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemeTable {
    rules: Vec<SchemeRule>,
}

impl SchemeTable {
    /// Table with `rules` in priority order.
    pub fn new(rules: Vec<SchemeRule>) -> Self {
        Self { rules }
    }

    /// The built-in table of card networks.
    pub fn builtin() -> Self {
        let lens = |r: RangeInclusive<usize>| r.collect::<Vec<_>>();
        let p = PrefixRange::single;
        let r = PrefixRange::range;

        Self::new(vec![
            SchemeRule::new(CardScheme::Visa, vec![p(4)], vec![13, 16, 19], 3),
            SchemeRule::new(
                CardScheme::Mastercard,
                vec![r(51, 55), r(2221, 2720)],
                vec![16],
                3,
            ),
            SchemeRule::new(CardScheme::Amex, vec![p(34), p(37)], vec![15], 4),
            SchemeRule::new(
                CardScheme::Discover,
                vec![p(6011), r(644, 649), p(65), r(622126, 622925)],
                lens(16..=19),
                3,
            ),
            SchemeRule::new(
                CardScheme::DinersClub,
                vec![r(300, 305), p(3095), p(36), r(38, 39)],
                lens(14..=19),
                3,
            ),
            SchemeRule::new(CardScheme::Jcb, vec![r(3528, 3589)], lens(16..=19), 3),
            SchemeRule::new(
                CardScheme::Maestro,
                vec![p(50), r(56, 58), p(6)],
                lens(12..=19),
                3,
            ),
        ])
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[SchemeRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule for `scheme`.
    pub fn rule_for(&self, scheme: CardScheme) -> Option<&SchemeRule> {
        self.rules.iter().find(|r| r.scheme == scheme)
    }

    /// Detect the scheme of a (partial) card number.
    ///
    /// Non-digits are ignored. The rule with the longest matching prefix
    /// wins; on equal widths the earlier rule wins.
    pub fn detect(&self, input: &str) -> Option<CardScheme> {
        let digits = strip_non_digits(input);
        let mut best: Option<(usize, CardScheme)> = None;
        for rule in &self.rules {
            if let Some(width) = rule.longest_match(&digits) {
                if best.is_none_or(|(w, _)| width > w) {
                    best = Some((width, rule.scheme));
                }
            }
        }
        best.map(|(_, scheme)| scheme)
    }

    /// Required security code length for `scheme`, falling back to the
    /// default when the scheme is unknown or absent from the table.
    pub fn security_code_length(&self, scheme: Option<CardScheme>) -> usize {
        scheme
            .and_then(|s| self.rule_for(s))
            .map(|r| r.security_code_length)
            .unwrap_or(DEFAULT_SECURITY_CODE_LENGTH)
    }
}
