//! Integer minor-unit currency storage and display.
//!
//! Amounts are stored as whole minor units (kobo) so financial arithmetic
//! never touches floating point. Display renders whole major units with
//! thousands grouping and no decimal digits, matching the platform's
//! storefront convention.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency for display purposes only; arithmetic stays in minor units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Currency {
    /// Symbol prefixed to formatted amounts.
    pub symbol: &'static str,
}

/// Nigerian Naira, the platform's storefront currency.
pub const NAIRA: Currency = Currency { symbol: "\u{20a6}" };

/// Minor units per major unit.
const MINOR_PER_MAJOR: i64 = 100;

/// A monetary amount in whole minor currency units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Wrap an amount already expressed in minor units.
    #[must_use]
    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Convert a major-unit amount (e.g. a price typed into a form) to
    /// minor units, rounding to the nearest whole minor unit.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // rounded before the cast
    pub fn from_major(major_units: f64) -> Self {
        Self((major_units * MINOR_PER_MAJOR as f64).round() as i64)
    }

    /// The raw amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// The amount in whole major units, rounded to nearest (half away from
    /// zero). Exact for amounts divisible by 100.
    #[must_use]
    pub const fn major_value(self) -> i64 {
        let sign = if self.0 < 0 { -1 } else { 1 };
        sign * ((self.0.abs() + MINOR_PER_MAJOR / 2) / MINOR_PER_MAJOR)
    }

    /// Total for `quantity` items priced at this amount, or `None` on
    /// overflow.
    #[must_use]
    pub const fn total_for(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as i64) {
            Some(total) => Some(Self(total)),
            None => None,
        }
    }

    /// Render in the storefront currency: grouped whole major units, no
    /// decimals (`₦50,000`).
    #[must_use]
    pub fn format(self) -> String {
        self.format_in(NAIRA)
    }

    /// Render in an explicit currency.
    #[must_use]
    pub fn format_in(self, currency: Currency) -> String {
        let major = self.major_value();
        let grouped = group_thousands(major.unsigned_abs());
        if major < 0 {
            format!("-{}{grouped}", currency.symbol)
        } else {
            format!("{}{grouped}", currency.symbol)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Insert `,` separators every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
