//! Monetary value objects.
//!
//! Demo amounts are integer cents, never floats. The catalogue's scenarios
//! are US-dollar flavored, so `Display` renders `$1,234.56`; nothing else in
//! the crate assumes a currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// An amount of money in cents.
///
/// Invariant: arithmetic is plain integer arithmetic — demo amounts are far
/// from `i64` limits, and the catalogue has no overflow-sensitive path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        let (dollars, rem) = (cents / 100, cents % 100);

        // Thousands separators, built right-to-left.
        let digits = dollars.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}${grouped}.{rem:02}")
    }
}

/// A fractional rate expressed in basis points (1 bp = 0.01%).
///
/// Covers both the singleton's base rate (0.05 = 500 bp) and the strategy
/// demo's regional tax rates without touching floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(u32);

impl Rate {
    pub const fn from_basis_points(bp: u32) -> Self {
        Self(bp)
    }

    pub const fn from_percent(percent: u32) -> Self {
        Self(percent * 100)
    }

    pub const fn basis_points(&self) -> u32 {
        self.0
    }

    /// Apply the rate to an amount, truncating sub-cent remainders.
    pub const fn of(&self, amount: Money) -> Money {
        Money::from_cents(amount.cents() * self.0 as i64 / 10_000)
    }
}

impl fmt::Display for Rate {
    /// Renders as a percentage with two decimals: 500 bp -> `5.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_small_amount() {
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Money::from_dollars(95_000).to_string(), "$95,000.00");
        assert_eq!(Money::from_cents(123_456_789).to_string(), "$1,234,567.89");
    }

    #[test]
    fn display_negative() {
        assert_eq!(Money::from_cents(-150).to_string(), "-$1.50");
    }

    #[test]
    fn arithmetic() {
        let a = Money::from_dollars(100);
        let b = Money::from_cents(50);
        assert_eq!((a + b).cents(), 10_050);
        assert_eq!((a - b).cents(), 9_950);
    }

    #[test]
    fn rate_of_truncates_sub_cent() {
        // 25% of $0.03 is 0.75 cents -> truncates to zero.
        assert_eq!(Rate::from_percent(25).of(Money::from_cents(3)), Money::ZERO);
    }

    #[test]
    fn rate_display() {
        assert_eq!(Rate::from_percent(30).to_string(), "30.00");
        assert_eq!(Rate::from_basis_points(500).to_string(), "5.00");
        assert_eq!(Rate::from_basis_points(525).to_string(), "5.25");
    }
}
