//! # Money Module
//!
//! Provides the `Money` type for rental charges.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float charges drifts:                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                     │
//! │                                                                         │
//! │  Every rental charge is a multiple of 50 cents:                        │
//! │    2.00 base, 1.50 per extra day, 3.00 per new-release day             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Totals are exact, statements never print 12.499999                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! let base = Money::from_cents(200);            // 2.0
//! let extra = Money::from_cents(150).times(2);  // 3.0
//! assert_eq!((base + extra).to_string(), "5.0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction
/// - **Single field tuple struct**: serializes as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let charge = Money::from_cents(350);
    /// assert_eq!(charge.cents(), 350);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a per-day rate by a number of days.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let per_day = Money::from_cents(300);
    /// assert_eq!(per_day.times(4).cents(), 1200);
    /// ```
    #[inline]
    pub const fn times(&self, days: u32) -> Self {
        Money(self.0 * days as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Statement format: plain decimal, no currency symbol, at least one
/// fractional digit.
///
/// ```text
///   200  → "2.0"      350 → "3.5"
///   1250 → "12.5"      25 → "0.25"
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = self.dollars().abs();
        let fraction = self.cents_part();

        if fraction % 10 == 0 {
            write!(f, "{}{}.{}", sign, whole, fraction / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, whole, fraction)
        }
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        let mut total = Money::zero();
        for amount in iter {
            total += amount;
        }
        total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1250);
        assert_eq!(money.cents(), 1250);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display_keeps_one_decimal() {
        assert_eq!(Money::from_cents(200).to_string(), "2.0");
        assert_eq!(Money::from_cents(350).to_string(), "3.5");
        assert_eq!(Money::from_cents(600).to_string(), "6.0");
        assert_eq!(Money::from_cents(1250).to_string(), "12.5");
        assert_eq!(Money::from_cents(0).to_string(), "0.0");
    }

    #[test]
    fn test_display_hundredths_and_negative() {
        assert_eq!(Money::from_cents(25).to_string(), "0.25");
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(-150).to_string(), "-1.5");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(200);
        let b = Money::from_cents(150);

        assert_eq!((a + b).cents(), 350);
        assert_eq!(b.times(3).cents(), 450);

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_sum() {
        let total: Money = [350, 600, 450]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 1400);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(450)).unwrap();
        assert_eq!(json, "450");
    }
}
