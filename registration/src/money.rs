//! Currency amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount of South African rand, stored in cents
///
/// Arithmetic saturates instead of overflowing; no realistic registration
/// gets near `u64::MAX` cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero rand
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from whole rand
    #[must_use]
    pub const fn from_rand(rand: u64) -> Self {
        Self(rand.saturating_mul(100))
    }

    /// Parses user-entered text the way a numeric form field would
    ///
    /// Empty, non-numeric, non-finite and negative input all become zero.
    /// Fractions are rounded to the nearest cent.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim().trim_start_matches(['R', 'r']).trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {
                // `as` saturates for floats beyond u64::MAX
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let cents = (value * 100.0).round() as u64;
                Self(cents)
            },
            _ => Self::ZERO,
        }
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole rand (rounded down)
    #[must_use]
    pub const fn rand(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
