//! Amount type for calories and currency quantities
//!
//! Internally stores values in hundredths (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic, currency conversion with
//! two-decimal rounding, and compact formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A quantity stored as hundredths of a unit
///
/// The same type carries kilocalories, rubles and converted foreign cash,
/// so it carries no currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an Amount from whole units
    ///
    /// Values beyond the representable range saturate at the `i64` bounds.
    ///
    /// # Examples
    /// ```
    /// use ration::models::Amount;
    /// let limit = Amount::from_units(2000); // 2000 kCal
    /// assert_eq!(limit.hundredths(), 200_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Create an Amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use ration::models::Amount;
    /// let rate = Amount::from_hundredths(7288); // 72.88
    /// assert_eq!(rate.to_string(), "72.88");
    /// ```
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value (saturating, so `i64::MIN` hundredths maps to `i64::MAX`)
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Divide by an exchange rate, rounding to two decimal places
    ///
    /// Rounding is half away from zero and done in integer arithmetic, so
    /// `500 / 72.88` is exactly `6.86`.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is zero.
    pub fn convert(&self, rate: Amount) -> Self {
        assert!(!rate.is_zero(), "exchange rate must be non-zero");

        let numerator = i128::from(self.0) * 100;
        let denominator = i128::from(rate.0);
        let mut quotient = numerator / denominator;
        let remainder = numerator % denominator;

        if remainder.abs() * 2 >= denominator.abs() {
            if (numerator < 0) == (denominator < 0) {
                quotient += 1;
            } else {
                quotient -= 1;
            }
        }

        Self(quotient as i64)
    }

    /// Format with at least one decimal place
    ///
    /// Whole values keep a trailing `.0` (`855.0`); otherwise this matches
    /// `Display` (`6.86`, `11.7`).
    pub fn to_decimal_string(&self) -> String {
        if self.fraction() == 0 {
            let sign = if self.is_negative() { "-" } else { "" };
            format!("{}{}.0", sign, self.units().abs())
        } else {
            self.to_string()
        }
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let hundredths = if let Some((whole, frac)) = s.split_once('.') {
            if whole.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AmountParseError::InvalidFormat(s.to_string()));
            }

            let units: i64 = whole
                .parse()
                .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate to 2 digits
            let frac: i64 = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac[..2]
                    .parse()
                    .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?,
            };

            units * 100 + frac
        } else {
            s.parse::<i64>()
                .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -hundredths } else { hundredths }))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Self::from_units(units)
    }
}

impl From<i32> for Amount {
    fn from(units: i32) -> Self {
        Self::from_units(i64::from(units))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        let fraction = self.fraction();

        if fraction == 0 {
            write!(f, "{}{}", sign, units)
        } else if fraction % 10 == 0 {
            write!(f, "{}{}.{}", sign, units, fraction / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, units, fraction)
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
