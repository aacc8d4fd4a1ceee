//! Money type for representing sales amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues during aggregation. Conversion to f64 happens only at the model
//! boundary, where the forecaster operates on dollar values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// Aggregation over cents is exact integer arithmetic, so monthly totals do
/// not depend on summation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount in dollars as a float, for the model boundary
    pub fn to_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Build an amount from a dollar value produced by the model,
    /// rounding to the nearest cent (half away from zero)
    pub fn from_dollars(dollars: f64) -> Self {
        Self((dollars * 100.0).round() as i64)
    }

    /// Parse a sales amount from a CSV field
    ///
    /// Accepts currency symbols, thousands separators, and accounting-style
    /// parenthesized negatives: `"1234.56"`, `"$1,234.56"`, `"(500)"`,
    /// `"-12.5"`. Returns `None` for empty or unparseable fields so callers
    /// can drop the row rather than fail the whole file.
    pub fn parse_field(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '(' | ')'))
            .collect();
        if cleaned.is_empty() {
            return None;
        }

        // Parentheses mark negatives in accounting exports
        let (negative, body) = if cleaned.starts_with('(') && cleaned.ends_with(')') {
            (true, &cleaned[1..cleaned.len() - 1])
        } else if let Some(stripped) = cleaned.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, cleaned.as_str())
        };

        let value: f64 = body.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round() as i64;
        Some(Self(if negative { -cents } else { cents }))
    }

    /// Format as whole dollars with thousands separators, e.g. `$12,340`
    ///
    /// This is the metric-card format; cents are rounded away.
    pub fn format_rounded(&self) -> String {
        let dollars = (self.0 as f64 / 100.0).round() as i64;
        let grouped = group_thousands(dollars.unsigned_abs());
        if dollars < 0 {
            format!("-${grouped}")
        } else {
            format!("${grouped}")
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / 100).abs();
        let cents = (self.0 % 100).abs();
        if self.is_negative() {
            write!(f, "-${}.{:02}", group_thousands(dollars as u64), cents)
        } else {
            write!(f, "${}.{:02}", group_thousands(dollars as u64), cents)
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
