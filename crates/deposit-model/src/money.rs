//! Money as integer minor units.
//!
//! Deposit amounts and step constraints are held in euro cents so that
//! range and divisibility checks stay exact. Floating point never touches
//! money arithmetic; interest rates are percentages, not money, and live
//! elsewhere as `f64`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An amount of money in euro cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole euros, no fractional part.
    pub const fn from_eur(eur: i64) -> Self {
        Self(eur * 100)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Parse a decimal euro string such as `"3000"` or `"1250.50"`.
    ///
    /// At most two fractional digits are accepted; negative amounts are
    /// rejected because no deposit field ever holds one.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidAmount(text.to_string()));
        }
        let (whole, frac) = match trimmed.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (trimmed, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::InvalidAmount(text.to_string()));
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::InvalidAmount(text.to_string()));
        }
        let euros: i64 = whole
            .parse()
            .map_err(|_| ModelError::InvalidAmount(text.to_string()))?;
        let cents: i64 = if frac.is_empty() {
            0
        } else if frac.len() == 1 {
            frac.parse::<i64>().unwrap_or(0) * 10
        } else {
            frac.parse().unwrap_or(0)
        };
        euros
            .checked_mul(100)
            .and_then(|e| e.checked_add(cents))
            .map(Amount)
            .ok_or_else(|| ModelError::InvalidAmount(text.to_string()))
    }

    /// True when `self - base` is an exact multiple of `step`.
    pub fn aligned_to(self, base: Amount, step: Amount) -> bool {
        step.0 > 0 && (self.0 - base.0).rem_euclid(step.0) == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let euros = self.0 / 100;
        let cents = (self.0 % 100).abs();
        if cents == 0 {
            write!(f, "{euros}")
        } else {
            write!(f, "{euros}.{cents:02}")
        }
    }
}
