//! Static reference data: rate table, deposit constraints, product lists.
//!
//! The standard table is compiled in, mirroring the published offer; the
//! serde derives let an alternative table be loaded from JSON without code
//! changes. Constructors enforce the structural invariants so a table that
//! exists is a table that is ordered and unambiguous.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::money::Amount;

/// Selectable residency countries, default first.
pub const RESIDENCY_OPTIONS: &[&str] = [
    "Latvia",
    "Lithuania",
    "Estonia",
    "Germany",
    "Other EU country",
]
.as_slice();

/// The two offered deposit products, default first.
pub const DEPOSIT_PRODUCTS: &[&str] = [
    "Deposit with interest paid at maturity",
    "Deposit with monthly interest payout",
]
.as_slice();

/// One row of the rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateOption {
    /// Human label, e.g. "1 year".
    pub label: String,
    /// Term duration in months; unique within a table.
    pub months: u32,
    /// Annual interest rate in percent.
    pub rate: f64,
}

/// Term-to-rate mapping for the deposit offer.
///
/// Invariants: months strictly ascending (hence unique), rates finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RateOption>", into = "Vec<RateOption>")]
pub struct RateTable {
    options: Vec<RateOption>,
}

impl RateTable {
    pub fn new(options: Vec<RateOption>) -> Result<Self, ModelError> {
        let mut previous: Option<u32> = None;
        for option in &options {
            if !option.rate.is_finite() || previous.is_some_and(|p| p >= option.months) {
                return Err(ModelError::InvalidRateTable(option.months));
            }
            previous = Some(option.months);
        }
        Ok(Self { options })
    }

    /// The published standard offer.
    pub fn standard() -> Self {
        let options = vec![
            RateOption { label: "3 months".to_string(), months: 3, rate: 1.75 },
            RateOption { label: "6 months".to_string(), months: 6, rate: 1.75 },
            RateOption { label: "1 year".to_string(), months: 12, rate: 1.75 },
            RateOption { label: "2 years".to_string(), months: 24, rate: 2.0 },
            RateOption { label: "3 years".to_string(), months: 36, rate: 2.5 },
            RateOption { label: "4 years".to_string(), months: 48, rate: 2.6 },
            RateOption { label: "5 years".to_string(), months: 60, rate: 2.75 },
        ];
        // Rows are ascending by construction.
        Self { options }
    }

    pub fn options(&self) -> &[RateOption] {
        &self.options
    }

    /// Annual rate for a term, or `None` when the term is not offered.
    pub fn rate_for_term(&self, months: u32) -> Option<f64> {
        self.options
            .iter()
            .find(|option| option.months == months)
            .map(|option| option.rate)
    }

    pub fn contains_term(&self, months: u32) -> bool {
        self.rate_for_term(months).is_some()
    }
}

impl TryFrom<Vec<RateOption>> for RateTable {
    type Error = ModelError;

    fn try_from(options: Vec<RateOption>) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl From<RateTable> for Vec<RateOption> {
    fn from(table: RateTable) -> Self {
        table.options
    }
}

/// Bounds and granularity for the deposit amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositConstraints {
    pub min: Amount,
    pub max: Amount,
    pub step: Amount,
}

impl DepositConstraints {
    pub fn new(min: Amount, max: Amount, step: Amount) -> Result<Self, ModelError> {
        if min > max || step.cents() <= 0 {
            return Err(ModelError::InvalidConstraints {
                min: min.to_string(),
                max: max.to_string(),
                step: step.to_string(),
            });
        }
        Ok(Self { min, max, step })
    }

    /// 1 000 – 500 000 EUR in steps of 50.
    pub fn standard() -> Self {
        Self {
            min: Amount::from_eur(1000),
            max: Amount::from_eur(500_000),
            step: Amount::from_eur(50),
        }
    }
}
