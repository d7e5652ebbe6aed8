//! Field identifiers for the application form.
//!
//! `Field::ALL` fixes the canonical iteration order used by whole-form
//! validation and by the error summary; validity itself is order-independent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One validated field of the application form.
///
/// `Terms` is form-level state rather than an applicant property, but it
/// validates and surfaces errors like any other field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    PersonalCode,
    Email,
    Phone,
    Residency,
    DepositType,
    Amount,
    TermMonths,
    InterestRate,
    PayoutAccount,
    Terms,
}

impl Field {
    /// Canonical ordering: identity fields, then deposit parameters, then
    /// the terms confirmation. Drives deterministic error summaries.
    pub const ALL: [Field; 11] = [
        Field::FullName,
        Field::PersonalCode,
        Field::Email,
        Field::Phone,
        Field::Residency,
        Field::DepositType,
        Field::Amount,
        Field::TermMonths,
        Field::InterestRate,
        Field::PayoutAccount,
        Field::Terms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::PersonalCode => "personalCode",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Residency => "residency",
            Field::DepositType => "depositType",
            Field::Amount => "amount",
            Field::TermMonths => "termMonths",
            Field::InterestRate => "interestRate",
            Field::PayoutAccount => "payoutAccount",
            Field::Terms => "terms",
        }
    }

    /// Human label for summaries and form captions.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::PersonalCode => "Personal code",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Residency => "Country of residence",
            Field::DepositType => "Deposit type",
            Field::Amount => "Deposit amount",
            Field::TermMonths => "Term",
            Field::InterestRate => "Interest rate",
            Field::PayoutAccount => "Payout account",
            Field::Terms => "Terms confirmation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ModelError::UnknownToken {
                kind: "field",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn canonical_order_is_stable_and_complete() {
        assert_eq!(Field::ALL.len(), 11);
        assert_eq!(Field::ALL[0], Field::FullName);
        assert_eq!(Field::ALL[10], Field::Terms);
        // Ord agrees with declaration order, so BTreeMap iteration matches ALL.
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }

    #[test]
    fn tokens_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!("nope".parse::<Field>().is_err());
    }
}
