//! The applicant aggregate and service payloads.

use serde::{Deserialize, Serialize};

use crate::enums::SubmissionStatus;
use crate::money::Amount;
use crate::rates::{DEPOSIT_PRODUCTS, RESIDENCY_OPTIONS};

/// Everything the form collects about one application.
///
/// Free-text fields are stored as entered (trimmed by the event layer);
/// `term_months` is `None` until the user selects a term. `interest_rate`
/// is derived from the rate table and re-checked against it on validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub full_name: String,
    pub personal_code: String,
    pub email: String,
    pub phone: String,
    pub residency: String,
    pub deposit_type: String,
    /// `None` while the amount input is empty or unparseable.
    pub amount: Option<Amount>,
    pub term_months: Option<u32>,
    /// Annual rate in percent.
    pub interest_rate: f64,
    pub payout_account: String,
    pub status: SubmissionStatus,
}

impl Default for Applicant {
    /// The session-start profile: defaults pre-selected, identity empty.
    fn default() -> Self {
        Self {
            full_name: String::new(),
            personal_code: String::new(),
            email: String::new(),
            phone: String::new(),
            residency: RESIDENCY_OPTIONS[0].to_string(),
            deposit_type: DEPOSIT_PRODUCTS[0].to_string(),
            amount: Some(Amount::from_eur(3000)),
            term_months: Some(12),
            interest_rate: 1.75,
            payout_account: String::new(),
            status: SubmissionStatus::Draft,
        }
    }
}

/// Result of an authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

/// Result of a submission or status refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub status: SubmissionStatus,
    pub message: String,
}
