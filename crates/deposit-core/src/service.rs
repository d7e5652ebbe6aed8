//! The external service boundary.
//!
//! Three asynchronous operations, each resolving to exactly one result.
//! The core never retries and never cancels: an in-flight call runs to
//! completion while the `loading` flag keeps re-entry out.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use deposit_model::{Applicant, AuthMethod, AuthOutcome, SubmissionResponse, SubmissionStatus};

use crate::error::ServiceResult;

#[async_trait]
pub trait DepositService: Send + Sync {
    async fn request_auth(&self, method: AuthMethod) -> ServiceResult<AuthOutcome>;
    async fn submit_application(&self, applicant: &Applicant) -> ServiceResult<SubmissionResponse>;
    async fn refresh_status(&self, submission_id: &str) -> ServiceResult<SubmissionResponse>;
}

/// In-process stand-in for the bank's service layer.
///
/// Responses mimic the production flow: a short latency, an `APP-nnnnnn`
/// submission id, and a status that advances Submitted → In Review →
/// Approved on successive refreshes. Advancement is deterministic so tests
/// can script the lifecycle.
#[derive(Debug)]
pub struct SimulatedService {
    auth_latency: Duration,
    submit_latency: Duration,
    refresh_latency: Duration,
    refresh_step: AtomicUsize,
    id_counter: AtomicU64,
}

impl SimulatedService {
    pub fn new() -> Self {
        Self {
            auth_latency: Duration::from_millis(1200),
            submit_latency: Duration::from_millis(1400),
            refresh_latency: Duration::from_millis(900),
            refresh_step: AtomicUsize::new(0),
            id_counter: AtomicU64::new(0),
        }
    }

    /// Same behavior without the simulated latencies. Tests use this.
    pub fn instant() -> Self {
        Self {
            auth_latency: Duration::ZERO,
            submit_latency: Duration::ZERO,
            refresh_latency: Duration::ZERO,
            ..Self::new()
        }
    }

    fn next_submission_id(&self) -> String {
        // Clock-derived like the production ids, with a counter to keep ids
        // unique within one millisecond.
        let millis = Utc::now().timestamp_millis().unsigned_abs();
        let counter = self.id_counter.fetch_add(1, Ordering::Relaxed);
        format!("APP-{:06}", (millis + counter) % 1_000_000)
    }

    fn next_refresh_status(&self) -> SubmissionStatus {
        const CYCLE: [SubmissionStatus; 3] = [
            SubmissionStatus::Submitted,
            SubmissionStatus::InReview,
            SubmissionStatus::Approved,
        ];
        let step = self.refresh_step.fetch_add(1, Ordering::Relaxed);
        CYCLE[step.min(CYCLE.len() - 1)]
    }
}

impl Default for SimulatedService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepositService for SimulatedService {
    async fn request_auth(&self, method: AuthMethod) -> ServiceResult<AuthOutcome> {
        tokio::time::sleep(self.auth_latency).await;
        Ok(AuthOutcome {
            success: true,
            message: format!("{method} session confirmed. Identity verified."),
        })
    }

    async fn submit_application(&self, applicant: &Applicant) -> ServiceResult<SubmissionResponse> {
        tokio::time::sleep(self.submit_latency).await;
        tracing::info!(
            term_months = ?applicant.term_months,
            status = %applicant.status,
            "simulated submission accepted"
        );
        Ok(SubmissionResponse {
            id: self.next_submission_id(),
            status: SubmissionStatus::Submitted,
            message: "Application handed to CRM for processing.".to_string(),
        })
    }

    async fn refresh_status(&self, submission_id: &str) -> ServiceResult<SubmissionResponse> {
        tokio::time::sleep(self.refresh_latency).await;
        let status = self.next_refresh_status();
        let message = if status == SubmissionStatus::Approved {
            "Deposit account opened in the core banking system. Watch for funding instructions."
        } else {
            "The application is in processing (AML / CRM checks)."
        };
        Ok(SubmissionResponse {
            id: submission_id.to_string(),
            status,
            message: message.to_string(),
        })
    }
}
