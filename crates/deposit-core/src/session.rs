//! The origination session: navigation gate, form events, and the
//! submission lifecycle.
//!
//! A `Session` owns the state aggregate and is driven by [`Event`]s from
//! the rendering collaborator. There is a single logical thread of control:
//! every entry point takes `&mut self`, async service calls are the only
//! suspension points, and the `loading` flag is re-checked before each call
//! so a second attempt during an in-flight operation is silently ignored
//! rather than racing or cancelling it.

use chrono::Utc;
use deposit_model::{
    Amount, AuthMethod, DepositConstraints, Field, RateTable, SubmissionStatus, View,
};
use deposit_validate::{ValidationContext, is_form_valid, validate_applicant, validate_field};

use crate::notify::NotificationSlot;
use crate::service::DepositService;
use crate::state::AppState;
use crate::viewmodel::ViewModel;

/// Inbound event from the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    NavigationRequested(View),
    AuthModalOpened,
    AuthModalDismissed,
    AuthMethodChosen(AuthMethod),
    /// Raw input for one field; the session parses and revalidates it.
    FieldEdited { field: Field, value: String },
    FieldBlurred(Field),
    TermsToggled(bool),
    FormSubmitted,
    StatusRefreshRequested,
    SignOutRequested,
}

pub struct Session<S> {
    state: AppState,
    service: S,
    notifications: NotificationSlot,
    rates: RateTable,
    constraints: DepositConstraints,
}

impl<S: DepositService> Session<S> {
    pub fn new(service: S) -> Self {
        Self::with_reference_data(service, RateTable::standard(), DepositConstraints::standard())
    }

    pub fn with_reference_data(
        service: S,
        rates: RateTable,
        constraints: DepositConstraints,
    ) -> Self {
        Self {
            state: AppState::new(),
            service,
            notifications: NotificationSlot::new(),
            rates,
            constraints,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Read-only projection for the renderer.
    pub fn view_model(&self) -> ViewModel {
        ViewModel::derive(&self.state, self.notifications.message())
    }

    pub async fn handle(&mut self, event: Event) {
        match event {
            Event::NavigationRequested(view) => self.change_view(view),
            Event::AuthModalOpened => self.state.open_auth_modal(),
            Event::AuthModalDismissed => {
                if !self.state.loading() {
                    self.state.close_auth_modal();
                }
            }
            Event::AuthMethodChosen(method) => self.authenticate(method).await,
            Event::FieldEdited { field, value } => self.edit_field(field, &value),
            Event::FieldBlurred(field) => {
                self.state.mark_field_touched(field);
                self.revalidate_field(field);
                self.reconcile_attempt();
            }
            Event::TermsToggled(accepted) => {
                self.state.set_terms_accepted(accepted);
                self.state.mark_field_touched(Field::Terms);
                self.revalidate_field(Field::Terms);
                self.reconcile_attempt();
            }
            Event::FormSubmitted => self.submit().await,
            Event::StatusRefreshRequested => self.refresh_status().await,
            Event::SignOutRequested => self.sign_out(),
        }
    }

    // --- navigation & auth gate ---

    /// Gate rule: unauthenticated navigation to a protected view leaves the
    /// primary view unchanged and opens the auth modal instead, remembering
    /// the target. Entering Apply always clears the stale-attempt flag.
    fn change_view(&mut self, view: View) {
        if view.requires_auth() && !self.state.is_authenticated() {
            self.state.defer_navigation(view);
            return;
        }
        if view == View::Apply {
            self.state.set_submission_attempted(false);
        }
        self.state.set_view(view);
    }

    async fn authenticate(&mut self, method: AuthMethod) {
        if self.state.loading() {
            return;
        }
        self.state.set_loading(true);
        let result = self.service.request_auth(method).await;
        self.state.set_loading(false);

        match result {
            Ok(outcome) if outcome.success => {
                let pending = self.state.set_auth_session(method);
                self.notifications.post(outcome.message);
                self.change_view(pending.unwrap_or(View::Dashboard));
                tracing::info!(method = %method, "authenticated");
            }
            Ok(_) | Err(_) => {
                // Modal closes but the user stays on the originating view.
                self.state.close_auth_modal();
                self.notifications
                    .post("Identification failed. Please try again.");
                tracing::warn!(method = %method, "authentication failed");
            }
        }
    }

    fn sign_out(&mut self) {
        self.state.clear_auth_session();
        self.state.reset_applicant();
        self.notifications.post("Session closed.");
        self.state.set_view(View::Landing);
    }

    // --- form editing & incremental validation ---

    /// Apply raw input to the applicant, then revalidate just that field.
    fn edit_field(&mut self, field: Field, value: &str) {
        self.apply_edit(field, value);
        self.revalidate_field(field);
        self.reconcile_attempt();
    }

    /// While a failed attempt is on display, keep the full error map in
    /// step with every change and drop the attempt flag once the form is
    /// valid again.
    fn reconcile_attempt(&mut self) {
        if !self.state.submission_attempted() {
            return;
        }
        let errors = validate_applicant(self.state.applicant(), &self.validation_context());
        let form_valid = is_form_valid(&errors);
        self.state.set_form_errors(errors);
        if form_valid {
            self.state.set_submission_attempted(false);
        }
    }

    fn apply_edit(&mut self, field: Field, value: &str) {
        let trimmed = value.trim();
        match field {
            Field::FullName => self.state.applicant_mut().full_name = trimmed.to_string(),
            Field::PersonalCode => self.state.applicant_mut().personal_code = trimmed.to_string(),
            Field::Email => self.state.applicant_mut().email = trimmed.to_lowercase(),
            Field::Phone => self.state.applicant_mut().phone = trimmed.to_string(),
            Field::Residency => self.state.applicant_mut().residency = trimmed.to_string(),
            Field::DepositType => self.state.applicant_mut().deposit_type = trimmed.to_string(),
            Field::Amount => {
                self.state.applicant_mut().amount = Amount::parse(trimmed).ok();
            }
            Field::TermMonths => {
                let term = trimmed.parse::<u32>().ok();
                // The rate follows the term selection automatically.
                let derived = term.and_then(|months| self.rates.rate_for_term(months));
                let applicant = self.state.applicant_mut();
                applicant.term_months = term;
                if let Some(rate) = derived {
                    applicant.interest_rate = rate;
                }
            }
            Field::InterestRate => {
                self.state.applicant_mut().interest_rate =
                    trimmed.parse::<f64>().unwrap_or(f64::NAN);
            }
            Field::PayoutAccount => {
                self.state.applicant_mut().payout_account =
                    deposit_validate::sanitize_iban(trimmed);
            }
            Field::Terms => self.state.set_terms_accepted(trimmed == "true"),
        }
    }

    fn revalidate_field(&mut self, field: Field) {
        let message = validate_field(field, self.state.applicant(), &self.validation_context());
        self.state.set_field_error(field, message);
    }

    fn validation_context(&self) -> ValidationContext<'_> {
        ValidationContext::new(&self.rates, &self.constraints)
            .with_terms_accepted(self.state.terms_accepted())
    }

    // --- submission lifecycle ---

    async fn submit(&mut self) {
        let errors = validate_applicant(self.state.applicant(), &self.validation_context());
        let form_valid = is_form_valid(&errors);
        self.state.set_form_errors(errors);

        if !form_valid {
            // Force every invalid field visible; no service call.
            self.state.mark_all_fields_touched();
            self.state.set_submission_attempted(true);
            self.notifications
                .post("Please check the highlighted fields and correct the errors.");
            return;
        }

        if self.state.loading() {
            tracing::debug!("submit ignored: request already in flight");
            return;
        }
        self.state.set_loading(true);

        let mut payload = self.state.applicant().clone();
        payload.status = SubmissionStatus::Submitted;
        let result = self.service.submit_application(&payload).await;
        self.state.set_loading(false);

        match result {
            Ok(response) => {
                self.state.set_applicant_status(response.status);
                self.state.record_submission(response.id, Utc::now());
                self.state.set_submission_attempted(false);
                self.notifications.post(response.message);
                self.change_view(View::Dashboard);
                tracing::info!(
                    submission_id = ?self.state.submission_id(),
                    status = %response.status,
                    "application submitted"
                );
            }
            Err(error) => {
                self.notifications
                    .post("Submission failed. Please try again.");
                tracing::warn!(%error, "submission failed");
            }
        }
    }

    async fn refresh_status(&mut self) {
        let Some(submission_id) = self.state.submission_id().map(str::to_string) else {
            return;
        };
        if self.state.loading() {
            return;
        }
        self.state.set_loading(true);
        let result = self.service.refresh_status(&submission_id).await;
        self.state.set_loading(false);

        match result {
            Ok(response) => {
                self.state.set_applicant_status(response.status);
                self.notifications.post(response.message);
                tracing::debug!(%submission_id, status = %response.status, "status refreshed");
            }
            Err(error) => {
                self.notifications
                    .post("Could not refresh the status. Please try again.");
                tracing::warn!(%error, %submission_id, "status refresh failed");
            }
        }
    }
}
