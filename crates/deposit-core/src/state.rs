//! The mutable application state aggregate.
//!
//! All mutation funnels through the named operations below; each is the
//! sole writer for its concern. Readers get shared references or copies and
//! never mutate. Error *existence* lives in `form_errors`; error
//! *visibility* is computed by [`AppState::should_show_error`] so pristine
//! fields stay quiet during live validation.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use deposit_model::{Applicant, AuthMethod, Field, SubmissionStatus, View};
use deposit_validate::FormErrors;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    current_view: View,
    applicant: Applicant,
    is_authenticated: bool,
    auth_method: Option<AuthMethod>,
    show_auth_modal: bool,
    pending_view: Option<View>,
    submission_id: Option<String>,
    submitted_at: Option<DateTime<Utc>>,
    loading: bool,
    terms_accepted: bool,
    submission_attempted: bool,
    form_errors: FormErrors,
    touched: BTreeSet<Field>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- readers ---

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn auth_method(&self) -> Option<AuthMethod> {
        self.auth_method
    }

    pub fn auth_modal_open(&self) -> bool {
        self.show_auth_modal
    }

    pub fn pending_view(&self) -> Option<View> {
        self.pending_view
    }

    pub fn submission_id(&self) -> Option<&str> {
        self.submission_id.as_deref()
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn submission_attempted(&self) -> bool {
        self.submission_attempted
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// A field alarms the user only once it is invalid AND either the whole
    /// form was submitted or the user has interacted with that field.
    pub fn should_show_error(&self, field: Field) -> bool {
        self.form_errors.contains_key(&field) && (self.submission_attempted || self.is_touched(field))
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.should_show_error(field) {
            self.form_errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    // --- mutation operations ---

    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Replace the applicant snapshot wholesale (merge happens upstream).
    pub fn set_applicant(&mut self, applicant: Applicant) {
        self.applicant = applicant;
    }

    pub fn applicant_mut(&mut self) -> &mut Applicant {
        &mut self.applicant
    }

    pub fn set_applicant_status(&mut self, status: SubmissionStatus) {
        self.applicant.status = status;
    }

    /// `Some` inserts or replaces the message; `None` removes the entry.
    pub fn set_field_error(&mut self, field: Field, message: Option<String>) {
        match message {
            Some(message) => {
                self.form_errors.insert(field, message);
            }
            None => {
                self.form_errors.remove(&field);
            }
        }
    }

    pub fn set_form_errors(&mut self, errors: FormErrors) {
        self.form_errors = errors;
    }

    pub fn mark_field_touched(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn mark_all_fields_touched(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn set_submission_attempted(&mut self, attempted: bool) {
        self.submission_attempted = attempted;
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Open the auth modal, remembering where the user wanted to go.
    pub fn defer_navigation(&mut self, requested: View) {
        self.show_auth_modal = true;
        self.pending_view = Some(requested);
    }

    pub fn open_auth_modal(&mut self) {
        self.show_auth_modal = true;
    }

    pub fn close_auth_modal(&mut self) {
        self.show_auth_modal = false;
    }

    /// Record a confirmed authentication and consume the deferred target.
    pub fn set_auth_session(&mut self, method: AuthMethod) -> Option<View> {
        self.is_authenticated = true;
        self.auth_method = Some(method);
        self.show_auth_modal = false;
        self.pending_view.take()
    }

    pub fn clear_auth_session(&mut self) {
        self.is_authenticated = false;
        self.auth_method = None;
    }

    pub fn record_submission(&mut self, id: String, at: DateTime<Utc>) {
        self.submission_id = Some(id);
        self.submitted_at = Some(at);
    }

    /// Full reset back to the session-start profile: applicant defaults,
    /// submission metadata, errors, touch state, terms, attempt flag.
    pub fn reset_applicant(&mut self) {
        self.applicant = Applicant::default();
        self.submission_id = None;
        self.submitted_at = None;
        self.form_errors.clear();
        self.touched.clear();
        self.terms_accepted = false;
        self.submission_attempted = false;
    }
}
