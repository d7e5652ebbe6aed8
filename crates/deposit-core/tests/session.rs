//! End-to-end session flows against the simulated service.

use deposit_core::{Event, Session, SimulatedService};
use deposit_model::{Amount, AuthMethod, Field, SubmissionStatus, View};

async fn edit(session: &mut Session<SimulatedService>, field: Field, value: &str) {
    session
        .handle(Event::FieldEdited {
            field,
            value: value.to_string(),
        })
        .await;
}

/// Residency and deposit type keep their valid defaults.
async fn fill_valid_form(session: &mut Session<SimulatedService>) {
    edit(session, Field::FullName, "Anna Kalniņa").await;
    edit(session, Field::PersonalCode, "010101-12345").await;
    edit(session, Field::Email, "Anna@Example.com").await;
    edit(session, Field::Phone, "+37120234158").await;
    edit(session, Field::Amount, "3000").await;
    edit(session, Field::TermMonths, "12").await;
    edit(session, Field::PayoutAccount, "LV80 BANK 0000 4351 9500 1").await;
    session.handle(Event::TermsToggled(true)).await;
}

async fn authenticated_session() -> Session<SimulatedService> {
    let mut session = Session::new(SimulatedService::instant());
    session.handle(Event::AuthModalOpened).await;
    session
        .handle(Event::AuthMethodChosen(AuthMethod::SmartId))
        .await;
    session
}

#[tokio::test]
async fn navigation_to_protected_views_is_deferred_until_auth() {
    let mut session = Session::new(SimulatedService::instant());
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;

    let vm = session.view_model();
    assert_eq!(vm.view, View::Landing);
    assert!(vm.auth_modal_open);
    assert_eq!(session.state().pending_view(), Some(View::Apply));

    session
        .handle(Event::AuthMethodChosen(AuthMethod::EParaksts))
        .await;
    let vm = session.view_model();
    assert_eq!(vm.view, View::Apply);
    assert!(!vm.auth_modal_open);
    assert_eq!(vm.authenticated_as.as_deref(), Some("eParaksts"));
}

#[tokio::test]
async fn auth_without_a_pending_target_lands_on_the_dashboard() {
    let session = authenticated_session().await;
    assert_eq!(session.view_model().view, View::Dashboard);
}

#[tokio::test]
async fn pristine_form_shows_no_errors_even_though_fields_are_invalid() {
    let mut session = authenticated_session().await;
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    assert!(session.view_model().visible_errors.is_empty());
}

#[tokio::test]
async fn invalid_submit_surfaces_every_error_and_skips_the_service() {
    let mut session = authenticated_session().await;
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    session.handle(Event::FormSubmitted).await;

    let vm = session.view_model();
    // Identity fields, payout account, and terms are invalid on the default
    // profile; the deposit parameters are pre-filled and valid.
    assert!(vm.visible_errors.contains_key(&Field::FullName));
    assert!(vm.visible_errors.contains_key(&Field::PayoutAccount));
    assert!(vm.visible_errors.contains_key(&Field::Terms));
    assert!(!vm.visible_errors.contains_key(&Field::Amount));
    assert!(!vm.error_summary.is_empty());
    assert_eq!(
        vm.toast.as_deref(),
        Some("Please check the highlighted fields and correct the errors.")
    );
    // Still on the form, nothing submitted.
    assert_eq!(vm.view, View::Apply);
    assert_eq!(vm.submission_id, None);
}

#[tokio::test]
async fn fixing_the_form_after_a_failed_attempt_clears_the_attempt_flag() {
    let mut session = authenticated_session().await;
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    session.handle(Event::FormSubmitted).await;
    assert!(session.state().submission_attempted());

    fill_valid_form(&mut session).await;
    assert!(!session.state().submission_attempted());
    assert!(session.view_model().error_summary.is_empty());
}

#[tokio::test]
async fn end_to_end_submission_reaches_the_dashboard() {
    let mut session = authenticated_session().await;
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    fill_valid_form(&mut session).await;

    assert_eq!(session.state().applicant().status, SubmissionStatus::Draft);
    session.handle(Event::FormSubmitted).await;

    let vm = session.view_model();
    assert_eq!(vm.applicant.status, SubmissionStatus::Submitted);
    assert!(vm.submission_id.as_deref().is_some_and(|id| id.starts_with("APP-")));
    assert!(vm.submitted_at.is_some());
    assert_eq!(vm.view, View::Dashboard);
    assert!(!vm.loading);
    assert_eq!(
        vm.toast.as_deref(),
        Some("Application handed to CRM for processing.")
    );
    // Normalization happened on the way in.
    assert_eq!(vm.applicant.email, "anna@example.com");
    assert_eq!(vm.applicant.payout_account, "LV80BANK0000435195001");
    assert_eq!(vm.applicant.amount, Some(Amount::from_eur(3000)));
}

#[tokio::test]
async fn refresh_advances_only_the_status() {
    let mut session = authenticated_session().await;
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    fill_valid_form(&mut session).await;
    session.handle(Event::FormSubmitted).await;
    let id_before = session.view_model().submission_id;

    session.handle(Event::StatusRefreshRequested).await;
    session.handle(Event::StatusRefreshRequested).await;

    let vm = session.view_model();
    assert_eq!(vm.applicant.status, SubmissionStatus::InReview);
    assert_eq!(vm.submission_id, id_before);
    assert_eq!(vm.view, View::Dashboard);
}

#[tokio::test]
async fn refresh_without_a_submission_is_a_no_op() {
    let mut session = authenticated_session().await;
    session.handle(Event::StatusRefreshRequested).await;
    let vm = session.view_model();
    assert_eq!(vm.applicant.status, SubmissionStatus::Draft);
    assert_eq!(vm.toast, None);
}

#[tokio::test]
async fn sign_out_resets_the_whole_session() {
    let mut session = authenticated_session().await;
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    fill_valid_form(&mut session).await;
    session.handle(Event::FormSubmitted).await;

    session.handle(Event::SignOutRequested).await;

    let vm = session.view_model();
    assert_eq!(vm.view, View::Landing);
    assert_eq!(vm.authenticated_as, None);
    assert!(vm.applicant.full_name.is_empty());
    assert_eq!(vm.applicant.status, SubmissionStatus::Draft);
    assert_eq!(vm.submission_id, None);
    assert!(!vm.terms_accepted);
    assert_eq!(vm.toast.as_deref(), Some("Session closed."));

    // Protected views are gated again.
    session
        .handle(Event::NavigationRequested(View::Dashboard))
        .await;
    assert_eq!(session.view_model().view, View::Landing);
    assert!(session.view_model().auth_modal_open);
}

#[tokio::test]
async fn editing_the_term_re_derives_the_rate() {
    let mut session = authenticated_session().await;
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    edit(&mut session, Field::TermMonths, "36").await;
    assert_eq!(session.state().applicant().interest_rate, 2.5);
    assert_eq!(session.state().applicant().term_months, Some(36));
}

#[tokio::test]
async fn blur_makes_a_single_field_alarm_without_a_submit() {
    let mut session = authenticated_session().await;
    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    edit(&mut session, Field::Email, "not-an-email").await;
    assert!(session.view_model().visible_errors.is_empty());

    session.handle(Event::FieldBlurred(Field::Email)).await;
    let vm = session.view_model();
    assert_eq!(vm.visible_errors.len(), 1);
    assert!(vm.visible_errors.contains_key(&Field::Email));
}

#[tokio::test(start_paused = true)]
async fn toast_auto_clears_after_its_ttl() {
    let mut session = authenticated_session().await;
    assert!(session.view_model().toast.is_some());

    tokio::time::sleep(std::time::Duration::from_millis(4300)).await;
    assert_eq!(session.view_model().toast, None);
}
