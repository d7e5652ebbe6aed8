//! Read-only projection of session state for the renderer.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use deposit_model::{Applicant, Field, View};
use deposit_validate::is_form_valid;
use serde::Serialize;

use crate::state::AppState;

/// One line of the error summary shown after a failed submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub field: Field,
    pub label: &'static str,
    pub message: String,
}

/// Everything the rendering collaborator needs, already filtered: field
/// errors appear only when the visibility policy says they should, and the
/// summary only after an attempted submit of an invalid form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub view: View,
    pub applicant: Applicant,
    pub visible_errors: BTreeMap<Field, String>,
    pub error_summary: Vec<SummaryLine>,
    pub loading: bool,
    pub auth_modal_open: bool,
    pub authenticated_as: Option<String>,
    pub terms_accepted: bool,
    pub toast: Option<String>,
    pub submission_id: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl ViewModel {
    pub(crate) fn derive(state: &AppState, toast: Option<String>) -> Self {
        let visible_errors: BTreeMap<Field, String> = Field::ALL
            .into_iter()
            .filter_map(|field| {
                state
                    .visible_error(field)
                    .map(|message| (field, message.to_string()))
            })
            .collect();

        let show_summary =
            state.submission_attempted() && !is_form_valid(state.form_errors());
        let error_summary = if show_summary {
            state
                .form_errors()
                .iter()
                .map(|(&field, message)| SummaryLine {
                    field,
                    label: field.label(),
                    message: message.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            view: state.current_view(),
            applicant: state.applicant().clone(),
            visible_errors,
            error_summary,
            loading: state.loading(),
            auth_modal_open: state.auth_modal_open(),
            authenticated_as: state.auth_method().map(|method| method.to_string()),
            terms_accepted: state.terms_accepted(),
            toast,
            submission_id: state.submission_id().map(str::to_string),
            submitted_at: state.submitted_at(),
        }
    }
}
