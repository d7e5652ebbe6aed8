use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use tracing::{debug, info};

use deposit_core::{Event, Session, SimulatedService, ViewModel};
use deposit_model::{Applicant, AuthMethod, DepositConstraints, Field, RateTable, View};
use deposit_validate::{ValidationContext, validate_applicant};

pub fn run_rates() -> Result<()> {
    let rates = RateTable::standard();
    let constraints = DepositConstraints::standard();

    let mut table = Table::new();
    table.set_header(vec!["Term", "Rate (% p.a.)"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for option in rates.options() {
        table.add_row(vec![
            Cell::new(&option.label),
            Cell::new(format!("{:.2}", option.rate)),
        ]);
    }
    println!("{table}");
    println!(
        "Deposits from {} to {} EUR, in steps of {} EUR.",
        constraints.min, constraints.max, constraints.step
    );
    Ok(())
}

/// Exit status 1 when the file fails validation.
pub fn run_validate(file: &Path) -> Result<i32> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("read applicant file {}", file.display()))?;
    let applicant: Applicant = serde_json::from_str(&raw)
        .with_context(|| format!("parse applicant JSON {}", file.display()))?;

    let rates = RateTable::standard();
    let constraints = DepositConstraints::standard();
    // Only the form data is on trial here; the terms checkbox belongs to an
    // interactive session.
    let context = ValidationContext::new(&rates, &constraints).with_terms_accepted(true);
    let errors = validate_applicant(&applicant, &context);
    debug!(count = errors.len(), "validation finished");

    if errors.is_empty() {
        println!("{}: valid application", file.display());
        return Ok(0);
    }

    let mut table = Table::new();
    table.set_header(vec!["Field", "Problem"]);
    apply_table_style(&mut table);
    for (field, message) in &errors {
        table.add_row(vec![field.label(), message.as_str()]);
    }
    println!("{table}");
    println!(
        "{}: {} of {} fields need attention",
        file.display(),
        errors.len(),
        Field::ALL.len()
    );
    Ok(1)
}

/// Scripted end-to-end run against the simulated bank service: authenticate,
/// fill the form, submit, then refresh the status once.
pub async fn run_demo() -> Result<()> {
    let mut session = Session::new(SimulatedService::new());

    info!("requesting Smart-ID session");
    session.handle(Event::AuthModalOpened).await;
    session
        .handle(Event::AuthMethodChosen(AuthMethod::SmartId))
        .await;
    print_snapshot("after authentication", &session.view_model())?;

    session
        .handle(Event::NavigationRequested(View::Apply))
        .await;
    for (field, value) in [
        (Field::FullName, "Anna Kalniņa"),
        (Field::PersonalCode, "010190-12345"),
        (Field::Email, "anna.kalnina@example.lv"),
        (Field::Phone, "+37120234158"),
        (Field::Amount, "5000"),
        (Field::TermMonths, "24"),
        (Field::PayoutAccount, "LV80 BANK 0000 4351 9500 1"),
    ] {
        session
            .handle(Event::FieldEdited {
                field,
                value: value.to_string(),
            })
            .await;
    }
    session.handle(Event::TermsToggled(true)).await;
    print_snapshot("form filled", &session.view_model())?;

    info!("submitting application");
    session.handle(Event::FormSubmitted).await;
    print_snapshot("after submit", &session.view_model())?;

    info!("refreshing status");
    session.handle(Event::StatusRefreshRequested).await;
    print_snapshot("after refresh", &session.view_model())?;

    Ok(())
}

fn print_snapshot(stage: &str, view_model: &ViewModel) -> Result<()> {
    let json = serde_json::to_string_pretty(view_model).context("serialize view model")?;
    println!("--- {stage} ---");
    println!("{json}");
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
