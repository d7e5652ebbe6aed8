//! Validation engine for deposit applications.
//!
//! Pure, field-addressable rules: `validate_field` answers for one field,
//! `validate_applicant` aggregates over the canonical field order. The
//! engine holds no state — reference data and the terms flag arrive through
//! [`ValidationContext`], and the result is a fresh [`FormErrors`] map each
//! pass, never accumulated history.

pub mod checks;

use std::collections::BTreeMap;

use deposit_model::{Applicant, DepositConstraints, Field, RateTable};

pub use checks::iban::{format_grouped as format_iban, sanitize as sanitize_iban};
pub use checks::term::RATE_TOLERANCE;

/// Message per currently-invalid field, keyed in canonical field order.
pub type FormErrors = BTreeMap<Field, String>;

/// Inputs a validation pass needs beyond the applicant itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub rates: &'a RateTable,
    pub constraints: &'a DepositConstraints,
    pub terms_accepted: bool,
}

impl<'a> ValidationContext<'a> {
    pub fn new(rates: &'a RateTable, constraints: &'a DepositConstraints) -> Self {
        Self {
            rates,
            constraints,
            terms_accepted: false,
        }
    }

    #[must_use]
    pub fn with_terms_accepted(mut self, accepted: bool) -> Self {
        self.terms_accepted = accepted;
        self
    }
}

/// Validate a single field; `None` means the field is currently valid.
pub fn validate_field(
    field: Field,
    applicant: &Applicant,
    ctx: &ValidationContext<'_>,
) -> Option<String> {
    match field {
        Field::FullName => checks::name::check(&applicant.full_name),
        Field::PersonalCode => checks::personal_code::check(&applicant.personal_code),
        Field::Email => checks::contact::check_email(&applicant.email),
        Field::Phone => checks::contact::check_phone(&applicant.phone),
        Field::Residency => checks::selection::check_residency(&applicant.residency),
        Field::DepositType => checks::selection::check_deposit_type(&applicant.deposit_type),
        Field::Amount => checks::amount::check(applicant.amount, ctx.constraints),
        Field::TermMonths => checks::term::check_term(applicant.term_months, ctx.rates),
        Field::InterestRate => {
            checks::term::check_rate(applicant.term_months, applicant.interest_rate, ctx.rates)
        }
        Field::PayoutAccount => checks::iban::check(&applicant.payout_account),
        Field::Terms => check_terms(ctx.terms_accepted),
    }
}

fn check_terms(terms_accepted: bool) -> Option<String> {
    if terms_accepted {
        None
    } else {
        Some("You must accept the terms and the AML declaration to continue.".to_string())
    }
}

/// Validate every field in canonical order, collecting only failures.
pub fn validate_applicant(applicant: &Applicant, ctx: &ValidationContext<'_>) -> FormErrors {
    let mut errors = FormErrors::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(field, applicant, ctx) {
            errors.insert(field, message);
        }
    }
    if !errors.is_empty() {
        tracing::debug!(invalid_fields = errors.len(), "form validation failed");
    }
    errors
}

pub fn is_form_valid(errors: &FormErrors) -> bool {
    errors.is_empty()
}

#[cfg(test)]
mod tests {
    use super::{ValidationContext, is_form_valid, validate_applicant, validate_field};
    use deposit_model::{Amount, Applicant, DepositConstraints, Field, RateTable};

    fn filled_applicant() -> Applicant {
        Applicant {
            full_name: "Anna Kalniņa".to_string(),
            personal_code: "010101-12345".to_string(),
            email: "anna@example.com".to_string(),
            phone: "+37120234158".to_string(),
            payout_account: "LV80BANK0000435195001".to_string(),
            ..Applicant::default()
        }
    }

    #[test]
    fn a_fully_valid_form_has_no_errors() {
        let rates = RateTable::standard();
        let constraints = DepositConstraints::standard();
        let ctx = ValidationContext::new(&rates, &constraints).with_terms_accepted(true);
        let errors = validate_applicant(&filled_applicant(), &ctx);
        assert!(is_form_valid(&errors), "unexpected errors: {errors:?}");
    }

    #[test]
    fn empty_form_fails_on_every_required_field() {
        let rates = RateTable::standard();
        let constraints = DepositConstraints::standard();
        let ctx = ValidationContext::new(&rates, &constraints);
        let empty = Applicant {
            residency: String::new(),
            deposit_type: String::new(),
            amount: None,
            term_months: None,
            ..Applicant::default()
        };
        let errors = validate_applicant(&empty, &ctx);
        assert_eq!(errors.len(), Field::ALL.len() - 1);
        // The rate has no table entry to disagree with while the term is unset.
        assert!(!errors.contains_key(&Field::InterestRate));
    }

    #[test]
    fn errors_iterate_in_canonical_order() {
        let rates = RateTable::standard();
        let constraints = DepositConstraints::standard();
        let ctx = ValidationContext::new(&rates, &constraints);
        let empty = Applicant {
            residency: String::new(),
            deposit_type: String::new(),
            amount: None,
            term_months: None,
            ..Applicant::default()
        };
        let errors = validate_applicant(&empty, &ctx);
        let keys: Vec<_> = errors.keys().copied().collect();
        let expected: Vec<_> = Field::ALL
            .into_iter()
            .filter(|f| errors.contains_key(f))
            .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn cross_field_rate_disagreement_is_caught() {
        let rates = RateTable::standard();
        let constraints = DepositConstraints::standard();
        let ctx = ValidationContext::new(&rates, &constraints).with_terms_accepted(true);
        let applicant = Applicant {
            interest_rate: 2.5,
            ..filled_applicant()
        };
        let errors = validate_applicant(&applicant, &ctx);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&Field::InterestRate));
    }

    #[test]
    fn amount_examples_from_the_offer() {
        let rates = RateTable::standard();
        let constraints = DepositConstraints::standard();
        let ctx = ValidationContext::new(&rates, &constraints).with_terms_accepted(true);
        let valid = Applicant {
            amount: Some(Amount::from_eur(1000)),
            ..filled_applicant()
        };
        assert!(validate_field(Field::Amount, &valid, &ctx).is_none());
        let invalid = Applicant {
            amount: Some(Amount::from_eur(1025)),
            ..filled_applicant()
        };
        assert!(validate_field(Field::Amount, &invalid, &ctx).is_some());
    }
}
