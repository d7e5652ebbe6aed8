//! Term and derived-rate rules against the rate table.

use deposit_model::RateTable;

/// Rates within this absolute distance of the table value count as equal.
pub const RATE_TOLERANCE: f64 = 0.01;

pub fn check_term(term_months: Option<u32>, rates: &RateTable) -> Option<String> {
    match term_months {
        None | Some(0) => Some("Select a deposit term.".to_string()),
        Some(months) if !rates.contains_term(months) => {
            Some("This term is not part of the current offer.".to_string())
        }
        Some(_) => None,
    }
}

/// The derived rate must agree with the table entry for the selected term.
/// While the term itself is unselected or unknown there is nothing to
/// compare against, so only finiteness is enforced.
pub fn check_rate(term_months: Option<u32>, interest_rate: f64, rates: &RateTable) -> Option<String> {
    if !interest_rate.is_finite() {
        return Some("The interest rate must be a number.".to_string());
    }
    let expected = term_months.and_then(|months| rates.rate_for_term(months));
    match expected {
        Some(expected) if (expected - interest_rate).abs() > RATE_TOLERANCE => {
            Some("The rate does not match the current rate table.".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{check_rate, check_term};
    use deposit_model::RateTable;

    #[test]
    fn term_must_exist_in_table() {
        let rates = RateTable::standard();
        assert!(check_term(Some(12), &rates).is_none());
        assert!(check_term(Some(7), &rates).is_some());
        assert!(check_term(Some(0), &rates).is_some());
        assert!(check_term(None, &rates).is_some());
    }

    #[test]
    fn rate_must_match_table_within_tolerance() {
        let rates = RateTable::standard();
        assert!(check_rate(Some(12), 1.75, &rates).is_none());
        assert!(check_rate(Some(12), 1.7501, &rates).is_none());
        assert!(check_rate(Some(12), 1.80, &rates).is_some());
        assert!(check_rate(Some(12), f64::NAN, &rates).is_some());
    }

    #[test]
    fn rate_comparison_is_skipped_without_a_valid_term() {
        let rates = RateTable::standard();
        assert!(check_rate(None, 9.99, &rates).is_none());
        assert!(check_rate(Some(7), 9.99, &rates).is_none());
    }
}
