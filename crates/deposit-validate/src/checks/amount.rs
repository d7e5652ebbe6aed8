//! Amount rule: bounds and step alignment, computed in cents.

use deposit_model::{Amount, DepositConstraints};

pub fn check(amount: Option<Amount>, constraints: &DepositConstraints) -> Option<String> {
    let Some(amount) = amount else {
        return Some("Enter a deposit amount.".to_string());
    };
    if amount < constraints.min {
        return Some(format!("The minimum deposit is {} EUR.", constraints.min));
    }
    if amount > constraints.max {
        return Some("For larger amounts, please contact the bank.".to_string());
    }
    if !amount.aligned_to(constraints.min, constraints.step) {
        return Some(format!(
            "The amount must be divisible by {} EUR.",
            constraints.step
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::check;
    use deposit_model::{Amount, DepositConstraints};

    fn standard() -> DepositConstraints {
        DepositConstraints::standard()
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(check(Some(Amount::from_eur(1000)), &standard()).is_none());
        assert!(check(Some(Amount::from_eur(500_000)), &standard()).is_none());
        assert!(check(Some(Amount::from_eur(999)), &standard()).is_some());
        assert!(check(Some(Amount::from_eur(500_050)), &standard()).is_some());
    }

    #[test]
    fn step_alignment_is_exact() {
        assert!(check(Some(Amount::from_eur(3000)), &standard()).is_none());
        assert!(check(Some(Amount::from_eur(1025)), &standard()).is_some());
        // Off by one cent: in range but not step-aligned.
        assert!(check(Some(Amount::from_cents(105_001)), &standard()).is_some());
    }

    #[test]
    fn missing_amount_is_reported() {
        assert!(check(None, &standard()).is_some());
    }
}
