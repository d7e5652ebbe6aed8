//! Selection rules: residency and deposit product.

use deposit_model::DEPOSIT_PRODUCTS;

pub fn check_residency(residency: &str) -> Option<String> {
    if residency.trim().is_empty() {
        return Some("Select a country of residence.".to_string());
    }
    None
}

pub fn check_deposit_type(deposit_type: &str) -> Option<String> {
    let trimmed = deposit_type.trim();
    if trimmed.is_empty() {
        return Some("Select a deposit type.".to_string());
    }
    if !DEPOSIT_PRODUCTS.contains(&trimmed) {
        return Some("Select one of the offered deposit types.".to_string());
    }
    None
}
