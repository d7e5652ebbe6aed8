//! Validation check modules.
//!
//! Each module covers one rule family and exposes small pure functions
//! returning `Some(message)` on failure, so every rule is unit-testable in
//! isolation and substitutable at the dispatch site.

pub mod amount;
pub mod contact;
pub mod iban;
pub mod name;
pub mod personal_code;
pub mod selection;
pub mod term;
