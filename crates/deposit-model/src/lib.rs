pub mod applicant;
pub mod enums;
pub mod error;
pub mod fields;
pub mod money;
pub mod rates;

pub use applicant::{Applicant, AuthOutcome, SubmissionResponse};
pub use enums::{AuthMethod, SubmissionStatus, View};
pub use error::{ModelError, Result};
pub use fields::Field;
pub use money::Amount;
pub use rates::{
    DEPOSIT_PRODUCTS, DepositConstraints, RESIDENCY_OPTIONS, RateOption, RateTable,
};
