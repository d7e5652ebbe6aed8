use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("rate table must list unique terms in ascending order (offending term: {0} months)")]
    InvalidRateTable(u32),
    #[error("deposit constraints invalid: min {min}, max {max}, step {step}")]
    InvalidConstraints {
        min: String,
        max: String,
        step: String,
    },
    #[error("unknown {kind} token: {value}")]
    UnknownToken { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
