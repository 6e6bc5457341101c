//! Engine error taxonomy
//!
//! Only two things can go wrong, and both happen at the input boundary:
//! an enumerated field holds a value outside its domain, or a required
//! field is missing. Either one aborts the whole analysis; there is no
//! partial or degraded result. Everything past the boundary is total.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid value '{value}' for field '{field}'")]
    InvalidInput { field: &'static str, value: String },

    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },
}

impl EngineError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            value: value.into(),
        }
    }

    pub fn missing(field: &'static str) -> Self {
        EngineError::MissingField { field }
    }
}
