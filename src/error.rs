//! Error types for subnet calculation and input parsing.

use thiserror::Error;

/// Errors raised by the calculator core and the prompt layer.
#[derive(Debug, Error)]
pub enum SubnetError {
    /// A value handed to the calculator is outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Raw user text does not have the expected shape.
    #[error("malformed {field}: {input:?}")]
    MalformedInput { field: &'static str, input: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SubnetError>;

impl SubnetError {
    pub(crate) fn malformed(field: &'static str, input: &str) -> Self {
        SubnetError::MalformedInput {
            field,
            input: input.to_string(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SubnetError::InvalidArgument(_))
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, SubnetError::MalformedInput { .. })
    }
}
