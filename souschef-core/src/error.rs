use thiserror::Error;

use crate::ai::AiError;

/// Failures of the generate and optimize pipelines.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Input text is empty")]
    EmptyInput,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Backend returned malformed output: {0}")]
    BackendFormat(#[from] FormatError),

    #[error("Backend call failed: {0}")]
    BackendCall(#[source] AiError),
}

/// The backend answered, but not in the declared shape.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("requirements response did not parse: {0}")]
    Requirements(#[source] serde_json::Error),

    #[error("recipe synthesis response is invalid: {0}")]
    Synthesis(String),

    #[error("optimize response matched neither a recipe nor an off-topic reminder: {0}")]
    Optimize(String),

    #[error("backend returned an empty reply")]
    EmptyReply,
}

/// Coarse classification used by transports to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// The caller sent something unusable.
    BadRequest,
    /// The backend produced something we could not accept.
    ServerError,
    /// The backend could not be reached.
    Unavailable,
}

impl RecipeError {
    pub fn status_class(&self) -> StatusClass {
        match self {
            RecipeError::EmptyInput | RecipeError::Validation(_) => StatusClass::BadRequest,
            RecipeError::BackendFormat(_) => StatusClass::ServerError,
            RecipeError::BackendCall(_) => StatusClass::Unavailable,
        }
    }
}

impl From<AiError> for RecipeError {
    fn from(e: AiError) -> Self {
        match e {
            // The backend was reached; it just said nothing usable.
            AiError::EmptyResponse => RecipeError::BackendFormat(FormatError::EmptyReply),
            other => RecipeError::BackendCall(other),
        }
    }
}
