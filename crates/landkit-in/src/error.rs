use landkit_core::ValidationError;
use thiserror::Error;

/// Errors raised by a [`crate::Generator`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("GENERATOR/transport: {0}")]
    Transport(String),

    #[error("GENERATOR/api error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GENERATOR/no candidates returned")]
    NoCandidates,

    #[error("GENERATOR/empty response text")]
    EmptyText,
}

/// Why a generated schema was rejected. Absorbed by the engine, which falls
/// back to rule-based synthesis.
#[derive(Error, Debug)]
pub enum TransformationFailure {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("PARSE/response is not JSON: {0}")]
    NotJson(String),

    #[error(transparent)]
    Schema(#[from] ValidationError),
}
