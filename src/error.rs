//! Crate error type and result alias.

use thiserror::Error;

/// Errors produced by the questionnaire engine.
#[derive(Debug, Error)]
pub enum MedecoError {
    /// An answer referenced a question id that is not in the catalog.
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    /// Results or a report were requested before all questions were answered.
    #[error("questionnaire incomplete: {answered}/{total} questions answered")]
    Incomplete { answered: usize, total: usize },

    /// A reset was confirmed without a prior `request_reset`.
    #[error("no reset is pending; call request_reset first")]
    NoPendingReset,

    /// A reset was confirmed with a token from an earlier, superseded request.
    #[error("reset token is stale; request a new reset")]
    StaleResetToken,

    /// An answers file contained a value other than "yes" or "no".
    #[error("invalid answer for {id}: expected \"yes\" or \"no\", got {value:?}")]
    InvalidAnswer { id: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MedecoError>;
