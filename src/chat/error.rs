use crate::extract::ParseError;
use thiserror::Error;

/// Errors from a single chat attempt or from exhausting the retry budget.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The HTTP call itself failed: network, auth, or a provider error.
    #[error("chat transport error: {0}")]
    Transport(String),

    /// The reply text could not be decoded into the expected shape.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Every attempt failed. The caller must surface this; it is never
    /// downgraded to a partial classification.
    #[error("request to LLM failed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}
