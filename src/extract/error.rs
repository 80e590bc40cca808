/// Response parsing errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The model returned no text at all.
    #[error("empty LLM response")]
    EmptyResponse,

    /// Text was present but no JSON object could be decoded from it.
    #[error("no JSON found in LLM response")]
    NoJsonFound,

    /// JSON candidates were found, but none of them matched the expected shape.
    #[error("none of {candidates} JSON candidate(s) matched the expected shape")]
    ShapeMismatch { candidates: usize },
}
