use super::error::ParseError;
use super::extractors::extract_json_objects;
use serde::de::DeserializeOwned;

/// Decodes the first JSON object in `text` that matches the target shape `T`.
///
/// Candidates that are valid JSON of a different shape are skipped silently
/// and the next one is tried. Only total failure is surfaced, with the
/// three cases kept distinct: an empty reply, text without any decodable
/// JSON, and candidates that all fail to match the shape.
pub fn parse_structured<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let candidates = extract_json_objects(text);
    if candidates.is_empty() {
        return Err(ParseError::NoJsonFound);
    }

    let total = candidates.len();
    for candidate in candidates {
        if let Ok(parsed) = serde_json::from_str(&candidate) {
            return Ok(parsed);
        }
    }

    Err(ParseError::ShapeMismatch { candidates: total })
}
