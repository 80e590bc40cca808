use serde_json::Value;

/// Scans `text` left to right and returns every balanced JSON object found
/// as a substring, re-serialized to canonical JSON, in scan order.
///
/// At each `{` a prefix decode is attempted: exactly one JSON value is
/// parsed and the consumed span is reported, so trailing garbage after a
/// complete object is fine. On success the scan resumes just past the
/// consumed span; on failure it resumes one character past the `{`. The
/// position strictly advances either way, so the scan always terminates;
/// a `{` that never closes is simply skipped.
///
/// The surrounding text does not have to be valid JSON itself: objects may
/// sit inside prose or Markdown fences, adjacent or nested. Non-ASCII
/// characters survive re-serialization unescaped.
pub fn extract_json_objects(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('{') {
        let start = pos + offset;
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => {
                found.push(value.to_string());
                pos = start + stream.byte_offset();
            }
            _ => pos = start + 1,
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_recovered_in_scan_order() {
        let text = r#"First draft: {"a": 1}, but actually {"b": {"c": 2}} is better."#;
        assert_eq!(
            extract_json_objects(text),
            vec![r#"{"a":1}"#, r#"{"b":{"c":2}}"#]
        );
    }

    #[test]
    fn test_no_brace_yields_empty_sequence() {
        assert!(extract_json_objects("just prose, nothing structured").is_empty());
        assert!(extract_json_objects("").is_empty());
    }

    #[test]
    fn test_invalid_candidate_is_skipped_without_stalling() {
        let text = r#"prefix {"a":1} middle {not json} {"b":2}"#;
        assert_eq!(extract_json_objects(text), vec![r#"{"a":1}"#, r#"{"b":2}"#]);
    }

    #[test]
    fn test_unclosed_object_recovers_inner_object() {
        let text = r#"broken {"a": then later {"b":2}"#;
        assert_eq!(extract_json_objects(text), vec![r#"{"b":2}"#]);
    }

    #[test]
    fn test_object_inside_markdown_fence() {
        let text = "Sure!\n```json\n{\"attributes\": {\"k\": \"v\"}}\n```\nDone.";
        assert_eq!(
            extract_json_objects(text),
            vec![r#"{"attributes":{"k":"v"}}"#]
        );
    }

    #[test]
    fn test_non_ascii_survives_reserialization() {
        let text = r#"{"equipment_type": "Ноутбук"}"#;
        assert_eq!(
            extract_json_objects(text),
            vec![r#"{"equipment_type":"Ноутбук"}"#]
        );
    }

    #[test]
    fn test_adjacent_objects_without_separator() {
        let text = r#"{"a":1}{"b":2}"#;
        assert_eq!(extract_json_objects(text), vec![r#"{"a":1}"#, r#"{"b":2}"#]);
    }

    #[test]
    fn test_brace_inside_string_does_not_split_object() {
        let text = r#"{"note": "use { and } carefully"} tail"#;
        assert_eq!(
            extract_json_objects(text),
            vec![r#"{"note":"use { and } carefully"}"#]
        );
    }
}
