//! Schema validation and normalization of raw extraction results.

use super::schema::SCHEMA;
use std::collections::BTreeMap;

/// Attribute mapping exactly as decoded from the model's JSON payload.
pub type RawAttributes = BTreeMap<String, Option<String>>;

/// Outcome of checking a raw extraction against the declared schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// True iff no declared attribute was missing from the raw mapping.
    pub valid: bool,
    /// Declared attributes absent from the raw mapping, in schema order.
    pub missing_attributes: Vec<String>,
    /// Exactly one entry per declared attribute, placeholders substituted
    /// where the schema defines one.
    pub normalized_attributes: BTreeMap<String, Option<String>>,
}

/// Checks `raw` against the declared schema and normalizes each value.
///
/// Missingness is decided on raw presence alone: an attribute whose
/// placeholder was substituted still counts as missing, and the placeholder
/// never flips `valid` back to true.
pub fn validate_attributes(raw: &RawAttributes) -> ValidationOutcome {
    let mut missing_attributes = Vec::new();
    let mut normalized_attributes = BTreeMap::new();
    let mut valid = true;

    for attr in SCHEMA {
        let mut value = match raw.get(attr.name) {
            Some(Some(v)) if !v.is_empty() => Some(v.clone()),
            _ => {
                missing_attributes.push(attr.name.to_string());
                valid = false;
                None
            }
        };

        if attr.upper_case {
            value = value.map(|v| v.to_uppercase());
        }
        if attr.convert_to_latin {
            value = value.map(|v| transliterate_lookalikes(&v));
        }
        if value.is_none() {
            value = attr.empty_placeholder.map(str::to_string);
        }

        normalized_attributes.insert(attr.name.to_string(), value);
    }

    ValidationOutcome {
        valid,
        missing_attributes,
        normalized_attributes,
    }
}

/// Remaps the eleven uppercase Cyrillic characters that are visually
/// identical to Latin letters onto their Latin counterparts.
///
/// A fixed one-to-one character substitution: deterministic, idempotent,
/// order-independent. Every other character, lowercase Cyrillic included,
/// passes through unchanged. This is not a transliteration system.
pub fn transliterate_lookalikes(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'С' => 'C',
            'Е' => 'E',
            'В' => 'B',
            'А' => 'A',
            'Н' => 'H',
            'К' => 'K',
            'М' => 'M',
            'О' => 'O',
            'Р' => 'P',
            'Т' => 'T',
            'Х' => 'X',
            other => other,
        })
        .collect()
}
