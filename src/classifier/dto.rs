//! Outward request and response bodies for the web layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inbound classification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    pub text: String,
    /// When set, an invalid classification also carries a customer-facing
    /// reply listing the missing information.
    #[serde(default)]
    pub generate_answer: bool,
}

/// Attribute name → display title, for building client-side forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaResponse {
    pub attribute_labels: BTreeMap<String, String>,
}

/// One extracted attribute in the outward result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributePair {
    pub name: String,
    pub value: String,
}

/// Outward classification result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedMessage {
    /// True iff every declared attribute was extracted.
    pub valid: bool,
    /// Attributes that were present, in schema order, values trimmed.
    pub attributes: Vec<AttributePair>,
    /// Declared attributes the model could not extract, in schema order.
    pub missing_attributes: Vec<String>,
    /// Every non-empty extracted value, declared or not.
    pub keywords: Vec<String>,
    /// Customer-facing follow-up, present when requested and invalid.
    pub answer: Option<String>,
}
