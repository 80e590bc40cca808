//! Extraction of structured data from free-form LLM replies.
//!
//! A model asked for JSON rarely returns only JSON: the object is usually
//! embedded in an explanation, a code fence, or several competing drafts.
//! This module recovers every balanced JSON object from such text and
//! decodes the first one matching a target shape, reporting the failure
//! modes distinctly so callers can tell an empty reply from prose without
//! JSON from JSON of the wrong shape.
//!
//! # Examples
//!
//! ```rust
//! use helpdesk_classifier::extract::extract_json_objects;
//!
//! let reply = r#"Here you go: {"status": "ok"} and some trailing prose."#;
//! assert_eq!(extract_json_objects(reply), vec![r#"{"status":"ok"}"#]);
//! ```

pub mod error;
pub mod extractors;
pub mod parser;

pub use self::error::ParseError;
pub use self::extractors::extract_json_objects;
pub use self::parser::parse_structured;
