//! Schema-driven extraction of structured attributes from customer support
//! messages, delegating interpretation to an LLM backend.
//!
//! LLM replies are free text: the JSON they carry may be wrapped in prose or
//! Markdown code fences, required fields may be missing, and whole responses
//! may come back empty. The core of this crate is the reliability layer
//! between that text and a typed result:
//!
//! - [`extract`] scans arbitrary text for balanced JSON objects and decodes
//!   the first candidate that matches a caller-supplied shape.
//! - [`chat`] wraps a chat-completion transport in a bounded retry loop that
//!   treats transport failures and malformed output uniformly.
//! - [`classifier`] validates and normalizes the extracted attributes
//!   against a fixed schema, substitutes placeholders, and optionally
//!   renders a customer-facing follow-up for missing information.
//!
//! The [`http`] module is a thin adapter exposing the classifier over two
//! routes; [`config`] reads the process environment. The system is stateless
//! per request: the only shared data is the read-only attribute schema.

pub mod chat;
pub mod classifier;
pub mod config;
pub mod extract;
pub mod http;
pub mod prompt;

pub use chat::{ChatCompletion, ChatError, ChatMessage, ChatRequest, Role};
pub use chat::{OpenAiChatClient, RetryingChatClient};
pub use classifier::ClassifierService;
pub use extract::{ParseError, extract_json_objects, parse_structured};
