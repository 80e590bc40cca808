//! Chat-completion transport and the bounded-retry request wrapper.
//!
//! The transport is a trait so the retry layer and the classifier can be
//! exercised against scripted stubs in tests; the production implementation
//! talks to an OpenAI-compatible HTTP endpoint. The retry wrapper is the
//! only place that knows an LLM reply may be garbage: it feeds the raw text
//! through [`crate::extract`] and treats a malformed reply exactly like a
//! failed network call.

pub mod error;
pub mod openai;
pub mod retry;

pub use self::error::ChatError;
pub use self::openai::OpenAiChatClient;
pub use self::retry::RetryingChatClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A role-tagged prompt message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One chat-style request to the LLM backend.
///
/// The model identifier comes from configuration, never from code. When
/// `temperature` is `None` the provider default applies.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A chat-completion backend.
///
/// Implementations surface the assistant's reply text verbatim; decoding it
/// is the caller's concern.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError>;
}
