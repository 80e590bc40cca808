//! Transport for OpenAI-compatible chat-completion endpoints.

use super::{ChatCompletion, ChatError, ChatRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Public OpenAI endpoint; overridable for compatible providers.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for any endpoint speaking the OpenAI `/chat/completions` dialect.
///
/// The client holds no retry bookkeeping; concurrent requests share nothing
/// beyond reqwest's connection pool.
#[derive(Clone)]
pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl ChatCompletion for OpenAiChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| ChatError::Transport(format!("chat request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Transport(format!(
                "chat endpoint returned {status}: {body}"
            )));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            ChatError::Transport(format!("malformed completion envelope: {err}"))
        })?;

        // A missing choice or null content becomes an empty reply, which the
        // parse layer reports as ParseError::EmptyResponse.
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
