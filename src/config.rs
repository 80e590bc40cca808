//! Process configuration from the environment.

use crate::chat::openai::DEFAULT_BASE_URL;
use std::env;

/// Runtime configuration of the classifier service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Model identifier passed with every chat request.
    pub model: String,
    /// API key for the chat-completion endpoint.
    pub api_key: String,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Address the HTTP adapter binds to.
    pub bind_addr: String,
}

#[derive(Debug, thiserror::Error)]
#[error("environment variable {0} is not set")]
pub struct MissingEnv(&'static str);

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `LLM_MODEL_BASE` and `OPENAI_API_KEY` are required; the endpoint and
    /// bind address fall back to defaults.
    pub fn from_env() -> Result<Self, MissingEnv> {
        Ok(Self {
            model: require("LLM_MODEL_BASE")?,
            api_key: require("OPENAI_API_KEY")?,
            base_url: env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }
}

fn require(key: &'static str) -> Result<String, MissingEnv> {
    env::var(key).map_err(|_| MissingEnv(key))
}
