//! Bounded-retry wrapper over a chat transport.

use super::{ChatCompletion, ChatError, ChatRequest};
use crate::extract::parse_structured;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

/// Attempt budget for one structured request.
pub const MAX_ATTEMPTS: u32 = 5;

/// Fixed delay between consecutive attempts. No backoff, no jitter.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Decorator that retries a chat request until its reply decodes into the
/// requested shape.
///
/// Transport failures and malformed replies are treated uniformly: every
/// failed attempt is logged with its index and retried after a fixed delay.
/// Attempts are strictly sequential so a single request never multiplies
/// billed calls, and nothing is cached between attempts: each one issues a
/// fresh, independent request. A permanent failure (for example a
/// misconfigured model name) therefore still consumes the whole attempt
/// budget before surfacing.
pub struct RetryingChatClient<T> {
    transport: T,
    max_attempts: u32,
    retry_delay: Duration,
}

impl<T: ChatCompletion> RetryingChatClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_attempts: MAX_ATTEMPTS,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Overrides the attempt budget and pacing.
    pub fn with_retry_policy(mut self, max_attempts: u32, retry_delay: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.retry_delay = retry_delay;
        self
    }

    /// The wrapped transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `request` and decodes the reply into `O`, retrying any failure.
    ///
    /// Exhausting the budget yields [`ChatError::RetriesExhausted`], never a
    /// degraded result.
    pub async fn request_structured<O: DeserializeOwned>(
        &self,
        request: &ChatRequest,
    ) -> Result<O, ChatError> {
        for attempt in 1..=self.max_attempts {
            match self.attempt(request).await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "request to LLM attempt failed"
                    );
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(ChatError::RetriesExhausted {
            attempts: self.max_attempts,
        })
    }

    async fn attempt<O: DeserializeOwned>(&self, request: &ChatRequest) -> Result<O, ChatError> {
        let reply = self.transport.complete(request).await?;
        Ok(parse_structured(&reply)?)
    }
}
