use crate::prompts::OFFLINE_REPLY;
use crate::{Assistant, AssistantError};
use async_trait::async_trait;
use log::error;

/// Wraps any assistant and absorbs its failures: the caller always gets
/// a reply, never an error. The failure is logged for diagnostics but
/// the user sees the fixed offline message.
pub struct FallbackAssistant<A> {
    inner: A,
}

impl<A: Assistant> FallbackAssistant<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// Sends a chat message, substituting the offline reply on failure.
    pub async fn chat(&mut self, message: &str) -> String {
        self.chat_or(message, OFFLINE_REPLY).await
    }

    /// Like [`chat`](Self::chat) with a caller-chosen fallback, used by
    /// the insight and risk-assessment prompts which have their own
    /// canned unavailability strings.
    pub async fn chat_or(&mut self, message: &str, fallback: &str) -> String {
        match self.inner.send(message).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Assistant upstream failed: {}", e);
                fallback.to_string()
            }
        }
    }
}

#[async_trait]
impl<A: Assistant> Assistant for FallbackAssistant<A> {
    /// Infallible by construction; the `Result` only satisfies the
    /// trait signature.
    async fn send(&mut self, message: &str) -> Result<String, AssistantError> {
        Ok(self.chat(message).await)
    }
}
