//! Gateway to the generative-AI assistant.
//!
//! The platform consumes the assistant through one narrow contract:
//! `send(message) -> text`. This crate provides the trait, a Gemini
//! REST client, a scripted mock for tests and offline demos, and a
//! fallback wrapper that turns any upstream failure into the fixed
//! offline reply instead of surfacing an error.

pub mod error;
pub mod fallback;
pub mod gemini;
pub mod mock;
pub mod prompts;

pub use error::AssistantError;
pub use fallback::FallbackAssistant;
pub use gemini::GeminiClient;
pub use mock::ScriptedAssistant;

use async_trait::async_trait;

/// The chat collaborator contract. One request, one reply; no retry,
/// cancellation or ordering logic is layered on top.
#[async_trait]
pub trait Assistant: Send {
    async fn send(&mut self, message: &str) -> Result<String, AssistantError>;
}

#[async_trait]
impl Assistant for Box<dyn Assistant> {
    async fn send(&mut self, message: &str) -> Result<String, AssistantError> {
        (**self).send(message).await
    }
}
