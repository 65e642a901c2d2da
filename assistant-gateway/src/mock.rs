use crate::error::AssistantError;
use crate::Assistant;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Scripted assistant for tests and offline demo runs. Pops replies in
/// order; once the script runs out it fails like a dead upstream.
pub struct ScriptedAssistant {
    replies: VecDeque<Result<String, AssistantError>>,
}

impl ScriptedAssistant {
    pub fn new() -> Self {
        Self {
            replies: VecDeque::new(),
        }
    }

    pub fn reply(mut self, text: impl Into<String>) -> Self {
        self.replies.push_back(Ok(text.into()));
        self
    }

    pub fn failure(mut self, status: u16) -> Self {
        self.replies.push_back(Err(AssistantError::Status(status)));
        self
    }
}

impl Default for ScriptedAssistant {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Assistant for ScriptedAssistant {
    async fn send(&mut self, _message: &str) -> Result<String, AssistantError> {
        self.replies.pop_front().unwrap_or_else(|| {
            Err(AssistantError::MalformedResponse(
                "script exhausted".to_string(),
            ))
        })
    }
}
