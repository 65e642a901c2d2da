//! Minimal client for the Gemini generateContent REST API.

use crate::error::AssistantError;
use crate::prompts::{PRIMER_ACK, SYSTEM_PRIMER};
use crate::Assistant;
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn new(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: &'a [Content],
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Stateful chat client. Keeps the full turn history in memory and
/// replays it on every request, primed with the platform instruction.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    history: Vec<Content>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let history = vec![
            Content::new("user", SYSTEM_PRIMER),
            Content::new("model", PRIMER_ACK),
        ];
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            history,
        }
    }

    async fn generate(&self, contents: &[Content]) -> Result<String, AssistantError> {
        if self.api_key.is_empty() {
            return Err(AssistantError::MissingApiKey);
        }

        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest { contents })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response.json().await?;
        let reply = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                AssistantError::MalformedResponse("no candidate text in response".to_string())
            })?;

        Ok(reply)
    }

}

#[async_trait]
impl Assistant for GeminiClient {
    async fn send(&mut self, message: &str) -> Result<String, AssistantError> {
        self.history.push(Content::new("user", message));
        debug!("Assistant request, history depth {}", self.history.len());

        match self.generate(&self.history).await {
            Ok(reply) => {
                self.history.push(Content::new("model", reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                // Drop the unanswered turn so a retry does not stack
                // duplicate user messages.
                self.history.pop();
                Err(e)
            }
        }
    }
}
