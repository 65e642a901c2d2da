use thiserror::Error;

/// Failures from the assistant upstream. All of these are recoverable:
/// callers either propagate to [`FallbackAssistant`](crate::FallbackAssistant)
/// or map to a safe reply themselves.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Transport-level failure (DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// The response body did not contain a candidate reply.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No API key was configured for the live client.
    #[error("No API key configured")]
    MissingApiKey,
}
