use thiserror::Error;

/// Global error type for the platform core.
///
/// Every variant is recoverable: callers turn these into user-visible
/// messages or safe fallback values, never into a crash.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// Login rejected (empty username or password).
    #[error("Invalid credentials")]
    Auth,

    /// A submitted field failed format validation.
    #[error("{0}")]
    Validation(String),

    /// Lookup by id found nothing.
    #[error("{0} not found")]
    NotFound(String),

    /// An external collaborator (AI assistant) failed or timed out.
    #[error("Upstream service unavailable: {0}")]
    Upstream(String),
}

impl PlatformError {
    /// Stable machine-readable tag, used by telemetry and the HTTP
    /// layer's error mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            PlatformError::Auth => "auth_error",
            PlatformError::Validation(_) => "validation_error",
            PlatformError::NotFound(_) => "not_found",
            PlatformError::Upstream(_) => "upstream_unavailable",
        }
    }
}

/// A specialized Result type for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
