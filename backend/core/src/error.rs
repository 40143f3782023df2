use thiserror::Error;

/// Top-level error type for the mindtrace runtime.
#[derive(Debug, Error)]
pub enum MindtraceError {
    #[error("AI provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("no API key configured for provider: {0}")]
    MissingApiKey(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
