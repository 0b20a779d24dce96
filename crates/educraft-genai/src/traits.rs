//! Trait definitions for content generators.

use async_trait::async_trait;

use educraft_core::{ContentError, GeneratedContent, SchoolConfig};

/// Errors that can occur while generating content.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("No API key configured for the content provider")]
    MissingCredential,

    #[error("Request to content provider failed: {0}")]
    Transport(String),

    #[error("Content provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Content provider returned an empty payload")]
    EmptyResponse,

    #[error(transparent)]
    Schema(ContentError),
}

impl GenerationError {
    /// Coarse category used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::MissingCredential => "configuration",
            GenerationError::Transport(_) | GenerationError::Provider { .. } => "transport",
            GenerationError::EmptyResponse | GenerationError::Schema(_) => "schema",
        }
    }
}

impl From<ContentError> for GenerationError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Empty => GenerationError::EmptyResponse,
            other => GenerationError::Schema(other),
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Transport(err.to_string())
    }
}

/// A provider that turns a school configuration into site content.
///
/// Implementations make exactly one attempt per call; retrying is up to
/// the user.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Generate content for `config`.
    async fn generate(&self, config: &SchoolConfig) -> Result<GeneratedContent, GenerationError>;
}
