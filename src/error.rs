use thiserror::Error;

/// Failures of a tone rewrite.
///
/// The two variants let the presentation layer tell a setup problem apart
/// from a transient one.
#[derive(Debug, Error)]
pub enum AiError {
    /// No usable service credential; raised before any request is sent.
    #[error("AI service is not configured: {0}")]
    Configuration(String),

    /// The request failed in transport or upstream.
    #[error("failed to process text with AI: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<anyhow::Error> for AiError {
    fn from(err: anyhow::Error) -> Self {
        AiError::Service(err.into())
    }
}

impl AiError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, AiError::Configuration(_))
    }
}

/// Returned when parsing a tool identifier that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool identifier: {0}")]
pub struct UnknownTool(pub String);
