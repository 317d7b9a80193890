//! Error types for the MSME assistant

use thiserror::Error;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

#[derive(Error, Debug)]
pub enum AssistantError {

    // =============================
    // Request Errors
    // =============================

    #[error("Message is required")]
    MissingMessage,

    #[error("API key not configured: {0}")]
    NotConfigured(String),

    // =============================
    // Backend Errors
    // =============================

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Local model error: {0}")]
    LocalModelError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl AssistantError {
    /// Whether the orchestrator may answer this failure with fallback text.
    /// Request and configuration errors are surfaced to the caller instead.
    pub fn is_degradable(&self) -> bool {
        !matches!(
            self,
            AssistantError::MissingMessage
                | AssistantError::NotConfigured(_)
                | AssistantError::ConfigError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degradable_classification() {
        assert!(AssistantError::LlmError("timeout".into()).is_degradable());
        assert!(AssistantError::LocalModelError("boom".into()).is_degradable());
        assert!(!AssistantError::MissingMessage.is_degradable());
        assert!(!AssistantError::NotConfigured("GEMINI_API_KEY".into()).is_degradable());
    }

    #[test]
    fn test_missing_message_display() {
        assert_eq!(AssistantError::MissingMessage.to_string(), "Message is required");
    }

    #[test]
    fn test_backend_error_display() {
        assert_eq!(
            AssistantError::LocalModelError("index unreadable".into()).to_string(),
            "Local model error: index unreadable"
        );
        assert_eq!(
            AssistantError::ConfigError("PORT must be a number".into()).to_string(),
            "Configuration error: PORT must be a number"
        );
        assert!(!AssistantError::ConfigError("PORT".into()).is_degradable());
    }
}
