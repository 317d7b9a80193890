//! Chat request orchestrator
//!
//! INPUT → CLASSIFY → (LOCAL DATASET | COMPLETION) → FALLBACK ON FAILURE
//!
//! One attempt per message. Remote failures never reach the caller; they are
//! replaced with fallback text carrying the degraded marker.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::classifier::CategoryClassifier;
use crate::config::AppConfig;
use crate::error::AssistantError;
use crate::fallback::{select_fallback, DEGRADED_MARKER};
use crate::gemini::{CompletionProvider, GeminiClient};
use crate::local_dataset::{self, LocalDataset, LocalResponder, LOCAL_DEGRADED_MARKER};
use crate::models::{Category, ChatReply};
use crate::prompts::compose_prompt;
use crate::Result;

pub struct ChatOrchestrator {
    provider: Option<Arc<dyn CompletionProvider>>,
    local: Arc<dyn LocalResponder>,
}

impl ChatOrchestrator {
    pub fn new(
        provider: Option<Arc<dyn CompletionProvider>>,
        local: Arc<dyn LocalResponder>,
    ) -> Self {
        Self { provider, local }
    }

    /// Build from configuration. Without an API key the orchestrator still
    /// serves the local dataset but reports the AI service as unconfigured.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let provider: Option<Arc<dyn CompletionProvider>> = match &config.gemini_api_key {
            Some(key) => {
                let client = GeminiClient::new(&config.gemini, key.clone())?;
                Some(Arc::new(client) as Arc<dyn CompletionProvider>)
            }
            None => {
                warn!("GEMINI_API_KEY not set; AI chat will report misconfiguration");
                None
            }
        };

        let local = Arc::new(LocalDataset::new(config.local_delay)) as Arc<dyn LocalResponder>;
        Ok(Self::new(provider, local))
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Answer a chat message in the given mode.
    pub async fn respond(&self, message: Option<&str>, mode: Category) -> Result<ChatReply> {
        let text = require_message(message)?;
        let effective = CategoryClassifier::resolve(mode, text);
        info!(mode = %mode, effective = %effective, "Routing chat message");

        if effective == Category::Maharashtra {
            debug!("Routing to Maharashtra dataset");
            return self.respond_local(Some(text)).await;
        }

        let provider = self.provider.as_ref().ok_or_else(|| {
            AssistantError::NotConfigured("GEMINI_API_KEY is not set".to_string())
        })?;

        let prompt = compose_prompt(effective, text);
        match provider.complete(&prompt).await {
            Ok(answer) => Ok(ChatReply::answered(answer, effective)),
            Err(e) if e.is_degradable() => {
                warn!(category = %effective, error = %e, "Completion failed; serving fallback");
                let fallback = select_fallback(Some(effective), text);
                Ok(ChatReply::degraded(fallback.to_string(), DEGRADED_MARKER, effective))
            }
            Err(e) => Err(e),
        }
    }

    /// Answer from the Maharashtra dataset only.
    pub async fn respond_local(&self, message: Option<&str>) -> Result<ChatReply> {
        let text = require_message(message)?;

        match self.local.respond(text).await {
            Ok(answer) => Ok(ChatReply::answered(answer, Category::Maharashtra)),
            Err(e) if e.is_degradable() => {
                warn!(error = %e, "Local model failed; serving degraded message");
                Ok(ChatReply::degraded(
                    local_dataset::degraded_text(text),
                    LOCAL_DEGRADED_MARKER,
                    Category::Maharashtra,
                ))
            }
            Err(e) => Err(e),
        }
    }
}

fn require_message(message: Option<&str>) -> Result<&str> {
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or(AssistantError::MissingMessage)
}
