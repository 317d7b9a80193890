//! Core data models for the MSME assistant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

//
// ================= Category =================
//

/// Topic tag used to route both instruction prompts and fallback text.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Auto,
    Registration,
    Loans,
    Compliance,
    Schemes,
    Maharashtra,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Auto,
        Category::Registration,
        Category::Loans,
        Category::Compliance,
        Category::Schemes,
        Category::Maharashtra,
    ];

    /// Wire name, as sent by the chat widget.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Auto => "auto",
            Category::Registration => "registration",
            Category::Loans => "loans",
            Category::Compliance => "compliance",
            Category::Schemes => "schemes",
            Category::Maharashtra => "maharashtra",
        }
    }

    /// Parse a wire name. Anything unrecognised is treated as `Auto`.
    pub fn parse(value: &str) -> Category {
        let value = value.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .unwrap_or(Category::Auto)
    }

    /// Human-readable label shown next to auto-detected categories.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Auto => "Auto",
            Category::Registration => "Registration & Setup",
            Category::Loans => "Loans & Finance",
            Category::Compliance => "Compliance & Tax",
            Category::Schemes => "Schemes & Subsidies",
            Category::Maharashtra => "Maharashtra Dataset",
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Category::Auto)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(Category::parse).unwrap_or_default())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//
// ================= Transcript =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub is_user: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    fn new(text: String, is_user: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            is_user,
            created_at: Utc::now(),
        }
    }
}

//
// ================= Wire Types =================
//

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub model: Category,
}

/// Body of `POST /api/local-chat`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocalChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Answer returned by the orchestrator and the chat endpoints.
///
/// `error` carries the degraded-service marker when `response` came from
/// fallback text rather than the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl ChatReply {
    pub fn answered(response: String, category: Category) -> Self {
        Self {
            response,
            error: None,
            category: Some(category),
        }
    }

    pub fn degraded(response: String, marker: &str, category: Category) -> Self {
        Self {
            response,
            error: Some(marker.to_string()),
            category: Some(category),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_unknown_category_is_auto() {
        let parsed: Category = serde_json::from_str("\"gemini-pro\"").unwrap();
        assert_eq!(parsed, Category::Auto);
        assert_eq!(Category::parse("  LOANS "), Category::Loans);
    }

    #[test]
    fn test_chat_request_defaults() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.model, Category::Auto);

        let req: ChatRequest = serde_json::from_str(r#"{"model":null}"#).unwrap();
        assert!(req.message.is_none());
        assert_eq!(req.model, Category::Auto);
    }

    #[test]
    fn test_reply_omits_absent_error() {
        let reply = ChatReply::answered("ok".into(), Category::Loans);
        let json = serde_json::to_value(&reply).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["category"], "loans");
    }
}
