//! HTTP client for a running assistant server
//!
//! Used by the terminal chat. When the server cannot be reached, or answers
//! without any response text, a small offline table answers instead.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{error, warn};

use crate::error::AssistantError;
use crate::models::Category;
use crate::session::PendingRequest;
use crate::Result;

const OFFLINE_TABLE: &[(&str, &str)] = &[
    ("registration", "**MSME Registration**: Visit udyamregistration.gov.in with your Aadhaar number and business details. The process is free and typically takes 10-15 minutes. This provides access to collateral-free loans up to ₹2 crores."),
    ("loan", "**MSME Financing** options include MUDRA loans (up to ₹10 lakhs without collateral), Stand-Up India (₹10 lakhs to ₹1 crore), and CGTMSE (up to ₹2 crores with government guarantee). Visit your nearest bank with Udyam certificate."),
    ("gst", "**GST for MSMEs**: Businesses under ₹40 lakhs are exempt. Between ₹40 lakhs to ₹1.5 crores, you can opt for Composition Scheme at 1-6% rate with quarterly returns."),
    ("subsidy", "**Government Subsidies** include technology upgradation subsidy (up to 15%, max ₹15 lakhs), export promotion assistance, cluster development funding, and sector-specific incentives."),
    ("compliance", "**MSME Compliance Benefits**: Exemptions from various labor laws, simplified environmental clearances, reduced documentation requirements, and protection under MSMED Act for delayed payments."),
    ("help", "I can help with MSME registration, financing, compliance, subsidies, and business growth strategies. Ask me specific questions for detailed guidance."),
];

const OFFLINE_DEFAULT: &str = "I'm currently experiencing technical difficulties, but I'm still here to help! For immediate assistance, please visit the official MSME Ministry website at msme.gov.in or contact your nearest District Industries Centre (DIC).";

/// Answer used when the server is unreachable.
pub fn offline_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    OFFLINE_TABLE
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(OFFLINE_DEFAULT)
}

/// Loose view of a chat endpoint body; error bodies may lack `response`.
#[derive(Debug, Deserialize)]
struct ChatBody {
    response: Option<String>,
    error: Option<String>,
}

pub struct AssistantClient {
    client: Client,
    chat_url: String,
}

impl AssistantClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            chat_url: format!("{}/api/chat", base_url.trim_end_matches('/')),
        })
    }

    /// Send one request. Never fails: transport problems become offline text.
    pub async fn ask(&self, ticket: &PendingRequest) -> String {
        match self.post(&ticket.message, ticket.category).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error calling chat API: {}", e);
                offline_reply(&ticket.message).to_string()
            }
        }
    }

    async fn post(&self, message: &str, category: Category) -> Result<String> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(&json!({ "message": message, "model": category }))
            .send()
            .await?;

        let status = response.status();
        let body: ChatBody = response.json().await?;

        if let Some(err) = &body.error {
            warn!(%status, "API returned error: {}", err);
        }

        body.response.ok_or_else(|| {
            AssistantError::LlmError(
                body.error
                    .unwrap_or_else(|| format!("Failed to get response ({})", status)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_reply_keywords() {
        assert!(offline_reply("GST slabs?").starts_with("**GST for MSMEs**"));
        assert!(offline_reply("need a loan").starts_with("**MSME Financing**"));
        assert_eq!(offline_reply("weather today"), OFFLINE_DEFAULT);
    }

    #[test]
    fn test_chat_url() {
        let client = AssistantClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.chat_url, "http://localhost:8080/api/chat");
    }

    #[tokio::test]
    async fn test_unreachable_server_answers_offline() {
        // Port 9 (discard) is not expected to run an HTTP server.
        let client = AssistantClient::new("http://127.0.0.1:9").unwrap();
        let ticket = PendingRequest {
            generation: 1,
            message: "subsidy for machines".into(),
            category: Category::Schemes,
        };
        let reply = client.ask(&ticket).await;
        assert!(reply.starts_with("**Government Subsidies**"));
    }
}
