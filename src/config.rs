//! Environment configuration
//!
//! Values come from the process environment, optionally seeded by a `.env`
//! file (loaded by the binaries through `dotenv`).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AssistantError;
use crate::Result;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ASSISTANT_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Simulated processing time of the local dataset: `base + U[0, jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDelay {
    pub base: Duration,
    pub jitter: Duration,
}

impl LocalDelay {
    pub const NONE: LocalDelay = LocalDelay {
        base: Duration::ZERO,
        jitter: Duration::ZERO,
    };
}

impl Default for LocalDelay {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(1000),
            jitter: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when GEMINI_API_KEY is unset or blank.
    pub gemini_api_key: Option<String>,
    pub gemini: GeminiConfig,
    pub port: u16,
    pub local_delay: LocalDelay,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let gemini = GeminiConfig {
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            timeout: Duration::from_secs(parse_var("GEMINI_TIMEOUT_SECS", 30u64)?),
        };

        let port = match env::var("PORT").or_else(|_| env::var("API_PORT")) {
            Ok(raw) => parse_value("PORT", &raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let local_delay = LocalDelay {
            base: Duration::from_millis(parse_var("LOCAL_CHAT_DELAY_MS", 1000u64)?),
            jitter: Duration::from_millis(parse_var("LOCAL_CHAT_JITTER_MS", 2000u64)?),
        };

        Ok(Self {
            gemini_api_key,
            gemini,
            port,
            local_delay,
        })
    }
}

/// Base URL of a running assistant server, for the terminal client.
pub fn assistant_url() -> String {
    env::var("ASSISTANT_URL").unwrap_or_else(|_| DEFAULT_ASSISTANT_URL.to_string())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| AssistantError::ConfigError(format!("{} has invalid value '{}'", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        let port: u16 = parse_value("PORT", " 9090 ").unwrap();
        assert_eq!(port, 9090);

        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert!(matches!(err, AssistantError::ConfigError(_)));
    }

    #[test]
    fn test_defaults() {
        let gemini = GeminiConfig::default();
        assert_eq!(gemini.model, "gemini-2.0-flash-exp");
        assert_eq!(LocalDelay::default().base, Duration::from_millis(1000));
        assert_eq!(LocalDelay::NONE.jitter, Duration::ZERO);
    }
}
