//! MSME Service Assistant
//!
//! A chat backend for questions about India's MSME landscape that:
//! - Routes each question to a topic category by keyword
//! - Forwards it to Gemini with a category-specific instruction block
//! - Falls back to a fixed knowledge base when the model is unavailable
//! - Serves Maharashtra questions from a local dataset
//! - Exposes deterministic financial calculators
//!
//! FLOW:
//! INPUT → CLASSIFY → COMPLETE → (FALLBACK ON FAILURE)

pub mod agent;
pub mod api;
pub mod calculators;
pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod icons;
pub mod local_dataset;
pub mod models;
pub mod prompts;
pub mod session;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use agent::ChatOrchestrator;
pub use classifier::CategoryClassifier;
