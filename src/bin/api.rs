use msme_assistant::{api::start_server, config::AppConfig, ChatOrchestrator};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    if config.gemini_api_key.is_none() {
        eprintln!("⚠️  GEMINI_API_KEY not set in .env");
        eprintln!("📌 Chat requests outside the Maharashtra dataset will return a configuration error");
    }

    info!("🚀 MSME Service Assistant - API Server");
    info!("📍 Port: {}", config.port);
    info!("🤖 Model: {}", config.gemini.model);

    let orchestrator = Arc::new(ChatOrchestrator::from_config(&config)?);

    info!("✅ Orchestrator initialized");
    info!("📡 Starting API server...");

    start_server(orchestrator, config.port).await?;

    Ok(())
}
