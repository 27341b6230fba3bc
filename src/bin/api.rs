use spendify_advisory::{api::start_server, config::AdvisoryConfig, gateway::AdvisoryGateway};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AdvisoryConfig::from_env();

    if !config.has_provider() {
        eprintln!("⚠️  GEMINI_API_KEY not set in .env");
        eprintln!("📌 Advisory tools will serve local fallback data");
    }

    info!("🚀 Spendify Advisory - API Server");
    info!("📍 Port: {}", config.port);

    let gateway = Arc::new(AdvisoryGateway::from_config(&config));

    info!("✅ Advisory gateway initialized");
    info!("📡 Starting API server...");

    start_server(gateway, config.port).await?;

    Ok(())
}
