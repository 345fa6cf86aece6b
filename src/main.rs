use scam_honeypot::api;
use scam_honeypot::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    eprintln!("🍯 Scam Honeypot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Analyze: http://{}/analyze", config.bind_addr());
    eprintln!("   Health:  http://{}/health", config.bind_addr());
    eprintln!("   Empty messages: {:?}\n", config.empty_message_policy);

    api::serve(&config).await?;

    Ok(())
}
