use clap::Parser;
use std::sync::Arc;

use glumi_tracker::core::ConfigProvider;
use glumi_tracker::utils::{logger, validation::Validate};
use glumi_tracker::{server, HtmlContentExtractor, MentionService, ProfileFetcher, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    logger::init_server_logger(config.verbose, config.log_json);

    tracing::info!("Starting glumi-tracker");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = ProfileFetcher::from_config(&config, HtmlContentExtractor::new())?;
    let service = Arc::new(MentionService::new(fetcher));

    server::run_server(config.listen_addr(), service, config.static_dir()).await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
