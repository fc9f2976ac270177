use clap::Parser;
use search_loadgen::core::{run_ticks, SearchSession};
use search_loadgen::utils::{logger, validation::Validate};
use search_loadgen::ProbeConfig;

#[tokio::main]
async fn main() {
    let config = ProbeConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting search-probe");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let mut session = match SearchSession::new(&config.host) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    if !config.no_health_check {
        match session.health_check().await {
            Ok(health) => {
                tracing::info!(
                    "✅ Service is up: {} ({} products, {} checks per search)",
                    health.message.as_deref().unwrap_or("no banner"),
                    health
                        .num_products
                        .map_or_else(|| "?".to_string(), |v| v.to_string()),
                    health
                        .checks_per_search
                        .map_or_else(|| "?".to_string(), |v| v.to_string()),
                );
            }
            Err(e) => {
                tracing::error!("❌ Health check failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    tracing::info!(
        "🔄 Issuing {} search requests against {}",
        config.requests,
        config.host
    );
    run_ticks(&mut session, config.requests).await;
    tracing::info!("✅ Probe finished");
}
