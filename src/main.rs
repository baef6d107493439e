use anyhow::Context;
use clap::Parser;
use cma_api::domain::ports::ConfigProvider;
use cma_api::utils::{logger, validation::Validate};
use cma_api::{build_data_source, serve, AppState, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // A config file replaces the individual flags.
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    let json_logs = cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs());
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    let config: Box<dyn ProviderConfig> = match file_config {
        Some(config) => {
            tracing::info!(
                "📁 Loaded configuration from {}",
                cli.config.as_deref().unwrap_or_default()
            );
            Box::new(config)
        }
        None => Box::new(cli),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = build_data_source(config.as_ref()).context("failed to build market data source")?;
    let state = AppState::new(source);

    let addr = format!("{}:{}", config.host(), config.port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        "🚀 cma-api v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );

    serve(listener, state, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Configuration that can both drive the server and be validated.
trait ProviderConfig: ConfigProvider + Validate {}

impl<T: ConfigProvider + Validate> ProviderConfig for T {}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
