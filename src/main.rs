mod main_runtime;

use anyhow::Context;
use clap::Parser;
use nba_stats_api::adapters::{start_api_server, PostgresStore};
use nba_stats_api::api::AppState;
use nba_stats_api::cli::{Cli, Commands};
use nba_stats_api::config::AppConfig;
use nba_stats_api::domain::StatsRepository;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{error, info};

use main_runtime::{init_logging, init_logging_simple, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config_dir)
        .with_context(|| format!("failed to load configuration from {}", cli.config_dir))?;

    match cli.command() {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            init_logging(&config.logging);
            validate(&config)?;
            run_server(config).await
        }
        Commands::Check => {
            init_logging_simple();
            validate(&config)?;
            run_check(&config).await
        }
    }
}

fn validate(config: &AppConfig) -> anyhow::Result<()> {
    if let Err(errors) = config.validate() {
        for e in &errors {
            error!("Invalid configuration: {}", e);
        }
        anyhow::bail!("invalid configuration: {}", errors.join("; "));
    }
    Ok(())
}

async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server.host {}", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    let store = Arc::new(PostgresStore::new(&config.database).await?);
    let state = AppState::new(store.clone(), &config.api);

    let result = start_api_server(state, addr, shutdown_signal()).await;

    // Pool lives exactly as long as the server
    store.close().await;
    info!("Shutdown complete");

    result.map_err(Into::into)
}

async fn run_check(config: &AppConfig) -> anyhow::Result<()> {
    let store = PostgresStore::new(&config.database).await?;
    let outcome = store.ping().await;
    store.close().await;

    match outcome {
        Ok(()) => {
            println!("database: connected");
            Ok(())
        }
        Err(e) => {
            println!("database: disconnected ({e})");
            Err(e.into())
        }
    }
}
