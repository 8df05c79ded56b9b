use crate::app_config::AppConfig;
use crate::cli::Cli;
use crate::meshify::MeshifyClient;
use clap::Parser;
use tracing::{debug, info};

mod app_config;
mod cli;
mod codec;
mod commands;
mod credentials;
mod domain;
mod meshify;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.debug { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    debug!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    let credentials = credentials::resolve(config.meshify())?;
    let client = MeshifyClient::new(&config, credentials)?;
    info!("🔗 Using Meshify at {}", config.meshify().url());

    commands::handle_command(&client, cli).await
}
