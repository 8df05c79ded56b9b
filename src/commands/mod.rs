mod export;
mod import;

pub use export::export_channels;
pub use import::import_channels;

use crate::cli::{Cli, Commands};
use crate::meshify::MeshifyClient;
use std::error::Error;
use tracing::warn;

pub async fn handle_command(client: &MeshifyClient, cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::GetChannelCsv {
            device_type_name,
            output_file,
        } => {
            export_channels(client, &device_type_name, output_file).await?;
        }
        Commands::PostChannelCsv { device_type_name, csv_file } => {
            let report = import_channels(client, &device_type_name, &csv_file).await?;
            if !report.failed.is_empty() {
                warn!("⚠️ {} channels were not created: {}", report.failed.len(), report.failed.join(", "));
            }
        }
    }
    Ok(())
}
