use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meshify")]
#[command(author, version, about = "Synchronize Meshify device type channels with CSV files", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the Meshify API and create a CSV of the current channels
    GetChannelCsv {
        device_type_name: String,

        /// Where to put the CSV of channels, defaults to channels_<device_type_name>.csv
        #[arg(short, long)]
        output_file: Option<PathBuf>,
    },

    /// Create the channels of a CSV file for a device type
    PostChannelCsv { device_type_name: String, csv_file: PathBuf },
}
