use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "waymark")]
#[command(about = "Build waypoint missions on a terminal map and upload them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and waymark.log [env: WAYMARK_PATH]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive map editor
    Edit {
        /// Snapshot file to load on start
        file: Option<PathBuf>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the waypoint table of a snapshot file
    Show { file: PathBuf },

    /// Upload a snapshot file and wait for the result
    Upload {
        file: PathBuf,

        #[command(flatten)]
        target: TargetArgs,

        /// Override the configured endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Print the mission the receiving service would build from a snapshot
    Plan {
        file: PathBuf,

        /// Operating height (defaults to the configured target height)
        #[arg(long)]
        height: Option<String>,
    },

    /// Write a default config.toml into the data directory
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

/// Upload target fields, sent verbatim with the mission
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Vehicle connection address
    #[arg(long)]
    pub ip: Option<String>,

    /// Vehicle connection port
    #[arg(long)]
    pub port: Option<String>,

    /// Operating height
    #[arg(long)]
    pub height: Option<String>,
}
