use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pluglist")]
#[command(about = "Browse a site's plugins and report install attribution", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $PLUGLIST_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Plugins {
        #[command(subcommand)]
        command: PluginsCommand,
    },

    Attribution {
        #[command(subcommand)]
        command: AttributionCommand,
    },
}

#[derive(Subcommand)]
pub enum PluginsCommand {
    /// Print the plugin list once
    List,

    /// Interactive plugin list
    Watch,
}

#[derive(Subcommand)]
pub enum AttributionCommand {
    /// Request attribution details once and report them
    Run {
        #[arg(
            long,
            help = "Recorded client responses (JSON object or array), replayed one per attempt"
        )]
        response: PathBuf,
    },

    /// Show the persisted attribution flags
    Status,
}
