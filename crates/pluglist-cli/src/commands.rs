use super::args::{AttributionCommand, Cli, Commands, PluginsCommand};
use super::handlers;
use crate::logging;
use anyhow::{Context, Result};
use pluglist_runtime::{Config, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&data_dir);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let log_file = match &cli.command {
        Commands::Plugins {
            command: PluginsCommand::Watch,
        } => Some(data_dir.join("pluglist.log")),
        _ => None,
    };
    logging::init(cli.log_level, log_file.as_deref())?;

    match cli.command {
        Commands::Plugins { command } => match command {
            PluginsCommand::List => handlers::plugins::list(&data_dir, &config, cli.format),
            PluginsCommand::Watch => handlers::plugins::watch(&data_dir, &config),
        },

        Commands::Attribution { command } => match command {
            AttributionCommand::Run { response } => {
                handlers::attribution::run(&data_dir, &config, &response, cli.format)
            }
            AttributionCommand::Status => handlers::attribution::status(&data_dir, cli.format),
        },
    }
}
