mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{AttributionCommand, Cli, Commands, PluginsCommand};
pub use commands::run;
