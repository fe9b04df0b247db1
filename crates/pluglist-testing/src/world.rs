//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Placing plugin catalogs, config files and recorded client responses
//! - Configuring CLI commands to run against that directory

use anyhow::Result;
use assert_cmd::Command;
use pluglist_runtime::{Config, FileSettingsStore, PluginCatalog, RecordedResponse, SettingsStore};
use pluglist_types::AttributionSettings;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::write_responses;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use pluglist_testing::TestWorld;
/// use pluglist_testing::fixtures::sample_catalog;
///
/// let world = TestWorld::new().with_catalog(&sample_catalog());
/// let mut cmd = world.command_from_path("target/debug/pluglist");
/// cmd.args(["plugins", "list"]).assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".pluglist");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.pluglist).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `plugins.json` into the data directory.
    pub fn with_catalog(self, catalog: &PluginCatalog) -> Self {
        catalog
            .save_to(&PluginCatalog::path_in(&self.data_dir))
            .expect("Failed to write plugin catalog");
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, config: &Config) -> Self {
        config
            .save_to(&Config::path_in(&self.data_dir))
            .expect("Failed to write config");
        self
    }

    /// Pre-seed the persisted attribution flags.
    pub fn with_settings(self, settings: AttributionSettings) -> Self {
        FileSettingsStore::in_dir(&self.data_dir)
            .save(&settings)
            .expect("Failed to write attribution settings");
        self
    }

    /// Write a recorded client response file and return its path.
    pub fn write_responses(&self, name: &str, responses: &[RecordedResponse]) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        write_responses(&path, responses)?;
        Ok(path)
    }

    /// Attribution flags as currently persisted.
    pub fn settings(&self) -> Result<AttributionSettings> {
        Ok(FileSettingsStore::in_dir(&self.data_dir).load()?)
    }

    /// Events written by the CLI's reporting sink, one JSON value per line.
    pub fn events(&self) -> Result<Vec<serde_json::Value>> {
        let path = self.data_dir.join("events.jsonl");
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(path)?;
        let events = content
            .lines()
            .map(serde_json::from_str)
            .collect::<std::result::Result<_, _>>()?;
        Ok(events)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("pluglist")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("PLUGLIST_ENVIRONMENT");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Create a CLI command configured for this test environment.
    #[doc(hidden)]
    pub fn command_from_path(&self, bin_path: impl AsRef<std::ffi::OsStr>) -> Command {
        let mut cmd = Command::new(bin_path);
        self.configure_command(&mut cmd);
        cmd
    }
}
