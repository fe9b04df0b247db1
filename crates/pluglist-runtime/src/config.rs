use crate::attribution::ReporterConfig;
use crate::{Error, Result};
use pluglist_types::{Environment, SiteRef};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PLUGLIST_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.pluglist (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PLUGLIST_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("pluglist"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pluglist"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_id")]
    pub site_id: u64,
    #[serde(default = "default_username")]
    pub username: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_id: default_site_id(),
            username: default_username(),
        }
    }
}

impl SiteConfig {
    pub fn site_ref(&self) -> SiteRef {
        SiteRef::new(self.site_id, self.username.clone())
    }
}

fn default_site_id() -> u64 {
    1
}

fn default_username() -> String {
    "admin".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionConfig {
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    #[serde(default)]
    pub environment: Environment,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            retry_delay_secs: default_retry_delay_secs(),
            environment: Environment::default(),
        }
    }
}

fn default_retry_delay_secs() -> u64 {
    5
}

impl AttributionConfig {
    /// Reporter settings, with PLUGLIST_ENVIRONMENT taking precedence over the file
    pub fn reporter_config(&self) -> Result<ReporterConfig> {
        let environment = match std::env::var("PLUGLIST_ENVIRONMENT") {
            Ok(value) => parse_environment(&value)?,
            Err(_) => self.environment,
        };

        Ok(ReporterConfig {
            environment,
            retry_delay: Duration::from_secs(self.retry_delay_secs),
        })
    }
}

fn parse_environment(value: &str) -> Result<Environment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "production" => Ok(Environment::Production),
        "simulator" => Ok(Environment::Simulator),
        other => Err(Error::Config(format!(
            "Unknown environment '{}': expected 'production' or 'simulator'",
            other
        ))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub attribution: AttributionConfig,
}

impl Config {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
