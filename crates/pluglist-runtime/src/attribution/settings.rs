use crate::{Error, Result};
use pluglist_types::AttributionSettings;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Durable storage for the attribution flags
pub trait SettingsStore {
    fn load(&self) -> Result<AttributionSettings>;
    fn save(&self, settings: &AttributionSettings) -> Result<()>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn load(&self) -> Result<AttributionSettings> {
        (**self).load()
    }

    fn save(&self, settings: &AttributionSettings) -> Result<()> {
        (**self).save(settings)
    }
}

/// Settings kept in a TOML file (`attribution.toml` in the data directory)
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("attribution.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<AttributionSettings> {
        if !self.path.exists() {
            return Ok(AttributionSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Settings(format!("failed to read {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, settings: &AttributionSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string(settings)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
