use crate::Result;
use pluglist_types::{Plugin, PluginListState, SitePluginCapabilities};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk plugin list for a site (`plugins.json` in the data directory)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginCatalog {
    #[serde(default)]
    pub plugins: Vec<Plugin>,
    #[serde(default)]
    pub capabilities: SitePluginCapabilities,
}

impl PluginCatalog {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("plugins.json")
    }

    /// Missing file loads as an empty catalog
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let catalog: PluginCatalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Rebuild a catalog from store state. Only loaded lists have anything to save.
    pub fn from_state(state: &PluginListState) -> Option<Self> {
        match state {
            PluginListState::Loaded {
                plugins,
                capabilities,
            } => Some(Self {
                plugins: plugins.clone(),
                capabilities: *capabilities,
            }),
            PluginListState::Loading | PluginListState::Failed { .. } => None,
        }
    }
}
