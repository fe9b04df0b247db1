use serde::{Deserialize, Serialize};

/// A plugin installed on a site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub autoupdate: bool,
    #[serde(default)]
    pub author: Option<String>,
    /// Version string of a pending update, if one is available
    #[serde(default)]
    pub update_available: Option<String>,
}

impl Plugin {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            version: None,
            active: false,
            autoupdate: false,
            author: None,
            update_available: None,
        }
    }

    /// Short human-readable state shown next to the plugin name
    pub fn state_label(&self) -> &'static str {
        match (self.active, self.autoupdate) {
            (true, true) => "Active, Autoupdates on",
            (true, false) => "Active, Autoupdates off",
            (false, true) => "Inactive, Autoupdates on",
            (false, false) => "Inactive, Autoupdates off",
        }
    }
}

/// What the current user may do with plugins on a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SitePluginCapabilities {
    #[serde(default)]
    pub modify_files: bool,
    #[serde(default)]
    pub autoupdate_files: bool,
}

/// Per-site plugin list as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PluginListState {
    Loading,
    Loaded {
        plugins: Vec<Plugin>,
        capabilities: SitePluginCapabilities,
    },
    Failed {
        message: String,
    },
}

impl PluginListState {
    pub fn plugins(&self) -> &[Plugin] {
        match self {
            PluginListState::Loaded { plugins, .. } => plugins,
            PluginListState::Loading | PluginListState::Failed { .. } => &[],
        }
    }

    pub fn capabilities(&self) -> Option<SitePluginCapabilities> {
        match self {
            PluginListState::Loaded { capabilities, .. } => Some(*capabilities),
            PluginListState::Loading | PluginListState::Failed { .. } => None,
        }
    }
}
