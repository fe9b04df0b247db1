use crate::store::{PluginStore, Receipt};
use pluglist_types::{
    NoResults, Plugin, PluginListState, PluginRow, Row, Section, SitePluginCapabilities, SiteRef,
    StateChange, TableModel, TextRow,
};

/// Compute the change between two snapshots of a site's plugin list.
///
/// Returns `None` when nothing visible changed. `Selective` is only produced
/// when both snapshots are loaded with the same plugins in the same order and
/// the same capabilities; any structural difference yields `Replace`.
pub fn diff_states(old: &PluginListState, new: &PluginListState) -> Option<StateChange> {
    match (old, new) {
        (
            PluginListState::Loaded {
                plugins: old_plugins,
                capabilities: old_caps,
            },
            PluginListState::Loaded {
                plugins: new_plugins,
                capabilities: new_caps,
            },
        ) => {
            let same_shape = old_caps == new_caps
                && old_plugins.len() == new_plugins.len()
                && old_plugins
                    .iter()
                    .zip(new_plugins)
                    .all(|(a, b)| a.slug == b.slug);
            if !same_shape {
                return Some(StateChange::Replace);
            }

            let changed: Vec<usize> = old_plugins
                .iter()
                .zip(new_plugins)
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(index, _)| index)
                .collect();

            if changed.is_empty() {
                None
            } else {
                Some(StateChange::selective(changed))
            }
        }
        _ if old == new => None,
        _ => Some(StateChange::Replace),
    }
}

/// View-model backing the plugin list screen for one site
pub struct PluginListViewModel {
    site: SiteRef,
    store: PluginStore,
    snapshot: PluginListState,
}

impl PluginListViewModel {
    pub fn new(site: SiteRef, store: PluginStore) -> Self {
        let snapshot = store.state(&site);
        Self {
            site,
            store,
            snapshot,
        }
    }

    pub fn site(&self) -> &SiteRef {
        &self.site
    }

    pub fn subscribe(&self) -> Receipt {
        self.store.subscribe(&self.site)
    }

    /// Pull the store's current state and report how it differs from the last snapshot
    pub fn refresh(&mut self) -> Option<StateChange> {
        let current = self.store.state(&self.site);
        let change = diff_states(&self.snapshot, &current);
        self.snapshot = current;
        change
    }

    pub fn state(&self) -> &PluginListState {
        &self.snapshot
    }

    /// Section 0 holds one row per plugin in store order. Section 1 describes the
    /// site; it depends only on the site and its capabilities, both of which force
    /// a `Replace` when they change.
    pub fn table_view_model(&self) -> TableModel {
        match &self.snapshot {
            PluginListState::Loaded {
                plugins,
                capabilities,
            } if !plugins.is_empty() => TableModel::new(vec![
                Section::new(
                    plugins
                        .iter()
                        .map(|plugin| Row::Plugin(PluginRow::from(plugin)))
                        .collect(),
                ),
                Section::new(site_rows(&self.site, *capabilities)),
            ]),
            _ => TableModel::empty(),
        }
    }

    pub fn no_results(&self) -> Option<NoResults> {
        match &self.snapshot {
            PluginListState::Loading => Some(NoResults::loading()),
            PluginListState::Failed { message } => Some(NoResults::error(message.clone())),
            PluginListState::Loaded { plugins, .. } if plugins.is_empty() => {
                Some(NoResults::empty())
            }
            PluginListState::Loaded { .. } => None,
        }
    }

    /// Look a plugin up in the store's current state, which may be ahead of the
    /// last snapshot when changes are still queued.
    pub fn plugin(&self, slug: &str) -> Option<(Plugin, SitePluginCapabilities)> {
        let state = self.store.state(&self.site);
        let capabilities = state.capabilities()?;
        state
            .plugins()
            .iter()
            .find(|plugin| plugin.slug == slug)
            .map(|plugin| (plugin.clone(), capabilities))
    }
}

fn site_rows(site: &SiteRef, capabilities: SitePluginCapabilities) -> Vec<Row> {
    let files = if capabilities.modify_files {
        "Can modify"
    } else {
        "Read only"
    };
    let autoupdates = if capabilities.autoupdate_files {
        "Allowed"
    } else {
        "Not allowed"
    };

    vec![
        Row::Text(TextRow::new("Site", Some(site.to_string()))),
        Row::Text(TextRow::new("Plugin files", Some(files.to_string()))),
        Row::Text(TextRow::new("Autoupdates", Some(autoupdates.to_string()))),
    ]
}
