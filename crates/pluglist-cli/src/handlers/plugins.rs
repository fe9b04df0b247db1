use std::path::Path;

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use pluglist_runtime::{Config, PluginCatalog, PluginListViewModel, PluginStore};
use pluglist_types::{SitePluginCapabilities, SiteRef};
use tracing::{info, warn};

use crate::presentation::renderers::console::{self, ConsoleTable};
use crate::presentation::renderers::tui::{self, TuiAction, TuiTable};
use crate::presentation::view_models::PluginListOutput;
use crate::presentation::{PluginListScreen, StatusNavigator};
use crate::types::OutputFormat;

/// Render the plugin list once and exit
pub fn list(data_dir: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let site = config.site.site_ref();
    let store = PluginStore::new();
    load_catalog(&store, &site, &PluginCatalog::path_in(data_dir));

    let view_model = PluginListViewModel::new(site.clone(), store);
    let mut screen =
        PluginListScreen::new(view_model, ConsoleTable::new(), StatusNavigator::default());
    screen.load();

    let cells = screen
        .index_paths()
        .into_iter()
        .map(|path| screen.cell_for(path))
        .collect();

    let output = PluginListOutput {
        site: site.to_string(),
        panel: screen.widget().panel().cloned(),
        cells,
    };
    console::print(&output, format)
}

/// Live plugin list. Edits made on screen are written back to the catalog on exit.
pub fn watch(data_dir: &Path, config: &Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("`plugins watch` needs an interactive terminal; use `plugins list` instead");
    }

    let site = config.site.site_ref();
    let catalog_path = PluginCatalog::path_in(data_dir);
    let store = PluginStore::new();
    store.start_loading(&site);

    let view_model = PluginListViewModel::new(site.clone(), store.clone());
    let mut screen = PluginListScreen::new(view_model, TuiTable::new(), StatusNavigator::default());
    screen.load();
    load_catalog(&store, &site, &catalog_path);

    let title = format!(" Plugins for {} ", site);
    tui::run(&mut screen, &title, |action| match action {
        TuiAction::ToggleActive(slug) => {
            if !can_modify(&store, &site, |caps| caps.modify_files) {
                warn!(%slug, "site does not allow modifying plugins");
                return;
            }
            store.update_plugin(&site, &slug, |plugin| plugin.active = !plugin.active);
        }
        TuiAction::ToggleAutoupdate(slug) => {
            if !can_modify(&store, &site, |caps| caps.autoupdate_files) {
                warn!(%slug, "site does not allow plugin autoupdates");
                return;
            }
            store.update_plugin(&site, &slug, |plugin| {
                plugin.autoupdate = !plugin.autoupdate
            });
        }
        TuiAction::Reload => load_catalog(&store, &site, &catalog_path),
    })?;
    screen.unload();

    if let Some(catalog) = PluginCatalog::from_state(&store.state(&site)) {
        catalog.save_to(&catalog_path)?;
        info!(path = %catalog_path.display(), "saved plugin catalog");
    }
    Ok(())
}

/// Feed the catalog into the store. A catalog that cannot be read puts the list into the failed state.
fn load_catalog(store: &PluginStore, site: &SiteRef, path: &Path) {
    match PluginCatalog::load_from(path) {
        Ok(catalog) => {
            info!(%site, plugins = catalog.plugins.len(), "loaded plugin catalog");
            store.receive_plugins(site, catalog.plugins, catalog.capabilities);
        }
        Err(e) => {
            warn!(%site, path = %path.display(), error = %e, "failed to load plugin catalog");
            store.fail(site, format!("Could not read {}: {}", path.display(), e));
        }
    }
}

fn can_modify<F>(store: &PluginStore, site: &SiteRef, allowed: F) -> bool
where
    F: Fn(SitePluginCapabilities) -> bool,
{
    store.state(site).capabilities().is_some_and(allowed)
}
