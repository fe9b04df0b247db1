//! Plugin list screen.
//!
//! Keeps a [`TableWidget`] consistent with a [`PluginListViewModel`]:
//! - `Replace` reloads every row
//! - `Selective` reloads exactly the listed rows of section 0, without animation
//! - the empty-state panel tracks the view-model on every change
//!
//! All calls happen on the UI thread and complete before returning.

use pluglist_runtime::{PluginListViewModel, Receipt};
use pluglist_types::{
    Cell, IndexPath, NoResults, Plugin, RowAction, RowAnimation, SitePluginCapabilities,
    StateChange, TableModel, TableWidget,
};
use tracing::{debug, warn};

/// Where selections lead
pub trait PluginNavigator {
    fn present(&mut self, plugin: &Plugin, capabilities: SitePluginCapabilities);
    fn show_support(&mut self);
}

/// Navigator that records the last destination as a status line
#[derive(Debug, Default)]
pub struct StatusNavigator {
    status: Option<String>,
}

impl StatusNavigator {
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl PluginNavigator for StatusNavigator {
    fn present(&mut self, plugin: &Plugin, capabilities: SitePluginCapabilities) {
        let version = plugin.version.as_deref().unwrap_or("unknown version");
        let access = if capabilities.modify_files {
            "can modify"
        } else {
            "read only"
        };
        self.status = Some(format!("{} {} ({})", plugin.name, version, access));
    }

    fn show_support(&mut self) {
        self.status = Some("Contact support at https://wordpress.com/help".to_string());
    }
}

pub struct PluginListScreen<W, N> {
    view_model: PluginListViewModel,
    table: TableModel,
    widget: W,
    navigator: N,
    receipt: Option<Receipt>,
}

impl<W: TableWidget, N: PluginNavigator> PluginListScreen<W, N> {
    pub fn new(view_model: PluginListViewModel, widget: W, navigator: N) -> Self {
        Self {
            view_model,
            table: TableModel::empty(),
            widget,
            navigator,
            receipt: None,
        }
    }

    /// Screen shown: subscribe to the store and draw everything
    pub fn load(&mut self) {
        self.receipt = Some(self.view_model.subscribe());
        self.view_model.refresh();
        self.on_state_change(StateChange::Replace);
    }

    /// Screen torn down: stop receiving changes
    pub fn unload(&mut self) {
        self.receipt = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.receipt.is_some()
    }

    /// Apply every change the store reported since the last call. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while self.receipt.as_ref().is_some_and(Receipt::try_next) {
            if let Some(change) = self.view_model.refresh() {
                self.on_state_change(change);
                applied += 1;
            }
        }
        applied
    }

    pub fn on_state_change(&mut self, change: StateChange) {
        self.table = self.view_model.table_view_model();
        self.update_no_results();

        match change {
            StateChange::Replace => {
                debug!(rows = self.total_rows(), "reloading all rows");
                self.widget.reload_all();
            }
            StateChange::Selective(rows) => {
                if self.table.is_empty() {
                    return;
                }
                let paths: Vec<IndexPath> = rows.into_iter().map(IndexPath::row).collect();
                debug!(?paths, "reloading rows");
                self.widget.reload_rows(&paths, RowAnimation::None);
            }
        }
    }

    fn update_no_results(&mut self) {
        let panel = self
            .view_model
            .no_results()
            .or_else(|| self.table.is_empty().then(NoResults::empty));

        match panel {
            Some(panel) => self.widget.show_empty_state(&panel),
            None => self.widget.hide_empty_state(),
        }
    }

    pub fn number_of_sections(&self) -> usize {
        self.table.section_count()
    }

    pub fn number_of_rows(&self, section: usize) -> usize {
        self.table.row_count(section)
    }

    /// Every row address in display order
    pub fn index_paths(&self) -> Vec<IndexPath> {
        self.table
            .sections
            .iter()
            .enumerate()
            .flat_map(|(section, s)| (0..s.rows.len()).map(move |row| IndexPath::new(section, row)))
            .collect()
    }

    /// Resolve the row at `path` into a configured cell. Panics if `path` is out of range.
    pub fn cell_for(&mut self, path: IndexPath) -> Cell {
        let row = self.table.row_at(path);
        let mut cell = self.widget.dequeue_cell(row.reusable_identifier(), path);
        row.configure(&mut cell);
        cell
    }

    /// Run the selected row's action, if it has one. Panics if `path` is out of range.
    pub fn on_select(&mut self, path: IndexPath) {
        let Some(action) = self.table.row_at(path).action() else {
            return;
        };

        match action {
            RowAction::ShowPlugin { slug } => match self.view_model.plugin(&slug) {
                Some((plugin, capabilities)) => self.navigator.present(&plugin, capabilities),
                None => warn!(%slug, "selected plugin is no longer on the site"),
            },
        }
    }

    pub fn on_empty_state_tapped(&mut self) {
        self.navigator.show_support();
    }

    pub fn view_model(&self) -> &PluginListViewModel {
        &self.view_model
    }

    pub fn table(&self) -> &TableModel {
        &self.table
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    fn total_rows(&self) -> usize {
        self.table.sections.iter().map(|s| s.rows.len()).sum()
    }
}
