//! In-memory collaborators that record what they were asked to do.

use pluglist_runtime::{ReportingSink, SettingsStore};
use pluglist_types::{AttributionSettings, Cell, IndexPath, NoResults, RowAnimation, TableWidget};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Command received by a [`RecordingTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    ReloadAll,
    ReloadRows(Vec<IndexPath>, RowAnimation),
    ShowEmptyState(NoResults),
    HideEmptyState,
}

/// Table widget that records commands and keeps a reuse pool like a real one
#[derive(Debug, Default)]
pub struct RecordingTable {
    commands: Vec<TableCommand>,
    pool: HashMap<String, Vec<Cell>>,
    panel: Option<NoResults>,
    dequeued: usize,
    allocated: usize,
}

impl RecordingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[TableCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<TableCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn reload_all_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, TableCommand::ReloadAll))
            .count()
    }

    /// Empty-state panel currently on screen
    pub fn panel(&self) -> Option<&NoResults> {
        self.panel.as_ref()
    }

    /// Return a cell to the reuse pool, as a widget does when a row scrolls off screen
    pub fn recycle(&mut self, cell: Cell) {
        self.pool.entry(cell.identifier.clone()).or_default().push(cell);
    }

    pub fn dequeued(&self) -> usize {
        self.dequeued
    }

    /// Cells created because the pool was empty
    pub fn allocated(&self) -> usize {
        self.allocated
    }
}

impl TableWidget for RecordingTable {
    fn reload_all(&mut self) {
        self.commands.push(TableCommand::ReloadAll);
    }

    fn reload_rows(&mut self, paths: &[IndexPath], animation: RowAnimation) {
        self.commands
            .push(TableCommand::ReloadRows(paths.to_vec(), animation));
    }

    fn dequeue_cell(&mut self, identifier: &str, _path: IndexPath) -> Cell {
        self.dequeued += 1;
        match self.pool.get_mut(identifier).and_then(Vec::pop) {
            Some(cell) => cell,
            None => {
                self.allocated += 1;
                Cell::new(identifier)
            }
        }
    }

    fn show_empty_state(&mut self, panel: &NoResults) {
        self.panel = Some(panel.clone());
        self.commands.push(TableCommand::ShowEmptyState(panel.clone()));
    }

    fn hide_empty_state(&mut self) {
        self.panel = None;
        self.commands.push(TableCommand::HideEmptyState);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEvent {
    pub name: String,
    pub properties: BTreeMap<String, String>,
}

/// Reporting sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<TrackedEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ReportingSink for MemorySink {
    fn track(&self, event: &str, properties: &BTreeMap<String, String>) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(TrackedEvent {
                name: event.to_string(),
                properties: properties.clone(),
            });
    }
}

/// Settings store kept in memory, counting writes
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<AttributionSettings>,
    saves: AtomicUsize,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(settings: AttributionSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn current(&self) -> AttributionSettings {
        *self.settings.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> pluglist_runtime::Result<AttributionSettings> {
        Ok(self.current())
    }

    fn save(&self, settings: &AttributionSettings) -> pluglist_runtime::Result<()> {
        *self.settings.lock().unwrap_or_else(|e| e.into_inner()) = *settings;
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
