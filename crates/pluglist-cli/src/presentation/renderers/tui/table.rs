use std::collections::{BTreeSet, HashMap};

use pluglist_types::{Cell, IndexPath, NoResults, RowAnimation, TableWidget};
use ratatui::widgets::TableState;

/// Rows the presenter has marked stale since the last sync
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingReload {
    #[default]
    None,
    All,
    Rows(BTreeSet<IndexPath>),
}

#[derive(Debug, Default)]
pub struct TuiTable {
    cells: Vec<(IndexPath, Cell)>,
    pool: HashMap<String, Vec<Cell>>,
    pending: PendingReload,
    panel: Option<NoResults>,
    state: TableState,
}

impl TuiTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_pending(&mut self) -> PendingReload {
        std::mem::take(&mut self.pending)
    }

    pub fn cells(&self) -> &[(IndexPath, Cell)] {
        &self.cells
    }

    pub fn panel(&self) -> Option<&NoResults> {
        self.panel.as_ref()
    }

    /// Move every on-screen cell back into the reuse pool
    pub fn recycle_visible(&mut self) {
        for (_, cell) in self.cells.drain(..) {
            self.pool.entry(cell.identifier.clone()).or_default().push(cell);
        }
    }

    /// Replace all rows after a full reload, keeping the selection in range
    pub fn install_all(&mut self, cells: Vec<(IndexPath, Cell)>) {
        self.recycle_visible();
        self.cells = cells;
        match self.state.selected() {
            _ if self.cells.is_empty() => self.state.select(None),
            Some(index) if index >= self.cells.len() => {
                self.state.select(Some(self.cells.len() - 1))
            }
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// Swap in a fresh cell for one row. Paths not on screen are ignored.
    pub fn install(&mut self, path: IndexPath, cell: Cell) {
        if let Some((_, slot)) = self.cells.iter_mut().find(|(p, _)| *p == path) {
            let old = std::mem::replace(slot, cell);
            self.pool.entry(old.identifier.clone()).or_default().push(old);
        }
    }

    pub fn selected(&self) -> Option<IndexPath> {
        let index = self.state.selected()?;
        self.cells.get(index).map(|(path, _)| *path)
    }

    pub fn select_next(&mut self) {
        if self.cells.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(index) => (index + 1).min(self.cells.len() - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.cells.is_empty() {
            return;
        }
        let previous = self
            .state
            .selected()
            .map_or(0, |index| index.saturating_sub(1));
        self.state.select(Some(previous));
    }

    pub(super) fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }
}

impl TableWidget for TuiTable {
    fn reload_all(&mut self) {
        self.pending = PendingReload::All;
    }

    fn reload_rows(&mut self, paths: &[IndexPath], _animation: RowAnimation) {
        match &mut self.pending {
            PendingReload::All => {}
            PendingReload::Rows(rows) => rows.extend(paths.iter().copied()),
            PendingReload::None => {
                self.pending = PendingReload::Rows(paths.iter().copied().collect());
            }
        }
    }

    fn dequeue_cell(&mut self, identifier: &str, _path: IndexPath) -> Cell {
        self.pool
            .get_mut(identifier)
            .and_then(Vec::pop)
            .unwrap_or_else(|| Cell::new(identifier))
    }

    fn show_empty_state(&mut self, panel: &NoResults) {
        self.panel = Some(panel.clone());
    }

    fn hide_empty_state(&mut self) {
        self.panel = None;
    }
}
