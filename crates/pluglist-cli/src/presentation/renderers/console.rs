//! Non-interactive table widget.
//!
//! Keeps only the empty-state panel a presenter asks for. Rows are resolved
//! once after loading and printed to stdout as text or JSON, so reloads have
//! nothing to redraw and no cell is ever recycled.

use crate::types::OutputFormat;
use anyhow::Result;
use pluglist_types::{Cell, IndexPath, NoResults, RowAnimation, TableWidget};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Default)]
pub struct ConsoleTable {
    panel: Option<NoResults>,
}

impl ConsoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> Option<&NoResults> {
        self.panel.as_ref()
    }
}

impl TableWidget for ConsoleTable {
    fn reload_all(&mut self) {}

    fn reload_rows(&mut self, _paths: &[IndexPath], _animation: RowAnimation) {}

    fn dequeue_cell(&mut self, identifier: &str, _path: IndexPath) -> Cell {
        Cell::new(identifier)
    }

    fn show_empty_state(&mut self, panel: &NoResults) {
        self.panel = Some(panel.clone());
    }

    fn hide_empty_state(&mut self) {
        self.panel = None;
    }
}

/// Print a view model in the requested format
pub fn print<T: Serialize + Display>(view: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => print!("{}", view),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
    }
    Ok(())
}
