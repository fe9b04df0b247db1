use super::cell::Cell;
use super::index_path::IndexPath;
use crate::no_results::NoResults;

/// How a row reload is presented. Row reloads from list changes are never animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAnimation {
    None,
}

/// On-screen table collaborator.
///
/// Presenters issue commands; the widget owns rendering, scroll position and
/// its cell reuse pool.
pub trait TableWidget {
    /// Discard every rendered row and ask the data source again
    fn reload_all(&mut self);

    /// Redraw exactly the given rows, leaving all others and the scroll position untouched
    fn reload_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    /// Hand out a recycled cell for `identifier`, or a fresh one if the pool is empty
    fn dequeue_cell(&mut self, identifier: &str, path: IndexPath) -> Cell;

    /// Show the empty-state panel, replacing any panel already shown
    fn show_empty_state(&mut self, panel: &NoResults);

    fn hide_empty_state(&mut self);
}
