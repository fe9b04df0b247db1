//! # Presentation Layer
//!
//! Screens follow an adaptation of **MVVM**. The view-model
//! (`pluglist_runtime::PluginListViewModel`) owns the data and reports
//! [`StateChange`](pluglist_types::StateChange)s; presenters turn those into
//! commands for a [`TableWidget`](pluglist_types::TableWidget).
//!
//! ```text
//! [ Store ] --notify--> [ ViewModel ] --StateChange--> [ Presenter ] --commands--> [ Widget ]
//!                                 ^-------- pull table model ------'     <--cell_for--'
//! ```
//!
//! ## Directory Guide
//!
//! ### `presenters/`
//! Screen controllers. Decide between a full reload and a row-level patch,
//! resolve rows for the widget, route selection to a navigator.
//!
//! ### `view_models/`
//! Serializable output shapes for the non-interactive commands.
//!
//! ### `renderers/`
//! Widgets. `console.rs` renders once to stdout; `tui/` keeps a live table on
//! screen with Ratatui.

pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use presenters::{PluginListScreen, PluginNavigator, StatusNavigator};
pub use renderers::{ConsoleTable, TuiTable};
