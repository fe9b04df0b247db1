//! Table model consumed by list screens.
//!
//! A [`TableModel`] is an ordered sequence of sections, each an ordered
//! sequence of [`Row`]s. Rows are addressed by position ([`IndexPath`]); the
//! model carries no stable row identity.

mod cell;
mod index_path;
mod model;
mod row;
mod widget;

pub use cell::{Accessory, Cell};
pub use index_path::IndexPath;
pub use model::{Section, TableModel};
pub use row::{PluginRow, Row, RowAction, TextRow};
pub use widget::{RowAnimation, TableWidget};
