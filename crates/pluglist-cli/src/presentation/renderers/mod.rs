pub mod console;
pub mod tui;

pub use console::ConsoleTable;
pub use tui::TuiTable;
