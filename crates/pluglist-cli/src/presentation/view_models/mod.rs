pub mod attribution;
pub mod plugin_list;

pub use attribution::{AttributionRunViewModel, AttributionStatusViewModel};
pub use plugin_list::PluginListOutput;
