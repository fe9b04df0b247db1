pub mod plugin_list;

pub use plugin_list::{PluginListScreen, PluginNavigator, StatusNavigator};
