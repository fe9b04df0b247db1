mod plugin;
mod site;

pub use plugin::{Plugin, PluginListState, SitePluginCapabilities};
pub use site::SiteRef;
