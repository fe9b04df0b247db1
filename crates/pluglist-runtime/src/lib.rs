pub mod attribution;
pub mod catalog;
pub mod config;
pub mod error;
pub mod store;
pub mod view_model;

pub use attribution::{
    AttributionClient, AttributionReporter, AttributionSession, FileSettingsStore, JsonlSink,
    Outcome, RecordedResponse, ReplayClient, ReporterConfig, ReporterState, ReportingSink,
    SettingsStore,
};
pub use catalog::PluginCatalog;
pub use config::{AttributionConfig, Config, SiteConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use store::{PluginStore, Receipt};
pub use view_model::{PluginListViewModel, diff_states};
