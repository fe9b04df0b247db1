//! One-shot attribution reporting.
//!
//! The reporter asks an [`AttributionClient`] for install attribution details,
//! forwards them once to a [`ReportingSink`], and records the outcome in a
//! [`SettingsStore`] so later runs do not repeat the work. Transient failures
//! are retried on a fixed delay for as long as the process lives.

mod client;
mod reporter;
mod sanitize;
mod session;
mod settings;
mod sink;

pub use client::{AttributionClient, RecordedResponse, ReplayClient};
pub use reporter::{AttributionReporter, Outcome, ReporterConfig, ReporterState};
pub use sanitize::{extract_details, sanitize};
pub use session::AttributionSession;
pub use settings::{FileSettingsStore, SettingsStore};
pub use sink::{ATTRIBUTION_EVENT, JsonlSink, ReportingSink};
