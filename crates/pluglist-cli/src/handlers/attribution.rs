use std::path::Path;

use anyhow::{Context, Result};
use pluglist_runtime::{
    AttributionReporter, AttributionSession, Config, FileSettingsStore, JsonlSink, ReplayClient,
    SettingsStore,
};
use tracing::info;

use crate::presentation::renderers::console;
use crate::presentation::view_models::{AttributionRunViewModel, AttributionStatusViewModel};
use crate::types::OutputFormat;

/// Run the reporter to completion against recorded responses
pub fn run(data_dir: &Path, config: &Config, response: &Path, format: OutputFormat) -> Result<()> {
    let reporter_config = config.attribution.reporter_config()?;
    let settings = FileSettingsStore::in_dir(data_dir);
    let sink = JsonlSink::in_dir(data_dir);
    let client = ReplayClient::load(response)
        .with_context(|| format!("failed to load responses from {}", response.display()))?;

    info!(
        environment = %reporter_config.environment,
        retry_delay = ?reporter_config.retry_delay,
        "starting attribution reporter"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let outcome = runtime.block_on(async {
        let mut session = AttributionSession::new();
        session.start(AttributionReporter::new(
            client,
            sink,
            settings.clone(),
            reporter_config,
        ));
        session.join().await
    })?;

    let view = AttributionRunViewModel {
        outcome,
        status: settings.load()?.into(),
    };
    console::print(&view, format)
}

/// Show the persisted attribution flags
pub fn status(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let settings = FileSettingsStore::in_dir(data_dir).load()?;
    let view = AttributionStatusViewModel::from(settings);
    console::print(&view, format)
}
