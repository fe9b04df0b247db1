use super::client::AttributionClient;
use super::reporter::{AttributionReporter, Outcome, ReporterState};
use super::settings::SettingsStore;
use super::sink::ReportingSink;
use crate::{Error, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct Running {
    handle: JoinHandle<Result<Outcome>>,
    state: watch::Receiver<ReporterState>,
}

/// Owner of at most one live attribution reporter.
///
/// The reporter is spawned onto the current tokio runtime and held here until
/// it reaches a terminal state. Starting while a reporter is still alive is
/// refused, so two requests are never in flight at once. Dropping the session
/// detaches the task; it is abandoned when the runtime shuts down.
#[derive(Default)]
pub struct AttributionSession {
    running: Option<Running>,
}

impl AttributionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `reporter` unless one is already running. Must be called within a tokio runtime.
    pub fn start<C, S, K>(&mut self, reporter: AttributionReporter<C, S, K>) -> bool
    where
        C: AttributionClient + Send + Sync + 'static,
        S: ReportingSink + Send + 'static,
        K: SettingsStore + Send + 'static,
    {
        if self.is_running() {
            warn!("attribution reporter already running, ignoring start");
            return false;
        }

        let state = reporter.watch_state();
        let handle = tokio::spawn(reporter.run());
        debug!("attribution reporter started");
        self.running = Some(Running { handle, state });
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| !running.handle.is_finished())
    }

    /// Last observed state of the current or most recent reporter
    pub fn state(&self) -> Option<ReporterState> {
        self.running.as_ref().map(|running| *running.state.borrow())
    }

    /// Wait for the reporter to finish and release it. `None` when nothing was started.
    pub async fn join(&mut self) -> Result<Option<Outcome>> {
        let Some(running) = self.running.take() else {
            return Ok(None);
        };

        match running.handle.await {
            Ok(result) => result.map(Some),
            Err(e) => Err(Error::InvalidOperation(format!(
                "attribution reporter task failed: {}",
                e
            ))),
        }
    }
}
