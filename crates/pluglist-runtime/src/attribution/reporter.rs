use super::client::AttributionClient;
use super::sanitize::{extract_details, sanitize};
use super::settings::SettingsStore;
use super::sink::{ATTRIBUTION_EVENT, ReportingSink};
use crate::Result;
use pluglist_types::{
    ATTRIBUTION_API_VERSION, AttributionPayload, AttributionSettings, ClientError, Environment,
};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReporterConfig {
    pub environment: Environment,
    pub retry_delay: Duration,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            retry_delay: Duration::from_secs(5),
        }
    }
}

/// How a reporter run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Details were forwarded and recorded as sent
    Sent,
    /// The client reported limited ad tracking; recorded permanently
    TrackingLimited,
    /// Details had been sent by an earlier run
    AlreadySent,
    /// Tracking was limited in an earlier run
    AlreadyLimited,
    /// Running somewhere requests cannot succeed
    TestEnvironment,
    /// Response lacked the expected version key; a later run may succeed
    PayloadMissing,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Sent => "sent",
            Outcome::TrackingLimited => "tracking limited",
            Outcome::AlreadySent => "already sent",
            Outcome::AlreadyLimited => "already limited",
            Outcome::TestEnvironment => "skipped in test environment",
            Outcome::PayloadMissing => "payload missing",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterState {
    Idle,
    Requesting { attempt: u32 },
    Retrying { attempt: u32 },
    Finished(Outcome),
}

impl ReporterState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReporterState::Finished(_))
    }
}

/// One-shot attribution reporter.
///
/// [`run`](Self::run) consumes the reporter, so it is released as soon as a
/// terminal state is reached and no retry timer can outlive it.
pub struct AttributionReporter<C, S, K> {
    client: C,
    sink: S,
    settings: K,
    config: ReporterConfig,
    attempts: u32,
    state: watch::Sender<ReporterState>,
}

impl<C, S, K> AttributionReporter<C, S, K>
where
    C: AttributionClient,
    S: ReportingSink,
    K: SettingsStore,
{
    pub fn new(client: C, sink: S, settings: K, config: ReporterConfig) -> Self {
        let (state, _) = watch::channel(ReporterState::Idle);
        Self {
            client,
            sink,
            settings,
            config,
            attempts: 0,
            state,
        }
    }

    pub fn state(&self) -> ReporterState {
        *self.state.borrow()
    }

    /// Observe state transitions from outside the running task
    pub fn watch_state(&self) -> watch::Receiver<ReporterState> {
        self.state.subscribe()
    }

    /// Drive the reporter to a terminal state.
    ///
    /// Preconditions are checked before every attempt, including retries.
    /// Transient client errors are retried after `retry_delay` with no upper
    /// bound on the number of attempts. Errors returned here come from the
    /// settings store only.
    pub async fn run(mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.check_preconditions()? {
                return Ok(self.finish(outcome));
            }

            self.attempts += 1;
            let attempt = self.attempts;
            self.transition(ReporterState::Requesting { attempt });
            debug!(attempt, "requesting attribution details");

            match self.client.request_details().await {
                Ok(payload) => {
                    let outcome = self.did_receive_details(&payload)?;
                    return Ok(self.finish(outcome));
                }
                Err(ClientError::TrackingLimited) => {
                    self.update_settings(AttributionSettings::mark_tracking_limited)?;
                    return Ok(self.finish(Outcome::TrackingLimited));
                }
                Err(ClientError::Transient(reason)) => {
                    warn!(
                        attempt,
                        %reason,
                        delay_secs = self.config.retry_delay.as_secs_f64(),
                        "attribution request failed, retrying"
                    );
                    self.transition(ReporterState::Retrying { attempt });
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }
    }

    fn check_preconditions(&self) -> Result<Option<Outcome>> {
        if self.config.environment == Environment::Simulator {
            return Ok(Some(Outcome::TestEnvironment));
        }

        let settings = self.settings.load()?;
        if settings.tracking_limited() {
            return Ok(Some(Outcome::AlreadyLimited));
        }
        if settings.details_sent() {
            return Ok(Some(Outcome::AlreadySent));
        }

        Ok(None)
    }

    fn did_receive_details(&self, payload: &AttributionPayload) -> Result<Outcome> {
        let Some(details) = extract_details(payload) else {
            debug!(
                version = ATTRIBUTION_API_VERSION,
                "attribution payload has no details for this version"
            );
            return Ok(Outcome::PayloadMissing);
        };

        let properties = sanitize(details);
        self.sink.track(ATTRIBUTION_EVENT, &properties);
        self.update_settings(AttributionSettings::mark_details_sent)?;
        Ok(Outcome::Sent)
    }

    fn update_settings(&self, apply: impl FnOnce(&mut AttributionSettings)) -> Result<()> {
        let mut settings = self.settings.load()?;
        apply(&mut settings);
        self.settings.save(&settings)
    }

    fn transition(&self, next: ReporterState) {
        self.state.send_replace(next);
    }

    fn finish(&self, outcome: Outcome) -> Outcome {
        info!(%outcome, attempts = self.attempts, "attribution reporter finished");
        self.transition(ReporterState::Finished(outcome));
        outcome
    }
}
