use pluglist_runtime::Outcome;
use pluglist_types::AttributionSettings;
use serde::Serialize;
use std::fmt;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[derive(Debug, Serialize)]
pub struct AttributionStatusViewModel {
    pub tracking_limited: bool,
    pub details_sent: bool,
}

impl From<AttributionSettings> for AttributionStatusViewModel {
    fn from(settings: AttributionSettings) -> Self {
        Self {
            tracking_limited: settings.tracking_limited(),
            details_sent: settings.details_sent(),
        }
    }
}

impl fmt::Display for AttributionStatusViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tracking limited: {}", yes_no(self.tracking_limited))?;
        writeln!(f, "Details sent:     {}", yes_no(self.details_sent))
    }
}

#[derive(Debug, Serialize)]
pub struct AttributionRunViewModel {
    pub outcome: Option<Outcome>,
    #[serde(flatten)]
    pub status: AttributionStatusViewModel,
}

impl fmt::Display for AttributionRunViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Some(outcome) => writeln!(f, "Attribution: {}", outcome)?,
            None => writeln!(f, "Attribution: not started")?,
        }
        write!(f, "{}", self.status)
    }
}
