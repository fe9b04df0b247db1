use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the attribution sub-object this client understands
pub const ATTRIBUTION_API_VERSION: &str = "Version3.1";

/// Nested key-value payload returned by the attribution client
pub type AttributionPayload = serde_json::Map<String, serde_json::Value>;

/// Failure reported by the attribution client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The user disallowed ad tracking; no data will ever be returned
    TrackingLimited,
    /// Anything else, presumed to be a connectivity problem
    Transient(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::TrackingLimited => write!(f, "Ad tracking is limited"),
            ClientError::Transient(msg) => write!(f, "Attribution request failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Where the process is running. Requests made from a simulator always fail,
/// so the reporter does not issue them there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Simulator,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Simulator => write!(f, "simulator"),
        }
    }
}

/// Persisted attribution flags.
///
/// Both flags only ever move from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributionSettings {
    #[serde(rename = "search_ads_limited_tracking", default)]
    tracking_limited: bool,
    #[serde(rename = "search_ads_attribution_details_sent", default)]
    details_sent: bool,
}

impl AttributionSettings {
    pub fn tracking_limited(&self) -> bool {
        self.tracking_limited
    }

    pub fn details_sent(&self) -> bool {
        self.details_sent
    }

    pub fn mark_tracking_limited(&mut self) {
        self.tracking_limited = true;
    }

    pub fn mark_details_sent(&mut self) {
        self.details_sent = true;
    }
}
