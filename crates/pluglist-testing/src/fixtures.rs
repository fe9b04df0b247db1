//! Sample data shared by tests.

use anyhow::Result;
use pluglist_runtime::{PluginCatalog, RecordedResponse};
use pluglist_types::{
    ATTRIBUTION_API_VERSION, AttributionPayload, AttributionSettings, Plugin,
    SitePluginCapabilities, SiteRef,
};
use serde_json::Value;
use std::path::Path;

pub fn sample_site() -> SiteRef {
    SiteRef::new(9001, "admin")
}

pub fn sample_capabilities() -> SitePluginCapabilities {
    SitePluginCapabilities {
        modify_files: true,
        autoupdate_files: true,
    }
}

/// Three plugins in a fixed order: akismet (active), hello-dolly, jetpack (active, autoupdates)
pub fn sample_plugins() -> Vec<Plugin> {
    let mut akismet = Plugin::new("akismet", "Akismet Anti-Spam");
    akismet.version = Some("5.2".to_string());
    akismet.active = true;
    akismet.update_available = Some("5.3".to_string());

    let mut hello = Plugin::new("hello-dolly", "Hello Dolly");
    hello.version = Some("1.7.2".to_string());

    let mut jetpack = Plugin::new("jetpack", "Jetpack");
    jetpack.version = Some("13.1".to_string());
    jetpack.active = true;
    jetpack.autoupdate = true;

    vec![akismet, hello, jetpack]
}

pub fn sample_catalog() -> PluginCatalog {
    PluginCatalog {
        plugins: sample_plugins(),
        capabilities: sample_capabilities(),
    }
}

/// A successful client response carrying `details` under the expected version key
pub fn attribution_details(details: Value) -> RecordedResponse {
    let mut payload = AttributionPayload::new();
    payload.insert(ATTRIBUTION_API_VERSION.to_string(), details);
    RecordedResponse::Details { details: payload }
}

/// A successful client response with an arbitrary top-level payload
pub fn payload(value: Value) -> RecordedResponse {
    match value {
        Value::Object(details) => RecordedResponse::Details { details },
        other => panic!("attribution payload must be an object, got {}", other),
    }
}

pub fn settings(tracking_limited: bool, details_sent: bool) -> AttributionSettings {
    let mut settings = AttributionSettings::default();
    if tracking_limited {
        settings.mark_tracking_limited();
    }
    if details_sent {
        settings.mark_details_sent();
    }
    settings
}

/// Write a recorded client response file for `pluglist attribution run`
pub fn write_responses(path: &Path, responses: &[RecordedResponse]) -> Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(responses)?)?;
    Ok(())
}
