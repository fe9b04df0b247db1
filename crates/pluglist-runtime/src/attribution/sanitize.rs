use pluglist_types::{ATTRIBUTION_API_VERSION, AttributionPayload};
use serde_json::Value;
use std::collections::BTreeMap;

/// The attribution sub-object for the API version this client understands
pub fn extract_details(payload: &AttributionPayload) -> Option<&AttributionPayload> {
    payload.get(ATTRIBUTION_API_VERSION)?.as_object()
}

/// Flatten attribution details into reporting properties.
///
/// Keys have `-` replaced by `_`. String values are kept as-is; every other
/// value is rendered as its JSON text.
pub fn sanitize(details: &AttributionPayload) -> BTreeMap<String, String> {
    details
        .iter()
        .map(|(key, value)| (key.replace('-', "_"), stringify(value)))
        .collect()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
