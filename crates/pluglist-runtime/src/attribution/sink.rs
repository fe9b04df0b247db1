use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Event name under which attribution details are reported
pub const ATTRIBUTION_EVENT: &str = "searchads_attribution_detail_received";

/// Fire-and-forget analytics sink
pub trait ReportingSink {
    fn track(&self, event: &str, properties: &BTreeMap<String, String>);
}

impl<T: ReportingSink + ?Sized> ReportingSink for Arc<T> {
    fn track(&self, event: &str, properties: &BTreeMap<String, String>) {
        (**self).track(event, properties)
    }
}

#[derive(Serialize)]
struct EventRecord<'a> {
    timestamp: String,
    event: &'a str,
    properties: &'a BTreeMap<String, String>,
}

/// Appends one JSON object per event to a file
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("events.jsonl"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &EventRecord<'_>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl ReportingSink for JsonlSink {
    fn track(&self, event: &str, properties: &BTreeMap<String, String>) {
        let record = EventRecord {
            timestamp: Utc::now().to_rfc3339(),
            event,
            properties,
        };
        match self.append(&record) {
            Ok(()) => debug!(event, path = %self.path.display(), "recorded event"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to record event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_jsonl_sink_appends_lines() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let sink = JsonlSink::in_dir(temp_dir.path());

        let properties = BTreeMap::from([("app_id".to_string(), "42".to_string())]);
        sink.track(ATTRIBUTION_EVENT, &properties);
        sink.track("second", &BTreeMap::new());

        let content = std::fs::read_to_string(sink.path())?;
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(serde_json::from_str)
            .collect::<Result<_, _>>()?;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], ATTRIBUTION_EVENT);
        assert_eq!(lines[0]["properties"]["app_id"], "42");
        assert_eq!(lines[1]["event"], "second");
        Ok(())
    }

    #[test]
    fn test_jsonl_sink_creates_missing_data_dir() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let sink = JsonlSink::in_dir(&temp_dir.path().join("fresh"));

        sink.track(ATTRIBUTION_EVENT, &BTreeMap::new());

        let content = std::fs::read_to_string(temp_dir.path().join("fresh/events.jsonl"))?;
        assert_eq!(content.lines().count(), 1);
        Ok(())
    }

    #[test]
    fn test_jsonl_sink_swallows_io_errors() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "")?;

        let sink = JsonlSink::in_dir(&blocker);
        sink.track("ignored", &BTreeMap::new());

        assert!(!blocker.join("events.jsonl").exists());
        Ok(())
    }
}
