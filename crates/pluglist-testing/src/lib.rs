//! Testing infrastructure for pluglist integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory and CLI command setup
//! - `doubles`: recording table widget, in-memory sink and settings store
//! - `fixtures`: sample sites, plugins and attribution payloads
//! - `assertions`: checks over recorded table commands and CLI JSON output

pub mod assertions;
pub mod doubles;
pub mod fixtures;
pub mod world;

pub use doubles::{MemorySettingsStore, MemorySink, RecordingTable, TableCommand, TrackedEvent};
pub use world::TestWorld;
