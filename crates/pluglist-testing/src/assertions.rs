//! Custom assertions for pluglist-specific validation.

use anyhow::{Context, Result};
use pluglist_types::IndexPath;
use serde_json::Value;

use crate::doubles::TableCommand;

/// Assert that the only reload issued was a row reload of exactly `rows` in section 0.
pub fn assert_selective_reload(commands: &[TableCommand], rows: &[usize]) -> Result<()> {
    let reloads: Vec<&TableCommand> = commands
        .iter()
        .filter(|command| {
            matches!(
                command,
                TableCommand::ReloadAll | TableCommand::ReloadRows(..)
            )
        })
        .collect();

    let [TableCommand::ReloadRows(paths, _)] = reloads.as_slice() else {
        anyhow::bail!("Expected exactly one row reload, got {:?}", reloads);
    };

    let expected: Vec<IndexPath> = rows.iter().map(|row| IndexPath::row(*row)).collect();
    if paths != &expected {
        anyhow::bail!("Expected reload of {:?}, got {:?}", expected, paths);
    }

    Ok(())
}

/// Assert that JSON output from `plugins list` contains the expected number of cells.
pub fn assert_cell_count(json: &Value, expected: usize) -> Result<()> {
    let cells = json["cells"]
        .as_array()
        .context("Expected 'cells' array in JSON")?;

    if cells.len() != expected {
        anyhow::bail!("Expected {} cells, got {}", expected, cells.len());
    }

    Ok(())
}
