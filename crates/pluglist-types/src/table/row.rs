use serde::{Deserialize, Serialize};

use super::cell::{Accessory, Cell};
use crate::domain::Plugin;

/// What happens when a row is selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowAction {
    ShowPlugin { slug: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRow {
    pub slug: String,
    pub name: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_available: Option<String>,
}

impl PluginRow {
    pub const REUSABLE_IDENTIFIER: &'static str = "PluginListRow";
}

impl From<&Plugin> for PluginRow {
    fn from(plugin: &Plugin) -> Self {
        Self {
            slug: plugin.slug.clone(),
            name: plugin.name.clone(),
            state: plugin.state_label().to_string(),
            update_available: plugin.update_available.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRow {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TextRow {
    pub const REUSABLE_IDENTIFIER: &'static str = "TextRow";

    pub fn new(title: impl Into<String>, value: Option<String>) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

/// Closed set of row kinds a table model may contain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row {
    Plugin(PluginRow),
    Text(TextRow),
}

impl Row {
    pub fn reusable_identifier(&self) -> &'static str {
        match self {
            Row::Plugin(_) => PluginRow::REUSABLE_IDENTIFIER,
            Row::Text(_) => TextRow::REUSABLE_IDENTIFIER,
        }
    }

    /// Write this row's content into a (possibly recycled) cell.
    ///
    /// Every field is overwritten, so configuring the same cell twice for the
    /// same row yields the same result.
    pub fn configure(&self, cell: &mut Cell) {
        cell.prepare_for_reuse();
        match self {
            Row::Plugin(row) => {
                cell.title.push_str(&row.name);
                cell.detail = Some(row.state.clone());
                cell.badge = row
                    .update_available
                    .as_ref()
                    .map(|version| format!("Update to {}", version));
                cell.accessory = Accessory::Disclosure;
            }
            Row::Text(row) => {
                cell.title.push_str(&row.title);
                cell.detail = row.value.clone();
            }
        }
    }

    pub fn action(&self) -> Option<RowAction> {
        match self {
            Row::Plugin(row) => Some(RowAction::ShowPlugin {
                slug: row.slug.clone(),
            }),
            Row::Text(_) => None,
        }
    }
}
