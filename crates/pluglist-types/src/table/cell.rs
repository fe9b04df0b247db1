use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessory {
    #[default]
    None,
    Disclosure,
}

/// Recyclable visual cell. Widgets hand these out from a reuse pool keyed by
/// the row's reusable identifier, and rows write their content into them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub identifier: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub accessory: Accessory,
}

impl Cell {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: String::new(),
            detail: None,
            badge: None,
            accessory: Accessory::None,
        }
    }

    /// Clear content left over from a previous row before the cell is reused
    pub fn prepare_for_reuse(&mut self) {
        self.title.clear();
        self.detail = None;
        self.badge = None;
        self.accessory = Accessory::None;
    }
}
