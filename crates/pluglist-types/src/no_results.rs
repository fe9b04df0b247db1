use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoResultsKind {
    Loading,
    Error,
    Empty,
}

/// Content of the empty-state panel shown in place of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoResults {
    pub kind: NoResultsKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_title: Option<String>,
}

impl NoResults {
    pub fn loading() -> Self {
        Self {
            kind: NoResultsKind::Loading,
            title: "Loading Plugins...".to_string(),
            message: None,
            button_title: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoResultsKind::Error,
            title: "Oops".to_string(),
            message: Some(message.into()),
            button_title: Some("Contact support".to_string()),
        }
    }

    pub fn empty() -> Self {
        Self {
            kind: NoResultsKind::Empty,
            title: "No Plugins".to_string(),
            message: Some("This site has no plugins installed.".to_string()),
            button_title: None,
        }
    }
}
