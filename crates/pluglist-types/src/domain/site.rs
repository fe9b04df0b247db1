use serde::{Deserialize, Serialize};
use std::fmt;

/// Site whose plugins are being managed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteRef {
    pub site_id: u64,
    pub username: String,
}

impl SiteRef {
    pub fn new(site_id: u64, username: impl Into<String>) -> Self {
        Self {
            site_id,
            username: username.into(),
        }
    }
}

impl fmt::Display for SiteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.site_id)
    }
}
