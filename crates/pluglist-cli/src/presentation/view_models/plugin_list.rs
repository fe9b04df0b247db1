use pluglist_types::{Accessory, Cell, NoResults};
use serde::Serialize;
use std::fmt;

/// One-shot rendering of the plugin list screen
#[derive(Debug, Serialize)]
pub struct PluginListOutput {
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<NoResults>,
    pub cells: Vec<Cell>,
}

impl fmt::Display for PluginListOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plugins for {}", self.site)?;

        if let Some(panel) = &self.panel {
            writeln!(f)?;
            writeln!(f, "  {}", panel.title)?;
            if let Some(message) = &panel.message {
                writeln!(f, "  {}", message)?;
            }
            if let Some(button) = &panel.button_title {
                writeln!(f, "  [{}]", button)?;
            }
            return Ok(());
        }

        for cell in &self.cells {
            let marker = match cell.accessory {
                Accessory::Disclosure => ">",
                Accessory::None => " ",
            };
            write!(f, "{} {:<32}", marker, cell.title)?;
            if let Some(detail) = &cell.detail {
                write!(f, "  {}", detail)?;
            }
            if let Some(badge) = &cell.badge {
                write!(f, "  ({})", badge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
