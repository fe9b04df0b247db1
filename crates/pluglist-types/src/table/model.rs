use serde::{Deserialize, Serialize};

use super::index_path::IndexPath;
use super::row::Row;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

/// Snapshot of everything a table displays.
///
/// Lookups by [`IndexPath`] panic when the address is out of range: the widget
/// and the model are required to agree on counts, so a mismatch is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableModel {
    pub sections: Vec<Section>,
}

impl TableModel {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// True when there is nothing to display: no sections, or only sections without rows
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|section| section.rows.is_empty())
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.section(section).rows.len()
    }

    pub fn row_at(&self, path: IndexPath) -> &Row {
        let section = self.section(path.section);
        match section.rows.get(path.row) {
            Some(row) => row,
            None => panic!(
                "row {} out of range: section {} has {} rows",
                path,
                path.section,
                section.rows.len()
            ),
        }
    }

    fn section(&self, index: usize) -> &Section {
        match self.sections.get(index) {
            Some(section) => section,
            None => panic!(
                "section {} out of range: table has {} sections",
                index,
                self.sections.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TextRow;

    fn text(title: &str) -> Row {
        Row::Text(TextRow::new(title, None))
    }

    fn single_section(rows: Vec<Row>) -> TableModel {
        TableModel::new(vec![Section::new(rows)])
    }

    #[test]
    fn test_is_empty() {
        assert!(TableModel::empty().is_empty());
        assert!(single_section(vec![]).is_empty());
        assert!(!single_section(vec![text("a")]).is_empty());
        assert!(TableModel::new(vec![Section::new(vec![]), Section::new(vec![])]).is_empty());
    }

    #[test]
    fn test_row_at() {
        let model = single_section(vec![text("a"), text("b")]);
        assert_eq!(model.row_count(0), 2);
        assert_eq!(model.row_at(IndexPath::row(1)), &text("b"));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_at_out_of_range_panics() {
        let model = single_section(vec![text("a")]);
        model.row_at(IndexPath::row(1));
    }

    #[test]
    #[should_panic(expected = "section 1 out of range")]
    fn test_missing_section_panics() {
        let model = single_section(vec![text("a")]);
        model.row_count(1);
    }
}
