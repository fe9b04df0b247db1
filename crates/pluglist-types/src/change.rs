use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Notification emitted by a list view-model when its state changes.
///
/// `Selective` addresses rows by position within section 0. It is only valid
/// when the number of sections and rows is unchanged; any structural change
/// must be reported as `Replace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum StateChange {
    Replace,
    Selective(BTreeSet<usize>),
}

impl StateChange {
    pub fn selective<I: IntoIterator<Item = usize>>(rows: I) -> Self {
        StateChange::Selective(rows.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selective_deduplicates_and_orders() {
        let change = StateChange::selective([3, 1, 3]);
        assert_eq!(change, StateChange::Selective(BTreeSet::from([1, 3])));
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_value(StateChange::selective([2])).unwrap();
        assert_eq!(json["kind"], "selective");
        assert_eq!(json["rows"][0], 2);
    }
}
