//! Aggregated state changes per (source, target) pair.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Everything recorded for one source acting on one target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeltaRecord {
    pub gained_modifications: BTreeSet<String>,
    pub lost_modifications: BTreeSet<String>,
    pub gained_locations: BTreeSet<String>,
    pub lost_locations: BTreeSet<String>,
    /// Modifications carried by the source itself.
    pub source_modifications: BTreeSet<String>,
    /// Cellular locations of the source itself.
    pub source_locations: BTreeSet<String>,
    /// Ids of the controls and conversions linking source and target.
    pub mediators: BTreeSet<String>,
}

impl DeltaRecord {
    /// Whether the target gained or lost a modification. Location changes
    /// alone do not count.
    #[must_use]
    pub fn has_modification_change(&self) -> bool {
        !(self.gained_modifications.is_empty() && self.lost_modifications.is_empty())
    }
}

/// Gained and lost members between two states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delta {
    pub gained: BTreeSet<String>,
    pub lost: BTreeSet<String>,
}

impl Delta {
    /// `gained = after - before`, `lost = before - after`.
    #[must_use]
    pub fn between(before: &BTreeSet<String>, after: &BTreeSet<String>) -> Self {
        Self {
            gained: after.difference(before).cloned().collect(),
            lost: before.difference(after).cloned().collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gained.is_empty() && self.lost.is_empty()
    }

    /// Swap gained and lost, for changes under a negative control.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            gained: self.lost,
            lost: self.gained,
        }
    }
}

/// Source id -> target id -> record, ordered for stable reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeltaTable {
    records: BTreeMap<String, BTreeMap<String, DeltaRecord>>,
}

impl DeltaTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for a pair, created empty on first use.
    pub fn record_mut(&mut self, source: &str, target: &str) -> &mut DeltaRecord {
        self.records
            .entry(source.to_string())
            .or_default()
            .entry(target.to_string())
            .or_default()
    }

    #[must_use]
    pub fn get(&self, source: &str, target: &str) -> Option<&DeltaRecord> {
        self.records.get(source)?.get(target)
    }

    /// All pairs in source, then target order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &DeltaRecord)> {
        self.records.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |(target, record)| (source.as_str(), target.as_str(), record))
        })
    }

    /// Number of recorded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn delta_between_states() {
        let delta = Delta::between(&set(&["a", "b"]), &set(&["b", "c"]));
        assert_eq!(delta.gained, set(&["c"]));
        assert_eq!(delta.lost, set(&["a"]));

        let inverted = delta.inverted();
        assert_eq!(inverted.gained, set(&["a"]));
        assert_eq!(inverted.lost, set(&["c"]));

        assert!(Delta::between(&set(&["x"]), &set(&["x"])).is_empty());
    }

    #[test]
    fn table_orders_pairs() {
        let mut table = DeltaTable::new();
        table.record_mut("b", "x").mediators.insert("m1".to_string());
        table.record_mut("a", "y");
        table.record_mut("a", "x");
        table.record_mut("a", "x").mediators.insert("m2".to_string());

        let pairs: Vec<(&str, &str)> = table.iter().map(|(s, t, _)| (s, t)).collect();
        assert_eq!(pairs, vec![("a", "x"), ("a", "y"), ("b", "x")]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("a", "x").map(|r| r.mediators.len()), Some(1));
        assert!(table.get("c", "x").is_none());
    }

    #[test]
    fn change_detection() {
        let mut record = DeltaRecord::default();
        record.source_modifications.insert("p@1".to_string());
        assert!(!record.has_modification_change());
        record.lost_locations.insert("cytosol".to_string());
        assert!(!record.has_modification_change());
        record.lost_modifications.insert("p@2".to_string());
        assert!(record.has_modification_change());
    }
}
