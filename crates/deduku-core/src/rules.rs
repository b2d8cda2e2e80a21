//! The rule engine.
//!
//! Rules map a cell to the values it cannot hold, each exclusion traceable
//! to the cell that forces it. The board carries an open list of rules whose
//! results are merged; only the structural sudoku rule ships, but callers
//! can install additional [`RuleFn`]s through
//! [`Board::add_rule`](crate::Board::add_rule).

use std::collections::BTreeMap;

use crate::{CellId, GridView, Value, ValueSet};

/// A rule: given a candidate projection and a cell, the values that cell
/// cannot hold and why.
pub type RuleFn = for<'a> fn(&GridView<'a>, CellId) -> InvalidValues;

/// The rules every board starts with.
#[must_use]
pub fn standard_rules() -> Vec<RuleFn> {
    vec![sudoku]
}

/// The structural sudoku rule: a value already present elsewhere in one of
/// the cell's groups is invalid for the cell, blamed on the cell holding it.
pub fn sudoku(view: &GridView<'_>, cell: CellId) -> InvalidValues {
    let mut out = InvalidValues::new();
    for group in view.cell_groups(cell) {
        for &member in view.group(group).cells() {
            if member == cell {
                continue;
            }
            if let Some(value) = view.value(member) {
                out.insert(value, member);
            }
        }
    }
    out
}

/// Values a cell cannot hold, each mapped to the cells that block it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidValues {
    entries: BTreeMap<Value, Vec<CellId>>,
}

impl InvalidValues {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` as invalid, blocked by `blocker`.
    pub fn insert(&mut self, value: Value, blocker: CellId) {
        self.entries.entry(value).or_default().push(blocker);
    }

    /// Merges another rule's exclusions into this map.
    pub fn merge(&mut self, other: Self) {
        for (value, mut blockers) in other.entries {
            self.entries.entry(value).or_default().append(&mut blockers);
        }
    }

    /// Returns `true` if `value` is invalid.
    #[must_use]
    pub fn contains(&self, value: Value) -> bool {
        self.entries.contains_key(&value)
    }

    /// Returns the cells blocking `value`, empty if the value is valid.
    #[must_use]
    pub fn blockers(&self, value: Value) -> &[CellId] {
        self.entries.get(&value).map_or(&[], Vec::as_slice)
    }

    /// Returns the invalid values as a set.
    #[must_use]
    pub fn value_set(&self) -> ValueSet {
        self.entries.keys().copied().collect()
    }

    /// Returns `true` if no value is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(value, blockers)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (Value, &[CellId])> {
        self.entries
            .iter()
            .map(|(value, blockers)| (*value, blockers.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_sudoku_rule_traces_blockers() {
        // A1 holds 5 (shares A2's row and box); E2 holds 2 (shares its column).
        let mut digits = [0u8; 81];
        digits[0] = 5;
        digits[37] = 2;
        let board = Board::from_digits(&digits).unwrap();
        let view = board.view();
        let invalid = sudoku(&view, CellId::new(1));
        assert!(invalid.contains(Value::new(5)));
        assert!(invalid.contains(Value::new(2)));
        assert!(!invalid.contains(Value::new(3)));
        assert_eq!(invalid.blockers(Value::new(2)), &[CellId::new(37)]);
        // 5 is reported through both the shared row and the shared box.
        assert_eq!(invalid.blockers(Value::new(5)), &[CellId::new(0); 2]);
        assert_eq!(invalid.value_set().len(), 2);
    }

    #[test]
    fn test_merge() {
        let mut a = InvalidValues::new();
        a.insert(Value::new(1), CellId::new(0));
        let mut b = InvalidValues::new();
        b.insert(Value::new(1), CellId::new(5));
        b.insert(Value::new(2), CellId::new(6));
        a.merge(b);
        assert_eq!(a.blockers(Value::new(1)).len(), 2);
        assert!(a.contains(Value::new(2)));
    }
}
