//! Groups (rows, columns, boxes) and group identifiers.

use derive_more::Display;

use crate::CellId;

/// Identifies a group by its index into the board's group array.
///
/// The board stores rows first, then columns, then boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct GroupId(usize);

impl GroupId {
    /// Creates a group id from an index into the board's group array.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index into the board's group array.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The orientation of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GroupKind {
    /// A horizontal run of cells.
    #[display("row")]
    Row,
    /// A vertical run of cells.
    #[display("column")]
    Column,
    /// A `box_size`×`box_size` block of cells.
    #[display("box")]
    Box,
}

/// A set of cells that must collectively contain each value exactly once.
///
/// Groups hold an ordered list of member cell ids; every group of an `n`×`n`
/// board contains exactly `n` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    kind: GroupKind,
    index: usize,
    cells: Vec<CellId>,
}

impl Group {
    /// Creates a group, checking the member-count invariant.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not contain exactly `expected_len` members.
    /// A wrong-sized group is a construction bug, not a puzzle state.
    pub(crate) fn new(kind: GroupKind, index: usize, cells: Vec<CellId>, expected_len: usize) -> Self {
        assert_eq!(
            cells.len(),
            expected_len,
            "{kind} {index} must contain exactly {expected_len} cells"
        );
        Self { kind, index, cells }
    }

    /// Returns the group's orientation.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Returns the group's index within its orientation (0-based).
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the member cells in scan order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Returns `true` if the group contains the cell.
    #[inline]
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns a human-readable name such as `"row 1"` (1-based).
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.kind, self.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let cells = (0..9).map(CellId::new).collect();
        let group = Group::new(GroupKind::Row, 0, cells, 9);
        assert_eq!(group.name(), "row 1");
        assert!(group.contains(CellId::new(3)));
        assert!(!group.contains(CellId::new(9)));
    }

    #[test]
    #[should_panic(expected = "must contain exactly 9 cells")]
    fn test_rejects_wrong_member_count() {
        let cells = (0..8).map(CellId::new).collect();
        let _ = Group::new(GroupKind::Column, 2, cells, 9);
    }
}
