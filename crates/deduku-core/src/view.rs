//! Candidate projections.
//!
//! A [`GridView`] is a short-lived snapshot of a board's effective state,
//! either the committed state ([`Board::view`]) or a speculative one built
//! by an overlay. All derived quantities (candidates, validity, per-group
//! maps) are recomputed on demand from the snapshot; boards are small
//! enough that no caching layer is needed.

use crate::{Board, CellId, Group, GroupId, InvalidValues, Shape, Value, ValueSet};

/// A read-only projection of a board for candidate queries.
///
/// The view pairs the board's structure (groups, rules, geometry) with a
/// snapshot of effective cell values and blocked-value sets. The committed
/// board and any speculative overlay both answer queries through this one
/// type, so the technique pipeline never needs to know which it is looking
/// at.
#[derive(Debug, Clone)]
pub struct GridView<'a> {
    board: &'a Board,
    values: Vec<Option<Value>>,
    blocked: Vec<ValueSet>,
}

/// The cells of a group that can still hold a particular value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOwners {
    /// The candidate value.
    pub value: Value,
    /// The cells that still admit it, in group scan order.
    pub cells: Vec<CellId>,
}

impl<'a> GridView<'a> {
    /// Creates a view from a board and effective per-cell state.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot lengths do not match the board's cell count.
    #[must_use]
    pub fn new(board: &'a Board, values: Vec<Option<Value>>, blocked: Vec<ValueSet>) -> Self {
        assert_eq!(values.len(), board.cells().len());
        assert_eq!(blocked.len(), board.cells().len());
        Self {
            board,
            values,
            blocked,
        }
    }

    /// Returns the underlying board.
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &'a Board {
        self.board
    }

    /// Returns the board's geometry.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.board().shape()
    }

    /// Iterates over all cell ids in row-major order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.values.len()).map(CellId::new)
    }

    /// Iterates over all group ids: rows, then columns, then boxes.
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> {
        (0..self.board.groups().len()).map(GroupId::new)
    }

    /// Returns the group with the given id.
    #[inline]
    #[must_use]
    pub fn group(&self, group: GroupId) -> &'a Group {
        self.board.group(group)
    }

    /// Returns the groups containing a cell, in row, column, box order.
    #[inline]
    #[must_use]
    pub fn cell_groups(&self, cell: CellId) -> [GroupId; 3] {
        self.board.cell(cell).groups()
    }

    /// Returns `true` if two distinct cells share at least one group.
    #[must_use]
    pub fn cells_share_group(&self, a: CellId, b: CellId) -> bool {
        self.shared_group_count(a, b) > 0
    }

    /// Returns how many groups two distinct cells share.
    #[must_use]
    pub fn shared_group_count(&self, a: CellId, b: CellId) -> usize {
        let b_groups = self.cell_groups(b);
        self.cell_groups(a)
            .iter()
            .filter(|g| b_groups.contains(g))
            .count()
    }

    /// Returns the effective value of a cell.
    #[inline]
    #[must_use]
    pub fn value(&self, cell: CellId) -> Option<Value> {
        self.values[cell.index()]
    }

    /// Returns the effective blocked-value set of a cell.
    #[inline]
    #[must_use]
    pub fn blocked(&self, cell: CellId) -> ValueSet {
        self.blocked[cell.index()]
    }

    /// Returns the merged rule exclusions for a cell.
    #[must_use]
    pub fn invalid_values(&self, cell: CellId) -> InvalidValues {
        let mut merged = InvalidValues::new();
        for rule in self.board.rules() {
            merged.merge(rule(self, cell));
        }
        merged
    }

    /// Returns the candidates of a cell: every value not excluded by a rule
    /// or by the blocked set. Always empty once the cell holds a value.
    #[must_use]
    pub fn candidates(&self, cell: CellId) -> ValueSet {
        if self.value(cell).is_some() {
            return ValueSet::EMPTY;
        }
        self.shape()
            .value_set()
            .difference(self.invalid_values(cell).value_set())
            .difference(self.blocked(cell))
    }

    /// Returns `true` if the cell is empty or its own value is not excluded
    /// by any rule (the self-contradiction check).
    #[must_use]
    pub fn is_cell_valid(&self, cell: CellId) -> bool {
        match self.value(cell) {
            None => true,
            Some(value) => !self.invalid_values(cell).contains(value),
        }
    }

    /// Returns `true` if no cell holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Returns `true` if every empty cell still has at least one candidate.
    #[must_use]
    pub fn is_possible(&self) -> bool {
        self.cell_ids()
            .all(|cell| self.value(cell).is_some() || !self.candidates(cell).is_empty())
    }

    /// Returns `true` if the board is possible and every cell is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_possible() && self.cell_ids().all(|cell| self.is_cell_valid(cell))
    }

    /// Returns `true` if every cell holds a value and none conflicts.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cell_ids()
            .all(|cell| self.value(cell).is_some() && self.is_cell_valid(cell))
    }

    /// Returns the values not yet placed anywhere in a group.
    #[must_use]
    pub fn group_missing_values(&self, group: GroupId) -> ValueSet {
        let placed: ValueSet = self
            .group(group)
            .cells()
            .iter()
            .filter_map(|&cell| self.value(cell))
            .collect();
        self.shape().value_set().difference(placed)
    }

    /// Returns the unfilled cells of a group, in scan order.
    #[must_use]
    pub fn unfilled_cells(&self, group: GroupId) -> Vec<CellId> {
        self.group(group)
            .cells()
            .iter()
            .copied()
            .filter(|&cell| self.value(cell).is_none())
            .collect()
    }

    /// Returns the cells of a group that still admit `value`, in scan order.
    #[must_use]
    pub fn candidate_cells(&self, group: GroupId, value: Value) -> Vec<CellId> {
        self.group(group)
            .cells()
            .iter()
            .copied()
            .filter(|&cell| self.candidates(cell).contains(value))
            .collect()
    }

    /// Returns, for each value still open in a group, the cells that admit
    /// it, sorted by owner count ascending (ties in value order).
    #[must_use]
    pub fn candidate_owners(&self, group: GroupId) -> Vec<CandidateOwners> {
        let mut owners: Vec<_> = self
            .shape()
            .values()
            .filter_map(|value| {
                let cells = self.candidate_cells(group, value);
                (!cells.is_empty()).then_some(CandidateOwners { value, cells })
            })
            .collect();
        owners.sort_by_key(|entry| entry.cells.len());
        owners
    }
}
