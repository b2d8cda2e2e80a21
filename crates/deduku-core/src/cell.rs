//! Cells and cell identifiers.

use derive_more::Display;

use crate::{GroupId, TechniqueKind, Value, ValueSet};

/// Identifies a cell by its row-major index into the board's cell array.
///
/// Cells are always referenced by id; the board is the sole owner of the
/// cell data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct CellId(usize);

impl CellId {
    /// Creates a cell id from a row-major index.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the row-major index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// How a cell's value came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Part of the original puzzle; the cell is immutable.
    Given,
    /// Deduced by the named technique.
    Deduced(TechniqueKind),
    /// Empty, or set outside the deduction pipeline.
    Unknown,
}

/// A single cell of a board.
///
/// A cell holds at most one value, remembers where that value came from, and
/// accumulates the candidate values that committed elimination moves have
/// ruled out. Rule-based exclusions are not stored here; they are recomputed
/// on demand by [`GridView`](crate::GridView).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) value: Option<Value>,
    pub(crate) origin: Origin,
    pub(crate) blocked: ValueSet,
    pub(crate) groups: [GroupId; 3],
}

impl Cell {
    pub(crate) fn new(value: Option<Value>, groups: [GroupId; 3]) -> Self {
        let origin = match value {
            Some(_) => Origin::Given,
            None => Origin::Unknown,
        };
        Self {
            value,
            origin,
            blocked: ValueSet::EMPTY,
            groups,
        }
    }

    /// Returns the committed value, if any.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<Value> {
        self.value
    }

    /// Returns where the cell's value came from.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns `true` if the cell is part of the original puzzle.
    #[inline]
    #[must_use]
    pub fn is_given(&self) -> bool {
        self.origin == Origin::Given
    }

    /// Returns the values ruled out by committed elimination moves.
    #[inline]
    #[must_use]
    pub const fn blocked(&self) -> ValueSet {
        self.blocked
    }

    /// Returns the groups containing this cell, in row, column, box order.
    #[inline]
    #[must_use]
    pub const fn groups(&self) -> [GroupId; 3] {
        self.groups
    }
}
