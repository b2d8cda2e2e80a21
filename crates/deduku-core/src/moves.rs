//! Deduction moves.
//!
//! A [`Move`] is the unit of deduction produced by the technique pipeline:
//! either a single value placement or a candidate elimination across one or
//! more cells. Every move carries the technique that produced it and a
//! [`Rationale`] from which a human-readable explanation is rendered on
//! demand, once the final list of affected cells is known.

use crate::{Board, CellId, GroupId, Value, ValueSet};

/// Identifies a deduction technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechniqueKind {
    /// A cell with exactly one candidate.
    SolvedSquare,
    /// A value with exactly one owning cell within a group.
    HiddenSingle,
    /// `k` cells whose combined candidates are exactly `k` values.
    NakedSet,
    /// `k` values confined to exactly `k` cells.
    HiddenSet,
    /// A value confined to cells that share a second group.
    PointingPair,
    /// A rectangle of candidates across two parallel groups.
    XWing,
    /// A pivot-and-pincers elimination chain.
    YWing,
}

impl TechniqueKind {
    /// Returns the technique's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SolvedSquare => "Solved Square",
            Self::HiddenSingle => "Hidden Single",
            Self::NakedSet => "Naked Set",
            Self::HiddenSet => "Hidden Set",
            Self::PointingPair => "Pointing Pair",
            Self::XWing => "X-Wing",
            Self::YWing => "Y-Wing",
        }
    }
}

impl std::fmt::Display for TechniqueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a move does to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Commit a single value.
    Set {
        /// The cell to fill.
        cell: CellId,
        /// The value to place.
        value: Value,
    },
    /// Eliminate candidate values from one or more cells.
    Block {
        /// The targeted cells.
        cells: Vec<CellId>,
        /// The values to eliminate.
        values: ValueSet,
    },
}

/// The evidence behind a move, kept for on-demand explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rationale {
    /// A lone candidate in a cell.
    SolvedSquare {
        /// The deduced cell.
        cell: CellId,
        /// Its only candidate.
        value: Value,
    },
    /// A value with a single owner in a group.
    HiddenSingle {
        /// The owning cell.
        cell: CellId,
        /// The confined value.
        value: Value,
    },
    /// Cells whose combined candidates cover exactly themselves.
    NakedSet {
        /// The group the set was found in.
        group: GroupId,
        /// The covered values.
        values: ValueSet,
        /// The cells forming the set.
        owners: Vec<CellId>,
    },
    /// Values confined to exactly as many cells.
    HiddenSet {
        /// The group the set was found in.
        group: GroupId,
        /// The cells forming the set.
        owners: Vec<CellId>,
        /// The confined values.
        values: ValueSet,
    },
    /// A value confined to the intersection of two groups.
    PointingPair {
        /// The group the confinement was found in.
        group: GroupId,
        /// The group the elimination applies to.
        target: GroupId,
        /// The cells the value is confined to.
        owners: Vec<CellId>,
        /// The confined value.
        value: Value,
    },
    /// A candidate rectangle across two parallel groups.
    XWing {
        /// The eliminated value.
        value: Value,
        /// The four corner cells.
        corners: Vec<CellId>,
    },
    /// A pivot with two pincer cells.
    YWing {
        /// The eliminated value.
        value: Value,
        /// The pivot cell.
        pivot: CellId,
        /// The two pincer cells.
        pincers: [CellId; 2],
    },
}

/// A single deduction: a technique tag, an action, and its rationale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    technique: TechniqueKind,
    action: Action,
    rationale: Rationale,
}

impl Move {
    /// Creates a move.
    #[must_use]
    pub fn new(technique: TechniqueKind, action: Action, rationale: Rationale) -> Self {
        Self {
            technique,
            action,
            rationale,
        }
    }

    /// Creates a value placement move.
    #[must_use]
    pub fn set(technique: TechniqueKind, cell: CellId, value: Value, rationale: Rationale) -> Self {
        Self::new(technique, Action::Set { cell, value }, rationale)
    }

    /// Creates a candidate elimination move.
    #[must_use]
    pub fn block(
        technique: TechniqueKind,
        cells: Vec<CellId>,
        values: ValueSet,
        rationale: Rationale,
    ) -> Self {
        Self::new(technique, Action::Block { cells, values }, rationale)
    }

    /// Returns the technique that produced the move.
    #[inline]
    #[must_use]
    pub const fn technique(&self) -> TechniqueKind {
        self.technique
    }

    /// Returns the action the move performs.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// Returns the evidence behind the move.
    #[inline]
    #[must_use]
    pub const fn rationale(&self) -> &Rationale {
        &self.rationale
    }

    /// Returns the cells the move targets.
    ///
    /// For a `Block`, this is the requested target list; the cells actually
    /// changed at commit time may be a subset (see
    /// [`Board::apply_move`](crate::Board::apply_move)).
    #[must_use]
    pub fn target_cells(&self) -> Vec<CellId> {
        match &self.action {
            Action::Set { cell, .. } => vec![*cell],
            Action::Block { cells, .. } => cells.clone(),
        }
    }

    /// Renders a human-readable explanation of the move.
    ///
    /// `affected` is the final list of cells the move changed, supplied by
    /// the caller once it is known; the same move can therefore be described
    /// both before and after being committed.
    #[must_use]
    pub fn describe(&self, board: &Board, affected: &[CellId]) -> String {
        match &self.rationale {
            Rationale::SolvedSquare { cell, value } => {
                format!("Solved square {} with {value}", board.cell_name(*cell))
            }
            Rationale::HiddenSingle { cell, value } => {
                format!("Hidden single {} with {value}", board.cell_name(*cell))
            }
            Rationale::NakedSet {
                group,
                values,
                owners,
            } => format!(
                "Naked set ({}): values {} are confined to {}; removed from {}",
                board.group(*group).name(),
                value_list(*values),
                cell_list(board, owners),
                cell_list(board, affected),
            ),
            Rationale::HiddenSet {
                group,
                owners,
                values,
            } => format!(
                "Hidden set ({}): only {} can hold {}; all other candidates removed from {}",
                board.group(*group).name(),
                cell_list(board, owners),
                value_list(*values),
                cell_list(board, affected),
            ),
            Rationale::PointingPair {
                group,
                target,
                owners,
                value,
            } => format!(
                "Pointing pair ({}): {value} is confined to {}, all within {}; removed from {}",
                board.group(*group).name(),
                cell_list(board, owners),
                board.group(*target).name(),
                cell_list(board, affected),
            ),
            Rationale::XWing { value, corners } => format!(
                "X-Wing on {value} at {}; removed from {}",
                cell_list(board, corners),
                cell_list(board, affected),
            ),
            Rationale::YWing {
                value,
                pivot,
                pincers,
            } => format!(
                "Y-Wing: pivot {} with pincers {}; {value} removed from {}",
                board.cell_name(*pivot),
                cell_list(board, pincers),
                cell_list(board, affected),
            ),
        }
    }
}

fn cell_list(board: &Board, cells: &[CellId]) -> String {
    let names: Vec<_> = cells.iter().map(|&c| board.cell_name(c)).collect();
    names.join("/")
}

fn value_list(values: ValueSet) -> String {
    let rendered: Vec<_> = values.iter().map(|v| v.to_string()).collect();
    rendered.join(",")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_describe_set_move() {
        let board = Board::from_str(&"0".repeat(81)).unwrap();
        let cell = CellId::new(10);
        let value = Value::new(5);
        let mv = Move::set(
            TechniqueKind::SolvedSquare,
            cell,
            value,
            Rationale::SolvedSquare { cell, value },
        );
        assert_eq!(mv.describe(&board, &[cell]), "Solved square B2 with 5");
        assert_eq!(mv.target_cells(), vec![cell]);
    }

    #[test]
    fn test_describe_uses_final_affected_cells() {
        let board = Board::from_str(&"0".repeat(81)).unwrap();
        let owners = vec![CellId::new(0), CellId::new(1)];
        let values = ValueSet::from_iter([Value::new(4), Value::new(7)]);
        let mv = Move::block(
            TechniqueKind::NakedSet,
            (2..9).map(CellId::new).collect(),
            values,
            Rationale::NakedSet {
                group: GroupId::new(0),
                values,
                owners,
            },
        );
        let before = mv.describe(&board, &[CellId::new(2), CellId::new(3)]);
        let after = mv.describe(&board, &[CellId::new(2)]);
        assert!(before.contains("A3/A4"));
        assert!(after.ends_with("removed from A3"));
        assert!(before.contains("confined to A1/A2"));
    }
}
