//! Test utilities for technique implementations.
//!
//! This module provides [`TechniqueTester`], a small harness for setting up
//! candidate patterns and asserting on the move a technique produces.
//!
//! # Example
//!
//! ```
//! use deduku_solver::{technique::SolvedSquare, testing::TechniqueTester};
//!
//! TechniqueTester::empty()
//!     .keep_only((0, 0), [7])
//!     .assert_finds_set(&SolvedSquare::new(), (0, 0), 7);
//! ```

use std::str::FromStr as _;

use deduku_core::{Action, Board, CellId, Move, Value, ValueSet};

use crate::technique::Technique;

/// A test harness holding a board under construction and the assertions run
/// against a technique's first move.
///
/// All methods return `self` for chaining; assertion methods panic with
/// `#[track_caller]` locations on failure.
#[derive(Debug)]
pub struct TechniqueTester {
    board: Board,
}

impl TechniqueTester {
    /// Creates a tester from an existing board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Creates a tester from a digit string (whitespace ignored, non-digits
    /// read as blanks).
    ///
    /// # Panics
    ///
    /// Panics if the string does not describe a well-formed board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        match Board::from_str(s) {
            Ok(board) => Self::new(board),
            Err(err) => panic!("failed to parse board: {err}"),
        }
    }

    /// Creates a tester for an empty 9×9 board.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_str(&"0".repeat(81))
    }

    /// Returns the board under test.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at 0-based `(row, column)` coordinates.
    #[must_use]
    pub fn at(&self, (row, column): (usize, usize)) -> CellId {
        self.board.shape().cell_at(row, column)
    }

    /// Blocks the given candidate values at a cell.
    #[must_use]
    #[track_caller]
    pub fn block<I>(mut self, cell: (usize, usize), values: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let cell = self.at(cell);
        let values: ValueSet = values.into_iter().map(Value::new).collect();
        self.board.block_values(cell, values);
        self
    }

    /// Blocks every candidate of a cell except the given values.
    #[must_use]
    #[track_caller]
    pub fn keep_only<I>(mut self, cell: (usize, usize), values: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let cell = self.at(cell);
        let keep: ValueSet = values.into_iter().map(Value::new).collect();
        let excess = self.board.candidates_of(cell).difference(keep);
        if !excess.is_empty() {
            self.board.block_values(cell, excess);
        }
        self
    }

    /// Returns the technique's first move against the current board.
    #[must_use]
    pub fn find<T: Technique>(&self, technique: &T) -> Option<Move> {
        technique.find_move(&self.board.view())
    }

    /// Asserts the technique finds a `Set` of `value` at `cell`.
    #[track_caller]
    pub fn assert_finds_set<T: Technique>(
        self,
        technique: &T,
        cell: (usize, usize),
        value: u8,
    ) -> Self {
        let expected_cell = self.at(cell);
        let expected_value = Value::new(value);
        let Some(mv) = self.find(technique) else {
            panic!("expected {} to find a move", technique.name());
        };
        assert_eq!(mv.technique(), technique.kind());
        match mv.action() {
            Action::Set { cell, value } => {
                assert_eq!(
                    (*cell, *value),
                    (expected_cell, expected_value),
                    "expected {} to set {expected_value} at {}, found {value} at {}",
                    technique.name(),
                    self.board.cell_name(expected_cell),
                    self.board.cell_name(*cell),
                );
            }
            Action::Block { .. } => panic!(
                "expected {} to produce a Set move, found a Block",
                technique.name()
            ),
        }
        self
    }

    /// Asserts the technique finds a `Block` with exactly the given targets
    /// and values, in scan order.
    #[track_caller]
    pub fn assert_finds_block<T: Technique>(
        self,
        technique: &T,
        cells: &[(usize, usize)],
        values: &[u8],
    ) -> Self {
        let expected_cells: Vec<_> = cells.iter().map(|&c| self.at(c)).collect();
        let expected_values: ValueSet = values.iter().map(|&v| Value::new(v)).collect();
        let Some(mv) = self.find(technique) else {
            panic!("expected {} to find a move", technique.name());
        };
        assert_eq!(mv.technique(), technique.kind());
        match mv.action() {
            Action::Block { cells, values } => {
                assert_eq!(
                    cells, &expected_cells,
                    "{} targeted unexpected cells",
                    technique.name()
                );
                assert_eq!(
                    *values, expected_values,
                    "{} blocked unexpected values",
                    technique.name()
                );
            }
            Action::Set { .. } => panic!(
                "expected {} to produce a Block move, found a Set",
                technique.name()
            ),
        }
        self
    }

    /// Asserts the technique finds no move.
    #[track_caller]
    pub fn assert_no_move<T: Technique>(self, technique: &T) -> Self {
        if let Some(mv) = self.find(technique) {
            panic!(
                "expected {} to find nothing, found {mv:?}",
                technique.name()
            );
        }
        self
    }

    /// Finds the technique's move and commits it to the board.
    ///
    /// # Panics
    ///
    /// Panics if the technique finds no move.
    #[must_use]
    #[track_caller]
    pub fn apply_found<T: Technique>(mut self, technique: &T) -> Self {
        let Some(mv) = self.find(technique) else {
            panic!("expected {} to find a move", technique.name());
        };
        let _ = self.board.apply_move(&mv);
        self
    }
}
