use deduku_core::{GridView, Move, Rationale, TechniqueKind};

use crate::technique::{BoxedTechnique, Technique};

/// A technique that fills cells with only one remaining candidate.
///
/// The first cell in index order whose candidate set has shrunk to a single
/// value is committed to that value. This is the cheapest and most certain
/// deduction, so it runs first in the pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct SolvedSquare {}

impl SolvedSquare {
    /// Creates a new `SolvedSquare` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for SolvedSquare {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::SolvedSquare
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_move(&self, grid: &GridView<'_>) -> Option<Move> {
        for cell in grid.cell_ids() {
            if let Some(value) = grid.candidates(cell).as_single() {
                return Some(Move::set(
                    TechniqueKind::SolvedSquare,
                    cell,
                    value,
                    Rationale::SolvedSquare { cell, value },
                ));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_fills_lone_candidate() {
        TechniqueTester::empty()
            .keep_only((4, 4), [5])
            .assert_finds_set(&SolvedSquare::new(), (4, 4), 5);
    }

    #[test]
    fn test_first_cell_in_index_order_wins() {
        TechniqueTester::empty()
            .keep_only((5, 5), [2])
            .keep_only((1, 1), [8])
            .assert_finds_set(&SolvedSquare::new(), (1, 1), 8);
    }

    #[test]
    fn test_fires_for_rule_confined_cell() {
        // A cell whose peers hold every value but 5 has one candidate left.
        let mut digits = [0u8; 81];
        for (col, value) in [(1, 1), (2, 2), (3, 3), (4, 4), (5, 6), (6, 7), (7, 8), (8, 9)] {
            digits[col] = value;
        }
        let board = deduku_core::Board::from_digits(&digits).unwrap();
        TechniqueTester::new(board).assert_finds_set(&SolvedSquare::new(), (0, 0), 5);
    }

    #[test]
    fn test_no_move_on_open_board() {
        TechniqueTester::empty().assert_no_move(&SolvedSquare::new());
    }
}
