use deduku_core::{GridView, Move, Rationale, TechniqueKind};

use crate::technique::{BoxedTechnique, Technique};

/// A technique that fills cells holding a group's only home for a value.
///
/// Groups are scanned rows, then columns, then boxes; values ascending. The
/// first `(group, value)` pair with exactly one owning cell commits that
/// value, even if the cell itself still has several candidates.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenSingle {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::HiddenSingle
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_move(&self, grid: &GridView<'_>) -> Option<Move> {
        for group in grid.group_ids() {
            for value in grid.shape().values() {
                if let [cell] = grid.candidate_cells(group, value).as_slice() {
                    return Some(Move::set(
                        TechniqueKind::HiddenSingle,
                        *cell,
                        value,
                        Rationale::HiddenSingle { cell: *cell, value },
                    ));
                }
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
    fn test_single_home_in_row() {
        // Remove 5 from every cell of row 0 except (0, 3).
        let mut tester = TechniqueTester::empty();
        for col in 0..9 {
            if col != 3 {
                tester = tester.block((0, col), [5]);
            }
        }
        tester.assert_finds_set(&HiddenSingle::new(), (0, 3), 5);
    }

    #[test]
    fn test_single_home_in_column() {
        let mut tester = TechniqueTester::empty();
        for row in 0..9 {
            if row != 4 {
                tester = tester.block((row, 5), [7]);
            }
        }
        tester.assert_finds_set(&HiddenSingle::new(), (4, 5), 7);
    }

    #[test]
    fn test_single_home_in_box() {
        // Box 4 covers rows 3-5, columns 3-5; confine 9 to its center.
        let mut tester = TechniqueTester::empty();
        for row in 3..6 {
            for col in 3..6 {
                if (row, col) != (4, 4) {
                    tester = tester.block((row, col), [9]);
                }
            }
        }
        tester.assert_finds_set(&HiddenSingle::new(), (4, 4), 9);
    }

    #[test]
    fn test_cell_may_keep_other_candidates() {
        let mut tester = TechniqueTester::empty();
        for col in 1..9 {
            tester = tester.block((0, col), [3]);
        }
        // (0, 0) still has all nine candidates; 3 is merely confined to it.
        assert_eq!(tester.board().candidates_of(tester.at((0, 0))).len(), 9);
        tester.assert_finds_set(&HiddenSingle::new(), (0, 0), 3);
    }

    #[test]
    fn test_no_move_on_open_board() {
        TechniqueTester::empty().assert_no_move(&HiddenSingle::new());
    }
}
