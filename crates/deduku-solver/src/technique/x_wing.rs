use deduku_core::{CellId, GridView, GroupId, Move, Rationale, TechniqueKind, ValueSet};
use tinyvec::TinyVec;

use crate::technique::{BoxedTechnique, Technique};

/// A technique that eliminates candidates using an X-Wing pattern.
///
/// When a value has exactly two homes in each of two rows and those homes
/// line up in the same two columns, the value is pinned to two of the four
/// corners, one per column; it can be removed from the columns' other
/// cells. Columns and rows swap roles for the perpendicular case. Rows are
/// scanned before columns; box groups do not participate.
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing {}

impl XWing {
    /// Creates a new `XWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for XWing {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::XWing
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_move(&self, grid: &GridView<'_>) -> Option<Move> {
        let size = grid.shape().size();
        for value in grid.shape().values() {
            // Rows pair through columns (perpendicular group slot 1), and
            // columns pair through rows (slot 0).
            for (orientation_start, perpendicular) in [(0, 1), (size, 0)] {
                let mut pairs: TinyVec<[(GroupId, (CellId, CellId)); 9]> = TinyVec::new();
                for i in 0..size {
                    let group = GroupId::new(orientation_start + i);
                    if let [a, b] = grid.candidate_cells(group, value).as_slice() {
                        pairs.push((group, (*a, *b)));
                    }
                }

                for (i, &(group_a, (a1, a2))) in pairs.iter().enumerate() {
                    let p1 = grid.cell_groups(a1)[perpendicular];
                    let p2 = grid.cell_groups(a2)[perpendicular];
                    for &(group_b, (b1, b2)) in &pairs[i + 1..] {
                        if grid.cell_groups(b1)[perpendicular] != p1
                            || grid.cell_groups(b2)[perpendicular] != p2
                        {
                            continue;
                        }
                        let targets: Vec<CellId> = grid
                            .group(p1)
                            .cells()
                            .iter()
                            .chain(grid.group(p2).cells())
                            .copied()
                            .filter(|&cell| {
                                !grid.group(group_a).contains(cell)
                                    && !grid.group(group_b).contains(cell)
                            })
                            .collect();
                        let applies = targets
                            .iter()
                            .any(|&cell| grid.candidates(cell).contains(value));
                        if applies {
                            return Some(Move::block(
                                TechniqueKind::XWing,
                                targets,
                                ValueSet::from_elem(value),
                                Rationale::XWing {
                                    value,
                                    corners: vec![a1, a2, b1, b2],
                                },
                            ));
                        }
                    }
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

    fn row_pair_board() -> TechniqueTester {
        // 1 appears exactly twice in rows 0 and 4, in columns 1 and 7.
        let mut tester = TechniqueTester::empty();
        for col in 0..9 {
            if col != 1 && col != 7 {
                tester = tester.block((0, col), [1]);
                tester = tester.block((4, col), [1]);
            }
        }
        tester
    }

    #[test]
    fn test_eliminates_along_columns() {
        let expected: Vec<_> = (0..9)
            .filter(|&row| row != 0 && row != 4)
            .map(|row| (row, 1))
            .chain((0..9).filter(|&row| row != 0 && row != 4).map(|row| (row, 7)))
            .collect();
        row_pair_board().assert_finds_block(&XWing::new(), &expected, &[1]);
    }

    #[test]
    fn test_corners_survive() {
        let tester = row_pair_board();
        let mv = tester.find(&XWing::new()).unwrap();
        let corners = [
            tester.at((0, 1)),
            tester.at((0, 7)),
            tester.at((4, 1)),
            tester.at((4, 7)),
        ];
        for corner in corners {
            assert!(!mv.target_cells().contains(&corner));
        }
    }

    #[test]
    fn test_misaligned_pairs_do_not_fire() {
        // Rows 0 and 4 both hold the value twice, but in different columns.
        let mut tester = TechniqueTester::empty();
        for col in 0..9 {
            if col != 1 && col != 7 {
                tester = tester.block((0, col), [1]);
            }
            if col != 2 && col != 7 {
                tester = tester.block((4, col), [1]);
            }
        }
        tester.assert_no_move(&XWing::new());
    }

    #[test]
    fn test_no_move_on_open_board() {
        TechniqueTester::empty().assert_no_move(&XWing::new());
    }
}
