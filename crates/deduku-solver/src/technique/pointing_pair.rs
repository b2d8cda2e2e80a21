use deduku_core::{CellId, GridView, GroupId, Move, Rationale, TechniqueKind, ValueSet};
use tinyvec::ArrayVec;

use crate::technique::{BoxedTechnique, Technique};

/// A technique that eliminates a candidate confined to a group overlap.
///
/// When every cell of a group that still admits a value also belongs to one
/// second group, the value must land inside the overlap, so it can be
/// removed from the second group's other cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointingPair {}

impl PointingPair {
    /// Creates a new `PointingPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for PointingPair {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::PointingPair
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_move(&self, grid: &GridView<'_>) -> Option<Move> {
        for group in grid.group_ids() {
            for owners in grid.candidate_owners(group) {
                let value = owners.value;
                let owners = owners.cells;
                let Some((&first, rest)) = owners.split_first() else {
                    continue;
                };
                // A cell belongs to three groups, so at most two besides the
                // origin can contain every owner.
                let shared: ArrayVec<[GroupId; 3]> = grid
                    .cell_groups(first)
                    .into_iter()
                    .filter(|&candidate| {
                        candidate != group
                            && rest
                                .iter()
                                .all(|&cell| grid.cell_groups(cell).contains(&candidate))
                    })
                    .collect();

                for target in shared {
                    let targets: Vec<CellId> = grid
                        .group(target)
                        .cells()
                        .iter()
                        .copied()
                        .filter(|cell| !owners.contains(cell))
                        .collect();
                    let applies = targets
                        .iter()
                        .any(|&cell| grid.candidates(cell).contains(value));
                    if applies {
                        return Some(Move::block(
                            TechniqueKind::PointingPair,
                            targets,
                            ValueSet::from_elem(value),
                            Rationale::PointingPair {
                                group,
                                target,
                                owners,
                                value,
                            },
                        ));
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

    #[test]
    fn test_box_confinement_points_along_row() {
        // In box 0, 5 survives only in the top row; it leaves through row 0.
        let mut tester = TechniqueTester::empty();
        for row in 1..3 {
            for col in 0..3 {
                tester = tester.block((row, col), [5]);
            }
        }
        let expected: Vec<_> = (3..9).map(|col| (0usize, col)).collect();
        tester.assert_finds_block(&PointingPair::new(), &expected, &[5]);
    }

    #[test]
    fn test_row_confinement_points_into_box() {
        // In row 4, 2 survives only inside box 4's span (columns 3-5).
        let mut tester = TechniqueTester::empty();
        for col in [0, 1, 2, 6, 7, 8] {
            tester = tester.block((4, col), [2]);
        }
        let expected = [(3, 3), (3, 4), (3, 5), (5, 3), (5, 4), (5, 5)];
        tester.assert_finds_block(&PointingPair::new(), &expected, &[2]);
    }

    #[test]
    fn test_vacuous_confinement_is_skipped() {
        // Confined in the box and already absent from the rest of the row.
        let mut tester = TechniqueTester::empty();
        for row in 1..3 {
            for col in 0..3 {
                tester = tester.block((row, col), [5]);
            }
        }
        for col in 3..9 {
            tester = tester.block((0, col), [5]);
        }
        tester.assert_no_move(&PointingPair::new());
    }

    #[test]
    fn test_no_move_on_open_board() {
        TechniqueTester::empty().assert_no_move(&PointingPair::new());
    }
}
