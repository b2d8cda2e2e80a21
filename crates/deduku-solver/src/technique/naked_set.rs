use std::ops::ControlFlow;

use deduku_core::{CellId, GridView, Move, Rationale, TechniqueKind};

use crate::{
    cover,
    technique::{BoxedTechnique, Technique},
};

/// A technique that eliminates candidates using naked sets.
///
/// Within a group, `k` unfilled cells whose combined candidates span exactly
/// `k` values must absorb those values among themselves, so the values can
/// be removed from every other unfilled cell of the group. Cells are scanned
/// sorted by candidate count ascending (stable, so ties keep group order),
/// which surfaces small sets first.
///
/// A covering whose elimination would change nothing is skipped and the
/// scan continues; the technique never returns a vacuous move.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSet {}

impl NakedSet {
    /// Creates a new `NakedSet` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSet {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::NakedSet
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_move(&self, grid: &GridView<'_>) -> Option<Move> {
        for group in grid.group_ids() {
            let mut cells = grid.unfilled_cells(group);
            cells.sort_by_key(|&cell| grid.candidates(cell).len());

            let found = cover::find_covered_unions(
                &cells,
                |&cell| grid.candidates(cell),
                |union, chosen| {
                    let owners: Vec<CellId> = chosen.iter().map(|&i| cells[i]).collect();
                    let others: Vec<CellId> = cells
                        .iter()
                        .copied()
                        .filter(|cell| !owners.contains(cell))
                        .collect();
                    let applies = others
                        .iter()
                        .any(|&cell| !grid.candidates(cell).intersection(union).is_empty());
                    if applies {
                        ControlFlow::Break(Move::block(
                            TechniqueKind::NakedSet,
                            others,
                            union,
                            Rationale::NakedSet {
                                group,
                                values: union,
                                owners,
                            },
                        ))
                    } else {
                        ControlFlow::Continue(())
                    }
                },
            );
            if let ControlFlow::Break(mv) = found {
                return Some(mv);
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
    fn test_detects_pair_in_row() {
        // Two cells of row 0 hold exactly {4, 7}; the pair is blocked from
        // the remaining seven cells of the row.
        let tester = TechniqueTester::empty()
            .keep_only((0, 0), [4, 7])
            .keep_only((0, 3), [4, 7]);
        let expected: Vec<_> = [(0, 1), (0, 2), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8)].to_vec();
        tester.assert_finds_block(&NakedSet::new(), &expected, &[4, 7]);
    }

    #[test]
    fn test_detects_triple_with_pairwise_overlap() {
        // {1,2}, {2,3}, {1,3}: three cells spanning three values.
        let tester = TechniqueTester::empty()
            .keep_only((0, 0), [1, 2])
            .keep_only((0, 1), [2, 3])
            .keep_only((0, 2), [1, 3]);
        let expected: Vec<_> = (3..9).map(|col| (0usize, col)).collect();
        tester.assert_finds_block(&NakedSet::new(), &expected, &[1, 2, 3]);
    }

    #[test]
    fn test_vacuous_covering_is_skipped() {
        // The pair exists, but no other cell of the row still admits 4 or
        // 7, so the technique must keep scanning and find nothing rather
        // than return a no-op move.
        let mut tester = TechniqueTester::empty()
            .keep_only((0, 0), [4, 7])
            .keep_only((0, 3), [4, 7]);
        for col in [1, 2, 4, 5, 6, 7, 8] {
            tester = tester.block((0, col), [4, 7]);
        }
        tester.assert_no_move(&NakedSet::new());
    }

    #[test]
    fn test_no_move_on_open_board() {
        // Full groups cover trivially but eliminate nothing.
        TechniqueTester::empty().assert_no_move(&NakedSet::new());
    }
}
