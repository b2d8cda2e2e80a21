use std::ops::ControlFlow;

use deduku_core::{
    CellId, GridView, Move, Rationale, SetSemantics, SmallSet, TechniqueKind, Value, ValueSet,
};

use crate::{
    cover,
    technique::{BoxedTechnique, Technique},
};

/// A technique that eliminates candidates using hidden sets.
///
/// Within a group, `k` values that can only live in the same `k` cells pin
/// those cells down: every other candidate can be removed from exactly those
/// cells. This is the dual of [`NakedSet`](crate::technique::NakedSet):
/// the same covering search runs over value-to-cells entries instead of
/// cells.
///
/// Entries are scanned sorted by owner count ascending (ties in value
/// order); a covering whose cells carry nothing outside the covered values
/// is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSet {}

impl HiddenSet {
    /// Creates a new `HiddenSet` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

/// Semantics for cell slots within a single group (0-based scan positions).
#[derive(Debug)]
struct SlotSemantics;

impl SetSemantics for SlotSemantics {
    type Value = u8;

    fn to_index(value: u8) -> u8 {
        value
    }

    fn from_index(index: u8) -> u8 {
        index
    }
}

type SlotSet = SmallSet<SlotSemantics>;

fn slots_of(members: &[CellId], cells: &[CellId]) -> SlotSet {
    members
        .iter()
        .enumerate()
        .filter(|(_, member)| cells.contains(member))
        .map(|(slot, _)| {
            #[expect(clippy::cast_possible_truncation)]
            let slot = slot as u8;
            slot
        })
        .collect()
}

fn cells_of(members: &[CellId], slots: SlotSet) -> Vec<CellId> {
    slots
        .iter()
        .map(|slot| members[usize::from(slot)])
        .collect()
}

impl Technique for HiddenSet {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::HiddenSet
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_move(&self, grid: &GridView<'_>) -> Option<Move> {
        for group in grid.group_ids() {
            let members = grid.group(group).cells();
            let entries: Vec<(Value, SlotSet)> = grid
                .candidate_owners(group)
                .into_iter()
                .map(|owners| (owners.value, slots_of(members, &owners.cells)))
                .collect();

            let found = cover::find_covered_unions(
                &entries,
                |entry| entry.1,
                |union, chosen| {
                    let owners = cells_of(members, union);
                    let covered_values: ValueSet = chosen.iter().map(|&i| entries[i].0).collect();
                    let removals = grid.shape().value_set().difference(covered_values);
                    let applies = owners
                        .iter()
                        .any(|&cell| !grid.candidates(cell).difference(covered_values).is_empty());
                    if applies {
                        ControlFlow::Break(Move::block(
                            TechniqueKind::HiddenSet,
                            owners.clone(),
                            removals,
                            Rationale::HiddenSet {
                                group,
                                owners,
                                values: covered_values,
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
    fn test_detects_hidden_pair_in_row() {
        // 4 and 7 can only live in the first two cells of row 0; every
        // other candidate is stripped from exactly those two cells.
        let mut tester = TechniqueTester::empty();
        for col in 2..9 {
            tester = tester.block((0, col), [4, 7]);
        }
        tester.assert_finds_block(
            &HiddenSet::new(),
            &[(0, 0), (0, 1)],
            &[1, 2, 3, 5, 6, 8, 9],
        );
    }

    #[test]
    fn test_skips_when_cells_hold_nothing_else() {
        // 4 and 7 are confined to two cells that already hold only those
        // two values; stripping "everything else" would change nothing.
        // The pair spans two boxes so no complementary set forms either.
        let mut tester = TechniqueTester::empty()
            .keep_only((0, 0), [4, 7])
            .keep_only((0, 3), [4, 7]);
        for col in [1, 2, 4, 5, 6, 7, 8] {
            tester = tester.block((0, col), [4, 7]);
        }
        tester.assert_no_move(&HiddenSet::new());
    }

    #[test]
    fn test_no_move_on_open_board() {
        // On an open board the only covering is a whole group, which pins
        // nothing down.
        TechniqueTester::empty().assert_no_move(&HiddenSet::new());
    }
}
