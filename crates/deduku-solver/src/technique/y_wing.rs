use deduku_core::{GridView, Move, Rationale, TechniqueKind, ValueSet};

use crate::technique::{BoxedTechnique, Technique};

/// A technique that eliminates a candidate using a Y-Wing chain.
///
/// A pivot cell with candidates `{a, b}` sees two pincers: one sharing a
/// group with the pivot and holding `{b, c}`, the other reached through a
/// different pivot group and holding `{a, c}`. Whichever value the pivot
/// takes, one pincer becomes `c`, so `c` cannot survive in any cell that
/// sees both pincers.
///
/// Pincers must share exactly one group with the pivot; the pivot and the
/// pincers themselves are never elimination targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct YWing {}

impl YWing {
    /// Creates a new `YWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for YWing {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::YWing
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_move(&self, grid: &GridView<'_>) -> Option<Move> {
        for pivot in grid.cell_ids() {
            let pivot_candidates = grid.candidates(pivot);
            if pivot_candidates.len() != 2 {
                continue;
            }
            for first_group in grid.cell_groups(pivot) {
                for &pincer_bc in grid.group(first_group).cells() {
                    if pincer_bc == pivot {
                        continue;
                    }
                    let bc_candidates = grid.candidates(pincer_bc);
                    if bc_candidates.len() != 2
                        || grid.shared_group_count(pivot, pincer_bc) != 1
                    {
                        continue;
                    }
                    let Some(b) = pivot_candidates.intersection(bc_candidates).as_single() else {
                        continue;
                    };
                    let Some(a) = pivot_candidates.difference(ValueSet::from_elem(b)).as_single()
                    else {
                        continue;
                    };
                    let Some(c) = bc_candidates.difference(ValueSet::from_elem(b)).as_single()
                    else {
                        continue;
                    };
                    let ac_candidates = ValueSet::from_iter([a, c]);

                    for second_group in grid.cell_groups(pivot) {
                        if second_group == first_group {
                            continue;
                        }
                        for &pincer_ac in grid.group(second_group).cells() {
                            if pincer_ac == pivot
                                || grid.candidates(pincer_ac) != ac_candidates
                                || grid.shared_group_count(pivot, pincer_ac) != 1
                            {
                                continue;
                            }
                            let found = grid.cell_ids().find(|&victim| {
                                victim != pivot
                                    && victim != pincer_bc
                                    && victim != pincer_ac
                                    && grid.candidates(victim).contains(c)
                                    && grid.cells_share_group(victim, pincer_bc)
                                    && grid.cells_share_group(victim, pincer_ac)
                            });
                            if let Some(victim) = found {
                                return Some(Move::block(
                                    TechniqueKind::YWing,
                                    vec![victim],
                                    ValueSet::from_elem(c),
                                    Rationale::YWing {
                                        value: c,
                                        pivot,
                                        pincers: [pincer_bc, pincer_ac],
                                    },
                                ));
                            }
                        }
                    }
                }
            }
        }
        None
    }
}
