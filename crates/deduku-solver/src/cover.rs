//! Covered-union enumeration.
//!
//! A *covered union* is a subset of items whose combined value-sets contain
//! exactly as many distinct values as the subset has items, meaning the
//! items are interchangeable only among themselves. Two techniques are built on this
//! one search with the item and value roles swapped: naked sets cover `k`
//! cells sharing exactly `k` candidate values, hidden sets cover `k` values
//! confined to exactly `k` cells.

use std::ops::ControlFlow;

use deduku_core::SmallSet;

/// Enumerates every covered union over `items`, depth-first in index order.
///
/// `union_value` maps an item to its value-set. Each covered union is
/// reported to `on_covered` as `(union, chosen indices)`; the callback
/// short-circuits the whole search by returning [`ControlFlow::Break`].
/// Supersets of a reported cover are pruned: once a subset covers, it is
/// not extended further.
///
/// The search is exhaustive: subsets are not limited to contiguous runs,
/// and every index (including the last) participates.
pub fn find_covered_unions<T, S, M, F, B>(
    items: &[T],
    mut union_value: M,
    mut on_covered: F,
) -> ControlFlow<B>
where
    M: FnMut(&T) -> SmallSet<S>,
    F: FnMut(SmallSet<S>, &[usize]) -> ControlFlow<B>,
{
    let mut chosen = Vec::with_capacity(items.len());
    search(
        items,
        &mut union_value,
        &mut on_covered,
        0,
        SmallSet::EMPTY,
        &mut chosen,
    )
}

fn search<T, S, M, F, B>(
    items: &[T],
    union_value: &mut M,
    on_covered: &mut F,
    start: usize,
    union: SmallSet<S>,
    chosen: &mut Vec<usize>,
) -> ControlFlow<B>
where
    M: FnMut(&T) -> SmallSet<S>,
    F: FnMut(SmallSet<S>, &[usize]) -> ControlFlow<B>,
{
    if !chosen.is_empty() && union.len() == chosen.len() {
        return on_covered(union, chosen);
    }
    for index in start..items.len() {
        chosen.push(index);
        let extended = union.union(union_value(&items[index]));
        search(items, union_value, on_covered, index + 1, extended, chosen)?;
        chosen.pop();
    }
    ControlFlow::Continue(())
}
