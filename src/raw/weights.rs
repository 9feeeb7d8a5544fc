use core::iter::successors;

use hashbrown::HashMap;

/// Returns the lowest set bit of `node`, or zero for zero.
#[inline]
pub(crate) const fn lowest_bit(node: usize) -> usize {
    node & node.wrapping_neg()
}

/// Returns the highest set bit of `node`, or zero for zero.
#[inline]
pub(crate) const fn highest_bit(node: usize) -> usize {
    if node == 0 { 0 } else { 1 << (usize::BITS - 1 - node.leading_zeros()) }
}

/// Upward walk used by updates: `node`, `node + lowest_bit(node)`, ... while below `bound`.
fn ancestors(node: usize, bound: usize) -> impl Iterator<Item = usize> {
    debug_assert!(node != 0, "`ancestors()` - `node` is zero!");
    successors(Some(node), |&n| n.checked_add(lowest_bit(n))).take_while(move |&n| n < bound)
}

/// Downward walk used by queries: `node`, `node - lowest_bit(node)`, ... while above `stop`.
///
/// The nodes visited partition `(stop, node]` whenever `stop` lies on the walk, which holds for
/// `stop == 0` and for `stop == (node + 1) & node`.
fn partitions(node: usize, stop: usize) -> impl Iterator<Item = usize> {
    successors(Some(node), |&n| Some(n - lowest_bit(n))).take_while(move |&n| n > stop)
}

/// A sparse Fenwick tree over insertion ids.
///
/// Node `i` holds the number of live ids in `(i - lowest_bit(i), i]`. Nodes whose count drops to
/// zero are removed, so the table only grows with the number of live ids and their ancestors.
#[derive(Clone, Debug, Default)]
pub(crate) struct Weights {
    counts: HashMap<usize, usize>,
}

impl Weights {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.counts.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.counts.shrink_to_fit();
    }

    pub(crate) fn clear(&mut self) {
        self.counts.clear();
    }

    /// Returns the count stored at `node`; absent nodes count zero.
    #[inline]
    pub(crate) fn weight(&self, node: usize) -> usize {
        self.counts.get(&node).copied().unwrap_or(0)
    }

    fn sum(&self, node: usize, stop: usize) -> usize {
        partitions(node, stop).map(|n| self.weight(n)).sum()
    }

    /// Returns the number of live ids in `[1, id]`.
    pub(crate) fn prefix_sum(&self, id: usize) -> usize {
        self.sum(id, 0)
    }

    /// Records a new live id. `id` must be greater than every id pushed before it.
    ///
    /// Only the nodes below `id` inside its own range are summed, so the cost is bounded by the
    /// trailing zeros of `id` rather than by its magnitude.
    pub(crate) fn push(&mut self, id: usize) {
        debug_assert!(id != 0, "`Weights::push()` - `id` is zero!");
        let covered = self.sum(id - 1, id & (id - 1)) + 1;
        self.counts.insert(id, covered);
    }

    /// Retires a live id, decrementing every ancestor below `bound` (the next unassigned id).
    pub(crate) fn retire(&mut self, id: usize, bound: usize) {
        for node in ancestors(id, bound) {
            let count = self.counts.get_mut(&node).expect("`Weights::retire()` - ancestor of a live id is missing!");
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&node);
            }
        }
    }

    /// Returns the id holding 1-based `rank`, or `None` if fewer than `rank` ids are live.
    pub(crate) fn select(&self, rank: usize, bound: usize) -> Option<usize> {
        if rank == 0 {
            return None;
        }
        let mut node = 0;
        let mut remaining = rank;
        let mut step = highest_bit(bound.saturating_sub(1));
        while step > 0 {
            let next = node + step;
            if next < bound {
                let weight = self.weight(next);
                if weight < remaining {
                    node = next;
                    remaining -= weight;
                }
            }
            step >>= 1;
        }
        let id = node + 1;
        (id < bound).then_some(id)
    }
}
