use alloc::vec::Vec;
use core::iter::FusedIterator;

use super::weights::Weights;

/// One level of the bisection: the id range `(origin, end]` whose prefix counts at both ends are
/// known, and the child currently being carved off it.
#[derive(Clone, Copy, Debug)]
struct Frame {
    origin: usize,
    origin_rank: usize,
    end: usize,
    end_rank: usize,
    cursor: usize,
    cursor_rank: usize,
    span: usize,
}

impl Frame {
    const fn new(origin: usize, origin_rank: usize, end: usize, end_rank: usize) -> Self {
        Self {
            origin,
            origin_rank,
            end,
            end_rank,
            cursor: origin,
            cursor_rank: origin_rank,
            span: 1,
        }
    }
}

/// Yields `(rank, id)` for every live id in ascending order.
///
/// Each frame splits its range into the dyadic children `(o, o+1], (o+1, o+2], (o+2, o+4], ...`.
/// A child's end count takes a single weight lookup, and children holding no live id are skipped
/// without being entered, so the work is driven by the live ids rather than by the id space.
#[derive(Clone, Debug)]
pub(crate) struct LiveIds<'a> {
    weights: &'a Weights,
    bound: usize,
    stack: Vec<Frame>,
    remaining: usize,
    #[cfg(test)]
    lookups: usize,
    #[cfg(test)]
    frames: usize,
}

impl<'a> LiveIds<'a> {
    /// `bound` is the next unassigned id and `live` the number of live ids below it.
    pub(crate) fn new(weights: &'a Weights, bound: usize, live: usize) -> Self {
        let mut stack = Vec::new();
        if live > 0 {
            stack.push(Frame::new(0, 0, bound - 1, live));
        }
        Self {
            weights,
            bound,
            stack,
            remaining: live,
            #[cfg(test)]
            lookups: 0,
            #[cfg(test)]
            frames: 0,
        }
    }
}

impl Iterator for LiveIds<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        while let Some(frame) = self.stack.last_mut() {
            if frame.cursor >= frame.end {
                self.stack.pop();
                continue;
            }

            let start = frame.cursor;
            let start_rank = frame.cursor_rank;
            let end = frame.origin.saturating_add(frame.span);
            // Node `end` covers exactly `(origin, end]` until the child reaches past the frame.
            let end_rank = if end >= self.bound.min(frame.end) {
                frame.end_rank
            } else {
                #[cfg(test)]
                {
                    self.lookups += 1;
                }
                frame.origin_rank + self.weights.weight(end)
            };
            frame.cursor = end;
            frame.cursor_rank = end_rank;
            frame.span <<= 1;

            if start_rank == end_rank {
                continue;
            }
            if end - start == 1 {
                self.remaining -= 1;
                return Some((end_rank, end));
            }
            #[cfg(test)]
            {
                self.frames += 1;
            }
            self.stack.push(Frame::new(start, start_rank, end, end_rank));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LiveIds<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for LiveIds<'_> {}
