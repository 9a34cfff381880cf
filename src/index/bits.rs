//! Lowest-set-bit arithmetic for 1-based binary-indexed layouts.
//!
//! Slot `i` covers the `lowbit(i)` positions ending at `i`. The update walk
//! climbs to every slot covering a position; the query walk descends through
//! disjoint slots that tile a prefix.

use std::iter::FusedIterator;

/// Lowest set bit of `i` (`i & -i`). Zero maps to zero.
#[inline]
pub fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Slots visited when adding to position `start` in a tree of `limit`
/// positions: `start, start + lowbit(start), ...` while `<= limit`.
///
/// Yields nothing for `start == 0`, since slot 0 never participates.
pub fn ascending(start: usize, limit: usize) -> Ascending {
    Ascending {
        current: start,
        limit,
    }
}

/// Slots visited when summing the prefix `1..=start`:
/// `start, start - lowbit(start), ...` while `> 0`.
pub fn descending(start: usize) -> Descending {
    Descending { current: start }
}

/// Iterator returned by [`ascending`].
#[derive(Debug, Clone)]
pub struct Ascending {
    current: usize,
    limit: usize,
}

impl Iterator for Ascending {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == 0 || self.current > self.limit {
            return None;
        }
        let slot = self.current;
        // Overflow means there is no further slot to visit.
        self.current = slot.checked_add(lowbit(slot)).unwrap_or(0);
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current == 0 || self.current > self.limit {
            return (0, Some(0));
        }
        // Each step moves the lowest set bit up by at least one position.
        let bound = (usize::BITS - self.current.trailing_zeros()) as usize;
        (1, Some(bound))
    }
}

impl FusedIterator for Ascending {}

/// Iterator returned by [`descending`].
#[derive(Debug, Clone)]
pub struct Descending {
    current: usize,
}

impl Iterator for Descending {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == 0 {
            return None;
        }
        let slot = self.current;
        self.current = slot - lowbit(slot);
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let steps = self.current.count_ones() as usize;
        (steps, Some(steps))
    }
}

impl ExactSizeIterator for Descending {}

impl FusedIterator for Descending {}
