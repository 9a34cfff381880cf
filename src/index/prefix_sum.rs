use thiserror::Error;
use tracing::{debug, trace};

use super::bits::{ascending, descending, lowbit};

/// Error type returned by [`PrefixSumIndex`] construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixSumError {
    /// Index was built with zero positions.
    #[error("size must be greater than zero")]
    InvalidSize,

    /// Index needs more slots than can be addressed or allocated.
    #[error("size {size} exceeds addressable capacity")]
    SizeTooLarge {
        /// Number of positions that was requested.
        size: usize,
    },

    /// Position fell outside the domain accepted by the operation.
    #[error("index {index} outside valid range [{min}, {max}]")]
    InvalidIndex {
        /// Position that was requested.
        index: usize,
        /// Smallest accepted position.
        min: usize,
        /// Largest accepted position.
        max: usize,
    },
}

/// Prefix-sum accumulator over N integer positions, indexed `1..=N`.
///
/// Every position starts at zero. Point updates and prefix/range queries run
/// in O(log N). Arithmetic wraps, so a range sum is exact whenever its true
/// value fits in `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSumIndex {
    /// Slot 0 is unused; slot `i` sums the `lowbit(i)` positions ending at `i`.
    tree: Vec<i64>,
}

impl PrefixSumIndex {
    /// Create an index with `size` positions, all zero.
    pub fn new(size: usize) -> Result<Self, PrefixSumError> {
        if size == 0 {
            return Err(PrefixSumError::InvalidSize);
        }
        let mut tree = allocate_tree(size)?;
        tree.resize(size + 1, 0);
        debug!(size, "allocating prefix-sum index");
        Ok(Self { tree })
    }

    /// Build an index whose positions `1..=values.len()` hold `values`.
    ///
    /// Runs in O(N): each slot is finalised before it is pushed into its
    /// parent `i + lowbit(i)`.
    pub fn from_values(values: &[i64]) -> Result<Self, PrefixSumError> {
        if values.is_empty() {
            return Err(PrefixSumError::InvalidSize);
        }
        let size = values.len();
        let mut tree = allocate_tree(size)?;
        tree.push(0);
        tree.extend_from_slice(values);

        for slot in 1..=size {
            if let Some(parent) = parent_slot(slot, size) {
                tree[parent] = tree[parent].wrapping_add(tree[slot]);
            }
        }

        debug!(size, "built prefix-sum index from values");
        Ok(Self { tree })
    }

    /// Number of logical positions N.
    #[inline]
    pub fn size(&self) -> usize {
        self.tree.len() - 1
    }

    /// Add `delta` to position `index` (`1..=N`).
    pub fn update(&mut self, index: usize, delta: i64) -> Result<(), PrefixSumError> {
        self.check_position(index)?;
        trace!(index, delta, "update");
        let size = self.size();
        for slot in ascending(index, size) {
            self.tree[slot] = self.tree[slot].wrapping_add(delta);
        }
        Ok(())
    }

    /// Sum of positions `1..=index`; `index` may be `0..=N`, and 0 yields 0.
    pub fn prefix_sum(&self, index: usize) -> Result<i64, PrefixSumError> {
        if index > self.size() {
            return Err(PrefixSumError::InvalidIndex {
                index,
                min: 0,
                max: self.size(),
            });
        }
        Ok(self.prefix_unchecked(index))
    }

    /// Sum of positions `low..=high`.
    ///
    /// An empty range (`low > high`) sums to zero for any `low`/`high`.
    /// Otherwise both ends must lie in `1..=N`.
    pub fn range_sum(&self, low: usize, high: usize) -> Result<i64, PrefixSumError> {
        if low > high {
            return Ok(0);
        }
        self.check_position(low)?;
        self.check_position(high)?;
        Ok(self
            .prefix_unchecked(high)
            .wrapping_sub(self.prefix_unchecked(low - 1)))
    }

    /// Value currently stored at position `index` (`1..=N`).
    pub fn get(&self, index: usize) -> Result<i64, PrefixSumError> {
        self.range_sum(index, index)
    }

    /// Sum of all N positions.
    pub fn total(&self) -> i64 {
        self.prefix_unchecked(self.size())
    }

    /// Logical values at positions `1..=N`, in order.
    ///
    /// Runs in O(N) by undoing the [`from_values`](Self::from_values) build:
    /// slots are visited from N down to 1, so each slot is subtracted from
    /// its parent while it still holds the value the build pushed.
    pub fn values(&self) -> Vec<i64> {
        let size = self.size();
        let mut values = self.tree.clone();
        for slot in (1..=size).rev() {
            if let Some(parent) = parent_slot(slot, size) {
                values[parent] = values[parent].wrapping_sub(values[slot]);
            }
        }
        values.remove(0);
        values
    }

    fn prefix_unchecked(&self, index: usize) -> i64 {
        descending(index).fold(0i64, |sum, slot| sum.wrapping_add(self.tree[slot]))
    }

    fn check_position(&self, index: usize) -> Result<(), PrefixSumError> {
        if index == 0 || index > self.size() {
            return Err(PrefixSumError::InvalidIndex {
                index,
                min: 1,
                max: self.size(),
            });
        }
        Ok(())
    }
}

/// Empty vector with room for `size + 1` slots, or `SizeTooLarge` when that
/// many slots cannot be addressed or allocated.
fn allocate_tree(size: usize) -> Result<Vec<i64>, PrefixSumError> {
    let slots = size
        .checked_add(1)
        .ok_or(PrefixSumError::SizeTooLarge { size })?;
    let mut tree = Vec::new();
    tree.try_reserve_exact(slots)
        .map_err(|_| PrefixSumError::SizeTooLarge { size })?;
    Ok(tree)
}

/// Slot that also covers `slot`, if it lies within `size`.
#[inline]
fn parent_slot(slot: usize, size: usize) -> Option<usize> {
    slot.checked_add(lowbit(slot))
        .filter(|&parent| parent <= size)
}
