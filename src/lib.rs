//! # Binary-Indexed Prefix Sums
//!
//! A fixed-size accumulator over N integer positions that supports point
//! updates and range-sum queries in O(log N).
//!
//! ## Layout
//!
//! Positions are 1-based. Slot `i` of the internal tree stores the sum of
//! the `lowbit(i)` positions ending at `i`, where `lowbit(i) = i & -i`:
//!
//! 1. **Update**: walk upward, `i += lowbit(i)`, touching every slot whose
//!    range covers the position
//! 2. **Prefix query**: walk downward, `i -= lowbit(i)`, summing disjoint
//!    slot ranges that tile `1..=i`
//! 3. **Range query**: `prefix(high) - prefix(low - 1)`
//!
//! Both walks visit at most ⌊log₂ N⌋ + 1 slots.
//!
//! ## Usage Example
//!
//! ```
//! use prefixsum::PrefixSumIndex;
//!
//! let mut index = PrefixSumIndex::new(10)?;
//! for i in 1..=10 {
//!     index.update(i, i as i64)?;
//! }
//! assert_eq!(index.prefix_sum(5)?, 15);
//! assert_eq!(index.range_sum(3, 7)?, 25);
//! assert_eq!(index.get(4)?, 4);
//! # Ok::<(), prefixsum::PrefixSumError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod index; // Binary-indexed accumulator and traversal helpers
/// Python bindings for exposing the index to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use index::{PrefixSumError, PrefixSumIndex};
#[cfg(feature = "visualize")]
pub use index::IndexSnapshot;
