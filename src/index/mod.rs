//! Binary-indexed prefix-sum accumulator.
//!
//! [`PrefixSumIndex`] owns the tree; [`bits`] holds the lowest-set-bit
//! walks shared by its update and query loops.

pub mod bits;
mod prefix_sum;
#[cfg(feature = "visualize")]
mod snapshot;

pub use prefix_sum::{PrefixSumError, PrefixSumIndex};
#[cfg(feature = "visualize")]
pub use snapshot::IndexSnapshot;
