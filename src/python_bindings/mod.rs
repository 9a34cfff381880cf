//! Python bindings that expose [`PrefixSumIndex`] via PyO3.
//!
//! Python integers may be negative, so arguments arrive as `i64` and are
//! narrowed here; a negative size raises `ValueError` and a negative
//! position raises `IndexError`, matching the errors of the index itself.
use pyo3::{
    exceptions::{PyIndexError, PyValueError},
    prelude::*,
    types::PyModule,
};
use thiserror::Error;

use crate::index::{PrefixSumError, PrefixSumIndex};

/// Python-facing wrapper around a prefix-sum index.
#[pyclass(name = "PrefixSumIndex")]
#[derive(Debug)]
pub struct PyPrefixSumIndex {
    inner: PrefixSumIndex,
}

#[pymethods]
impl PyPrefixSumIndex {
    #[new]
    /// Create an index with `size` positions, all zero.
    pub fn new(size: i64) -> PyResult<Self> {
        let inner = PrefixSumIndex::new(checked_size(size)?)?;
        Ok(Self { inner })
    }

    /// Add `delta` to position `index` (1-based).
    pub fn update(&mut self, index: i64, delta: i64) -> PyResult<()> {
        let index = checked_position(index, 1, self.inner.size())?;
        Ok(self.inner.update(index, delta)?)
    }

    /// Sum of positions `1..=index`.
    pub fn prefix_sum(&self, index: i64) -> PyResult<i64> {
        let index = checked_position(index, 0, self.inner.size())?;
        Ok(self.inner.prefix_sum(index)?)
    }

    /// Sum of positions `low..=high`; zero when `low > high`.
    pub fn range_sum(&self, low: i64, high: i64) -> PyResult<i64> {
        if low > high {
            return Ok(0);
        }
        let size = self.inner.size();
        let low = checked_position(low, 1, size)?;
        let high = checked_position(high, 1, size)?;
        Ok(self.inner.range_sum(low, high)?)
    }

    /// Value at position `index`.
    pub fn get(&self, index: i64) -> PyResult<i64> {
        let index = checked_position(index, 1, self.inner.size())?;
        Ok(self.inner.get(index)?)
    }

    /// Number of positions.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Sum of all positions.
    pub fn total(&self) -> i64 {
        self.inner.total()
    }

    /// Values at positions `1..=size`.
    pub fn values(&self) -> Vec<i64> {
        self.inner.values()
    }
}

/// Argument rejected before it reaches the index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum ArgumentError {
    /// Size or position the index itself rejected.
    #[error(transparent)]
    Index(#[from] PrefixSumError),

    /// Negative position, which no `usize` can carry.
    #[error("index {index} outside valid range [{min}, {max}]")]
    NegativePosition { index: i64, min: usize, max: usize },
}

impl From<ArgumentError> for PyErr {
    fn from(err: ArgumentError) -> Self {
        match &err {
            ArgumentError::Index(inner) => inner.clone().into(),
            ArgumentError::NegativePosition { .. } => PyIndexError::new_err(err.to_string()),
        }
    }
}

impl From<PrefixSumError> for PyErr {
    fn from(err: PrefixSumError) -> Self {
        match err {
            PrefixSumError::InvalidSize | PrefixSumError::SizeTooLarge { .. } => {
                PyValueError::new_err(err.to_string())
            }
            PrefixSumError::InvalidIndex { .. } => PyIndexError::new_err(err.to_string()),
        }
    }
}

fn checked_size(size: i64) -> Result<usize, ArgumentError> {
    usize::try_from(size).map_err(|_| PrefixSumError::InvalidSize.into())
}

fn checked_position(index: i64, min: usize, max: usize) -> Result<usize, ArgumentError> {
    usize::try_from(index).map_err(|_| ArgumentError::NegativePosition { index, min, max })
}

/// Create Python module.
#[pymodule]
pub fn prefixsum_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPrefixSumIndex>()?;
    Ok(())
}
