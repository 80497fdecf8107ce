//! Value range of a numeric column
//!
//! Only finite values take part; NaN and infinities are counted as missing.

use serde::{Deserialize, Serialize};

/// Finite min/max of a numeric dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnRange {
    /// Number of finite values
    pub count: usize,
    /// Number of missing/non-finite values
    pub missing: usize,
    /// Minimum finite value
    pub min: f64,
    /// Maximum finite value
    pub max: f64,
}

impl ColumnRange {
    /// Compute the range of `data`, or `None` if it holds no finite value
    pub fn from_data(data: &[f64]) -> Option<Self> {
        let mut count = 0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for &x in data.iter().filter(|x| x.is_finite()) {
            count += 1;
            min = min.min(x);
            max = max.max(x);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            count,
            missing: data.len() - count,
            min,
            max,
        })
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether every finite value is equal
    pub fn is_degenerate(&self) -> bool {
        self.range() == 0.0
    }
}
