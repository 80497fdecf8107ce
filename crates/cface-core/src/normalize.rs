//! Table normalization and feature assignment
//!
//! Numeric columns are rescaled to [0, 1] and bound, in column order, to
//! the next unassigned feature. Non-numeric columns pass through.

use cface_table::DataTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::feature::{Feature, FEATURE_COUNT};

/// Map a value into [0, 1] given its column's min and range
///
/// A constant column (range 0) maps every value to 1.
pub fn normalize_value(x: f64, old_min: f64, old_range: f64) -> f64 {
    if old_range == 0.0 {
        1.0
    } else {
        (x - old_min) / old_range
    }
}

/// One feature bound to one source column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureBinding {
    pub feature: Feature,
    pub column: String,
}

/// Ordered feature -> column assignment produced by normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMap {
    bindings: Vec<FeatureBinding>,
    #[serde(default)]
    unmapped: Vec<String>,
}

impl FeatureMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a feature to a column, replacing any earlier binding
    pub fn insert(&mut self, feature: Feature, column: impl Into<String>) {
        let column = column.into();
        match self.bindings.iter_mut().find(|b| b.feature == feature) {
            Some(binding) => binding.column = column,
            None => self.bindings.push(FeatureBinding { feature, column }),
        }
    }

    /// Builder-style `insert`
    pub fn with(mut self, feature: Feature, column: impl Into<String>) -> Self {
        self.insert(feature, column);
        self
    }

    /// Column bound to a feature
    pub fn get(&self, feature: Feature) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.feature == feature)
            .map(|b| b.column.as_str())
    }

    /// Whether a feature is bound
    pub fn contains(&self, feature: Feature) -> bool {
        self.get(feature).is_some()
    }

    /// Number of bound features (at most 15)
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no feature is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, &str)> + '_ {
        self.bindings.iter().map(|b| (b.feature, b.column.as_str()))
    }

    /// Bound features in insertion order
    pub fn features(&self) -> Vec<Feature> {
        self.bindings.iter().map(|b| b.feature).collect()
    }

    /// Numeric columns that were normalized but got no feature
    pub fn unmapped(&self) -> &[String] {
        &self.unmapped
    }
}

/// Normalize every numeric column of `table` and assign features
///
/// Returns a new table; `table` itself is left untouched. Missing values
/// (NaN) stay missing. A numeric column with no finite values is treated
/// like a constant column.
pub fn normalize_table(table: &DataTable) -> (DataTable, FeatureMap) {
    let mut normalized = table.clone();
    let mut feature_map = FeatureMap::new();
    let mut unassigned = Feature::ALL.into_iter();

    for column in normalized.columns_mut() {
        if !column.dtype().is_numeric() {
            debug!(column = column.name(), dtype = ?column.dtype(), "skipping non-numeric column");
            continue;
        }

        let (old_min, old_max) = column
            .data()
            .range()
            .map(|r| (r.min, r.max))
            .unwrap_or((0.0, 0.0));

        // Halve everything when max - min overflows; the ratio is unchanged
        let halve = !(old_max - old_min).is_finite();
        let (old_min, old_max) = if halve {
            (old_min / 2.0, old_max / 2.0)
        } else {
            (old_min, old_max)
        };
        let old_range = old_max - old_min;

        column.rescale(|x| {
            if !x.is_finite() {
                x
            } else if halve {
                normalize_value(x / 2.0, old_min, old_range)
            } else {
                normalize_value(x, old_min, old_range)
            }
        });

        match unassigned.next() {
            Some(feature) => feature_map.insert(feature, column.name()),
            None => {
                debug!(
                    column = column.name(),
                    "all {} features assigned, column left unmapped", FEATURE_COUNT
                );
                feature_map.unmapped.push(column.name().to_string());
            }
        }
    }

    debug!(
        mapped = feature_map.len(),
        unmapped = feature_map.unmapped.len(),
        "normalized table"
    );

    (normalized, feature_map)
}
