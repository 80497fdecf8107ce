//! Row-to-descriptor extraction
//!
//! Mapped features read their column from the row; everything else keeps
//! its default. The resulting values go through the same validation as any
//! other descriptor.

use cface_table::{DataRow, DataTable};
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::FaceResult;
use crate::face::FaceDescriptor;
use crate::normalize::FeatureMap;

/// Build a descriptor from one table row
///
/// A mapped column that is absent from the row, or not numeric, falls back
/// to the feature default.
pub fn descriptor_from_row(row: &DataRow<'_>, feature_map: &FeatureMap) -> FaceResult<FaceDescriptor> {
    FaceDescriptor::from_fn(|feature| {
        feature_map
            .get(feature)
            .and_then(|column| row.value(column))
            .unwrap_or_else(|| feature.default_value())
    })
}

/// Build a descriptor from column-keyed values
pub fn descriptor_from_values(
    values: &HashMap<String, f64>,
    feature_map: &FeatureMap,
) -> FaceResult<FaceDescriptor> {
    FaceDescriptor::from_fn(|feature| {
        feature_map
            .get(feature)
            .and_then(|column| values.get(column).copied())
            .unwrap_or_else(|| feature.default_value())
    })
}

/// Build one descriptor per table row, in row order
///
/// Fails on the first row holding an out-of-range value.
pub fn descriptors_from_table(
    table: &DataTable,
    feature_map: &FeatureMap,
) -> FaceResult<Vec<FaceDescriptor>> {
    #[cfg(feature = "parallel")]
    {
        (0..table.num_rows())
            .into_par_iter()
            .filter_map(|index| table.row(index))
            .map(|row| descriptor_from_row(&row, feature_map))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        table
            .rows()
            .map(|row| descriptor_from_row(&row, feature_map))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaceError;
    use crate::feature::Feature;
    use cface_table::DataColumn;

    #[test]
    fn test_empty_row_and_map_give_defaults() {
        let face = descriptor_from_values(&HashMap::new(), &FeatureMap::new()).unwrap();
        assert_eq!(face, FaceDescriptor::default());
    }

    #[test]
    fn test_mapped_values_read_from_row() {
        let table = DataTable::new()
            .with_column("a", DataColumn::Float64(vec![0.1, 0.9]))
            .unwrap()
            .with_column("b", DataColumn::Float64(vec![0.2, 0.8]))
            .unwrap();
        let map = FeatureMap::new()
            .with(Feature::EyeAngle, "a")
            .with(Feature::PupilSize, "b");

        let face = descriptor_from_row(&table.row(1).unwrap(), &map).unwrap();
        assert_eq!(face.eye_angle, 0.9);
        assert_eq!(face.pupil_size, 0.8);
        assert_eq!(face.nose_width, 0.5);
    }

    #[test]
    fn test_missing_column_falls_back_to_default() {
        let table = DataTable::new()
            .with_column("a", DataColumn::String(vec!["x".into()]))
            .unwrap();
        let map = FeatureMap::new()
            .with(Feature::HeadWidth, "a")
            .with(Feature::HeadLength, "gone");

        let face = descriptor_from_row(&table.row(0).unwrap(), &map).unwrap();
        assert_eq!(face, FaceDescriptor::default());
    }

    #[test]
    fn test_out_of_range_row_value() {
        let mut values = HashMap::new();
        values.insert("raw".to_string(), 42.0);
        let map = FeatureMap::new().with(Feature::MouthLength, "raw");

        let err = descriptor_from_values(&values, &map).unwrap_err();
        assert_eq!(
            err,
            FaceError::OutOfRange {
                feature: "mouth_length".to_string(),
                value: 42.0
            }
        );
    }

    #[test]
    fn test_descriptors_from_table_in_row_order() {
        let table = DataTable::new()
            .with_column("a", DataColumn::Float64(vec![0.0, 0.5, 1.0]))
            .unwrap();
        let map = FeatureMap::new().with(Feature::NoseWidth, "a");

        let faces = descriptors_from_table(&table, &map).unwrap();
        let widths: Vec<f64> = faces.iter().map(|f| f.nose_width).collect();
        assert_eq!(widths, vec![0.0, 0.5, 1.0]);
    }
}
