//! Normalization and feature assignment integration tests

mod common;

use cface_core::{descriptors_from_table, normalize_table, normalize_value, Feature, FEATURE_COUNT};
use cface_table::DataColumn;
use common::fixtures::{cars_table, init_tracing, two_column_table, wide_table};
use proptest::prelude::*;
use rstest::rstest;

fn column_values(table: &cface_table::DataTable, name: &str) -> Vec<f64> {
    table
        .column(name)
        .and_then(|c| c.to_f64())
        .unwrap_or_else(|| panic!("numeric column {}", name))
}

#[test]
fn test_two_column_example() {
    init_tracing();
    let (normalized, map) = normalize_table(&two_column_table());

    assert_eq!(column_values(&normalized, "A"), vec![1.0, 1.0]);
    assert_eq!(column_values(&normalized, "B"), vec![1.0, 0.0]);
    assert_eq!(
        map.iter().collect::<Vec<_>>(),
        vec![(Feature::NoseWidth, "A"), (Feature::NoseLength, "B")]
    );
}

#[rstest]
#[case(1, 1)]
#[case(14, 14)]
#[case(15, 15)]
#[case(16, 15)]
#[case(20, 15)]
fn test_feature_map_size(#[case] columns: usize, #[case] mapped: usize) {
    let (normalized, map) = normalize_table(&wide_table(columns));

    assert_eq!(map.len(), mapped);
    assert_eq!(map.unmapped().len(), columns - mapped);
    assert_eq!(normalized.num_columns(), columns);
}

#[test]
fn test_columns_beyond_fifteen_normalized_but_unmapped() {
    init_tracing();
    let (normalized, map) = normalize_table(&wide_table(20));

    let mapped: Vec<&str> = map.iter().map(|(_, column)| column).collect();
    let expected: Vec<String> = (0..FEATURE_COUNT).map(|i| format!("c{}", i)).collect();
    assert_eq!(mapped, expected);
    assert_eq!(map.features(), Feature::ALL.to_vec());
    assert_eq!(map.unmapped(), &["c15", "c16", "c17", "c18", "c19"]);

    for i in 15..20 {
        assert_eq!(column_values(&normalized, &format!("c{}", i)), vec![0.0, 1.0 / 3.0, 1.0]);
    }
}

#[test]
fn test_degenerate_column_maps_to_one() {
    let table = cface_table::DataTable::new()
        .with_column("flat", DataColumn::Float64(vec![5.0, 5.0, 5.0]))
        .unwrap();
    let (normalized, _) = normalize_table(&table);
    assert_eq!(column_values(&normalized, "flat"), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_extreme_spread_builds_faces() {
    let table = cface_table::DataTable::new()
        .with_column("x", DataColumn::Float64(vec![-1e308, 0.0, 1e308]))
        .unwrap();
    let (normalized, map) = normalize_table(&table);
    assert_eq!(column_values(&normalized, "x"), vec![0.0, 0.5, 1.0]);

    let faces = descriptors_from_table(&normalized, &map).unwrap();
    let widths: Vec<f64> = faces.iter().map(|f| f.nose_width).collect();
    assert_eq!(widths, vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_mixed_table_skips_non_numeric() {
    init_tracing();
    let source = cars_table();
    let (normalized, map) = normalize_table(&source);

    assert_eq!(map.get(Feature::NoseWidth), Some("mpg"));
    assert_eq!(map.get(Feature::NoseLength), Some("cyl"));
    assert_eq!(map.get(Feature::HeadWidth), Some("hp"));
    assert_eq!(map.get(Feature::HeadLength), Some("wt"));
    assert_eq!(map.len(), 4);

    assert_eq!(normalized.column("model"), source.column("model"));
    assert_eq!(normalized.column("manual"), source.column("manual"));
    assert_eq!(normalized.row_labels(), source.row_labels());
    assert_eq!(column_values(&normalized, "cyl"), vec![1.0, 0.0, 1.0, 1.0]);

    // The caller's table keeps its original values
    assert_eq!(source.column("cyl"), Some(&DataColumn::Int64(vec![6, 4, 6, 6])));
}

#[test]
fn test_feature_map_json_shape() {
    let (_, map) = normalize_table(&two_column_table());
    let json = serde_json::to_value(&map).unwrap();
    assert_eq!(json["bindings"][0]["feature"], "nose_width");
    assert_eq!(json["bindings"][0]["column"], "A");
}

proptest! {
    #[test]
    fn test_normalized_values_in_unit_interval(
        values in prop::collection::vec(
            prop_oneof![-1e6f64..1e6, prop::num::f64::NORMAL | prop::num::f64::ZERO],
            1..50,
        )
    ) {
        let table = cface_table::DataTable::new()
            .with_column("x", DataColumn::Float64(values))
            .unwrap();
        let (normalized, _) = normalize_table(&table);
        for v in column_values(&normalized, "x") {
            prop_assert!((0.0..=1.0).contains(&v), "value {} escaped [0, 1]", v);
        }
    }

    #[test]
    fn test_normalize_roundtrip(values in prop::collection::vec(-1e3f64..1e3, 2..30)) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        prop_assume!(range > 0.0);

        for &x in &values {
            let back = normalize_value(x, min, range) * range + min;
            prop_assert!((back - x).abs() < 1e-9, "{} came back as {}", x, back);
        }
    }

    #[test]
    fn test_constant_column_always_one(value in -1e6f64..1e6, len in 1usize..20) {
        let table = cface_table::DataTable::new()
            .with_column("c", DataColumn::Float64(vec![value; len]))
            .unwrap();
        let (normalized, _) = normalize_table(&table);
        prop_assert!(column_values(&normalized, "c").iter().all(|&v| v == 1.0));
    }
}
