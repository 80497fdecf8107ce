//! Shared tables for integration tests

use cface_table::{DataColumn, DataTable};

/// Install a test-writer subscriber so debug logs show up on failure
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Two integer columns, the first of them constant
#[allow(dead_code)]
pub fn two_column_table() -> DataTable {
    DataTable::new()
        .with_column("A", DataColumn::Int64(vec![1, 1]))
        .and_then(|t| t.with_column("B", DataColumn::Int64(vec![2, 1])))
        .expect("valid fixture")
}

/// `n` numeric columns `c0..c{n-1}` over three rows
#[allow(dead_code)]
pub fn wide_table(n: usize) -> DataTable {
    let mut table = DataTable::new();
    for i in 0..n {
        let base = i as f64;
        table
            .push_column(format!("c{}", i), DataColumn::Float64(vec![base, base + 1.0, base + 3.0]))
            .expect("valid fixture");
    }
    table
}

/// A small mixed-type dataset with a name column and row labels
#[allow(dead_code)]
pub fn cars_table() -> DataTable {
    DataTable::new()
        .with_column(
            "model",
            DataColumn::String(vec![
                "Mazda RX4".into(),
                "Datsun 710".into(),
                "Hornet 4 Drive".into(),
                "Valiant".into(),
            ]),
        )
        .and_then(|t| t.with_column("mpg", DataColumn::Float64(vec![21.0, 22.8, 21.4, 18.1])))
        .and_then(|t| t.with_column("cyl", DataColumn::Int64(vec![6, 4, 6, 6])))
        .and_then(|t| t.with_column("manual", DataColumn::Bool(vec![true, true, false, false])))
        .and_then(|t| t.with_column("hp", DataColumn::Int64(vec![110, 93, 110, 105])))
        .and_then(|t| t.with_column("wt", DataColumn::Float64(vec![2.62, 2.32, 3.215, 3.46])))
        .and_then(|t| t.with_row_labels(["rx4", "710", "hornet", "valiant"]))
        .expect("valid fixture")
}
