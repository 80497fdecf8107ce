//! Tables, columns and row views

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{TableError, TableResult};
use crate::range::ColumnRange;

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Float64,
    Int64,
    Bool,
    String,
}

impl ColumnType {
    /// Check if this is a numeric type
    ///
    /// Booleans are not numeric: a flag column never drives a facial feature.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float64 | ColumnType::Int64)
    }
}

/// A column of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataColumn {
    Float64(Vec<f64>),
    Int64(Vec<i64>),
    Bool(Vec<bool>),
    String(Vec<String>),
}

impl DataColumn {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            DataColumn::Float64(_) => ColumnType::Float64,
            DataColumn::Int64(_) => ColumnType::Int64,
            DataColumn::Bool(_) => ColumnType::Bool,
            DataColumn::String(_) => ColumnType::String,
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        match self {
            DataColumn::Float64(v) => v.len(),
            DataColumn::Int64(v) => v.len(),
            DataColumn::Bool(v) => v.len(),
            DataColumn::String(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert to f64 (for numeric types)
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            DataColumn::Float64(v) => Some(v.clone()),
            DataColumn::Int64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            _ => None,
        }
    }

    /// Get a single value as f64 (for numeric types)
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        match self {
            DataColumn::Float64(v) => v.get(index).copied(),
            DataColumn::Int64(v) => v.get(index).map(|&x| x as f64),
            _ => None,
        }
    }

    /// Finite min/max of a numeric column
    pub fn range(&self) -> Option<ColumnRange> {
        self.to_f64().and_then(|values| ColumnRange::from_data(&values))
    }
}

/// A named column inside a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    data: DataColumn,
}

impl Column {
    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column data
    pub fn data(&self) -> &DataColumn {
        &self.data
    }

    /// Data type of the column
    pub fn dtype(&self) -> ColumnType {
        self.data.dtype()
    }

    /// Rewrite every value of a numeric column through `f`
    ///
    /// The column becomes `Float64` and keeps its length. Returns `false`
    /// and leaves the column untouched if it is not numeric.
    pub fn rescale<F: FnMut(f64) -> f64>(&mut self, f: F) -> bool {
        match self.data.to_f64() {
            Some(values) => {
                self.data = DataColumn::Float64(values.into_iter().map(f).collect());
                true
            }
            None => false,
        }
    }
}

/// An ordered set of equally long, uniquely named columns
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTable {
    columns: Vec<Column>,
    num_rows: usize,
    row_labels: Option<Vec<String>>,
}

impl DataTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, builder style
    pub fn with_column(mut self, name: impl Into<String>, data: DataColumn) -> TableResult<Self> {
        self.push_column(name, data)?;
        Ok(self)
    }

    /// Append a column
    ///
    /// The first column fixes the row count unless row labels already did.
    pub fn push_column(&mut self, name: impl Into<String>, data: DataColumn) -> TableResult<()> {
        let name = name.into();
        if self.column_index(&name).is_some() {
            return Err(TableError::DuplicateColumn(name));
        }

        if self.columns.is_empty() && self.row_labels.is_none() {
            self.num_rows = data.len();
        } else if data.len() != self.num_rows {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.num_rows,
                actual: data.len(),
            });
        }

        self.columns.push(Column { name, data });
        Ok(())
    }

    /// Attach row labels (one per row)
    pub fn with_row_labels<I, S>(mut self, labels: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if self.columns.is_empty() {
            self.num_rows = labels.len();
        } else if labels.len() != self.num_rows {
            return Err(TableError::LengthMismatch {
                column: "row labels".to_string(),
                expected: self.num_rows,
                actual: labels.len(),
            });
        }
        self.row_labels = Some(labels);
        Ok(self)
    }

    /// All columns in declared order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to the columns
    ///
    /// Column contents can only change through [`Column::rescale`], which
    /// keeps lengths intact.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Get a column's data by name
    pub fn column(&self, name: &str) -> Option<&DataColumn> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.data)
    }

    /// Get a column by position
    pub fn column_at(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Row labels, if any were attached
    pub fn row_labels(&self) -> Option<&[String]> {
        self.row_labels.as_deref()
    }

    /// Label of a row: the attached label, or its index
    pub fn row_label(&self, index: usize) -> Option<String> {
        if index >= self.num_rows {
            return None;
        }
        match &self.row_labels {
            Some(labels) => labels.get(index).cloned(),
            None => Some(index.to_string()),
        }
    }

    /// Borrow a single row
    pub fn row(&self, index: usize) -> Option<DataRow<'_>> {
        (index < self.num_rows).then_some(DataRow { table: self, index })
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = DataRow<'_>> + '_ {
        (0..self.num_rows).map(move |index| DataRow { table: self, index })
    }
}

/// A borrowed view of one record in a table
#[derive(Debug, Clone, Copy)]
pub struct DataRow<'a> {
    table: &'a DataTable,
    index: usize,
}

impl<'a> DataRow<'a> {
    /// Position of the row in its table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Row label (attached label or the index as text)
    pub fn label(&self) -> String {
        self.table
            .row_label(self.index)
            .unwrap_or_else(|| self.index.to_string())
    }

    /// Numeric value of `column` in this row
    ///
    /// `None` when the column is absent or not numeric. Missing numeric
    /// values come back as NaN.
    pub fn value(&self, column: &str) -> Option<f64> {
        self.table
            .column(column)
            .and_then(|data| data.get_f64(self.index))
    }

    /// All numeric values of the row keyed by column name
    pub fn to_map(&self) -> HashMap<String, f64> {
        self.table
            .columns
            .iter()
            .filter_map(|c| c.data.get_f64(self.index).map(|v| (c.name.clone(), v)))
            .collect()
    }
}
