//! cface-table - In-memory tables for Chernoff face data
//!
//! This crate provides the tabular side of cface:
//!
//! - **DataTable**: ordered, named columns with a shared row count
//! - **DataColumn**: typed column storage with numeric detection
//! - **ColumnRange**: finite min/max of a numeric column
//! - **DataRow**: a borrowed view of one record, looked up by column name
//!
//! Reading files into a table is left to the caller.

pub mod error;
pub mod range;
pub mod table;

pub use error::*;
pub use range::*;
pub use table::*;
