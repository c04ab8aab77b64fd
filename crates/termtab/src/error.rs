#![forbid(unsafe_code)]

//! Errors raised by table operations.
//!
//! Rendering errors come from the output sink and are returned as
//! [`std::io::Error`] unchanged; this type covers the table's own checks.

use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TableError {
    /// A sort key names a column the table does not have.
    SortColumnOutOfRange { column: usize, column_count: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::SortColumnOutOfRange {
                column,
                column_count,
            } => write!(
                f,
                "sort column {column} is out of range for a table with {column_count} columns"
            ),
        }
    }
}

impl std::error::Error for TableError {}
