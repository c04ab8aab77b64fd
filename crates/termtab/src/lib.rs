#![forbid(unsafe_code)]

//! Aligned, optionally colorized plain-text tables for command-line programs.
//!
//! - [`Table`] - headers, rows and per-column formatting state
//! - [`Value`] - the closed set of cell values a row may carry
//! - [`Fields`] - records that can be listed as `(name, value)` rows
//! - [`TableConfig`] - construction defaults, injectable or process-wide
//!
//! # Example
//! ```
//! use termtab::{Table, row};
//!
//! let mut table = Table::new(["key", "value"]);
//! table.precision(2, [1]);
//! table.row(row!["a", 1]);
//! table.row(row!["b", 2.0]);
//! table.row(row!["c", 0.001]);
//! table.sort(&[1]).unwrap();
//!
//! assert_eq!(
//!     table.render(),
//!     "key  value\nc    0.00\na    1\nb    2.00\n",
//! );
//! ```

pub mod config;
pub mod error;
pub mod fields;
mod render;
pub mod table;
pub mod value;

pub use config::{TableConfig, default_header_style, set_default_header_style};
pub use error::TableError;
pub use fields::Fields;
pub use table::{RowRef, Table};
pub use value::Value;

pub use termtab_style::{
    Attrs, Code, Color, SharedStyle, Style, StyleProvider, UnknownColor, shared, strip_ansi,
    visible_len,
};

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// ```
/// use termtab::{Value, row};
///
/// let values = row!["disk", 42u64, 0.5, true, None::<&str>];
/// assert_eq!(values[1], Value::Uint(42));
/// assert_eq!(values[4], Value::Null);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
