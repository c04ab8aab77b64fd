#![forbid(unsafe_code)]

//! The table model: headers, rows and per-column formatting state.

use std::cmp::Ordering;
use std::collections::HashMap;

use termtab_style::{SharedStyle, StyleProvider};

use crate::config::TableConfig;
use crate::error::TableError;
use crate::fields::Fields;
use crate::value::Value;

/// Selects a row for [`Table::row_style`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RowRef {
    /// A row position. It does not have to exist yet.
    Index(usize),
    /// Whichever row is last when the style is set.
    Last,
}

impl From<usize> for RowRef {
    fn from(index: usize) -> Self {
        RowRef::Index(index)
    }
}

/// A table of stringified rows with per-column formatting.
///
/// Values are converted to text when their row is added, so precision must be
/// configured before rows are added. Styling, truncation and padding are
/// applied only when rendering.
///
/// Not synchronized: all mutation goes through `&mut self`.
#[derive(Clone, Debug)]
pub struct Table {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
    pub(crate) widths: Vec<usize>,
    pub(crate) max_widths: Vec<Option<usize>>,
    precision: Vec<Option<usize>>,
    default_precision: usize,
    pub(crate) padding: usize,
    pub(crate) header_style: Option<SharedStyle>,
    pub(crate) column_styles: Vec<Option<SharedStyle>>,
    pub(crate) row_styles: HashMap<usize, SharedStyle>,
    pub(crate) non_zero_styles: Vec<Option<SharedStyle>>,
    sort_keys: Vec<usize>,
}

impl Table {
    /// Create a table with the given headers and the process-wide defaults.
    ///
    /// The number of headers fixes the number of columns.
    #[must_use]
    pub fn new<I>(headers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::with_config(headers, TableConfig::global())
    }

    /// Create a table with an explicit config.
    #[must_use]
    pub fn with_config<I>(headers: I, config: TableConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let columns = headers.len();
        Self {
            widths: headers.iter().map(|h| h.chars().count()).collect(),
            headers,
            rows: Vec::new(),
            max_widths: vec![None; columns],
            precision: vec![None; columns],
            default_precision: config.precision,
            padding: config.padding,
            header_style: config.header_style,
            column_styles: vec![None; columns],
            row_styles: HashMap::new(),
            non_zero_styles: vec![None; columns],
            sort_keys: Vec::new(),
        }
    }

    /// Number of columns, fixed at construction.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows as stored, after stringification.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest header or value seen in `column`, in code points.
    ///
    /// This is the tracked width; a max-width cap only affects rendering.
    #[must_use]
    pub fn column_width(&self, column: usize) -> Option<usize> {
        self.widths.get(column).copied()
    }

    /// Columns used by the most recent [`sort`](Self::sort).
    #[must_use]
    pub fn sort_keys(&self) -> &[usize] {
        &self.sort_keys
    }

    /// Style every header cell.
    pub fn header_style(&mut self, style: impl StyleProvider + 'static) -> &mut Self {
        self.header_style = Some(SharedStyle::new(style));
        self
    }

    /// Set the number of spaces after every column but the last.
    pub fn padding(&mut self, padding: usize) -> &mut Self {
        self.padding = padding;
        self
    }

    /// Cap the rendered width of the listed columns. Longer content is cut and
    /// ends in `...`. A width of 0 removes the cap.
    pub fn max_width(
        &mut self,
        chars: usize,
        columns: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        let cap = (chars > 0).then_some(chars);
        for column in self.in_range(columns, "max_width") {
            self.max_widths[column] = cap;
        }
        self
    }

    /// Set the fractional digits used for float values in the listed columns.
    /// A precision of 0 means unset, so the table default applies.
    ///
    /// Applies to rows added afterwards.
    pub fn precision(
        &mut self,
        digits: usize,
        columns: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        let digits = (digits > 0).then_some(digits);
        for column in self.in_range(columns, "precision") {
            self.precision[column] = digits;
        }
        self
    }

    /// Style every value cell in the listed columns.
    pub fn column_style(
        &mut self,
        style: impl StyleProvider + 'static,
        columns: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        let style = SharedStyle::new(style);
        for column in self.in_range(columns, "column_style") {
            self.column_styles[column] = Some(style.clone());
        }
        self
    }

    /// Style value cells in the listed columns whose text is not `"0"`.
    pub fn non_zero_style(
        &mut self,
        style: impl StyleProvider + 'static,
        columns: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        let style = SharedStyle::new(style);
        for column in self.in_range(columns, "non_zero_style") {
            self.non_zero_styles[column] = Some(style.clone());
        }
        self
    }

    /// Style every value cell in the listed rows.
    ///
    /// [`RowRef::Last`] is resolved now, not at render time. It is skipped
    /// when the table has no rows.
    pub fn row_style<R>(
        &mut self,
        style: impl StyleProvider + 'static,
        rows: impl IntoIterator<Item = R>,
    ) -> &mut Self
    where
        R: Into<RowRef>,
    {
        let style = SharedStyle::new(style);
        for row in rows {
            let index = match row.into() {
                RowRef::Index(index) => index,
                RowRef::Last => match self.rows.len().checked_sub(1) {
                    Some(last) => last,
                    None => {
                        tracing::debug!("row_style: no last row in an empty table, skipped");
                        continue;
                    }
                },
            };
            self.row_styles.insert(index, style.clone());
        }
        self
    }

    /// Add a row. Values past the column count are dropped.
    pub fn row(&mut self, values: impl IntoIterator<Item = Value>) -> &mut Self {
        let columns = self.column_count();
        let mut row = Vec::with_capacity(columns);
        let mut dropped = 0usize;
        for (i, value) in values.into_iter().enumerate() {
            if i >= columns {
                dropped += 1;
                continue;
            }
            let precision = self.precision[i].unwrap_or(self.default_precision);
            let text = value.to_cell(precision).into_owned();
            self.widths[i] = self.widths[i].max(text.chars().count());
            row.push(text);
        }
        if dropped > 0 {
            tracing::debug!(dropped, columns, "row: values past the last column dropped");
        }
        self.rows.push(row);
        self
    }

    /// Add one `(name, value)` row per field of `record`.
    pub fn record(&mut self, record: &impl Fields) -> &mut Self {
        for (name, value) in record.fields() {
            self.row([Value::from(name), value]);
        }
        self
    }

    /// Stable sort of all rows by the listed columns, compared as strings.
    ///
    /// Earlier columns take precedence; rows equal on every listed column keep
    /// their relative order. Numbers compare as text, so `"10"` sorts before
    /// `"2"`. Fails without reordering if a column is out of range.
    pub fn sort(&mut self, columns: &[usize]) -> Result<(), TableError> {
        let column_count = self.column_count();
        if let Some(&column) = columns.iter().find(|&&c| c >= column_count) {
            return Err(TableError::SortColumnOutOfRange {
                column,
                column_count,
            });
        }
        tracing::trace!(keys = ?columns, rows = self.rows.len(), "sort");
        self.sort_keys = columns.to_vec();
        let keys = &self.sort_keys;
        self.rows.sort_by(|a, b| compare_rows(a, b, keys));
        Ok(())
    }

    /// Filter `columns` down to valid indices, logging the rest.
    fn in_range(
        &self,
        columns: impl IntoIterator<Item = usize>,
        setter: &'static str,
    ) -> Vec<usize> {
        let column_count = self.column_count();
        columns
            .into_iter()
            .filter(|&column| {
                let ok = column < column_count;
                if !ok {
                    tracing::debug!(setter, column, column_count, "column out of range, skipped");
                }
                ok
            })
            .collect()
    }
}

fn compare_rows(a: &[String], b: &[String], keys: &[usize]) -> Ordering {
    keys.iter()
        .map(|&k| cell(a, k).cmp(cell(b, k)))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// A row's cell, or `""` past the end of a short row.
fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map_or("", String::as_str)
}
