#![forbid(unsafe_code)]

//! Fixed-width rendering with truncation and styling.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use termtab_style::{SharedStyle, StyleProvider};

use crate::table::Table;

const ELLIPSIS: &str = "...";

impl Table {
    /// Write the header line and every row, each ending in `\n`.
    ///
    /// Only the sink can fail. Its first error is returned unchanged and
    /// nothing further is written.
    pub fn print<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let _span = tracing::debug_span!(
            "table_print",
            columns = self.column_count(),
            rows = self.rows.len()
        )
        .entered();

        self.write_lines(|line| out.write_all(line.as_bytes()))
    }

    /// Render to a string, identical to what [`print`](Self::print) writes.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Feed each finished line, newline included, to `emit`.
    fn write_lines<E>(&self, mut emit: impl FnMut(&str) -> Result<(), E>) -> Result<(), E> {
        let widths = self.effective_widths();
        let mut line = String::new();

        for (column, header) in self.headers.iter().enumerate() {
            let text = truncate(header, self.max_widths[column]);
            self.push_cell(&mut line, &text, self.header_style.as_ref(), column, &widths);
        }
        line.push('\n');
        emit(&line)?;

        for (index, row) in self.rows.iter().enumerate() {
            line.clear();
            for (column, value) in row.iter().enumerate() {
                let text = truncate(value, self.max_widths[column]);
                let style = self.value_style(index, column, &text);
                self.push_cell(&mut line, &text, style, column, &widths);
            }
            line.push('\n');
            emit(&line)?;
        }
        Ok(())
    }

    /// Tracked widths clamped to each column's cap.
    fn effective_widths(&self) -> Vec<usize> {
        self.widths
            .iter()
            .zip(&self.max_widths)
            .map(|(&width, cap)| cap.map_or(width, |cap| width.min(cap)))
            .collect()
    }

    /// At most one style: non-zero, then row, then column.
    fn value_style(&self, row: usize, column: usize, text: &str) -> Option<&SharedStyle> {
        if text != "0" {
            if let Some(style) = &self.non_zero_styles[column] {
                return Some(style);
            }
        }
        self.row_styles
            .get(&row)
            .or(self.column_styles[column].as_ref())
    }

    /// Append `text`, already truncated, styled and padded to the column.
    fn push_cell(
        &self,
        line: &mut String,
        text: &str,
        style: Option<&SharedStyle>,
        column: usize,
        widths: &[usize],
    ) {
        match style {
            Some(style) => line.push_str(&style.apply(text)),
            None => line.push_str(text),
        }
        if column + 1 < self.column_count() {
            let pad = (widths[column] + self.padding).saturating_sub(text.chars().count());
            line.extend(std::iter::repeat_n(' ', pad));
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_lines(|line| f.write_str(line))
    }
}

/// Cut `text` to `cap` code points, ending in `...` when cut.
///
/// Caps of 3 or less leave only dots.
fn truncate(text: &str, cap: Option<usize>) -> Cow<'_, str> {
    let Some(cap) = cap else {
        return Cow::Borrowed(text);
    };
    if text.chars().count() <= cap {
        return Cow::Borrowed(text);
    }
    if cap <= ELLIPSIS.len() {
        return Cow::Owned(".".repeat(cap));
    }
    let mut cut: String = text.chars().take(cap - ELLIPSIS.len()).collect();
    cut.push_str(ELLIPSIS);
    Cow::Owned(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use crate::row;
    use crate::table::RowRef;
    use proptest::prelude::*;
    use termtab_style::{Color, Style, strip_ansi};

    fn plain(headers: &[&str]) -> Table {
        Table::with_config(headers.iter().copied(), TableConfig::default())
    }

    fn tag(name: &'static str) -> impl Fn(&str) -> String + Send + Sync {
        move |s: &str| format!("<{name}>{s}</{name}>")
    }

    #[test]
    fn worked_example() {
        let mut table = plain(&["key", "value"]);
        table.precision(2, [1]);
        table.row(row!["a", 1]);
        table.row(row!["b", 2.0]);
        table.row(row!["c", 0.001]);
        table.sort(&[1]).unwrap();
        assert_eq!(table.render(), "key  value\nc    0.00\na    1\nb    2.00\n");
    }

    #[test]
    fn empty_table_prints_header_only() {
        let table = plain(&["a", "bb"]);
        assert_eq!(table.render(), "a  bb\n");
    }

    #[test]
    fn no_columns_prints_blank_line() {
        let mut table = plain(&[]);
        table.row(row!["dropped"]);
        assert_eq!(table.render(), "\n\n");
    }

    #[test]
    fn padding_setting() {
        let mut table = plain(&["a", "b", "c"]);
        table.padding(1);
        table.row(row!["xx", "y", "z"]);
        assert_eq!(table.render(), "a  b c\nxx y z\n");
        table.padding(0);
        assert_eq!(table.render(), "a bc\nxxyz\n");
    }

    #[test]
    fn config_padding_is_used() {
        let mut table = Table::with_config(["a", "b"], TableConfig::default().with_padding(4));
        table.row(row![1, 2]);
        assert_eq!(table.render(), "a    b\n1    2\n");
    }

    #[test]
    fn short_row_pads_its_last_present_cell() {
        let mut table = plain(&["a", "b", "c"]);
        table.row(row!["x"]);
        assert_eq!(table.render(), "a  b  c\nx  \n");
    }

    #[test]
    fn header_truncation() {
        let mut table = plain(&["description", "n"]);
        table.max_width(6, [0]);
        table.row(row!["ok", 1]);
        assert_eq!(table.render(), "des...  n\nok      1\n");
    }

    #[test]
    fn value_truncation_counts_code_points() {
        let mut table = plain(&["k", "v"]);
        table.max_width(5, [1]);
        table.row(row!["a", "žluťoučký"]);
        table.row(row!["b", "short"]);
        assert_eq!(table.render(), "k  v\na  žl...\nb  short\n");
    }

    #[test]
    fn tiny_caps_render_dots() {
        assert_eq!(truncate("abcdef", Some(3)), "...");
        assert_eq!(truncate("abcdef", Some(2)), "..");
        assert_eq!(truncate("abcdef", Some(1)), ".");
        assert_eq!(truncate("abcdef", Some(4)), "a...");
        assert_eq!(truncate("abc", Some(3)), "abc");
        assert_eq!(truncate("abc", None), "abc");
    }

    #[test]
    fn render_does_not_lower_tracked_width() {
        let mut table = plain(&["k", "v"]);
        table.max_width(4, [0]);
        table.row(row!["abcdefgh", 1]);
        let _ = table.render();
        assert_eq!(table.column_width(0), Some(8));
    }

    #[test]
    fn header_style_wraps_truncated_text() {
        let mut table = plain(&["headline", "x"]);
        table.max_width(5, [0]);
        table.header_style(tag("h"));
        assert_eq!(table.render(), "<h>he...</h>  <h>x</h>\n");
    }

    #[test]
    fn styles_do_not_affect_padding() {
        let mut table = plain(&["name", "n"]);
        table.column_style(Style::new().fg(Color::Red), [0]);
        table.row(row!["ab", 1]);
        let out = table.render();
        assert_eq!(out, "name  n\n\x1b[31mab\x1b[0m    1\n");
        assert_eq!(strip_ansi(&out), "name  n\nab    1\n");
    }

    #[test]
    fn style_precedence() {
        let mut table = plain(&["k", "n"]);
        table.row(row!["a", 5]);
        table.row(row!["b", 0]);
        table.row(row!["c", 7]);
        table.column_style(tag("col"), [0, 1]);
        table.row_style(tag("row"), [0usize, 1]);
        table.non_zero_style(tag("nz"), [1]);
        let out = table.render();
        let lines: Vec<&str> = out.lines().collect();
        // Row 0: non-zero beats row beats column.
        assert_eq!(lines[1], "<row>a</row>  <nz>5</nz>");
        // Row 1: "0" skips the non-zero style, row style applies.
        assert_eq!(lines[2], "<row>b</row>  <row>0</row>");
        // Row 2: no row style.
        assert_eq!(lines[3], "<col>c</col>  <nz>7</nz>");
    }

    #[test]
    fn non_zero_style_skips_only_literal_zero() {
        let mut table = plain(&["n"]);
        table.non_zero_style(tag("nz"), [0]);
        table.row(row![0]);
        table.row(row![0.0]);
        table.row(row![""]);
        assert_eq!(table.render(), "n\n0\n<nz>0.00</nz>\n<nz></nz>\n");
    }

    #[test]
    fn row_style_applies_to_rows_added_later() {
        let mut table = plain(&["k"]);
        table.row_style(tag("r"), [1usize]);
        table.row(row!["a"]);
        table.row(row!["b"]);
        assert_eq!(table.render(), "k\na\n<r>b</r>\n");
    }

    #[test]
    fn row_style_follows_position_after_sort() {
        let mut table = plain(&["k"]);
        table.row(row!["b"]);
        table.row(row!["a"]);
        table.row_style(tag("r"), [RowRef::Last]);
        table.sort(&[0]).unwrap();
        assert_eq!(table.render(), "k\na\n<r>b</r>\n");
    }

    #[test]
    fn print_matches_render() {
        let mut table = plain(&["k", "v"]);
        table.row(row!["a", true]);
        table.row(row!["b", false]);
        let mut out = Vec::new();
        table.print(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), table.render());
        assert_eq!(table.render(), "k  v\na  yes\nb  \n");
    }

    struct FailAfter {
        remaining: usize,
        written: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_error_stops_rendering() {
        let mut table = plain(&["k"]);
        table.row(row!["a"]);
        table.row(row!["b"]);
        let mut sink = FailAfter {
            remaining: 2,
            written: Vec::new(),
        };
        let err = table.print(&mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.written, b"k\na\n");
    }

    proptest! {
        #[test]
        fn render_is_idempotent(
            cells in proptest::collection::vec(("[a-z0-9]{0,8}", any::<i32>(), any::<f64>()), 0..12),
            cap in 0usize..10,
            keys in proptest::collection::vec(0usize..3, 0..3),
        ) {
            let mut table = plain(&["text", "int", "float"]);
            table.max_width(cap, [0, 2]);
            table.non_zero_style(tag("nz"), [1]);
            for (text, int, float) in &cells {
                table.row(row![text.as_str(), *int, *float]);
            }
            table.sort(&keys).unwrap();
            prop_assert_eq!(table.render(), table.render());
        }

        #[test]
        fn capped_cells_have_exact_width(text in "\\PC{0,30}", cap in 1usize..12) {
            let cut = truncate(&text, Some(cap));
            let len = text.chars().count();
            if len > cap {
                prop_assert_eq!(cut.chars().count(), cap);
                if cap > 3 {
                    prop_assert!(cut.ends_with("..."));
                    let kept: String = text.chars().take(cap - 3).collect();
                    prop_assert!(cut.starts_with(kept.as_str()));
                }
            } else {
                prop_assert_eq!(cut.as_ref(), text.as_str());
            }
        }

        #[test]
        fn lines_align_without_styles(
            rows in proptest::collection::vec(("[a-z]{0,10}", "[a-z]{0,10}"), 1..8),
        ) {
            let mut table = plain(&["left", "right"]);
            for (a, b) in &rows {
                table.row(row![a.as_str(), b.as_str()]);
            }
            let width = table.column_width(0).unwrap() + 2;
            let out = table.render();
            for line in out.lines() {
                let second: String = line.chars().skip(width).collect();
                let first: String = line.chars().take(width).collect();
                prop_assert_eq!(first.chars().count(), width);
                prop_assert!(!second.starts_with(' '));
            }
        }
    }
}
