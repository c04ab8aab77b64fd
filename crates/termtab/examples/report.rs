//! Report Example - Styled Key/Value and Multi-Column Tables
//!
//! Prints a sorted service report with a bold header, red non-zero error
//! counts and a highlighted totals row, then a key/value table built from a
//! record. The service column color can be picked by name through
//! `REPORT_ACCENT` (for example `hi-green`).
//!
//! Run: `cargo run -p termtab --example report`

use std::io::{self, Write};

use termtab::{Color, RowRef, Style, Table, impl_fields, row, set_default_header_style, shared};

struct Build {
    version: &'static str,
    commit: String,
    dirty: bool,
    size_mb: f64,
    workers: usize,
}

impl_fields!(Build {
    version,
    commit,
    dirty,
    size_mb,
    workers,
});

fn main() -> Result<(), Box<dyn std::error::Error>> {
    set_default_header_style(Some(shared(
        Style::new().fg(Color::HiYellow).bg(Color::Black).bold().underline(),
    )));

    let accent: Color = match std::env::var("REPORT_ACCENT") {
        Ok(name) => name.parse()?,
        Err(_) => Color::HiCyan,
    };

    let mut services = Table::new(["service", "errors", "p99 ms", "notes"]);
    services
        .precision(1, [2])
        .max_width(24, [3])
        .column_style(Style::new().fg(accent), [0])
        .non_zero_style(Style::new().fg(Color::Red).bold(), [1]);
    services.row(row!["gateway", 0, 12.44, "healthy"]);
    services.row(row!["billing", 3, 250.0, "retrying upstream payment provider calls"]);
    services.row(row!["search", 0, 48.25, None::<&str>]);
    services.row(row!["auth", 1, 9.0, "token refresh spike"]);
    services.sort(&[0])?;
    services.row(row!["total", 4, 250.0]);
    services.row_style(Style::new().reverse(), [RowRef::Last]);

    let mut out = io::stdout().lock();
    services.print(&mut out)?;
    writeln!(out)?;

    let mut build = Table::new(["key", "value"]);
    build.precision(2, [1]);
    build.record(&Build {
        version: "1.4.0",
        commit: "9f2c1e7".to_string(),
        dirty: true,
        size_mb: 18.375,
        workers: 8,
    });
    build.print(&mut out)?;
    Ok(())
}
