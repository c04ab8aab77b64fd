#![forbid(unsafe_code)]

//! Process-wide default header style.
//!
//! Kept in its own test binary: the default is global and would leak into
//! unrelated tests running in the same process.

use std::thread;

use termtab::{
    Color, Style, Table, TableConfig, default_header_style, set_default_header_style, shared,
};

#[test]
fn default_header_style_lifecycle() {
    assert!(default_header_style().is_none());
    assert_eq!(Table::new(["a"]).render(), "a\n");

    set_default_header_style(Some(shared(Style::new().bold())));
    assert!(default_header_style().is_some());

    // Applied to tables built afterwards, from any thread.
    assert_eq!(Table::new(["a"]).render(), "\x1b[1ma\x1b[0m\n");
    let handles: Vec<_> = (0..4)
        .map(|i| thread::spawn(move || Table::new([format!("h{i}")]).render()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().expect("no panic"), format!("\x1b[1mh{i}\x1b[0m\n"));
    }

    // A table's own header style takes over.
    let mut own = Table::new(["a"]);
    own.header_style(Style::from(Color::Green));
    assert_eq!(own.render(), "\x1b[32ma\x1b[0m\n");

    // Explicit configs do not consult the global.
    assert_eq!(Table::with_config(["a"], TableConfig::default()).render(), "a\n");

    // Tables keep the style they were built with.
    let before = Table::new(["a"]);
    set_default_header_style(None);
    assert_eq!(before.render(), "\x1b[1ma\x1b[0m\n");
    assert_eq!(Table::new(["a"]).render(), "a\n");
}
