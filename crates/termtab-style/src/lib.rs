#![forbid(unsafe_code)]

//! ANSI styling for termtab.
//!
//! This crate provides the pieces a table renderer needs to decorate cell text:
//! - [`Color`] and [`Attrs`] - SGR color and decoration codes
//! - [`Style`] - a composable style that wraps text in one escape sequence
//! - [`StyleProvider`] - the capability consumed by renderers
//! - [`strip_ansi`] - remove CSI sequences to recover the visible text
//!
//! # Example
//! ```
//! use termtab_style::{Color, Style, StyleProvider, strip_ansi};
//!
//! let header = Style::new().fg(Color::HiYellow).bg(Color::Black).bold();
//! let painted = header.apply("name");
//! assert_eq!(painted, "\x1b[93;40;1mname\x1b[0m");
//! assert_eq!(strip_ansi(&painted), "name");
//! ```
//!
//! Styles are applied unconditionally; no terminal capability detection is
//! performed.

pub mod color;
pub mod strip;
pub mod style;

pub use color::{Attrs, Code, Color, UnknownColor};
pub use strip::{strip_ansi, visible_len};
pub use style::{SharedStyle, Style, StyleProvider, shared};
