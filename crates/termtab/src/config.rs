#![forbid(unsafe_code)]

//! Construction defaults for tables.
//!
//! A [`TableConfig`] can be passed explicitly to [`Table::with_config`]. Tables
//! built with [`Table::new`] use [`TableConfig::global`], which picks up the
//! process-wide default header style set by [`set_default_header_style`].
//!
//! [`Table::with_config`]: crate::Table::with_config
//! [`Table::new`]: crate::Table::new

use std::sync::{LazyLock, RwLock};

use termtab_style::SharedStyle;

/// Spaces inserted after every column but the last.
pub const DEFAULT_PADDING: usize = 2;

/// Fractional digits for float cells in columns without their own precision.
pub const DEFAULT_PRECISION: usize = 2;

static DEFAULT_HEADER_STYLE: LazyLock<RwLock<Option<SharedStyle>>> =
    LazyLock::new(|| RwLock::new(None));

/// Set the header style applied to every table subsequently built with
/// [`Table::new`](crate::Table::new). Pass `None` to stop applying one.
pub fn set_default_header_style(style: Option<SharedStyle>) {
    if let Ok(mut guard) = DEFAULT_HEADER_STYLE.write() {
        *guard = style;
    }
}

/// The current process-wide default header style.
#[must_use]
pub fn default_header_style() -> Option<SharedStyle> {
    DEFAULT_HEADER_STYLE.read().ok().and_then(|guard| guard.clone())
}

/// Defaults a table starts from.
#[derive(Clone, Debug)]
pub struct TableConfig {
    pub header_style: Option<SharedStyle>,
    pub padding: usize,
    pub precision: usize,
}

impl TableConfig {
    /// Default config plus the process-wide default header style.
    #[must_use]
    pub fn global() -> Self {
        Self {
            header_style: default_header_style(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_header_style(mut self, style: SharedStyle) -> Self {
        self.header_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Precision for float cells in columns that never had one set.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            header_style: None,
            padding: DEFAULT_PADDING,
            precision: DEFAULT_PRECISION,
        }
    }
}
