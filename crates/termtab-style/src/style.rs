#![forbid(unsafe_code)]

//! Composable text styles and the [`StyleProvider`] capability.

use std::fmt;
use std::sync::Arc;

use crate::color::{Attrs, Code, Color};

const CSI: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Something that decorates text for display.
///
/// Implementations must not change the visible length of the text: they may
/// only add non-printing control sequences. Renderers pad cells based on the
/// undecorated length and rely on this.
pub trait StyleProvider: Send + Sync {
    /// Return `text` wrapped in decoration.
    fn apply(&self, text: &str) -> String;
}

impl<F> StyleProvider for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, text: &str) -> String {
        self(text)
    }
}

/// A reference-counted style provider that can be shared between tables.
#[derive(Clone)]
pub struct SharedStyle(Arc<dyn StyleProvider>);

impl SharedStyle {
    #[must_use]
    pub fn new(provider: impl StyleProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }
}

impl StyleProvider for SharedStyle {
    fn apply(&self, text: &str) -> String {
        self.0.apply(text)
    }
}

impl fmt::Debug for SharedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedStyle(..)")
    }
}

/// Wrap a provider for sharing.
#[must_use]
pub fn shared(provider: impl StyleProvider + 'static) -> SharedStyle {
    SharedStyle::new(provider)
}

/// Foreground, background and decorations rendered as one SGR sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Attrs,
}

impl Style {
    /// The empty style. Painting with it returns text unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: Attrs::empty(),
        }
    }

    /// Fold a list of codes into a style, left to right.
    ///
    /// A later color replaces an earlier one; [`Code::Reset`] discards
    /// everything before it.
    #[must_use]
    pub fn from_codes(codes: &[Code]) -> Self {
        codes.iter().fold(Self::new(), |style, code| match *code {
            Code::Reset => Self::new(),
            Code::Fg(color) => style.fg(color),
            Code::Bg(color) => style.bg(color),
            Code::Attr(attrs) => style.attrs(attrs),
        })
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add decorations to the style.
    #[must_use]
    pub const fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.union(attrs);
        self
    }

    #[must_use]
    pub const fn bold(self) -> Self {
        self.attrs(Attrs::BOLD)
    }

    #[must_use]
    pub const fn faint(self) -> Self {
        self.attrs(Attrs::FAINT)
    }

    #[must_use]
    pub const fn italic(self) -> Self {
        self.attrs(Attrs::ITALIC)
    }

    #[must_use]
    pub const fn underline(self) -> Self {
        self.attrs(Attrs::UNDERLINE)
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        self.attrs(Attrs::REVERSE)
    }

    #[must_use]
    pub const fn crossed_out(self) -> Self {
        self.attrs(Attrs::CROSSED_OUT)
    }

    /// Returns `true` if the style sets nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// SGR parameters: foreground, background, then decorations ascending.
    #[must_use]
    pub fn params(&self) -> Vec<u8> {
        let mut params = Vec::with_capacity(2 + self.attrs.bits().count_ones() as usize);
        params.extend(self.fg.map(Color::fg_code));
        params.extend(self.bg.map(Color::bg_code));
        params.extend(self.attrs.codes());
        params
    }

    /// Wrap `text` in this style's escape sequence followed by a reset.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        format!("{CSI}{}m{text}{RESET}", self)
    }
}

/// Formats the SGR parameter list, e.g. `93;40;1;4`.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.params().into_iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

impl StyleProvider for Style {
    fn apply(&self, text: &str) -> String {
        self.paint(text)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::new().fg(color)
    }
}
