#![forbid(unsafe_code)]

//! Escape-sequence stripping.
//!
//! Used to recover the visible text of a styled cell, e.g. to check that a
//! [`StyleProvider`](crate::StyleProvider) preserved the printed length.
//!
//! ```
//! use termtab_style::strip_ansi;
//! use std::borrow::Cow;
//!
//! assert!(matches!(strip_ansi("plain"), Cow::Borrowed(_)));
//! assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
//! ```

use std::borrow::Cow;

use memchr::memchr;

const ESC: u8 = 0x1B;

/// Remove CSI escape sequences (`ESC [ ... final`) from `input`.
///
/// Returns the input borrowed when it contains no ESC byte. A lone ESC not
/// followed by `[` is dropped together with the next character.
#[inline]
pub fn strip_ansi(input: &str) -> Cow<'_, str> {
    if memchr(ESC, input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(strip_slow(input))
}

fn strip_slow(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            output.push(c);
            continue;
        }
        match chars.next() {
            // CSI: parameters and intermediates until a final byte in 0x40..=0x7E
            Some('[') => {
                for c in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            Some(_) | None => {}
        }
    }
    output
}

/// Number of visible code points in `input`.
#[must_use]
pub fn visible_len(input: &str) -> usize {
    strip_ansi(input).chars().count()
}
