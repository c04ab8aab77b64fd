#![forbid(unsafe_code)]

//! Cell values and how they are turned into text.

use std::borrow::Cow;
use std::fmt;

/// A single cell value, stringified once when its row is added.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    F32(f32),
    F64(f64),
    Text(String),
    /// Raw bytes, shown as text. Invalid UTF-8 is replaced.
    Bytes(Vec<u8>),
    /// `"yes"` when true, empty when false.
    Bool(bool),
    /// Renders as an empty cell.
    Null,
    /// Pre-rendered fallback for anything else.
    Other(String),
}

impl Value {
    /// Fallback for any displayable value.
    #[must_use]
    pub fn display(value: impl fmt::Display) -> Self {
        Value::Other(value.to_string())
    }

    /// Fallback using the `Debug` representation.
    #[must_use]
    pub fn debug(value: impl fmt::Debug) -> Self {
        Value::Other(format!("{value:?}"))
    }

    /// A sequence rendered as `[a b c]`.
    #[must_use]
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
        Value::Other(format!("[{}]", items.join(" ")))
    }

    /// Render the value for a cell. `precision` applies to floats only.
    #[must_use]
    pub fn to_cell(&self, precision: usize) -> Cow<'_, str> {
        match self {
            Value::Int(v) => Cow::Owned(v.to_string()),
            Value::Uint(v) => Cow::Owned(v.to_string()),
            Value::F32(v) if v.is_finite() => Cow::Owned(format!("{v:.precision$}")),
            Value::F64(v) if v.is_finite() => Cow::Owned(format!("{v:.precision$}")),
            Value::F32(v) => non_finite(f64::from(*v)),
            Value::F64(v) => non_finite(*v),
            Value::Text(s) | Value::Other(s) => Cow::Borrowed(s),
            Value::Bytes(b) => String::from_utf8_lossy(b),
            Value::Bool(true) => Cow::Borrowed("yes"),
            Value::Bool(false) | Value::Null => Cow::Borrowed(""),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Uint(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Value::Text(v.into_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

/// Infinities are always signed.
fn non_finite(v: f64) -> Cow<'static, str> {
    if v.is_nan() {
        Cow::Borrowed("NaN")
    } else if v > 0.0 {
        Cow::Borrowed("+Inf")
    } else {
        Cow::Borrowed("-Inf")
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
