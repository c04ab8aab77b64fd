#![forbid(unsafe_code)]

//! Records listed as `(name, value)` rows.

use crate::value::Value;

/// A record that can describe itself as ordered named values.
///
/// [`Table::record`](crate::Table::record) appends one row per field, which
/// suits a two-column `key`/`value` table. [`impl_fields!`](crate::impl_fields)
/// writes the impl for plain structs.
pub trait Fields {
    fn fields(&self) -> Vec<(&'static str, Value)>;
}

impl<T: Fields + ?Sized> Fields for &T {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        (**self).fields()
    }
}

/// Implement [`Fields`] for a struct by naming its fields in order.
///
/// Each field must be `Clone` and convert into [`Value`].
///
/// ```
/// use termtab::{Fields, Value, impl_fields};
///
/// struct Mem {
///     alloc: u64,
///     frees: u64,
/// }
/// impl_fields!(Mem { alloc, frees });
///
/// let fields = Mem { alloc: 10, frees: 3 }.fields();
/// assert_eq!(fields[0], ("alloc", Value::Uint(10)));
/// ```
#[macro_export]
macro_rules! impl_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Fields for $ty {
            fn fields(&self) -> ::std::vec::Vec<(&'static str, $crate::Value)> {
                ::std::vec![
                    $((stringify!($field), $crate::Value::from(self.$field.clone()))),*
                ]
            }
        }
    };
}
