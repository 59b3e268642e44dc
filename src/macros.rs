// src/macros.rs

//! CBOR construction macro.
//!
//! This module provides [`cbor!`], a convenient macro for building [`crate::value::Cbor`]
//! trees inline, used heavily by this crate's own tests.
//!
//! Every value constructor the macro bottoms out in is infallible (big
//! integers auto-downgrade, NaN is canonicalized, negative zero folds to
//! `unsigned(0)` — see [`crate::value::Cbor::float`]), so `cbor!` itself
//! returns a plain [`crate::value::Cbor`] rather than a `Result`.
//!
//! Map key rules (same ergonomics as `serde_json::json!`):
//! - `{ a: 1 }` uses the literal key `"a"` (identifier stringized)
//! - `{ "a": 1 }` uses the literal string key `"a"`
//! - `{ (k): 1 }` uses the expression `k` as the key (any [`IntoCbor`] type)
//!
//! ```ignore
//! # use detcbor::cbor;
//! let dynamic_key = "k";
//! let v = cbor!({
//!     a: 1,
//!     (dynamic_key): [true, null, 1.5],
//! });
//! ```

use crate::value::Cbor;

/// Conversion into a [`Cbor`] value, used by [`cbor!`] for its leaf expressions.
pub trait IntoCbor {
    /// Convert `self` into a [`Cbor`] value.
    fn into_cbor(self) -> Cbor;
}

impl IntoCbor for Cbor {
    fn into_cbor(self) -> Cbor {
        self
    }
}

impl IntoCbor for &Cbor {
    fn into_cbor(self) -> Cbor {
        self.clone()
    }
}

impl IntoCbor for &str {
    fn into_cbor(self) -> Cbor {
        Cbor::text(self)
    }
}

impl IntoCbor for String {
    fn into_cbor(self) -> Cbor {
        Cbor::text(self)
    }
}

impl IntoCbor for bool {
    fn into_cbor(self) -> Cbor {
        Cbor::bool(self)
    }
}

macro_rules! impl_into_cbor_int {
    ($($t:ty),*) => {
        $(impl IntoCbor for $t {
            fn into_cbor(self) -> Cbor {
                Cbor::int(i64::from(self))
            }
        })*
    };
}

impl_into_cbor_int!(i8, i16, i32, i64, u8, u16, u32);

impl IntoCbor for u64 {
    fn into_cbor(self) -> Cbor {
        Cbor::unsigned(self)
    }
}

impl IntoCbor for f64 {
    fn into_cbor(self) -> Cbor {
        Cbor::float(self)
    }
}

impl IntoCbor for &[u8] {
    fn into_cbor(self) -> Cbor {
        Cbor::bytes(self.to_vec())
    }
}

/// Construct a [`Cbor`] value using a JSON-like literal syntax.
///
/// Supported forms:
/// - `cbor!(null)`
/// - `cbor!(true)` / `cbor!(false)`
/// - `cbor!("text")`, `cbor!(42)`, `cbor!(1.5)`, ... (anything implementing [`IntoCbor`])
/// - `cbor!([ ... ])`
/// - `cbor!({ key: value, "key": value, (expr_key): value, ... })`
#[macro_export]
macro_rules! cbor {
    (null) => {
        $crate::value::Cbor::null()
    };
    (true) => {
        $crate::value::Cbor::bool(true)
    };
    (false) => {
        $crate::value::Cbor::bool(false)
    };
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::value::Cbor::array(vec![$($crate::cbor!($elem)),*])
    };
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::value::Cbor::map($crate::map::CborMap::from_pairs(vec![
            $(($crate::__cbor_key!($key), $crate::cbor!($value))),*
        ]))
    };
    ($other:expr) => {
        $crate::macros::IntoCbor::into_cbor($other)
    };
}

/// Internal helper distinguishing `ident`, string, and `(expr)` map keys.
#[macro_export]
#[doc(hidden)]
macro_rules! __cbor_key {
    (($key:expr)) => {
        $crate::macros::IntoCbor::into_cbor($key)
    };
    ($key:literal) => {
        $crate::macros::IntoCbor::into_cbor($key)
    };
    ($key:ident) => {
        $crate::value::Cbor::text(stringify!($key))
    };
}
