//! The encodable/decodable client capability (component B2).
//!
//! Per the design note on "universal encodable polymorphism": this is not a
//! schema or derive layer, just the capability to turn a host value into a
//! [`Cbor`] value (and back). It is implemented here for the obvious host
//! primitives; user types implement the same traits themselves.

use crate::error::{CborError, ErrorKind};
use crate::value::Cbor;

/// A type that can produce a [`Cbor`] value.
pub trait Encode {
    /// Produce this value's [`Cbor`] representation.
    fn to_cbor(&self) -> Cbor;
}

/// A type that can be recovered from a [`Cbor`] value.
pub trait Decode: Sized {
    /// Recover `Self` from a decoded [`Cbor`] value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not of the shape `Self` expects.
    fn from_cbor(value: &Cbor) -> Result<Self, CborError>;
}

/// Encode any [`Encode`] value straight to canonical bytes.
#[must_use]
pub fn encode<T: Encode>(value: &T) -> Vec<u8> {
    value.to_cbor().to_bytes()
}

/// Decode canonical bytes into any [`Decode`] type.
///
/// # Errors
///
/// Returns an error if `bytes` is not canonical CBOR or does not decode to `T`.
pub fn decode<T: Decode>(bytes: &[u8]) -> Result<T, CborError> {
    let value = crate::decode::decode(bytes)?;
    T::from_cbor(&value)
}

fn wrong_type() -> CborError {
    CborError::new(ErrorKind::WrongType, 0)
}

fn out_of_range() -> CborError {
    CborError::new(ErrorKind::OutOfRange, 0)
}

impl Encode for bool {
    fn to_cbor(&self) -> Cbor {
        Cbor::bool(*self)
    }
}

impl Decode for bool {
    fn from_cbor(value: &Cbor) -> Result<Self, CborError> {
        value.as_bool().ok_or_else(wrong_type)
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Encode for $t {
                fn to_cbor(&self) -> Cbor {
                    Cbor::unsigned(u64::from(*self))
                }
            }

            impl Decode for $t {
                fn from_cbor(value: &Cbor) -> Result<Self, CborError> {
                    let u = value.as_u64().ok_or_else(wrong_type)?;
                    <$t>::try_from(u).map_err(|_| out_of_range())
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl Encode for $t {
                fn to_cbor(&self) -> Cbor {
                    Cbor::int(i64::from(*self))
                }
            }

            impl Decode for $t {
                fn from_cbor(value: &Cbor) -> Result<Self, CborError> {
                    let i = value.as_i64()?;
                    <$t>::try_from(i).map_err(|_| out_of_range())
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8, i16, i32, i64);

impl Encode for f64 {
    fn to_cbor(&self) -> Cbor {
        Cbor::float(*self)
    }
}

impl Decode for f64 {
    fn from_cbor(value: &Cbor) -> Result<Self, CborError> {
        value.as_f64().ok_or_else(wrong_type)
    }
}

impl Encode for str {
    fn to_cbor(&self) -> Cbor {
        Cbor::text(self)
    }
}

impl Encode for String {
    fn to_cbor(&self) -> Cbor {
        Cbor::text(self.as_str())
    }
}

impl Decode for String {
    fn from_cbor(value: &Cbor) -> Result<Self, CborError> {
        value.as_text().map(str::to_owned).ok_or_else(wrong_type)
    }
}

impl Encode for [u8] {
    fn to_cbor(&self) -> Cbor {
        Cbor::bytes(self.to_vec())
    }
}

impl Encode for Vec<u8> {
    fn to_cbor(&self) -> Cbor {
        Cbor::bytes(self.clone())
    }
}

impl Decode for Vec<u8> {
    fn from_cbor(value: &Cbor) -> Result<Self, CborError> {
        value.as_bytes().map(<[u8]>::to_vec).ok_or_else(wrong_type)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn to_cbor(&self) -> Cbor {
        Cbor::array(self.iter().map(Encode::to_cbor).collect::<Vec<_>>())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn from_cbor(value: &Cbor) -> Result<Self, CborError> {
        value
            .as_array()
            .ok_or_else(wrong_type)?
            .iter()
            .map(T::from_cbor)
            .collect()
    }
}

impl<T: Encode> Encode for Option<T> {
    fn to_cbor(&self) -> Cbor {
        match self {
            Some(v) => v.to_cbor(),
            None => Cbor::null(),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn from_cbor(value: &Cbor) -> Result<Self, CborError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_cbor(value).map(Some)
        }
    }
}
