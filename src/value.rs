//! The value model (component B): the CBOR tagged union and its
//! constructors and accessors.

use num_bigint::{BigInt, Sign};
use unicode_normalization::UnicodeNormalization;

use crate::error::{CborError, ErrorKind};
use crate::float::F64Bits;
use crate::int;
use crate::map::CborMap;

/// A value a mathematical integer `v` is represented as if it fits the
/// encodeable native `unsigned`/`negative` argument range `[-(2^64), 2^64-1]`.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// The CBOR "simple" values of major type 7: `false`, `true`, `null`, and
/// all floats (canonicalized to the narrowest lossless width at encode time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Simple {
    False,
    True,
    Null,
    Float(F64Bits),
}

/// The CBOR tagged union. The variant list is closed and
/// stable; there is no "unknown" variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CborCase {
    /// `u ∈ [0, 2^64 - 1]`.
    Unsigned(u64),
    /// Mathematical value `-1 - n`, `n ∈ [0, 2^64 - 1]`.
    Negative(u64),
    /// Opaque byte string.
    Bytes(Vec<u8>),
    /// Always NFC-normalized.
    Text(String),
    /// Ordered sequence of values.
    Array(Vec<Cbor>),
    /// Ordered, copy-on-write map, keyed by encoded key bytes.
    Map(CborMap),
    /// A tag number paired with the value it annotates.
    Tagged(u64, Box<Cbor>),
    /// `false`/`true`/`null`/a canonicalized float.
    Simple(Simple),
}

/// A single deterministic CBOR value.
///
/// Equality is structural. Values are immutable once constructed except
/// through a contained [`CborMap`]'s own copy-on-write `insert`/`remove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cbor(pub(crate) CborCase);

impl Cbor {
    /// Borrow the underlying variant.
    #[must_use]
    pub fn case(&self) -> &CborCase {
        &self.0
    }

    /// Consume `self`, returning the underlying variant.
    #[must_use]
    pub fn into_case(self) -> CborCase {
        self.0
    }

    // -- constructors --------------------------------------------------

    /// Construct `unsigned(u)`.
    #[must_use]
    pub fn unsigned(u: u64) -> Self {
        Cbor(CborCase::Unsigned(u))
    }

    /// Construct `negative(n)`, i.e. the mathematical value `-1 - n`.
    #[must_use]
    pub fn negative(n: u64) -> Self {
        Cbor(CborCase::Negative(n))
    }

    /// Construct from a host `i64`.
    #[must_use]
    pub fn int(v: i64) -> Self {
        if v >= 0 {
            Cbor::unsigned(v as u64)
        } else {
            Cbor::negative((-1_i128 - i128::from(v)) as u64)
        }
    }

    /// Construct from an arbitrary-precision integer, automatically using
    /// the plain `unsigned`/`negative` form when the magnitude fits the
    /// native `u64` argument range, and a tag 2/3 bignum otherwise.
    #[must_use]
    pub fn from_big_int(v: &BigInt) -> Self {
        if v.sign() != Sign::Minus {
            let (_, magnitude) = v.to_bytes_be();
            if magnitude.is_empty() {
                return Cbor::unsigned(0);
            }
            return if int::magnitude_fits_u64(&magnitude) {
                Cbor::unsigned(int::magnitude_to_u64(&magnitude))
            } else {
                Cbor(CborCase::Tagged(2, Box::new(Cbor::bytes(magnitude))))
            };
        }
        // Negative: tag 3 (and negative()'s own argument) both encode
        // n = |v| - 1, since the mathematical value is -1 - n.
        let n = (-v) - BigInt::from(1u8);
        let (_, n_bytes) = n.to_bytes_be();
        if int::magnitude_fits_u64(&n_bytes) {
            Cbor::negative(int::magnitude_to_u64(&n_bytes))
        } else {
            Cbor(CborCase::Tagged(3, Box::new(Cbor::bytes(n_bytes))))
        }
    }

    /// Construct from a host `i128`, via [`Cbor::from_big_int`].
    #[must_use]
    pub fn int128(v: i128) -> Self {
        Cbor::from_big_int(&BigInt::from(v))
    }

    /// Construct from a host `u128`, via [`Cbor::from_big_int`].
    #[must_use]
    pub fn from_u128(v: u128) -> Self {
        Cbor::from_big_int(&BigInt::from(v))
    }

    /// Construct a byte string value.
    #[must_use]
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Cbor(CborCase::Bytes(b.into()))
    }

    /// Construct a text value, normalizing to NFC first.
    #[must_use]
    pub fn text(s: impl AsRef<str>) -> Self {
        let normalized: String = s.as_ref().nfc().collect();
        Cbor(CborCase::Text(normalized))
    }

    /// Construct an array value.
    #[must_use]
    pub fn array(items: impl Into<Vec<Cbor>>) -> Self {
        Cbor(CborCase::Array(items.into()))
    }

    /// Construct a map value.
    #[must_use]
    pub fn map(map: CborMap) -> Self {
        Cbor(CborCase::Map(map))
    }

    /// Construct a tagged value.
    #[must_use]
    pub fn tagged(tag: u64, inner: Cbor) -> Self {
        Cbor(CborCase::Tagged(tag, Box::new(inner)))
    }

    /// Construct a boolean value.
    #[must_use]
    pub fn bool(b: bool) -> Self {
        Cbor(CborCase::Simple(if b { Simple::True } else { Simple::False }))
    }

    /// Construct `null`.
    #[must_use]
    pub fn null() -> Self {
        Cbor(CborCase::Simple(Simple::Null))
    }

    /// Construct a float, canonicalizing as follows: a value mathematically
    /// equal to an integer representable as `unsigned`/`negative` collapses
    /// to that integer (this also absorbs `-0.0`, which becomes `unsigned(0)`);
    /// any NaN folds to the single canonical bit pattern.
    #[must_use]
    pub fn float(v: f64) -> Self {
        if v.is_finite() && v.trunc() == v {
            if (0.0..TWO_POW_64).contains(&v) {
                return Cbor::unsigned(v as u64);
            }
            if (-TWO_POW_64..0.0).contains(&v) {
                let n = v as i128;
                let arg = (-1_i128 - n) as u64;
                return Cbor::negative(arg);
            }
        }
        Cbor(CborCase::Simple(Simple::Float(F64Bits::new(v))))
    }

    // -- accessors -------------------------------------------------------

    /// Project to a host `u64`, succeeding only for `Unsigned`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match &self.0 {
            CborCase::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Project to a host `i64`, failing `OutOfRange` if the value doesn't fit
    /// (per design note: negatives below `i64::MIN` require the big-integer
    /// accessor instead).
    pub fn as_i64(&self) -> Result<i64, CborError> {
        match &self.0 {
            CborCase::Unsigned(u) => i64::try_from(*u).map_err(|_| err(ErrorKind::OutOfRange)),
            CborCase::Negative(n) => {
                let v = -1_i128 - i128::from(*n);
                i64::try_from(v).map_err(|_| err(ErrorKind::OutOfRange))
            }
            _ => Err(err(ErrorKind::WrongType)),
        }
    }

    /// Project to an arbitrary-precision integer. Succeeds for `Unsigned`,
    /// `Negative`, and tag 2/3 bignums; fails `WrongType` otherwise.
    pub fn as_big_int(&self) -> Result<BigInt, CborError> {
        match &self.0 {
            CborCase::Unsigned(u) => Ok(BigInt::from(*u)),
            CborCase::Negative(n) => Ok(-BigInt::from(1u8) - BigInt::from(*n)),
            CborCase::Tagged(tag, inner) if *tag == 2 || *tag == 3 => match &inner.0 {
                CborCase::Bytes(magnitude) => {
                    let m = BigInt::from_bytes_be(Sign::Plus, magnitude);
                    Ok(if *tag == 3 { -BigInt::from(1u8) - m } else { m })
                }
                _ => Err(err(ErrorKind::WrongType)),
            },
            _ => Err(err(ErrorKind::WrongType)),
        }
    }

    /// Borrow as a byte string, if `self` is one.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            CborCase::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow as text, if `self` is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.0 {
            CborCase::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as an array, if `self` is one.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Cbor]> {
        match &self.0 {
            CborCase::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as a map, if `self` is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&CborMap> {
        match &self.0 {
            CborCase::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Project to a host `bool`, if `self` is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match &self.0 {
            CborCase::Simple(Simple::True) => Some(true),
            CborCase::Simple(Simple::False) => Some(false),
            _ => None,
        }
    }

    /// True iff `self` is `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(&self.0, CborCase::Simple(Simple::Null))
    }

    /// Project to a host `f64`, if `self` is a float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match &self.0 {
            CborCase::Simple(Simple::Float(bits)) => Some(bits.to_f64()),
            _ => None,
        }
    }

    /// If `self` is `tagged(expected, inner)`, return `inner`; otherwise fail
    /// with `WrongType` (not tagged at all) or `WrongTag` (tagged, wrong tag).
    pub fn extract(&self, expected: u64) -> Result<&Cbor, CborError> {
        match &self.0 {
            CborCase::Tagged(tag, inner) if *tag == expected => Ok(inner),
            CborCase::Tagged(tag, _) => Err(err(ErrorKind::WrongTag {
                expected,
                encountered: *tag,
            })),
            _ => Err(err(ErrorKind::WrongType)),
        }
    }

    /// Encode to canonical bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        crate::encode::encode(self)
    }

    /// SHA-256 digest of the canonical encoding.
    #[cfg(feature = "sha2")]
    #[must_use]
    pub fn sha256(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        let mut h = Sha256::new();
        h.update(self.to_bytes());
        let out = h.finalize();
        let mut digest = [0u8; 32];
        digest.copy_from_slice(out.as_slice());
        digest
    }
}

fn err(kind: ErrorKind) -> CborError {
    CborError::new(kind, 0)
}
