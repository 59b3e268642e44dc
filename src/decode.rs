//! The decoder (component F): a single-pass, non-suspending recursive
//! descent that accepts only the canonical profile.

use unicode_normalization::UnicodeNormalization;

use crate::error::{CborError, ErrorKind};
use crate::float::{minimal_width, F64Bits, FloatWidth};
use crate::int;
use crate::limits::Limits;
use crate::map::CborMap;
use crate::value::{Cbor, CborCase, Simple};
use crate::wire::{self, Header, Major};

const CANONICAL_HALF_NAN_BITS: u16 = 0x7e00;

fn is_half_nan(bits: u16) -> bool {
    (bits & 0x7c00) == 0x7c00 && (bits & 0x03ff) != 0
}

/// Decode one canonical CBOR value, requiring the entire buffer be consumed.
///
/// # Errors
///
/// Returns an [`ErrorKind`] as soon as a non-canonical or malformed byte
/// sequence is found; the decoder never returns a partial value.
pub fn decode(bytes: &[u8]) -> Result<Cbor, CborError> {
    decode_with_limits(bytes, Limits::default())
}

/// Decode with explicit resource [`Limits`] (currently: maximum nesting depth).
pub fn decode_with_limits(bytes: &[u8], limits: Limits) -> Result<Cbor, CborError> {
    let mut pos = 0usize;
    let value = parse_value(bytes, &mut pos, 0, &limits)?;
    if pos != bytes.len() {
        return Err(CborError::new(ErrorKind::UnusedData(bytes.len() - pos), pos));
    }
    Ok(value)
}

fn parse_value(data: &[u8], pos: &mut usize, depth: usize, limits: &Limits) -> Result<Cbor, CborError> {
    if depth > limits.max_depth {
        return Err(CborError::new(ErrorKind::DepthLimitExceeded, *pos));
    }

    let header = wire::read_header(data, pos)?;
    let offset = header.offset;

    match header.major {
        Major::Unsigned => Ok(Cbor::unsigned(wire::read_argument(data, pos, &header)?)),
        Major::Negative => Ok(Cbor::negative(wire::read_argument(data, pos, &header)?)),
        Major::Bytes => {
            let len = wire::len_to_usize(wire::read_argument(data, pos, &header)?, offset)?;
            let b = wire::read_exact(data, pos, len)?;
            Ok(Cbor::bytes(b.to_vec()))
        }
        Major::Text => parse_text(data, pos, &header, offset),
        Major::Array => {
            let len = wire::len_to_usize(wire::read_argument(data, pos, &header)?, offset)?;
            let mut items = Vec::new();
            items.reserve(len.min(4096));
            for _ in 0..len {
                items.push(parse_value(data, pos, depth + 1, limits)?);
            }
            Ok(Cbor(CborCase::Array(items)))
        }
        Major::Map => parse_map(data, pos, &header, offset, depth, limits),
        Major::Tagged => parse_tagged(data, pos, &header, offset, depth, limits),
        Major::Simple => parse_simple(data, pos, &header, offset),
    }
}

fn parse_text(data: &[u8], pos: &mut usize, header: &Header, offset: usize) -> Result<Cbor, CborError> {
    let len = wire::len_to_usize(wire::read_argument(data, pos, header)?, offset)?;
    let raw = wire::read_exact(data, pos, len)?;
    let s = core::str::from_utf8(raw).map_err(|_| CborError::new(ErrorKind::InvalidString, offset))?;
    let normalized: String = s.nfc().collect();
    if normalized != s {
        return Err(CborError::new(ErrorKind::NonCanonicalString, offset));
    }
    Ok(Cbor(CborCase::Text(normalized)))
}

fn parse_map(
    data: &[u8],
    pos: &mut usize,
    header: &Header,
    offset: usize,
    depth: usize,
    limits: &Limits,
) -> Result<Cbor, CborError> {
    let len = wire::len_to_usize(wire::read_argument(data, pos, header)?, offset)?;
    let mut map = CborMap::new();
    for _ in 0..len {
        let entry_offset = *pos;
        let key = parse_value(data, pos, depth + 1, limits)?;
        let key_bytes = crate::encode::encode(&key);
        let value = parse_value(data, pos, depth + 1, limits)?;
        map.insert_next(key, key_bytes, value, entry_offset)?;
    }
    Ok(Cbor(CborCase::Map(map)))
}

fn parse_tagged(
    data: &[u8],
    pos: &mut usize,
    header: &Header,
    offset: usize,
    depth: usize,
    limits: &Limits,
) -> Result<Cbor, CborError> {
    let tag = wire::read_argument(data, pos, header)?;
    let inner = parse_value(data, pos, depth + 1, limits)?;
    if (tag == 2 || tag == 3) && matches!(inner.case(), CborCase::Bytes(_)) {
        if let CborCase::Bytes(magnitude) = inner.case() {
            if !int::magnitude_is_canonical(magnitude) {
                return Err(CborError::new(ErrorKind::NonCanonicalNumeric, offset));
            }
            if int::magnitude_fits_u64(magnitude) {
                // Would have fit natively as a plain unsigned/negative integer.
                return Err(CborError::new(ErrorKind::NonCanonicalNumeric, offset));
            }
        }
    }
    Ok(Cbor(CborCase::Tagged(tag, Box::new(inner))))
}

fn parse_simple(data: &[u8], pos: &mut usize, header: &Header, offset: usize) -> Result<Cbor, CborError> {
    match header.ai {
        20 => Ok(Cbor(CborCase::Simple(Simple::False))),
        21 => Ok(Cbor(CborCase::Simple(Simple::True))),
        22 => Ok(Cbor(CborCase::Simple(Simple::Null))),
        25 => {
            let raw = wire::read_exact(data, pos, 2)?;
            let raw_bits = u16::from_be_bytes([raw[0], raw[1]]);
            if is_half_nan(raw_bits) && raw_bits != CANONICAL_HALF_NAN_BITS {
                return Err(CborError::new(ErrorKind::NonCanonicalNumeric, offset));
            }
            let v = half::f16::from_bits(raw_bits).to_f64();
            finish_float(v, FloatWidth::Half, offset)
        }
        26 => {
            let raw = wire::read_exact(data, pos, 4)?;
            let v = f64::from(f32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]));
            finish_float(v, FloatWidth::Single, offset)
        }
        27 => {
            let raw = wire::read_exact(data, pos, 8)?;
            let bits = u64::from_be_bytes([raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], raw[7]]);
            finish_float(f64::from_bits(bits), FloatWidth::Double, offset)
        }
        28..=30 => Err(CborError::new(ErrorKind::BadHeaderValue(header.ai), offset)),
        _ => Err(CborError::new(ErrorKind::InvalidSimple, offset)),
    }
}

/// Shared tail for all three float widths: reject a value that should have
/// collapsed to a plain integer, then reject a value encoded wider than its
/// minimal lossless width (this also rejects any non-canonical-NaN payload
/// carried in via single/double, since NaN's minimal width is always half).
fn finish_float(v: f64, declared_width: FloatWidth, offset: usize) -> Result<Cbor, CborError> {
    if Cbor::float(v).as_f64().is_none() {
        // Construction collapsed this value to a plain integer: the float
        // encoding we just read was redundant.
        return Err(CborError::new(ErrorKind::NonCanonicalNumeric, offset));
    }
    let bits = F64Bits::new(v).0;
    if minimal_width(bits) != declared_width {
        return Err(CborError::new(ErrorKind::NonCanonicalNumeric, offset));
    }
    Ok(Cbor(CborCase::Simple(Simple::Float(F64Bits::from_bits_unchecked(bits)))))
}
