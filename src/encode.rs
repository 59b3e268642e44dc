//! Primitive and composite encoders (components C and E): the single
//! recursive dispatch from a [`Cbor`] value to its canonical bytes.

use crate::float::{minimal_width, F64Bits, FloatWidth};
use crate::value::{Cbor, CborCase, Simple};
use crate::wire::{write_header, write_simple_header, Major};

/// Encode `value` to freshly allocated canonical bytes.
#[must_use]
pub fn encode(value: &Cbor) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(&mut buf, value);
    buf
}

/// Append `value`'s canonical encoding to `buf`.
pub fn encode_into(buf: &mut Vec<u8>, value: &Cbor) {
    match value.case() {
        CborCase::Unsigned(u) => write_header(buf, Major::Unsigned, *u),
        CborCase::Negative(n) => write_header(buf, Major::Negative, *n),
        CborCase::Bytes(b) => {
            write_header(buf, Major::Bytes, b.len() as u64);
            buf.extend_from_slice(b);
        }
        CborCase::Text(s) => {
            write_header(buf, Major::Text, s.len() as u64);
            buf.extend_from_slice(s.as_bytes());
        }
        CborCase::Array(items) => {
            write_header(buf, Major::Array, items.len() as u64);
            for item in items {
                encode_into(buf, item);
            }
        }
        CborCase::Map(map) => {
            write_header(buf, Major::Map, map.len() as u64);
            for (k, v) in map.iter() {
                encode_into(buf, k);
                encode_into(buf, v);
            }
        }
        CborCase::Tagged(tag, inner) => {
            write_header(buf, Major::Tagged, *tag);
            encode_into(buf, inner);
        }
        CborCase::Simple(simple) => encode_simple(buf, simple),
    }
}

fn encode_simple(buf: &mut Vec<u8>, simple: &Simple) {
    match simple {
        Simple::False => write_simple_header(buf, 20),
        Simple::True => write_simple_header(buf, 21),
        Simple::Null => write_simple_header(buf, 22),
        Simple::Float(bits) => encode_float(buf, *bits),
    }
}

fn encode_float(buf: &mut Vec<u8>, bits: F64Bits) {
    match minimal_width(bits.0) {
        FloatWidth::Half => {
            write_simple_header(buf, 25);
            let v = bits.to_f64();
            let h = if v.is_nan() {
                half::f16::from_bits(0x7e00)
            } else {
                half::f16::from_f64(v)
            };
            buf.extend_from_slice(&h.to_be_bytes());
        }
        FloatWidth::Single => {
            write_simple_header(buf, 26);
            buf.extend_from_slice(&(bits.to_f64() as f32).to_be_bytes());
        }
        FloatWidth::Double => {
            write_simple_header(buf, 27);
            buf.extend_from_slice(&bits.0.to_be_bytes());
        }
    }
}
