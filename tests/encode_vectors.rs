//! Encoded-byte vectors for the canonical scalar/composite forms.

use detcbor::value::Cbor;
use detcbor::map::CborMap;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn unsigned_boundaries() {
    assert_eq!(hex(&Cbor::unsigned(0).to_bytes()), "00");
    assert_eq!(hex(&Cbor::unsigned(23).to_bytes()), "17");
    assert_eq!(hex(&Cbor::unsigned(24).to_bytes()), "1818");
    assert_eq!(hex(&Cbor::unsigned(255).to_bytes()), "18ff");
    assert_eq!(hex(&Cbor::unsigned(256).to_bytes()), "190100");
    assert_eq!(hex(&Cbor::unsigned(65_535).to_bytes()), "19ffff");
    assert_eq!(hex(&Cbor::unsigned(65_536).to_bytes()), "1a00010000");
    assert_eq!(hex(&Cbor::unsigned(1_000_000).to_bytes()), "1a000f4240");
    assert_eq!(hex(&Cbor::unsigned(u32::MAX as u64).to_bytes()), "1affffffff");
    assert_eq!(
        hex(&Cbor::unsigned(u32::MAX as u64 + 1).to_bytes()),
        "1b0000000100000000"
    );
}

#[test]
fn negative_vectors() {
    assert_eq!(hex(&Cbor::int(-1).to_bytes()), "20");
    assert_eq!(hex(&Cbor::int(-500).to_bytes()), "3901f3");
    assert_eq!(hex(&Cbor::int(-24).to_bytes()), "37");
    assert_eq!(hex(&Cbor::int(-25).to_bytes()), "3818");
}

#[test]
fn bytes_and_text_vectors() {
    assert_eq!(hex(&Cbor::bytes(vec![1, 2, 3]).to_bytes()), "4301 0203".replace(' ', ""));
    assert_eq!(hex(&Cbor::text("IETF").to_bytes()), "6449455446");
    assert_eq!(hex(&Cbor::text("").to_bytes()), "60");
}

#[test]
fn array_vector() {
    let v = Cbor::array(vec![Cbor::int(1), Cbor::int(2), Cbor::int(3)]);
    assert_eq!(hex(&v.to_bytes()), "83010203");
}

#[test]
fn map_vector_sorted_keys() {
    let map = CborMap::from_pairs(vec![(Cbor::int(1), Cbor::int(2)), (Cbor::int(3), Cbor::int(4))]);
    let v = Cbor::map(map);
    assert_eq!(hex(&v.to_bytes()), "a201020304");
}

#[test]
fn map_vector_reversed_insertion_still_sorts() {
    let map = CborMap::from_pairs(vec![(Cbor::int(3), Cbor::int(4)), (Cbor::int(1), Cbor::int(2))]);
    let v = Cbor::map(map);
    assert_eq!(hex(&v.to_bytes()), "a201020304");
}

#[test]
fn tagged_vector() {
    let v = Cbor::tagged(32, Cbor::text("x"));
    assert_eq!(hex(&v.to_bytes()), "d8206178");
}

#[test]
fn simple_vectors() {
    assert_eq!(hex(&Cbor::bool(false).to_bytes()), "f4");
    assert_eq!(hex(&Cbor::bool(true).to_bytes()), "f5");
    assert_eq!(hex(&Cbor::null().to_bytes()), "f6");
}

#[test]
fn float_canonicalizes_to_narrowest_width() {
    // 1.5 is exact in half precision.
    assert_eq!(hex(&Cbor::float(1.5).to_bytes()), "f93e00");
    // 0.1_f32 widened to f64 is non-integral and exact only at single
    // precision (out of half's 10-bit mantissa).
    assert_eq!(hex(&Cbor::float(f64::from(0.1_f32)).to_bytes()), "fa3dcccccd");
    // A value only exact in double precision.
    assert_eq!(hex(&Cbor::float(1.1).to_bytes()), "fb3ff199999999999a");
    // NaN is always the canonical half-precision NaN.
    assert_eq!(hex(&Cbor::float(f64::NAN).to_bytes()), "f97e00");
}

#[test]
fn integral_float_collapses_to_plain_integer() {
    assert_eq!(hex(&Cbor::float(0.0).to_bytes()), "00");
    assert_eq!(hex(&Cbor::float(-0.0).to_bytes()), "00");
    assert_eq!(hex(&Cbor::float(-1.0).to_bytes()), "20");
    assert_eq!(hex(&Cbor::float(1_000_000.0).to_bytes()), "1a000f4240");
}

#[test]
fn bignum_vectors() {
    use num_bigint::BigInt;

    // i64::MAX + 1 no longer fits a plain unsigned/negative argument... actually
    // it still fits u64, so it stays plain.
    let within_u64 = BigInt::from(u64::MAX);
    assert_eq!(Cbor::from_big_int(&within_u64).to_bytes()[0] & 0xe0, 0x00);

    // 2^64 requires a tag-2 bignum (positive).
    let big = BigInt::from(u64::MAX) + BigInt::from(1u8);
    let encoded = Cbor::from_big_int(&big).to_bytes();
    assert_eq!(encoded[0], 0xc2); // tag 2
    assert_eq!(encoded[1], 0x49); // byte string, length 9

    // -(2^64) - 1 requires a tag-3 bignum (negative).
    let big_neg = -(BigInt::from(u64::MAX) + BigInt::from(2u8));
    let encoded_neg = Cbor::from_big_int(&big_neg).to_bytes();
    assert_eq!(encoded_neg[0], 0xc3); // tag 3
}
