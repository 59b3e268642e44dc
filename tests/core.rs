//! Canonical round-trip and structural invariants across the value model.

use detcbor::{decode, Cbor, CborMap};

#[test]
fn roundtrip_scalars() {
    for v in [
        Cbor::unsigned(0),
        Cbor::unsigned(u64::MAX),
        Cbor::int(-1),
        Cbor::int(i64::MIN),
        Cbor::bytes(vec![]),
        Cbor::bytes(vec![9, 8, 7]),
        Cbor::text(""),
        Cbor::text("hello, world"),
        Cbor::bool(true),
        Cbor::bool(false),
        Cbor::null(),
        Cbor::float(3.25),
        Cbor::float(f64::NAN),
        Cbor::float(f64::INFINITY),
    ] {
        let bytes = v.to_bytes();
        let back = decode(&bytes).unwrap();
        assert_eq!(back, v, "roundtrip mismatch for {v:?}");
    }
}

#[test]
fn roundtrip_array_and_map() {
    let map = CborMap::from_pairs(vec![
        (Cbor::text("a"), Cbor::int(1)),
        (Cbor::text("b"), Cbor::array(vec![Cbor::bool(true), Cbor::null()])),
    ]);
    let v = Cbor::array(vec![Cbor::map(map), Cbor::int(-7)]);
    let bytes = v.to_bytes();
    assert_eq!(decode(&bytes).unwrap(), v);
}

#[test]
fn roundtrip_tagged() {
    let v = Cbor::tagged(100, Cbor::text("payload"));
    assert_eq!(decode(&v.to_bytes()).unwrap(), v);
}

#[test]
fn roundtrip_bignum() {
    use num_bigint::BigInt;
    let values = [
        BigInt::from(u64::MAX) + BigInt::from(1u8),
        -(BigInt::from(u64::MAX) + BigInt::from(2u8)),
        BigInt::from(10).pow(40),
        -BigInt::from(10).pow(40),
    ];
    for n in values {
        let v = Cbor::from_big_int(&n);
        let back = decode(&v.to_bytes()).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.as_big_int().unwrap(), n);
    }
}

#[test]
fn structural_equality_iff_encoding_equality() {
    let a = Cbor::array(vec![Cbor::int(1), Cbor::int(2)]);
    let b = Cbor::array(vec![Cbor::int(1), Cbor::int(2)]);
    let c = Cbor::array(vec![Cbor::int(2), Cbor::int(1)]);

    assert_eq!(a, b);
    assert_eq!(a.to_bytes(), b.to_bytes());
    assert_ne!(a, c);
    assert_ne!(a.to_bytes(), c.to_bytes());
}

#[test]
fn map_equal_regardless_of_insertion_order() {
    let m1 = CborMap::from_pairs(vec![(Cbor::int(1), Cbor::int(2)), (Cbor::int(3), Cbor::int(4))]);
    let m2 = CborMap::from_pairs(vec![(Cbor::int(3), Cbor::int(4)), (Cbor::int(1), Cbor::int(2))]);
    assert_eq!(Cbor::map(m1.clone()), Cbor::map(m2.clone()));
    assert_eq!(m1.iter().collect::<Vec<_>>(), m2.iter().collect::<Vec<_>>());
}

#[test]
fn nfc_normalization_closure() {
    // "é" decomposed (e + combining acute) normalizes to precomposed U+00E9.
    let decomposed = Cbor::text("e\u{0301}");
    let precomposed = Cbor::text("\u{00e9}");
    assert_eq!(decomposed, precomposed);
    assert_eq!(decomposed.to_bytes(), precomposed.to_bytes());
    assert_eq!(decomposed.as_text().unwrap(), "\u{00e9}");
}

#[test]
fn extract_roundtrips_tagged_value() {
    let v = Cbor::tagged(7, Cbor::int(42));
    assert_eq!(v.extract(7).unwrap(), &Cbor::int(42));
}
