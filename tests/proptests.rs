//! Property-based tests for the quantified invariants: canonical round-trip,
//! encoding injectivity, minimal width, and map key ordering.

use proptest::prelude::*;

use detcbor::{decode, Cbor, CborMap};

fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), 0..=16)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_scalar() -> impl Strategy<Value = Cbor> {
    prop_oneof![
        any::<u64>().prop_map(Cbor::unsigned),
        any::<i64>().prop_map(Cbor::int),
        proptest::collection::vec(any::<u8>(), 0..=32).prop_map(Cbor::bytes),
        arb_text().prop_map(Cbor::text),
        any::<bool>().prop_map(Cbor::bool),
        Just(Cbor::null()),
    ]
}

fn arb_value() -> impl Strategy<Value = Cbor> {
    let leaf = arb_scalar();
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..=4).prop_map(Cbor::array),
            proptest::collection::vec((arb_text(), inner), 0..=4).prop_map(|pairs| {
                Cbor::map(CborMap::from_pairs(pairs.into_iter().map(|(k, v)| (Cbor::text(k), v))))
            }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn canonical_roundtrip(v in arb_value()) {
        let bytes = v.to_bytes();
        let back = decode(&bytes).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn decode_consumes_exact_bytes(v in arb_value()) {
        let bytes = v.to_bytes();
        // Any single extra trailing byte must be rejected, never silently
        // accepted as part of a next item.
        let mut extended = bytes.clone();
        extended.push(0x00);
        prop_assert!(decode(&extended).is_err());
    }

    #[test]
    fn map_key_byte_ranges_strictly_ascending(pairs in proptest::collection::vec((arb_text(), any::<i64>()), 0..=24)) {
        let map = CborMap::from_pairs(pairs.into_iter().map(|(k, v)| (Cbor::text(k), Cbor::int(v))));
        let key_bytes: Vec<Vec<u8>> = map.iter().map(|(k, _)| k.to_bytes()).collect();
        for w in key_bytes.windows(2) {
            prop_assert!(w[0] < w[1], "map keys not strictly ascending: {:?} vs {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn unsigned_header_is_always_minimal_width(u in any::<u64>()) {
        let bytes = Cbor::unsigned(u).to_bytes();
        let expected_len = match u {
            0..=23 => 1,
            24..=0xff => 2,
            0x100..=0xffff => 3,
            0x1_0000..=0xffff_ffff => 5,
            _ => 9,
        };
        prop_assert_eq!(bytes.len(), expected_len);
    }

    #[test]
    fn distinct_unsigned_ints_encode_distinctly(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        prop_assert_ne!(Cbor::unsigned(a).to_bytes(), Cbor::unsigned(b).to_bytes());
    }

    #[test]
    fn nfc_text_roundtrip(s in arb_text()) {
        let v = Cbor::text(&s);
        let bytes = v.to_bytes();
        let back = decode(&bytes).unwrap();
        prop_assert_eq!(back, v);
    }
}
