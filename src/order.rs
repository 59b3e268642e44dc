//! Map key ordering: pure bytewise lexicographic order of encoded key bytes.
//!
//! This deliberately differs from RFC 7049's older "shorter key sorts first,
//! then lexicographic" rule: the byte ranges a map's keys occupy must be
//! strictly ascending under plain lexicographic order of the encoded bytes,
//! with no length tiebreak.

use core::cmp::Ordering;

/// Compare two CBOR-encoded map keys by pure bytewise lexicographic order.
#[inline]
#[must_use]
pub fn cmp_encoded_key_bytes(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Returns true iff `prev < curr` under the map key ordering rule.
#[inline]
#[must_use]
pub fn is_strictly_increasing_encoded(prev: &[u8], curr: &[u8]) -> bool {
    cmp_encoded_key_bytes(prev, curr) == Ordering::Less
}
