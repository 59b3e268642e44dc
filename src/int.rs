//! Big-integer magnitude helpers shared by the value model's smart
//! constructor and the decoder's tag 2/3 canonicality checks.
//!
//! Arbitrary-precision arithmetic itself is delegated to `num-bigint`; what
//! lives here is purely about the minimal big-endian byte encoding the wire
//! format requires for a tag 2/3 payload.

/// True iff a decoded bignum magnitude is in canonical (minimal) form:
/// non-empty and without a leading zero byte.
#[must_use]
pub fn magnitude_is_canonical(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes[0] != 0
}

/// True iff `bytes` (big-endian, canonical) fits within the native `u64`
/// argument range used by plain unsigned/negative headers.
#[must_use]
pub fn magnitude_fits_u64(bytes: &[u8]) -> bool {
    bytes.len() <= 8
}

/// Interpret up to 8 big-endian bytes as a `u64`.
#[must_use]
pub fn magnitude_to_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[8 - bytes.len()..].copy_from_slice(bytes);
    u64::from_be_bytes(buf)
}
