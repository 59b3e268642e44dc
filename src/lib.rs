//! # detcbor
//!
//! A deterministic CBOR codec: encodes in-memory values into the Concise
//! Binary Object Representation (CBOR, RFC 8949) and decodes CBOR bytes back,
//! under a strict *deterministic profile* — every logically equal value has
//! exactly one valid byte encoding, and any deviation from that canonical
//! form is rejected on decode.
//!
//! ## Design principles
//!
//! - **Canonical bytes are the value.** `encode(a) == encode(b)` iff `a` and
//!   `b` are structurally equal, and `decode(encode(v)) == v` for any
//!   well-formed `v`.
//! - **The decoder never guesses.** It accepts only the canonical profile of
//!   RFC 8949 §4.2 (minimal-width integers, strictly-ordered unique map keys,
//!   NFC-normalized text, narrowest lossless float width) and otherwise fails
//!   with a structured [`ErrorKind`].
//! - **Values are immutable; maps are copy-on-write.** A [`CborMap`] clones
//!   its backing storage only when it is shared, so passing and returning
//!   maps by value is cheap (see [`map`]).
//!
//! ## Canonical encoding constraints
//!
//! - Minimal integer/length encoding (no overlong forms).
//! - Map keys strictly ascending by plain bytewise lexicographic order of
//!   their encoded bytes.
//! - Text is NFC-normalized.
//! - Integers outside the native `u64` argument range use tag 2/3 bignums
//!   with a minimal big-endian magnitude.
//! - Floats canonicalize to an integer when mathematically exact, otherwise
//!   to the narrowest lossless width; NaN always encodes as the canonical
//!   half-precision NaN.
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`CborError`].
//! - `sha2` *(default)*: enables [`value::Cbor::sha256`], a SHA-256 digest of
//!   the canonical encoding (useful when canonical CBOR is used as a
//!   content-addressed key).
//!
//! ## Non-goals
//!
//! Indefinite-length encodings, non-canonical forms, streaming decoders, and
//! a schema/IDL layer are out of scope; input and output are always a
//! fully-materialized byte buffer. Per-type conformances for host types
//! beyond the CBOR primitives are left to clients via the [`codec::Encode`]
//! and [`codec::Decode`] traits.

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod decode;
pub mod dump;
pub mod encode;
pub mod error;
pub mod float;
pub mod int;
pub mod limits;
pub mod macros;
pub mod map;
pub mod order;
pub mod value;
pub mod wire;

pub use crate::codec::{decode as decode_as, encode as encode_as, Decode, Encode};
pub use crate::decode::{decode, decode_with_limits};
pub use crate::dump::{dump, KnownTags};
pub use crate::encode::encode;
pub use crate::error::{CborError, ErrorKind};
pub use crate::limits::Limits;
pub use crate::map::CborMap;
pub use crate::value::{Cbor, CborCase, Simple};
