use core::fmt;

/// A structured error kind identifying the reason a CBOR item was rejected.
///
/// This enum is intentionally stable and string-free to keep error handling
/// hot-path friendly and to let callers match on specific failure reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Buffer ends mid-item.
    Underrun,
    /// Header byte's additional-info field is reserved (28-30) or denotes
    /// indefinite length (31), neither of which this profile accepts.
    BadHeaderValue(u8),
    /// Integer, length, or float argument was encoded wider than the
    /// canonical minimum width.
    NonCanonicalNumeric,
    /// Major-type-7 argument is not one of `false`/`true`/`null`/a float.
    InvalidSimple,
    /// Text bytes are not valid UTF-8.
    InvalidString,
    /// Text is valid UTF-8 but not NFC-normalized.
    NonCanonicalString,
    /// `k` trailing bytes remain after a complete top-level value.
    UnusedData(usize),
    /// Map keys are not strictly ascending by encoded byte order.
    MisorderedMapKey,
    /// The same encoded map key appears twice.
    DuplicateMapKey,
    /// A decoded integer does not fit the requested host numeric type.
    OutOfRange,
    /// The decoded variant does not match the type requested by the caller.
    WrongType,
    /// A tagged value's tag did not match what the caller expected.
    WrongTag {
        /// The tag the caller required.
        expected: u64,
        /// The tag actually present.
        encountered: u64,
    },
    /// Reserved for higher layers that parse a recognized tag's body and
    /// find it malformed.
    InvalidFormat,

    /// Nesting depth exceeded the decoder's configured limit.
    ///
    /// Not part of the wire-format error taxonomy: this guards against
    /// stack exhaustion on adversarial input and is ambient hardening
    /// around the recursive-descent decoder.
    DepthLimitExceeded,
}

/// A deterministic-CBOR error: a structured [`ErrorKind`] plus the byte
/// offset at which it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CborError {
    /// The error kind.
    pub kind: ErrorKind,
    /// Byte offset into the input where the error was detected.
    pub offset: usize,
}

impl CborError {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for CborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Underrun => write!(f, "cbor error at {}: unexpected end of input", self.offset),
            ErrorKind::BadHeaderValue(b) => write!(
                f,
                "cbor error at {}: reserved or indefinite-length header byte 0x{b:02x}",
                self.offset
            ),
            ErrorKind::NonCanonicalNumeric => write!(
                f,
                "cbor error at {}: integer or float encoded wider than its canonical minimum width",
                self.offset
            ),
            ErrorKind::InvalidSimple => write!(
                f,
                "cbor error at {}: simple-value argument not in the allowed set",
                self.offset
            ),
            ErrorKind::InvalidString => write!(f, "cbor error at {}: text is not valid UTF-8", self.offset),
            ErrorKind::NonCanonicalString => write!(
                f,
                "cbor error at {}: text is valid UTF-8 but not NFC-normalized",
                self.offset
            ),
            ErrorKind::UnusedData(k) => write!(
                f,
                "cbor error at {}: {k} trailing byte(s) after the top-level value",
                self.offset
            ),
            ErrorKind::MisorderedMapKey => {
                write!(f, "cbor error at {}: map keys are not strictly ascending", self.offset)
            }
            ErrorKind::DuplicateMapKey => {
                write!(f, "cbor error at {}: duplicate map key", self.offset)
            }
            ErrorKind::OutOfRange => write!(
                f,
                "cbor error at {}: integer does not fit the requested host type",
                self.offset
            ),
            ErrorKind::WrongType => write!(
                f,
                "cbor error at {}: decoded variant does not match the requested type",
                self.offset
            ),
            ErrorKind::WrongTag { expected, encountered } => write!(
                f,
                "cbor error at {}: expected tag {expected}, found tag {encountered}",
                self.offset
            ),
            ErrorKind::InvalidFormat => {
                write!(f, "cbor error at {}: malformed content for a recognized tag", self.offset)
            }
            ErrorKind::DepthLimitExceeded => {
                write!(f, "cbor error at {}: nesting depth limit exceeded", self.offset)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CborError {}
