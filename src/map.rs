//! The ordered, copy-on-write map (component D).
//!
//! Storage is kept as a `Vec` of entries sorted by the encoded bytes of each
//! key, so that the map's own iteration order is exactly the canonical wire
//! order. Mutating operations clone the backing storage only when it is
//! shared.

use std::sync::Arc;

use crate::error::{CborError, ErrorKind};
use crate::order::{cmp_encoded_key_bytes, is_strictly_increasing_encoded};
use crate::value::Cbor;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key_bytes: Vec<u8>,
    key: Cbor,
    value: Cbor,
}

/// An ordered map keyed by the encoded CBOR form of its keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CborMap {
    entries: Arc<Vec<Entry>>,
}

impl CborMap {
    /// Construct an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Arc::new(Vec::new()) }
    }

    /// Build a map from key/value pairs in arbitrary order, later entries
    /// overwriting earlier ones with an encoded-byte-equal key.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Cbor, Cbor)>) -> Self {
        let mut map = Self::new();
        for (k, v) in pairs {
            map.insert(k, v);
        }
        map
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, key_bytes: &[u8]) -> Result<usize, usize> {
        self.entries.binary_search_by(|e| cmp_encoded_key_bytes(&e.key_bytes, key_bytes))
    }

    /// Look up the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &Cbor) -> Option<&Cbor> {
        let key_bytes = crate::encode::encode(key);
        self.find(&key_bytes).ok().map(|i| &self.entries[i].value)
    }

    /// Insert `key`/`value`, cloning the backing storage first if it is
    /// shared with another `CborMap`. Returns the previous value, if any.
    pub fn insert(&mut self, key: Cbor, value: Cbor) -> Option<Cbor> {
        let key_bytes = crate::encode::encode(&key);
        let entries = Arc::make_mut(&mut self.entries);
        match entries.binary_search_by(|e| cmp_encoded_key_bytes(&e.key_bytes, &key_bytes)) {
            Ok(i) => {
                entries[i].key = key;
                Some(std::mem::replace(&mut entries[i].value, value))
            }
            Err(i) => {
                entries.insert(i, Entry { key_bytes, key, value });
                None
            }
        }
    }

    /// Remove the entry for `key`, cloning the backing storage first if it
    /// is shared. Returns the removed value, if any.
    pub fn remove(&mut self, key: &Cbor) -> Option<Cbor> {
        let key_bytes = crate::encode::encode(key);
        let entries = Arc::make_mut(&mut self.entries);
        match entries.binary_search_by(|e| cmp_encoded_key_bytes(&e.key_bytes, &key_bytes)) {
            Ok(i) => Some(entries.remove(i).value),
            Err(_) => None,
        }
    }

    /// Iterate entries in ascending key-byte order.
    pub fn iter(&self) -> impl Iterator<Item = (&Cbor, &Cbor)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    /// Decoder-only: append `key`/`value`, requiring `key_bytes` be strictly
    /// greater than the current maximum key, as a canonical map's wire form
    /// requires. Used instead of `insert` so misordered or duplicate keys
    /// are reported rather than silently reordered.
    pub(crate) fn insert_next(
        &mut self,
        key: Cbor,
        key_bytes: Vec<u8>,
        value: Cbor,
        offset: usize,
    ) -> Result<(), CborError> {
        let entries = Arc::make_mut(&mut self.entries);
        // Only the immediately preceding entry is checked: a decoded key
        // sequence is rejected the moment it stops being strictly ascending,
        // so any duplicate further back than `last` has already tripped
        // `MisorderedMapKey` on some earlier key before we ever get here.
        // That means a non-adjacent duplicate (e.g. keys 1, 3, 1) surfaces as
        // misordering rather than `DuplicateMapKey` — still rejected, just
        // reported under the other's kind.
        if let Some(last) = entries.last() {
            if last.key_bytes == key_bytes {
                return Err(CborError::new(ErrorKind::DuplicateMapKey, offset));
            }
            if !is_strictly_increasing_encoded(&last.key_bytes, &key_bytes) {
                return Err(CborError::new(ErrorKind::MisorderedMapKey, offset));
            }
        }
        entries.push(Entry { key_bytes, key, value });
        Ok(())
    }
}

impl FromIterator<(Cbor, Cbor)> for CborMap {
    fn from_iter<I: IntoIterator<Item = (Cbor, Cbor)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
