//! Filter construction and queries

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::hash::hash;

use super::{LN_2, MAX_FILTER_BYTES, MAX_HASH_COUNT, MIN_FILTER_BITS};

/// An encoded bloom filter over a set of 32-bit key digests.
///
/// Immutable once built. Clones share the same buffer, so a filter can be
/// handed to any number of concurrent readers without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    data: Bytes,
}

impl Filter {
    /// Build a filter over pre-hashed keys with roughly `bits_per_key` bits
    /// for each key.
    ///
    /// A `bits_per_key` of 10 yields a false positive rate near 1%.
    pub fn build(hashes: &[u32], bits_per_key: usize) -> Self {
        let k = hash_count(bits_per_key);

        let n_bits = hashes
            .len()
            .saturating_mul(bits_per_key)
            .max(MIN_FILTER_BITS);
        let n_bytes = n_bits.div_ceil(8).min(MAX_FILTER_BYTES);
        let n_bits = (n_bytes * 8) as u32;

        let mut buf = BytesMut::zeroed(n_bytes);
        for &h in hashes {
            for bit in probes(h, k, n_bits) {
                buf[(bit / 8) as usize] |= 1 << (bit % 8);
            }
        }
        buf.put_u8(k);

        debug!(
            keys = hashes.len(),
            bits_per_key,
            k,
            n_bits,
            "built bloom filter"
        );

        Self { data: buf.freeze() }
    }

    /// Wrap an encoded filter, e.g. one read back from a segment file.
    ///
    /// No validation happens here; short or corrupt encodings are handled by
    /// the query methods.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Whether the set may contain the key with digest `h`.
    ///
    /// `false` is definite. `true` may be a false positive.
    pub fn may_contain(&self, h: u32) -> bool {
        let Some((&k, bits)) = self.data.split_last().filter(|(_, b)| !b.is_empty()) else {
            return false;
        };

        if k > MAX_HASH_COUNT || bits.len() > MAX_FILTER_BYTES {
            // Not something a writer produces. Fail open so the caller still
            // checks the segment itself.
            trace!(k, len = self.data.len(), "unreadable bloom filter, matching everything");
            return true;
        }

        let n_bits = (bits.len() * 8) as u32;
        probes(h, k, n_bits).all(|bit| bits[(bit / 8) as usize] & (1 << (bit % 8)) != 0)
    }

    /// Hash `key` and test it against the filter
    pub fn may_contain_key(&self, key: &[u8]) -> bool {
        self.may_contain(hash(key))
    }

    /// The trailer's hash function count, if the encoding has a trailer
    pub fn hash_count(&self) -> Option<u8> {
        if self.data.len() < 2 {
            return None;
        }
        self.data.last().copied()
    }

    /// Number of addressable bits in the bit array
    pub fn bit_len(&self) -> usize {
        self.data.len().saturating_sub(1) * 8
    }

    /// Encoded length in bytes, trailer included
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The full encoding: bit array followed by the trailer byte
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

impl AsRef<[u8]> for Filter {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Hash function count for a bits-per-key budget: `round(bpk * ln 2)` in 1..=30
fn hash_count(bits_per_key: usize) -> u8 {
    let k = (bits_per_key as f64 * LN_2).round();
    k.clamp(1.0, f64::from(MAX_HASH_COUNT)) as u8
}

/// Bit positions probed for digest `h` in an `n_bits` array.
fn probes(mut h: u32, k: u8, n_bits: u32) -> impl Iterator<Item = u32> {
    let delta = h.rotate_right(17);
    (0..k).map(move |_| {
        let bit = h % n_bits;
        h = h.wrapping_add(delta);
        bit
    })
}
