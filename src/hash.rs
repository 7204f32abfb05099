//! Murmur-style 32-bit hash
//!
//! Feeds both the bloom filter probe sequence and the digests engine
//! components store alongside segments. The output is part of the persisted
//! filter format, so the bit layout below must never change.

/// Fixed seed mixed into every hash.
pub const SEED: u32 = 0xbc9f1d34;

/// Multiplier applied after each folded word.
pub const MULTIPLIER: u32 = 0xc6a4a793;

/// Hash a byte string to 32 bits.
///
/// Input is consumed four bytes at a time as little-endian words. A 1-3 byte
/// tail is folded into one final partial word followed by a last mixing step.
pub fn hash(data: &[u8]) -> u32 {
    let mut h = SEED ^ (data.len() as u32).wrapping_mul(MULTIPLIER);

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let word = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h = h.wrapping_add(word).wrapping_mul(MULTIPLIER);
        h ^= h >> 16;
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        for (i, &byte) in tail.iter().enumerate().rev() {
            h = h.wrapping_add(u32::from(byte) << (8 * i));
        }
        h = h.wrapping_mul(MULTIPLIER);
        h ^= h >> 24;
    }

    h
}
