//! Bloom Filter Module
//!
//! Approximate set membership for on-disk segments: no false negatives, a
//! false positive rate tuned through bits per key.
//!
//! ## Encoding
//! ```text
//! ┌──────────────────────────────────────────────┬─────────────┐
//! │ Bit array: ceil(nBits / 8) bytes             │ Trailer (1) │
//! │   bit i lives at byte[i / 8] & (1 << i % 8)  │   k         │
//! └──────────────────────────────────────────────┴─────────────┘
//! ```
//!
//! ## Probe Sequence
//! For a 32-bit digest `h`, `delta = h.rotate_right(17)` is computed once;
//! probe `j` tests bit `h mod nBits` and then advances `h += delta`
//! (wrapping), `k` times. Build and query share this sequence, and other
//! readers of persisted filters depend on it bit for bit.

mod builder;
mod filter;

pub use builder::{bits_per_key, FilterBuilder};
pub use filter::Filter;

// =============================================================================
// Shared Constants (used by builder and filter)
// =============================================================================

/// `ln 2` at the precision every filter writer uses
pub(crate) const LN_2: f64 = 0.69314718056;

/// Largest hash function count a valid filter may carry
pub const MAX_HASH_COUNT: u8 = 30;

/// Smallest bit array a built filter allocates
pub(crate) const MIN_FILTER_BITS: usize = 64;

/// Largest bit array whose positions fit 32-bit probe arithmetic
pub(crate) const MAX_FILTER_BYTES: usize = (u32::MAX / 8) as usize;
