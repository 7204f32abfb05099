//! Filter Builder
//!
//! Collects key digests while a segment is written, then encodes them into a
//! [`Filter`] in one step.

use crate::config::Config;
use crate::error::Result;
use crate::hash::hash;

use super::{Filter, LN_2};

/// Bits per key needed to reach false positive rate `fp` over `num_entries`
/// keys: `ceil(m / n)` with `m = -n * ln(fp) / ln(2)^2`.
///
/// `fp` should lie in (0, 1). An empty key set is sized as a single key.
pub fn bits_per_key(num_entries: usize, fp: f64) -> usize {
    let n = num_entries.max(1) as f64;
    let m = -n * fp.ln() / LN_2.powi(2);
    (m / n).ceil().max(0.0) as usize
}

/// Accumulates key digests for a single filter
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    /// Bit budget for each key
    bits_per_key: usize,
    /// Digests added so far, in insertion order
    hashes: Vec<u32>,
}

impl FilterBuilder {
    /// Create a builder with a fixed bits-per-key budget
    pub fn new(bits_per_key: usize) -> Self {
        Self {
            bits_per_key,
            hashes: Vec::new(),
        }
    }

    /// Create a builder sized for `expected_keys` at false positive rate `fp`
    pub fn with_false_positive_rate(expected_keys: usize, fp: f64) -> Self {
        let mut builder = Self::new(bits_per_key(expected_keys, fp));
        builder.hashes.reserve(expected_keys);
        builder
    }

    /// Create a builder using the configured false positive rate
    pub fn from_config(config: &Config, expected_keys: usize) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_false_positive_rate(
            expected_keys,
            config.bloom_false_positive_rate,
        ))
    }

    /// Add a raw key
    pub fn add_key(&mut self, key: &[u8]) {
        self.hashes.push(hash(key));
    }

    /// Add a key that was already hashed with [`hash`]
    pub fn add_hash(&mut self, h: u32) {
        self.hashes.push(h);
    }

    /// Number of digests added
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn bits_per_key(&self) -> usize {
        self.bits_per_key
    }

    /// Encode all added digests
    pub fn finish(self) -> Filter {
        Filter::build(&self.hashes, self.bits_per_key)
    }
}

impl Extend<u32> for FilterBuilder {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        self.hashes.extend(iter);
    }
}
