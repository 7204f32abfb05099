//! Configuration for kvcore
//!
//! Centralized configuration with sensible defaults.

use crate::error::{KvError, Result};

/// Default number of link slots in the skip list header.
pub const DEFAULT_MAX_LEVEL: usize = 48;

/// Smallest usable level bound: level 0 plus one drawn level.
pub const MIN_MAX_LEVEL: usize = 2;

/// Largest accepted level bound.
pub const MAX_MAX_LEVEL: usize = 64;

/// Main configuration for the memtable and its segment filters
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // SkipList Configuration
    // -------------------------------------------------------------------------
    /// Number of levels in the skip list. Fixed for the lifetime of a list;
    /// `2^max_level` should comfortably exceed the expected element count.
    pub max_level: usize,

    /// Seed for level selection. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,

    // -------------------------------------------------------------------------
    // MemTable Configuration
    // -------------------------------------------------------------------------
    /// Max size of memtable before flush (in bytes)
    pub memtable_size_limit: usize,

    // -------------------------------------------------------------------------
    // Bloom Filter Configuration
    // -------------------------------------------------------------------------
    /// Target false positive rate for segment filters
    pub bloom_false_positive_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            rng_seed: None,
            memtable_size_limit: 64 * 1024 * 1024, // 64 MB
            bloom_false_positive_rate: 0.01,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check every field against its accepted range
    pub fn validate(&self) -> Result<()> {
        if !(MIN_MAX_LEVEL..=MAX_MAX_LEVEL).contains(&self.max_level) {
            return Err(KvError::Config(format!(
                "max_level must be in {}..={}, got {}",
                MIN_MAX_LEVEL, MAX_MAX_LEVEL, self.max_level
            )));
        }

        let fp = self.bloom_false_positive_rate;
        if !(fp > 0.0 && fp < 1.0) {
            return Err(KvError::Config(format!(
                "bloom_false_positive_rate must be in (0, 1), got {}",
                fp
            )));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of skip list levels
    pub fn max_level(mut self, levels: usize) -> Self {
        self.config.max_level = levels;
        self
    }

    /// Seed level selection for reproducible list shapes
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    /// Set the memtable size limit (in bytes)
    pub fn memtable_size_limit(mut self, size: usize) -> Self {
        self.config.memtable_size_limit = size;
        self
    }

    /// Set the target false positive rate for bloom filters
    pub fn bloom_false_positive_rate(mut self, rate: f64) -> Self {
        self.config.bloom_false_positive_rate = rate;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
