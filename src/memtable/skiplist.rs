//! SkipList implementation
//!
//! Arena-backed skip list behind a single RwLock: one writer at a time, any
//! number of concurrent readers.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::{Config, DEFAULT_MAX_LEVEL, MAX_MAX_LEVEL, MIN_MAX_LEVEL};
use crate::error::Result;

use super::arena::{compare, score, Arena, HEAD};
use super::iter::Iter;
use super::Record;

/// Topology guarded by the list lock
pub(super) struct Inner<E, R> {
    pub(super) arena: Arena<E>,
    rng: R,
}

/// Ordered in-memory index for recent writes
///
/// ## Concurrency Model
///
/// - **Writes** (`add`): exclusive lock for traversal and splice, so readers
///   see a node either fully linked at every level or not at all.
/// - **Reads** (`search`, `iter`): shared lock, many at once.
/// - `len` and `size` read atomic counters and never block.
pub struct SkipList<E = super::Entry, R = StdRng> {
    inner: RwLock<Inner<E, R>>,
    /// Link slots in the header; node levels are drawn below this bound
    max_level: usize,
    /// Number of distinct keys
    len: AtomicUsize,
    /// Approximate bytes added, never decreases
    size: AtomicUsize,
}

impl<E: Record> SkipList<E, StdRng> {
    /// Create an empty list with the default level bound, seeded from entropy
    pub fn new() -> Self {
        Self::with_rng(DEFAULT_MAX_LEVEL, StdRng::from_entropy())
    }

    /// Create an empty list from validated configuration
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_rng(config.max_level, rng))
    }
}

impl<E: Record> Default for SkipList<E, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record, R: Rng> SkipList<E, R> {
    /// Create an empty list drawing node levels from `rng`
    ///
    /// # Panics
    ///
    /// If `max_level` is outside `2..=64`.
    pub fn with_rng(max_level: usize, rng: R) -> Self {
        assert!(
            (MIN_MAX_LEVEL..=MAX_MAX_LEVEL).contains(&max_level),
            "max_level must be in {}..={}, got {}",
            MIN_MAX_LEVEL,
            MAX_MAX_LEVEL,
            max_level
        );

        debug!(max_level, "created skip list");

        Self {
            inner: RwLock::new(Inner {
                arena: Arena::new(max_level),
                rng,
            }),
            max_level,
            len: AtomicUsize::new(0),
            size: AtomicUsize::new(0),
        }
    }

    /// Insert `entry`, or replace the record already stored under its key
    ///
    /// Fails only if the node arena cannot grow.
    pub fn add(&self, entry: E) -> Result<()> {
        let target = score(entry.key());
        let entry_size = entry.approximate_size();

        let mut guard = self.inner.write();
        let Inner { arena, rng } = &mut *guard;

        // Last node before the insertion point, per level
        let mut update = [HEAD; MAX_MAX_LEVEL];
        let mut prev = HEAD;

        for level in (0..self.max_level).rev() {
            while let Some(next) = arena.next(prev, level) {
                match compare(target, entry.key(), arena.node(next)) {
                    Ordering::Greater => prev = next,
                    Ordering::Equal => {
                        arena.node_mut(next).entry = Some(entry);
                        self.size.fetch_add(entry_size, AtomicOrdering::Relaxed);
                        trace!(node = next, "replaced entry in place");
                        return Ok(());
                    }
                    Ordering::Less => break,
                }
            }
            update[level] = prev;
        }

        let top = random_level(rng, self.max_level);
        let id = arena.alloc(target, entry, top + 1)?;
        for (level, &pred) in update.iter().enumerate().take(top + 1) {
            arena.splice(pred, id, level);
        }

        self.len.fetch_add(1, AtomicOrdering::Relaxed);
        self.size.fetch_add(entry_size, AtomicOrdering::Relaxed);
        trace!(node = id, level = top, "inserted entry");

        Ok(())
    }
}

impl<E: Record, R> SkipList<E, R> {
    /// Look up the record stored under `key`
    pub fn search(&self, key: &[u8]) -> Option<E>
    where
        E: Clone,
    {
        let target = score(key);
        let guard = self.inner.read();
        let arena = &guard.arena;

        let mut prev = HEAD;
        for level in (0..self.max_level).rev() {
            while let Some(next) = arena.next(prev, level) {
                let node = arena.node(next);
                match compare(target, key, node) {
                    Ordering::Greater => prev = next,
                    Ordering::Equal => return node.entry.clone(),
                    Ordering::Less => break,
                }
            }
        }

        None
    }

    pub fn contains_key(&self, key: &[u8]) -> bool
    where
        E: Clone,
    {
        self.search(key).is_some()
    }

    /// Records in key order, read under a shared lock held by the iterator
    ///
    /// Writers block until the iterator is dropped.
    pub fn iter(&self) -> Iter<'_, E, R> {
        let guard = self.inner.read();
        let cursor = guard.arena.next(HEAD, 0);
        Iter::new(guard, cursor)
    }

    /// Approximate bytes held, for rotation decisions
    pub fn size(&self) -> usize {
        self.size.load(AtomicOrdering::Relaxed)
    }

    /// Check if should flush (size >= limit)
    pub fn should_flush(&self, size_limit: usize) -> bool {
        self.size() >= size_limit
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.len.load(AtomicOrdering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Number of nodes linked at each level, level 0 first
    pub fn level_histogram(&self) -> Vec<usize> {
        let guard = self.inner.read();
        let mut counts = vec![0; self.max_level];
        for node in guard.arena.nodes() {
            for count in &mut counts[..node.height()] {
                *count += 1;
            }
        }
        counts
    }

    /// Nothing to release beyond memory; nodes are freed on drop
    pub fn close(&self) -> Result<()> {
        debug!(len = self.len(), size = self.size(), "closed skip list");
        Ok(())
    }
}

/// Draw a node's top level: flip a fair coin from level 1 up, stopping at the
/// first tails or at `max_level - 1`. `P(level >= i) = 2^-(i-1)`.
fn random_level<R: Rng>(rng: &mut R, max_level: usize) -> usize {
    let mut level = 1;
    while level < max_level - 1 && rng.gen_bool(0.5) {
        level += 1;
    }
    level
}
