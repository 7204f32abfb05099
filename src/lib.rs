//! # kvcore
//!
//! The two hot-path data structures of an LSM key-value engine:
//! - A concurrent, ordered in-memory index (skip list memtable)
//! - A bloom filter guarding on-disk segment lookups
//! - The 32-bit murmur-style hash both of them depend on
//!
//! ## Architecture Overview
//!
//! ```text
//!   writes                                    point reads
//!     │                                           │
//!     ▼                                           ▼
//! ┌─────────────┐   flush (engine)   ┌──────────────────────┐
//! │  SkipList   │ ─────────────────► │  segment + Filter    │
//! │  (RwLock)   │   key digests      │  may_contain(key)?   │
//! └──────┬──────┘                    └──────────┬───────────┘
//!        │                                      │
//!        └──────────────┬───────────────────────┘
//!                       ▼
//!                ┌─────────────┐
//!                │    hash     │
//!                │  (murmur)   │
//!                └─────────────┘
//! ```
//!
//! The list and the filter never call each other; the surrounding engine
//! builds a filter over a segment's keys when it flushes a memtable.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod hash;
pub mod bloom;
pub mod memtable;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use hash::hash;
pub use bloom::{Filter, FilterBuilder};
pub use memtable::{Entry, Record, SkipList};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvcore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
