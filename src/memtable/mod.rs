//! MemTable Module
//!
//! In-memory ordered index for recent writes.
//!
//! ## Responsibilities
//! - Fast point reads and upserts in memory
//! - Single-writer/multi-reader access pattern
//! - Track size for flush triggers
//! - Ordered iteration for segment creation
//!
//! ## Data Structure Choice
//! A skip list whose nodes live in an index arena behind one RwLock:
//! - Expected O(log n) search and insert from random tower heights
//! - Whole-structure locking keeps every splice atomic to readers
//! - A memtable lives for one flush cycle, so coarse locking is enough

mod arena;
mod entry;
mod iter;
mod skiplist;

pub use entry::{Entry, Record};
pub use iter::Iter;
pub use skiplist::SkipList;
