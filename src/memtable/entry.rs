//! MemTable records
//!
//! The skip list only needs a key to order records by. Everything else about
//! a record is carried through untouched.

use bytes::Bytes;

/// A record the skip list can index.
pub trait Record {
    /// The ordering key, compared as raw bytes
    fn key(&self) -> &[u8];

    /// Best-effort number of bytes this record holds
    fn approximate_size(&self) -> usize {
        self.key().len()
    }
}

/// Entry stored in the MemTable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Bytes,
    /// Empty for tombstones
    pub value: Bytes,
    /// Version assigned by the engine; 0 when unversioned
    pub version: u64,
    /// A tombstone (deleted key)
    pub deleted: bool,
}

impl Entry {
    /// A live value
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            version: 0,
            deleted: false,
        }
    }

    /// A deletion marker for `key`
    pub fn tombstone(key: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: Bytes::new(),
            version: 0,
            deleted: true,
        }
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    pub fn is_tombstone(&self) -> bool {
        self.deleted
    }
}

impl Record for Entry {
    fn key(&self) -> &[u8] {
        &self.key
    }

    fn approximate_size(&self) -> usize {
        self.key.len() + self.value.len()
    }
}
