//! Node arena for the skip list
//!
//! Nodes live in one growable vector and link to each other by index, so the
//! list owns every node outright and no node is aliased. Index 0 is the
//! header: no record, one link slot per level.
//!
//! ```text
//! Level 2:  [0] ──────────────────► [3] ─────────► None
//! Level 1:  [0] ─────────► [2] ───► [3] ─────────► None
//! Level 0:  [0] ─► [1] ──► [2] ───► [3] ─► [4] ──► None
//! ```

use std::cmp::Ordering;

use crate::error::Result;

use super::Record;

/// Position of a node in the arena
pub(crate) type NodeId = usize;

/// The header node's position
pub(crate) const HEAD: NodeId = 0;

pub(crate) struct Node<E> {
    /// Order-preserving approximation of the key's first 8 bytes
    pub(crate) score: f64,
    /// `None` only for the header
    pub(crate) entry: Option<E>,
    /// Successor at each level this node takes part in
    pub(crate) next: Vec<Option<NodeId>>,
}

impl<E: Record> Node<E> {
    pub(crate) fn key(&self) -> &[u8] {
        match &self.entry {
            Some(entry) => entry.key(),
            None => &[],
        }
    }

    /// Number of levels the node is linked at
    pub(crate) fn height(&self) -> usize {
        self.next.len()
    }
}

pub(crate) struct Arena<E> {
    nodes: Vec<Node<E>>,
}

impl<E: Record> Arena<E> {
    /// Create an arena holding only a header with `max_level` link slots
    pub(crate) fn new(max_level: usize) -> Self {
        let head = Node {
            score: 0.0,
            entry: None,
            next: vec![None; max_level],
        };
        Self { nodes: vec![head] }
    }

    /// Append an unlinked node with `height` empty link slots
    pub(crate) fn alloc(&mut self, score: f64, entry: E, height: usize) -> Result<NodeId> {
        let mut next = Vec::new();
        next.try_reserve_exact(height)?;
        next.resize(height, None);

        self.nodes.try_reserve(1)?;
        self.nodes.push(Node {
            score,
            entry: Some(entry),
            next,
        });
        Ok(self.nodes.len() - 1)
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<E> {
        &self.nodes[id]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<E> {
        &mut self.nodes[id]
    }

    /// Every node except the header, in allocation order
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Node<E>> {
        self.nodes.iter().skip(1)
    }

    /// Successor of `id` at `level`
    #[inline]
    pub(crate) fn next(&self, id: NodeId, level: usize) -> Option<NodeId> {
        self.nodes[id].next[level]
    }

    /// Link `id` after `prev` at `level`
    pub(crate) fn splice(&mut self, prev: NodeId, id: NodeId, level: usize) {
        let succ = self.nodes[prev].next[level];
        self.nodes[id].next[level] = succ;
        self.nodes[prev].next[level] = Some(id);
    }
}

/// Pack up to the first 8 key bytes big-endian, zero padded, as an f64.
///
/// Monotone in byte order, so a strict score difference always agrees with
/// the key order. Equal scores need the full key to break the tie.
pub(crate) fn score(key: &[u8]) -> f64 {
    let mut packed = [0u8; 8];
    let len = key.len().min(8);
    packed[..len].copy_from_slice(&key[..len]);
    u64::from_be_bytes(packed) as f64
}

/// Order of the target `(score, key)` relative to `node`
#[inline]
pub(crate) fn compare<E: Record>(score: f64, key: &[u8], node: &Node<E>) -> Ordering {
    match score.partial_cmp(&node.score) {
        Some(Ordering::Equal) | None => key.cmp(node.key()),
        Some(ord) => ord,
    }
}
