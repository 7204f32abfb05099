//! In-order iteration over level 0

use parking_lot::RwLockReadGuard;

use super::arena::NodeId;
use super::skiplist::Inner;
use super::Record;

/// Iterator over SkipList records in ascending key order
///
/// Holds the list's read lock until dropped.
pub struct Iter<'a, E, R> {
    guard: RwLockReadGuard<'a, Inner<E, R>>,
    cursor: Option<NodeId>,
}

impl<'a, E, R> Iter<'a, E, R> {
    pub(super) fn new(guard: RwLockReadGuard<'a, Inner<E, R>>, cursor: Option<NodeId>) -> Self {
        Self { guard, cursor }
    }
}

impl<E: Record + Clone, R> Iterator for Iter<'_, E, R> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.guard.arena.node(id);
        self.cursor = node.next[0];
        node.entry.clone()
    }
}
