//! Node storage: bump arena for payloads, parallel vector for child tables.

use std::fmt;

use safe_bump::Arena;

use crate::Version;
use crate::mapper::VersionMapper;
use crate::node::{Children, Node, NodeId, Side};
use crate::table::PointerTable;

/// Owns every node ever allocated.
///
/// Payloads are immutable and go into an append-only [`Arena`]. Child tables
/// keep growing after allocation, so they live in `children`, indexed by the
/// arena index of their node. Nothing is ever freed: a node's lifetime is the
/// store's lifetime once its value has been inserted.
pub struct NodeStore<T, M> {
    nodes: Arena<Node<T>>,
    children: Vec<Children<T, M>>,
}

impl<T, M: VersionMapper> NodeStore<T, M> {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            children: Vec::new(),
        }
    }

    /// Allocates a node for `value` whose slots are empty from `version` on.
    pub fn alloc(&mut self, value: T, version: Version) -> NodeId<T> {
        let id = self.nodes.alloc(Node::new(value));
        debug_assert_eq!(id.into_raw(), self.children.len());
        self.children.push(Children::empty_at(version));
        id
    }

    /// Returns the payload of `id`.
    pub fn value(&self, id: NodeId<T>) -> &T {
        self.nodes.get(id).value()
    }

    /// Returns the `side` table of `id`.
    pub fn table(&self, id: NodeId<T>, side: Side) -> &PointerTable<T, M> {
        self.children[id.into_raw()].get(side)
    }

    /// Returns the `side` table of `id` for writing.
    pub fn table_mut(&mut self, id: NodeId<T>, side: Side) -> &mut PointerTable<T, M> {
        self.children[id.into_raw()].get_mut(side)
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Total written entries across every child table.
    pub fn written_entries(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.get(Side::Left).written() + c.get(Side::Right).written())
            .sum()
    }
}

impl<T, M: VersionMapper> Default for NodeStore<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M: VersionMapper> fmt::Debug for NodeStore<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeStore")
            .field("nodes", &self.children.len())
            .finish_non_exhaustive()
    }
}
