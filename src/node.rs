//! Fat-node types: immutable payload cells and their child slots.

use std::fmt;

use safe_bump::Idx;

use crate::Version;
use crate::mapper::VersionMapper;
use crate::table::PointerTable;

/// Index of a node in the payload arena.
pub type NodeId<T> = Idx<Node<T>>;

/// Contents of a child slot: a node, or nothing.
pub type Link<T> = Option<NodeId<T>>;

/// Immutable payload cell.
///
/// One node exists per distinct value for the lifetime of the structure.
/// The payload never changes; only the node's child tables grow, and those
/// live beside the arena in [`NodeStore`](crate::store::NodeStore).
pub struct Node<T> {
    value: T,
}

impl<T> Node<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }
}

/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The sibling slot.
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Both child tables of one node.
pub struct Children<T, M> {
    left: PointerTable<T, M>,
    right: PointerTable<T, M>,
}

impl<T, M: VersionMapper> Children<T, M> {
    /// Two empty slots, both written as absent at `version`.
    pub fn empty_at(version: Version) -> Self {
        Self {
            left: PointerTable::starting_at(version, None),
            right: PointerTable::starting_at(version, None),
        }
    }

    pub const fn get(&self, side: Side) -> &PointerTable<T, M> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub const fn get_mut(&mut self, side: Side) -> &mut PointerTable<T, M> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

// Manual impl: avoid a false `T: Debug` bound, tables only hold indices.
impl<T, M: VersionMapper> fmt::Debug for Children<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
