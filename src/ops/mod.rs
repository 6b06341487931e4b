//! Tree operations over the fat-node store, and the slot helpers they share.
//!
//! Every walk carries the *written* version each hop resolved to: after a
//! slot maps version `v` to `(r, node)`, the node's own tables are read at
//! `r`. Whenever a node is written into a slot at version `r`, both of its
//! child tables are made to resolve `r`, by an explicit entry or an alias.

pub mod find;
pub mod insert;
pub mod remove;

use crate::Version;
use crate::error::{Result, SetError};
use crate::mapper::VersionMapper;
use crate::node::{Link, NodeId, Side};
use crate::store::NodeStore;
use crate::table::PointerTable;

/// A child slot addressed during a walk: the root, or one side of a node.
pub enum Slot<T> {
    Root,
    Child(NodeId<T>, Side),
}

// Slot contains only indices: Copy without a `T: Copy` bound.

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

/// Writes `link` into `slot` at `version`.
pub fn write<T, M: VersionMapper>(
    store: &mut NodeStore<T, M>,
    root: &mut PointerTable<T, M>,
    slot: Slot<T>,
    version: Version,
    link: Link<T>,
) -> Result<()> {
    match slot {
        Slot::Root => root.set_at(version, link),
        Slot::Child(id, side) => store.table_mut(id, side).set_at(version, link),
    }
}

/// Resolves the `side` child of `id` at the written version `at`.
pub fn child<T, M: VersionMapper>(
    store: &NodeStore<T, M>,
    id: NodeId<T>,
    side: Side,
    at: Version,
) -> Result<(Version, Link<T>)> {
    store
        .table(id, side)
        .resolve(at)
        .ok_or(SetError::invariant("child table cannot resolve a reachable version"))
}

/// Carries both child tables of `id` forward: `version` resolves like `from`.
pub fn carry<T, M: VersionMapper>(
    store: &mut NodeStore<T, M>,
    id: NodeId<T>,
    version: Version,
    from: Version,
) -> Result<()> {
    store.table_mut(id, Side::Left).defer_alias(version, from)?;
    store.table_mut(id, Side::Right).defer_alias(version, from)
}
