//! Removal operation: path-copy delete into a new version.

use std::cmp::Ordering;

use crate::Version;
use crate::error::{Result, SetError};
use crate::mapper::VersionMapper;
use crate::node::{NodeId, Side};
use crate::ops::{self, Slot};
use crate::store::NodeStore;
use crate::table::PointerTable;

/// Removes `value` from the tree of `target`, publishing the result as `new`.
///
/// The caller has already checked that `value` is live at `target`.
pub fn remove_path<T, M>(
    store: &mut NodeStore<T, M>,
    root: &mut PointerTable<T, M>,
    value: &T,
    target: Version,
    new: Version,
) -> Result<()>
where
    T: Ord,
    M: VersionMapper,
{
    let (mut at, mut link) = root
        .resolve(target)
        .ok_or(SetError::invariant("root table cannot resolve remove target"))?;
    let mut slot = Slot::Root;

    let found = loop {
        let id = link.ok_or(SetError::invariant("removed value missing from path"))?;
        let side = match value.cmp(store.value(id)) {
            Ordering::Equal => break id,
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        ops::write(store, root, slot, new, Some(id))?;
        store.table_mut(id, side.other()).defer_alias(new, at)?;
        (at, link) = ops::child(store, id, side, at)?;
        slot = Slot::Child(id, side);
    };

    let (left_at, left) = ops::child(store, found, Side::Left, at)?;
    let (right_at, right) = ops::child(store, found, Side::Right, at)?;

    match (left, right) {
        (None, None) => ops::write(store, root, slot, new, None),
        (Some(only), None) => promote(store, root, slot, only, left_at, new),
        (None, Some(only)) => promote(store, root, slot, only, right_at, new),
        (Some(l), Some(r)) => replace_with_successor(store, root, slot, (l, left_at), (r, right_at), new),
    }
}

/// Moves a single child up into `slot`; its subtree is shared, not copied.
fn promote<T, M: VersionMapper>(
    store: &mut NodeStore<T, M>,
    root: &mut PointerTable<T, M>,
    slot: Slot<T>,
    child: NodeId<T>,
    child_at: Version,
    new: Version,
) -> Result<()> {
    ops::write(store, root, slot, new, Some(child))?;
    ops::carry(store, child, new, child_at)
}

/// Fills `slot` with the in-order successor of a two-child node.
///
/// ```text
///          target  |   new
///        [6]       |     [11]
///       /   \      |    /    \
///    [4]    [16]   | [4]     [16]
///           /      |         /
///       [11]       |     [13]
///          \       |
///          [13]    |
/// ```
///
/// Nodes between the right child and the successor are path-copied; the
/// successor's right child is spliced into the successor's old slot.
fn replace_with_successor<T, M: VersionMapper>(
    store: &mut NodeStore<T, M>,
    root: &mut PointerTable<T, M>,
    slot: Slot<T>,
    (left, left_at): (NodeId<T>, Version),
    (right, right_at): (NodeId<T>, Version),
    new: Version,
) -> Result<()> {
    let (first_at, first) = ops::child(store, right, Side::Left, right_at)?;

    let Some(first) = first else {
        // The right child is the successor.
        store.table_mut(right, Side::Left).set_at(new, Some(left))?;
        store.table_mut(right, Side::Right).defer_alias(new, right_at)?;
        ops::carry(store, left, new, left_at)?;
        return ops::write(store, root, slot, new, Some(right));
    };

    store.table_mut(right, Side::Right).defer_alias(new, right_at)?;

    let mut parent = right;
    let (mut at, mut successor) = (first_at, first);
    loop {
        let (next_at, next) = ops::child(store, successor, Side::Left, at)?;
        let Some(next) = next else { break };
        store.table_mut(parent, Side::Left).set_at(new, Some(successor))?;
        store.table_mut(successor, Side::Right).defer_alias(new, at)?;
        parent = successor;
        (at, successor) = (next_at, next);
    }

    let (tail_at, tail) = ops::child(store, successor, Side::Right, at)?;
    store.table_mut(parent, Side::Left).set_at(new, tail)?;
    if let Some(tail) = tail {
        ops::carry(store, tail, new, tail_at)?;
    }

    store.table_mut(successor, Side::Left).set_at(new, Some(left))?;
    store.table_mut(successor, Side::Right).set_at(new, Some(right))?;
    ops::carry(store, left, new, left_at)?;
    ops::write(store, root, slot, new, Some(successor))
}
