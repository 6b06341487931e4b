//! Insertion operation: path-copy insert into a new version.

use std::cmp::Ordering;

use crate::Version;
use crate::error::{Result, SetError};
use crate::mapper::VersionMapper;
use crate::node::Side;
use crate::ops::{self, Slot};
use crate::registry::ValueRegistry;
use crate::store::NodeStore;
use crate::table::PointerTable;

/// Inserts `value` into the tree of `target`, publishing the result as `new`.
///
/// Each node on the search path is re-linked into its parent slot at `new`;
/// the side not descended is aliased to the version it was read at, so the
/// untouched subtree carries forward without being visited. The value's
/// canonical node comes from the registry and is written into the empty slot
/// reached at the bottom of the path.
///
/// The caller has already checked that `value` is not live at `target`.
/// Returns `true` if a new node was allocated.
pub fn insert_path<T, M>(
    store: &mut NodeStore<T, M>,
    registry: &mut ValueRegistry<T>,
    root: &mut PointerTable<T, M>,
    value: T,
    target: Version,
    new: Version,
) -> Result<bool>
where
    T: Ord,
    M: VersionMapper,
{
    let (mut at, mut link) = root
        .resolve(target)
        .ok_or(SetError::invariant("root table cannot resolve insert target"))?;
    let mut slot = Slot::Root;

    while let Some(id) = link {
        ops::write(store, root, slot, new, Some(id))?;
        let side = match value.cmp(store.value(id)) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => return Err(SetError::invariant("inserted value already on path")),
        };
        store.table_mut(id, side.other()).defer_alias(new, at)?;
        (at, link) = ops::child(store, id, side, at)?;
        slot = Slot::Child(id, side);
    }

    let (id, fresh) = registry.find_or_insert(store, value, new);
    if fresh {
        tracing::trace!(version = new, "allocated node");
    } else {
        // Reused node re-enters as a leaf.
        store.table_mut(id, Side::Left).set_at(new, None)?;
        store.table_mut(id, Side::Right).set_at(new, None)?;
        tracing::trace!(version = new, "reused registered node");
    }
    ops::write(store, root, slot, new, Some(id))?;
    Ok(fresh)
}
