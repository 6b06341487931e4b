//! Lookup operation: descends the tree of one version.

use std::cmp::Ordering;

use crate::Version;
use crate::error::{Result, SetError};
use crate::mapper::VersionMapper;
use crate::node::{NodeId, Side};
use crate::ops;
use crate::store::NodeStore;
use crate::table::PointerTable;

/// Searches for `value` in the tree of `version`.
///
/// Returns the node and the written version its slot resolved to, or `None`
/// if the value is not live at `version`.
pub fn search<T, M>(
    store: &NodeStore<T, M>,
    root: &PointerTable<T, M>,
    value: &T,
    version: Version,
) -> Result<Option<(NodeId<T>, Version)>>
where
    T: Ord,
    M: VersionMapper,
{
    let (mut at, mut link) = root
        .resolve(version)
        .ok_or(SetError::invariant("root table cannot resolve a minted version"))?;

    while let Some(id) = link {
        let side = match value.cmp(store.value(id)) {
            Ordering::Equal => return Ok(Some((id, at))),
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        (at, link) = ops::child(store, id, side, at)?;
    }
    Ok(None)
}
