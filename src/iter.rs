//! In-order iteration over one version of a persistent set.

use std::slice;

use crate::Version;
use crate::mapper::VersionMapper;
use crate::node::{Link, NodeId, Side};
use crate::store::NodeStore;

/// Iterator over the values of one version, in ascending order.
///
/// Created by `iter` on [`VersionedTree`](crate::VersionedTree),
/// [`PartialSet`](crate::PartialSet) or [`FullSet`](crate::FullSet). Walks
/// the tree lazily with an explicit stack; each hop is resolved through the
/// child table at the version its parent was read at. For the master
/// version it walks the value registry instead.
pub struct Iter<'a, T, M> {
    store: &'a NodeStore<T, M>,
    walk: Walk<'a, T>,
}

enum Walk<'a, T> {
    Registry(slice::Iter<'a, NodeId<T>>),
    Tree(Vec<(NodeId<T>, Version)>),
}

impl<'a, T, M: VersionMapper> Iter<'a, T, M> {
    /// Starts an in-order walk from `root` read at the written version `at`.
    pub(crate) fn tree(store: &'a NodeStore<T, M>, root: Link<T>, at: Version) -> Self {
        let mut stack = Vec::new();
        push_left_spine(store, &mut stack, root, at);
        Self {
            store,
            walk: Walk::Tree(stack),
        }
    }

    /// Walks every registered node in value order.
    pub(crate) fn registry(store: &'a NodeStore<T, M>, ids: &'a [NodeId<T>]) -> Self {
        Self {
            store,
            walk: Walk::Registry(ids.iter()),
        }
    }
}

impl<'a, T, M: VersionMapper> Iterator for Iter<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        match &mut self.walk {
            Walk::Registry(ids) => ids.next().map(|&id| store.value(id)),
            Walk::Tree(stack) => {
                let (id, at) = stack.pop()?;
                match store.table(id, Side::Right).resolve(at) {
                    Some((right_at, right)) => push_left_spine(store, stack, right, right_at),
                    None => tracing::error!(version = at, "right table cannot resolve reachable version"),
                }
                Some(store.value(id))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.walk {
            Walk::Registry(ids) => ids.size_hint(),
            Walk::Tree(stack) => (stack.len(), None),
        }
    }
}

/// Pushes `link` and its chain of left descendants onto `stack`.
fn push_left_spine<T, M: VersionMapper>(
    store: &NodeStore<T, M>,
    stack: &mut Vec<(NodeId<T>, Version)>,
    mut link: Link<T>,
    mut at: Version,
) {
    while let Some(id) = link {
        stack.push((id, at));
        let Some((left_at, left)) = store.table(id, Side::Left).resolve(at) else {
            tracing::error!(version = at, "left table cannot resolve reachable version");
            return;
        };
        (at, link) = (left_at, left);
    }
}
