//! Value registry: the one canonical node per distinct value.

use crate::Version;
use crate::mapper::VersionMapper;
use crate::node::NodeId;
use crate::store::NodeStore;

/// Sorted index of every node ever allocated, keyed by payload.
///
/// Never shrinks. Guarantees that a value removed in one version and
/// inserted again, in any branch, reuses its first node, which keeps the
/// node graph acyclic.
///
/// Lookup is a binary search, O(log n) payload comparisons. Registering a
/// value seen for the first time also shifts the tail of the sorted vector,
/// so that step is O(n) moves; repeat insertions never pay it.
pub struct ValueRegistry<T> {
    ids: Vec<NodeId<T>>,
}

impl<T: Ord> ValueRegistry<T> {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    fn search<M: VersionMapper>(&self, store: &NodeStore<T, M>, value: &T) -> Result<usize, usize> {
        self.ids.binary_search_by(|&id| store.value(id).cmp(value))
    }

    /// Returns the node for `value`, allocating it at `version` if the value
    /// has never been seen. The flag is `true` for a fresh allocation.
    pub fn find_or_insert<M: VersionMapper>(
        &mut self,
        store: &mut NodeStore<T, M>,
        value: T,
        version: Version,
    ) -> (NodeId<T>, bool) {
        match self.search(store, &value) {
            Ok(pos) => (self.ids[pos], false),
            Err(pos) => {
                let id = store.alloc(value, version);
                self.ids.insert(pos, id);
                (id, true)
            }
        }
    }

    /// Returns `true` if `value` was ever inserted, in any version.
    pub fn ever_existed<M: VersionMapper>(&self, store: &NodeStore<T, M>, value: &T) -> bool {
        self.search(store, value).is_ok()
    }
}

impl<T> ValueRegistry<T> {
    /// All registered nodes in value order.
    pub fn ids(&self) -> &[NodeId<T>] {
        &self.ids
    }

    /// Number of distinct values ever inserted.
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}
