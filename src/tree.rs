//! Versioned tree engine shared by both persistence strengths.

use std::fmt;

use crate::error::{Result, SetError};
use crate::iter::Iter;
use crate::mapper::VersionMapper;
use crate::ops::find::search;
use crate::ops::insert::insert_path;
use crate::ops::remove::remove_path;
use crate::registry::ValueRegistry;
use crate::store::NodeStore;
use crate::table::PointerTable;
use crate::{INITIAL_VERSION, MASTER_VERSION, Version};

/// Fat-node binary search tree retaining every version it has produced.
///
/// Version [`INITIAL_VERSION`] is the empty set. Each successful mutation
/// mints `current_version() + 1`. The mapper `M` decides which versions may
/// be targeted through [`VersionMapper::BRANCHING`]: with
/// [`ChainMapper`](crate::mapper::ChainMapper) only the latest version may be
/// mutated, with [`ForestMapper`](crate::mapper::ForestMapper) any minted
/// version may.
/// [`PartialSet`](crate::PartialSet) and [`FullSet`](crate::FullSet) fix
/// that choice and expose the matching API.
///
/// No rebalancing is performed: adversarial insertion orders degrade the
/// search path to O(n).
pub struct VersionedTree<T, M> {
    store: NodeStore<T, M>,
    registry: ValueRegistry<T>,
    root: PointerTable<T, M>,
    /// `sizes[v]` = live values at `v`; `sizes[0]` = values ever inserted.
    sizes: Vec<usize>,
    last_version: Version,
}

// ---------------------------------------------------------------------------
// Construction & accessors
// ---------------------------------------------------------------------------

impl<T: Ord, M: VersionMapper> VersionedTree<T, M> {
    /// Creates an empty tree at [`INITIAL_VERSION`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: NodeStore::new(),
            registry: ValueRegistry::new(),
            root: PointerTable::starting_at(INITIAL_VERSION, None),
            sizes: vec![0, 0],
            last_version: INITIAL_VERSION,
        }
    }
}

impl<T, M: VersionMapper> VersionedTree<T, M> {
    /// Returns the most recently minted version.
    #[must_use]
    pub const fn current_version(&self) -> Version {
        self.last_version
    }

    /// Returns the number of live values at `version`.
    ///
    /// [`MASTER_VERSION`] yields the number of distinct values ever inserted.
    /// Versions that were never minted yield 0.
    #[must_use]
    pub fn size(&self, version: Version) -> usize {
        self.sizes.get(version).copied().unwrap_or(0)
    }

    /// Returns the number of nodes ever allocated (one per distinct value).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of written child-table entries across all nodes.
    ///
    /// Grows by O(path length) per mutation, not by the set size.
    #[must_use]
    pub fn table_entries(&self) -> usize {
        self.store.written_entries()
    }

    fn check_version(&self, version: Version) -> Result<()> {
        if version > self.last_version {
            return Err(SetError::version_not_exist(version, self.last_version));
        }
        Ok(())
    }

    fn check_target(&self, version: Version) -> Result<()> {
        if version == MASTER_VERSION {
            return Err(SetError::VersionZeroIllegal);
        }
        self.check_version(version)?;
        if !M::BRANCHING && version != self.last_version {
            return Err(SetError::VersionNotLatest {
                version,
                latest: self.last_version,
            });
        }
        Ok(())
    }

    /// Pushes the size of `new` and publishes it as the latest version.
    fn publish(&mut self, new: Version, size: usize) {
        self.sizes.push(size);
        self.last_version = new;
    }
}

// ---------------------------------------------------------------------------
// Read operations
// ---------------------------------------------------------------------------

impl<T: Ord, M: VersionMapper> VersionedTree<T, M> {
    /// Returns `true` if `value` is live at `version`.
    ///
    /// For [`MASTER_VERSION`], returns `true` if `value` was ever inserted
    /// at any version, including values since removed everywhere.
    ///
    /// # Errors
    ///
    /// [`SetError::VersionNotExist`] if `version` was never minted.
    pub fn contains(&self, value: &T, version: Version) -> Result<bool> {
        if version == MASTER_VERSION {
            return Ok(self.registry.ever_existed(&self.store, value));
        }
        self.check_version(version)?;
        Ok(search(&self.store, &self.root, value, version)?.is_some())
    }

    /// Returns an in-order iterator over the values live at `version`.
    ///
    /// For [`MASTER_VERSION`], iterates every value ever inserted.
    ///
    /// # Errors
    ///
    /// [`SetError::VersionNotExist`] if `version` was never minted.
    pub fn iter(&self, version: Version) -> Result<Iter<'_, T, M>> {
        if version == MASTER_VERSION {
            return Ok(Iter::registry(&self.store, self.registry.ids()));
        }
        self.check_version(version)?;
        let (at, root) = self
            .root
            .resolve(version)
            .ok_or(SetError::invariant("root table cannot resolve a minted version"))?;
        Ok(Iter::tree(&self.store, root, at))
    }

    /// Returns `version` as a sorted vector.
    ///
    /// # Errors
    ///
    /// [`SetError::VersionNotExist`] if `version` was never minted.
    pub fn to_vec(&self, version: Version) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.iter(version)?.cloned().collect())
    }

    /// Returns a value rendering `version` as `Version X: {a, b, ...}`.
    ///
    /// # Errors
    ///
    /// [`SetError::VersionNotExist`] if `version` was never minted.
    pub fn display(&self, version: Version) -> Result<VersionDisplay<'_, T, M>> {
        self.check_version(version)?;
        Ok(VersionDisplay { tree: self, version })
    }
}

// ---------------------------------------------------------------------------
// Write operations
// ---------------------------------------------------------------------------

impl<T: Ord, M: VersionMapper> VersionedTree<T, M> {
    /// Inserts `value` into `target`, returning the newly minted version.
    ///
    /// `target` is left untouched; the new version equals `target` plus
    /// `value`.
    ///
    /// # Errors
    ///
    /// - [`SetError::VersionZeroIllegal`] if `target` is [`MASTER_VERSION`].
    /// - [`SetError::VersionNotExist`] if `target` was never minted.
    /// - [`SetError::VersionNotLatest`] if `M` cannot branch and `target` is
    ///   not the latest version.
    /// - [`SetError::ObjectAlreadyExist`] if `value` is live at `target`.
    pub fn insert(&mut self, value: T, target: Version) -> Result<Version> {
        self.check_target(target)?;
        if self.contains(&value, target)? {
            return Err(SetError::ObjectAlreadyExist { version: target });
        }

        let new = self.last_version + 1;
        let fresh = insert_path(
            &mut self.store,
            &mut self.registry,
            &mut self.root,
            value,
            target,
            new,
        )?;
        if fresh {
            self.sizes[MASTER_VERSION] += 1;
        }
        let size = self.sizes[target] + 1;
        self.publish(new, size);

        tracing::debug!(version = new, from = target, size, fresh, "minted version on insert");
        Ok(new)
    }

    /// Removes `value` from `target`, returning the newly minted version.
    ///
    /// # Errors
    ///
    /// - [`SetError::VersionZeroIllegal`] if `target` is [`MASTER_VERSION`].
    /// - [`SetError::VersionNotExist`] if `target` was never minted.
    /// - [`SetError::VersionNotLatest`] if `M` cannot branch and `target` is
    ///   not the latest version.
    /// - [`SetError::ObjectNotExist`] if `value` is not live at `target`.
    pub fn remove(&mut self, value: &T, target: Version) -> Result<Version> {
        self.check_target(target)?;
        if !self.contains(value, target)? {
            return Err(SetError::ObjectNotExist { version: target });
        }

        let new = self.last_version + 1;
        remove_path(&mut self.store, &mut self.root, value, target, new)?;
        let size = self.sizes[target] - 1;
        self.publish(new, size);

        tracing::debug!(version = new, from = target, size, "minted version on remove");
        Ok(new)
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T: Ord, M: VersionMapper> Default for VersionedTree<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M: VersionMapper> fmt::Debug for VersionedTree<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionedTree")
            .field("current_version", &self.last_version)
            .field("len", &self.size(self.last_version))
            .field("nodes", &self.store.len())
            .finish_non_exhaustive()
    }
}

/// Renders one version as `Version X: {a, b, ...}`.
///
/// Created by `display` on [`VersionedTree`], [`PartialSet`](crate::PartialSet)
/// or [`FullSet`](crate::FullSet).
pub struct VersionDisplay<'a, T, M> {
    tree: &'a VersionedTree<T, M>,
    version: Version,
}

impl<T: Ord + fmt::Display, M: VersionMapper> fmt::Display for VersionDisplay<'_, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version {}: {{", self.version)?;
        let values = self.tree.iter(self.version).map_err(|_| fmt::Error)?;
        for (i, value) in values.enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}
