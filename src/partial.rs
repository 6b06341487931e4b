//! Partially persistent set: mutate the latest version, query any version.

use std::fmt;

use crate::error::{Result, SetError};
use crate::iter::Iter;
use crate::mapper::ChainMapper;
use crate::tree::{VersionDisplay, VersionedTree};
use crate::{MASTER_VERSION, Version};

/// Sorted set whose every past version stays queryable.
///
/// Mutations always apply to [`current_version`](Self::current_version), so
/// the version history is a single chain and each child table resolves a
/// version by binary search over the versions that wrote it.
pub struct PartialSet<T> {
    tree: VersionedTree<T, ChainMapper>,
}

// ---------------------------------------------------------------------------
// Construction & accessors
// ---------------------------------------------------------------------------

impl<T: Ord> PartialSet<T> {
    /// Creates an empty set at version 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: VersionedTree::new(),
        }
    }
}

impl<T> PartialSet<T> {
    /// Returns the most recently minted version.
    #[must_use]
    pub const fn current_version(&self) -> Version {
        self.tree.current_version()
    }

    /// Returns the number of live values at `version`; 0 for unknown versions.
    ///
    /// [`MASTER_VERSION`] yields the number of distinct values ever inserted.
    #[must_use]
    pub fn size(&self, version: Version) -> usize {
        self.tree.size(version)
    }

    /// Returns the number of live values at the latest version.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size(self.tree.current_version())
    }

    /// Returns `true` if the latest version is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes ever allocated.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }
}

// ---------------------------------------------------------------------------
// Read operations
// ---------------------------------------------------------------------------

impl<T: Ord> PartialSet<T> {
    /// Returns `true` if `value` is live at `version`, or for
    /// [`MASTER_VERSION`], if it was ever inserted.
    ///
    /// # Errors
    ///
    /// [`SetError::VersionNotExist`] if
    /// `version` was never minted.
    pub fn contains(&self, value: &T, version: Version) -> Result<bool> {
        self.tree.contains(value, version)
    }

    /// Returns `true` if `value` was ever inserted.
    #[must_use]
    pub fn ever_contained(&self, value: &T) -> bool {
        matches!(self.tree.contains(value, MASTER_VERSION), Ok(true))
    }

    /// Returns an in-order iterator over `version`.
    ///
    /// # Errors
    ///
    /// [`SetError::VersionNotExist`] if
    /// `version` was never minted.
    pub fn iter(&self, version: Version) -> Result<Iter<'_, T, ChainMapper>> {
        self.tree.iter(version)
    }

    /// Returns `version` as a sorted vector.
    ///
    /// # Errors
    ///
    /// [`SetError::VersionNotExist`] if
    /// `version` was never minted.
    pub fn to_vec(&self, version: Version) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.tree.to_vec(version)
    }

    /// Returns a value rendering `version` as `Version X: {a, b, ...}`.
    ///
    /// # Errors
    ///
    /// [`SetError::VersionNotExist`] if
    /// `version` was never minted.
    pub fn display(&self, version: Version) -> Result<VersionDisplay<'_, T, ChainMapper>> {
        self.tree.display(version)
    }
}

// ---------------------------------------------------------------------------
// Write operations
// ---------------------------------------------------------------------------

impl<T: Ord> PartialSet<T> {
    /// Inserts `value` into the latest version, returning the new version.
    ///
    /// # Errors
    ///
    /// [`SetError::ObjectAlreadyExist`]
    /// if `value` is already live.
    pub fn insert(&mut self, value: T) -> Result<Version> {
        let target = self.tree.current_version();
        self.tree.insert(value, target)
    }

    /// Removes `value` from the latest version, returning the new version.
    ///
    /// # Errors
    ///
    /// [`SetError::ObjectNotExist`] if
    /// `value` is not live.
    pub fn remove(&mut self, value: &T) -> Result<Version> {
        let target = self.tree.current_version();
        self.tree.remove(value, target)
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T: Ord> Default for PartialSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PartialSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialSet")
            .field("current_version", &self.current_version())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Inserts each value not already live, one version per inserted value.
///
/// A failure other than a duplicate is logged at `error` level.
impl<T: Ord> Extend<T> for PartialSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            match self.insert(value) {
                Ok(_) | Err(SetError::ObjectAlreadyExist { .. }) => {}
                Err(err) => tracing::error!(%err, "extend failed to insert a value"),
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for PartialSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
