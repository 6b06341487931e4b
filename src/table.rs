//! Versioned pointer table: one child slot across every version.

use std::collections::HashMap;
use std::fmt;

use crate::Version;
use crate::error::{Result, SetError};
use crate::mapper::VersionMapper;
use crate::node::Link;

/// Maps versions to the node a slot references.
///
/// Only versions that wrote the slot own an entry; the mapper decides which
/// written version any other version resolves to. Entries are append-only:
/// a version is written at most once and never overwritten.
pub struct PointerTable<T, M> {
    entries: HashMap<Version, Link<T>>,
    mapper: M,
}

impl<T, M: VersionMapper> PointerTable<T, M> {
    /// Creates a table with no entries.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            mapper: M::default(),
        }
    }

    /// Creates a table whose first entry is `link` at `version`.
    pub fn starting_at(version: Version, link: Link<T>) -> Self {
        let mut table = Self::new();
        table.mapper.record(version);
        table.entries.insert(version, link);
        table
    }

    /// Resolves `version` to `(written_version, link)`.
    ///
    /// The written version is the one whose entry is returned; descendants of
    /// `link` must be resolved at that version, not at `version`.
    pub fn resolve(&self, version: Version) -> Option<(Version, Link<T>)> {
        let written = self.mapper.map(version)?;
        self.entries.get(&written).map(|&link| (written, link))
    }

    /// Writes the first and only entry for `version`.
    pub fn set_at(&mut self, version: Version, link: Link<T>) -> Result<()> {
        if self.entries.contains_key(&version) || !self.mapper.record(version) {
            return Err(SetError::invariant("pointer table entry written twice"));
        }
        self.entries.insert(version, link);
        Ok(())
    }

    /// Makes `version` resolve like `from` without writing an entry.
    pub fn defer_alias(&mut self, version: Version, from: Version) -> Result<()> {
        if self.mapper.alias(version, from) {
            Ok(())
        } else {
            Err(SetError::invariant("pointer table cannot alias unknown version"))
        }
    }

    /// Number of written entries.
    pub fn written(&self) -> usize {
        self.entries.len()
    }
}

impl<T, M: VersionMapper> Default for PointerTable<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M: VersionMapper> fmt::Debug for PointerTable<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerTable")
            .field("written", &self.entries.len())
            .field("mapped", &self.mapper.len())
            .finish()
    }
}
