//! Disjoint-set mapper for branching (fully persistent) histories.

use std::collections::HashMap;

use crate::Version;
use crate::mapper::VersionMapper;

/// Union-find forest over version ids.
///
/// Each set has exactly one written version, its root. Aliasing a new version
/// attaches the new singleton under the root of the source set; two sets that
/// both own entries are never merged. Because attachment always targets a
/// root, every tree has depth at most one and [`find`](Self::find) is O(1)
/// without mutating on read.
#[derive(Debug, Default, Clone)]
pub struct ForestMapper {
    parent: HashMap<Version, Version>,
}

impl ForestMapper {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the representative of `version`'s set.
    #[must_use]
    pub fn find(&self, version: Version) -> Option<Version> {
        let mut current = version;
        loop {
            let next = *self.parent.get(&current)?;
            if next == current {
                return Some(current);
            }
            current = next;
        }
    }
}

impl VersionMapper for ForestMapper {
    const BRANCHING: bool = true;

    fn record(&mut self, version: Version) -> bool {
        if self.parent.contains_key(&version) {
            return false;
        }
        self.parent.insert(version, version);
        true
    }

    fn alias(&mut self, version: Version, from: Version) -> bool {
        if self.parent.contains_key(&version) {
            return false;
        }
        let Some(root) = self.find(from) else {
            return false;
        };
        self.parent.insert(version, root);
        true
    }

    fn map(&self, version: Version) -> Option<Version> {
        self.find(version)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}
