//! Binary-search mapper for linear (partially persistent) histories.

use crate::Version;
use crate::mapper::VersionMapper;

/// Resolves a version to the largest written version `<= v`.
///
/// Written versions are appended in strictly increasing order, so the list
/// stays sorted and lookup is a binary search. Aliasing is implicit: a
/// version with no entry of its own already falls through to its nearest
/// predecessor. That fall-through only holds on a single chain, so trees
/// using this mapper refuse to mutate anything but their latest version.
#[derive(Debug, Default, Clone)]
pub struct ChainMapper {
    versions: Vec<Version>,
}

impl ChainMapper {
    /// Creates an empty mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            versions: Vec::new(),
        }
    }

    /// Returns the most recently written version, if any.
    #[must_use]
    pub fn last(&self) -> Option<Version> {
        self.versions.last().copied()
    }
}

impl VersionMapper for ChainMapper {
    const BRANCHING: bool = false;

    fn record(&mut self, version: Version) -> bool {
        if self.last().is_some_and(|last| version <= last) {
            return false;
        }
        self.versions.push(version);
        true
    }

    fn alias(&mut self, _version: Version, from: Version) -> bool {
        self.map(from).is_some()
    }

    fn map(&self, version: Version) -> Option<Version> {
        let pos = self.versions.partition_point(|&w| w <= version);
        pos.checked_sub(1).map(|i| self.versions[i])
    }

    fn len(&self) -> usize {
        self.versions.len()
    }
}
