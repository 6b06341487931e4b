//! Version-resolution policies for per-slot pointer tables.
//!
//! A table only stores entries for the versions that wrote it. Every other
//! version that must see the slot is resolved to one of those written
//! versions by a [`VersionMapper`]:
//!
//! - [`ChainMapper`]: binary search for the largest written version `<= v`.
//!   Correct only while the version history is a single chain.
//! - [`ForestMapper`]: disjoint-set forest over version ids. A new version is
//!   attached to the set of the version it was derived from, so branches
//!   resolve independently.

mod chain;
mod forest;

pub use chain::ChainMapper;
pub use forest::ForestMapper;

use crate::Version;

/// Resolves arbitrary versions to the written version they share an entry with.
pub trait VersionMapper: Default {
    /// Whether versions other than the latest may be mutated.
    ///
    /// When `false`, the engine rejects any mutation that does not target
    /// the most recently minted version.
    const BRANCHING: bool;

    /// Registers `version` as owning its own written entry.
    ///
    /// Returns `false` if the version cannot be registered (already known,
    /// or out of order for mappers that require ordering).
    fn record(&mut self, version: Version) -> bool;

    /// Makes `version` resolve exactly like `from` until told otherwise.
    ///
    /// Returns `false` if `from` is unknown to this mapper.
    fn alias(&mut self, version: Version, from: Version) -> bool;

    /// Returns the written version that `version` resolves to, or `None` if
    /// the mapper has never heard of it.
    fn map(&self, version: Version) -> Option<Version>;

    /// Number of versions this mapper can resolve directly.
    fn len(&self) -> usize;

    /// Returns `true` if no version has been registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
