//! Persistent ordered sets on fat-node binary search trees.
//!
//! Every mutation derives a new *version* and leaves all earlier versions
//! intact and queryable. Two strengths share one engine:
//!
//! - [`PartialSet`]: only the latest version may be mutated; the history is
//!   a chain.
//! - [`FullSet`]: any version may be mutated, starting a branch; the history
//!   is a tree.
//!
//! # Key properties
//!
//! - **Fat nodes**: each node's children are version tables, so a mutation
//!   only touches the nodes on its search path.
//! - **One node per value**: a global registry hands out the same node every
//!   time a value is inserted, in any branch, so the node graph is acyclic.
//! - **Master version**: version `0` is reserved and addresses the registry:
//!   "has this value ever been inserted?"
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use fatnode_set::{FullSet, MASTER_VERSION};
//!
//! let mut set = FullSet::new();
//! let v2 = set.insert("a").unwrap();
//! let v3 = set.insert("b").unwrap();
//! let v4 = set.insert_at("c", v2).unwrap();
//!
//! assert_eq!(set.to_vec(v3).unwrap(), ["a", "b"]);
//! assert_eq!(set.to_vec(v4).unwrap(), ["a", "c"]);
//! assert_eq!(set.to_vec(v2).unwrap(), ["a"]);
//! assert_eq!(set.size(MASTER_VERSION), 3);
//! ```
//!
//! # References
//!
//! - Driscoll, Sarnak, Sleator & Tarjan, 1989: "Making Data Structures
//!   Persistent", JCSS 38(1)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod mapper;

mod full;
mod iter;
mod node;
mod ops;
mod partial;
mod registry;
mod store;
mod table;
mod tree;

#[cfg(test)]
mod tests;

pub use error::{Result, SetError};
pub use full::FullSet;
pub use iter::Iter;
pub use partial::PartialSet;
pub use tree::{VersionDisplay, VersionedTree};

/// Identifier of one immutable snapshot. Strictly increasing.
pub type Version = usize;

/// Reserved version addressing the value registry, independent of any
/// snapshot. Never a valid mutation target.
pub const MASTER_VERSION: Version = 0;

/// The empty version every set starts from.
pub const INITIAL_VERSION: Version = 1;
