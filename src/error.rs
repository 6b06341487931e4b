//! Error types for persistent set operations.

use thiserror::Error;

use crate::Version;

/// Result type for persistent set operations.
pub type Result<T> = std::result::Result<T, SetError>;

/// Errors raised by persistent set operations.
///
/// Every variant except [`InternalInvariantViolation`](Self::InternalInvariantViolation)
/// is a rejected user request. A rejected mutation leaves every version, the
/// size ledger and the version counter untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The referenced version was never minted.
    #[error("version {version} does not exist (latest is {latest})")]
    VersionNotExist {
        /// The requested version.
        version: Version,
        /// The most recently minted version.
        latest: Version,
    },

    /// The reserved master version was supplied as a mutation target.
    #[error("version 0 is reserved and cannot be mutated")]
    VersionZeroIllegal,

    /// A non-branching tree was asked to mutate a version other than its
    /// latest.
    #[error("version {version} is not the latest ({latest}) and this history cannot branch")]
    VersionNotLatest {
        /// The requested version.
        version: Version,
        /// The most recently minted version.
        latest: Version,
    },

    /// Insert targeted a version that already holds the value.
    #[error("version {version} already contains this value")]
    ObjectAlreadyExist {
        /// The targeted version.
        version: Version,
    },

    /// Remove targeted a version that does not hold the value.
    #[error("version {version} does not contain this value")]
    ObjectNotExist {
        /// The targeted version.
        version: Version,
    },

    /// A traversal expected a live mapping and found none. Always a bug.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),
}

impl SetError {
    /// Creates a missing-version error.
    #[must_use]
    pub const fn version_not_exist(version: Version, latest: Version) -> Self {
        Self::VersionNotExist { version, latest }
    }

    /// Creates an internal invariant error.
    #[must_use]
    pub const fn invariant(what: &'static str) -> Self {
        Self::InternalInvariantViolation(what)
    }
}
