//! Error types for the sharded persistent array.

use sharray_store::StoreError;
use sharray_types::ContentRef;

/// Errors that can occur while building or traversing a sharray.
///
/// None of these are retried internally; every failure aborts the current
/// operation and propagates. Retry policy, if any, belongs to the store.
#[derive(Debug, thiserror::Error)]
pub enum SharrayError {
    /// The underlying store put/get failed (propagated verbatim).
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A referenced node does not exist in the store.
    #[error("node not found: {0:?}")]
    NotFound(ContentRef),

    /// Bytes fetched from the store could not be parsed into a node.
    #[error("failed to decode node {id:?}: {reason}")]
    Decode {
        /// The reference the bytes were fetched by.
        id: ContentRef,
        /// Parser diagnostic.
        reason: String,
    },

    /// A decoded node's items contradict its height: a leaf holding child
    /// references, or an internal node holding values. Indicates either a
    /// width mismatch between build and load, or store corruption.
    #[error("node {id:?} at height {height} holds items of the wrong kind")]
    ReferenceType {
        /// The offending node.
        id: ContentRef,
        /// The height the node declared for itself.
        height: u32,
    },

    /// The requested index is at or beyond the array's length. A normal,
    /// expected condition, distinct from corruption.
    #[error("index {index} out of range")]
    OutOfRange {
        /// The rejected index, local to the node that rejected it.
        index: usize,
    },

    /// The branching factor cannot produce a valid tree.
    #[error("invalid width {0}: cannot build a tree with this branching factor")]
    InvalidWidth(usize),

    /// A value or node could not be serialized for storage.
    #[error("failed to encode node: {0}")]
    Encode(String),
}

/// Convenience alias for sharray results.
pub type SharrayResult<T> = Result<T, SharrayError>;
