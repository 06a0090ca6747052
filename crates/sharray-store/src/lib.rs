//! Content-addressed object storage boundary for the sharded persistent
//! array.
//!
//! Every node of a sharray is stored as an immutable blob of serialized
//! bytes, keyed by its BLAKE3 content reference. The store never interprets
//! the bytes it holds -- it is a pure key-value service, and the array layer
//! is its only decoder.
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`InMemoryObjectStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Objects are immutable once written (content-addressing guarantees this).
//! 2. Concurrent reads are always safe (objects are immutable).
//! 3. The store never interprets object contents.
//! 4. All I/O errors are propagated, never silently ignored.
//! 5. Cancellation belongs to the backend: a deadline-aware store surfaces
//!    it as [`StoreError::Canceled`] from `put`/`get`, and callers abort.

pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryObjectStore;
pub use traits::ObjectStore;
