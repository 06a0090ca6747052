//! Sharded persistent array over a content-addressed object store.
//!
//! A sharray represents an ordered sequence of values as an immutable tree
//! of fixed-width nodes. Each node is stored independently in an
//! [`ObjectStore`](sharray_store::ObjectStore) and referenced by the BLAKE3
//! hash of its serialized bytes, so a single root [`ContentRef`] is enough
//! to reconstruct length, random access, and in-order iteration later --
//! without ever materializing the whole array in memory.
//!
//! # Structure
//!
//! - Leaves (`height == 0`) hold up to `width` caller-supplied values.
//! - Internal nodes (`height > 0`) hold up to `width` references to children
//!   at exactly `height - 1`.
//! - Only the last child at any level may be partially filled; every other
//!   sibling is full. This lets every traversal compute subtree capacity as
//!   `width^height` instead of persisting per-node counts.
//!
//! `width` is chosen at build time and is *not* persisted: the caller must
//! supply the same value to [`Sharray::load`], or all routing arithmetic is
//! silently wrong.
//!
//! # Operations
//!
//! - [`build`] -- bottom-up construction, returns the root reference
//! - [`Sharray::len`] -- O(height) store reads along the rightmost spine
//! - [`Sharray::get`] -- O(height) store reads, one decode per level
//! - [`Sharray::for_each`] / [`Sharray::try_for_each`] -- depth-first
//!   in-order visit of every value, short-circuiting on the first failure
//!
//! The structure is build-once/read-many: nothing mutates a stored tree, and
//! a [`Sharray`] handle is immutable after load.

pub mod builder;
pub mod error;
pub mod node;
pub mod tree;

pub use builder::build;
pub use error::{SharrayError, SharrayResult};
pub use node::{Items, Node};
pub use sharray_types::ContentRef;
pub use tree::Sharray;
