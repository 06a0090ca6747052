//! Foundation types for the sharded persistent array ("sharray").
//!
//! This crate provides the content-reference type shared by the store and
//! array crates. Every other sharray crate depends on `sharray-types`.
//!
//! # Key Types
//!
//! - [`ContentRef`] — Content-addressed identifier (BLAKE3 hash) of a stored
//!   node's serialized bytes
//! - [`TypeError`] — Errors from parsing and conversion

pub mod error;
pub mod reference;

pub use error::TypeError;
pub use reference::ContentRef;
