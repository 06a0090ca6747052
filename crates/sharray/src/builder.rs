//! Bottom-up construction of a sharray.
//!
//! [`build`] chunks the input into leaf nodes, then repeatedly reduces each
//! level of references into the level above it until a single root reference
//! remains. Every node is `put` exactly once; nothing already written is
//! rolled back on failure.

use std::mem;

use serde::Serialize;
use tracing::debug;

use sharray_store::ObjectStore;
use sharray_types::ContentRef;

use crate::error::{SharrayError, SharrayResult};
use crate::node::Node;

/// Build a sharray from a sequence of values and return the root reference.
///
/// `width` is the tree's branching factor: the maximum number of values per
/// leaf and children per internal node. The caller must supply the same
/// `width` to [`Sharray::load`](crate::Sharray::load) later.
///
/// An empty input yields a valid single-node tree (one empty leaf), not an
/// error. An input that fits in one leaf yields that leaf as the root, so
/// the smallest trees have a height-0 root.
///
/// Fails fast with [`SharrayError::InvalidWidth`] when `width == 0`, or when
/// `width == 1` and more than one leaf is produced (a width-1 node can only
/// ever cover a single leaf, so such input has no tree form).
pub fn build<V, I>(store: &dyn ObjectStore, width: usize, values: I) -> SharrayResult<ContentRef>
where
    V: Serialize,
    I: IntoIterator<Item = V>,
{
    if width == 0 {
        return Err(SharrayError::InvalidWidth(0));
    }

    // Leaf level: one node per chunk of at most `width` values. The input is
    // streamed; only one chunk is buffered at a time.
    let mut refs: Vec<ContentRef> = Vec::new();
    let mut chunk: Vec<V> = Vec::with_capacity(width);
    for value in values {
        chunk.push(value);
        if chunk.len() == width {
            refs.push(put_node(store, &Node::leaf(mem::take(&mut chunk)))?);
        }
    }
    // Trailing partial chunk, or the empty-array special case: an empty
    // input still produces exactly one (empty) leaf so the root is a real
    // node rather than a failure.
    if !chunk.is_empty() || refs.is_empty() {
        refs.push(put_node(store, &Node::leaf(chunk))?);
    }
    debug!(nodes = refs.len(), "wrote leaf level");

    if width == 1 && refs.len() > 1 {
        // Reference levels over width-1 nodes never shrink; there is no
        // finite tree for this input.
        return Err(SharrayError::InvalidWidth(1));
    }

    // Reference levels: reduce until one reference remains. A single-chunk
    // input skips this entirely and the leaf itself is the root.
    let mut height = 1u32;
    while refs.len() > 1 {
        let level: Vec<Vec<u8>> = refs
            .chunks(width)
            .map(|children| Node::<V>::internal(height, children.to_vec()).encode())
            .collect::<SharrayResult<_>>()?;
        refs = store.put_batch(&level)?;
        debug!(height, nodes = refs.len(), "wrote reference level");
        height += 1;
    }

    Ok(refs[0])
}

fn put_node<V: Serialize>(store: &dyn ObjectStore, node: &Node<V>) -> SharrayResult<ContentRef> {
    Ok(store.put(&node.encode()?)?)
}
