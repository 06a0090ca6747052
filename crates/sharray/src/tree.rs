//! The tree handle and its traversals: length, indexed lookup, iteration.
//!
//! All three operations route through one piece of arithmetic:
//! [`child_capacity`], the number of leaf values a full subtree hanging off
//! a node at a given height can hold. Because every sibling except the last
//! is full, that closed form replaces per-node counts entirely.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use sharray_store::ObjectStore;
use sharray_types::ContentRef;

use crate::error::{SharrayError, SharrayResult};
use crate::node::{Items, Node};

/// Number of leaf values covered by each child of a node at `height`.
///
/// A node's children sit one level down, and a full subtree at height `h`
/// holds `width^(h+1)` values (a leaf already holds up to `width`), so each
/// child slot of a node at `height` covers exactly `width^height` values.
/// Saturates rather than overflowing on absurd heights decoded from corrupt
/// bytes; a saturated capacity can only ever widen the last child's range.
fn child_capacity(width: usize, height: u32) -> usize {
    width.saturating_pow(height)
}

/// A loaded view of one sharray node, bound to the store it came from.
///
/// Created by [`Sharray::load`], which fetches and decodes exactly one node
/// (the root). The handle caches nothing: every traversal re-fetches
/// children from the store. It is immutable after construction, so any
/// number of handles over the same store may be used concurrently.
pub struct Sharray<V> {
    root: ContentRef,
    node: Node<V>,
    store: Arc<dyn ObjectStore>,
    width: usize,
}

impl<V> std::fmt::Debug for Sharray<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sharray")
            .field("root", &self.root)
            .field("height", &self.node.height)
            .field("width", &self.width)
            .field("items", &self.node.len())
            .finish()
    }
}

impl<V: DeserializeOwned> Sharray<V> {
    /// Load the node at `root` and bind it to `store`.
    ///
    /// `width` must match the value used at build time -- it is not
    /// persisted anywhere in the tree, and a mismatch silently corrupts all
    /// index arithmetic. Only the root node is fetched and validated; the
    /// rest of the tree is touched lazily by traversals.
    pub fn load(
        store: Arc<dyn ObjectStore>,
        root: ContentRef,
        width: usize,
    ) -> SharrayResult<Self> {
        if width == 0 {
            return Err(SharrayError::InvalidWidth(0));
        }
        let bytes = store
            .get(&root)?
            .ok_or(SharrayError::NotFound(root))?;
        let node = Node::decode(root, &bytes)?;
        Ok(Self {
            root,
            node,
            store,
            width,
        })
    }

    /// The reference this handle was loaded from.
    pub fn root(&self) -> ContentRef {
        self.root
    }

    /// The branching factor supplied at load time.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the loaded node; leaves are 0.
    pub fn height(&self) -> u32 {
        self.node.height
    }

    /// Load a child node as a handle over the same store.
    fn child(&self, r: ContentRef) -> SharrayResult<Self> {
        Self::load(Arc::clone(&self.store), r, self.width)
    }

    /// Total number of values in the array.
    ///
    /// Every child of an internal node except the last is full, so only the
    /// rightmost spine is loaded: O(height) store reads, never O(N).
    pub fn len(&self) -> SharrayResult<usize> {
        match &self.node.items {
            Items::Values(values) => Ok(values.len()),
            Items::Refs(refs) => {
                let full = (refs.len() - 1)
                    .saturating_mul(child_capacity(self.width, self.node.height));
                let last = self.child(refs[refs.len() - 1])?;
                Ok(full.saturating_add(last.len()?))
            }
        }
    }

    /// Returns `true` if the array holds no values.
    ///
    /// Costs the same as [`len`](Self::len): the rightmost spine is walked.
    pub fn is_empty(&self) -> SharrayResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Fetch the value at `index`, descending one child per level.
    ///
    /// Fails with [`SharrayError::OutOfRange`] when `index` is at or beyond
    /// the array's length. O(height) store reads.
    pub fn get(&self, index: usize) -> SharrayResult<V>
    where
        V: Clone,
    {
        match &self.node.items {
            Items::Values(values) => values
                .get(index)
                .cloned()
                .ok_or(SharrayError::OutOfRange { index }),
            Items::Refs(refs) => {
                let capacity = child_capacity(self.width, self.node.height);
                let child_index = index / capacity;
                let r = refs
                    .get(child_index)
                    .ok_or(SharrayError::OutOfRange { index })?;
                self.child(*r)?.get(index % capacity)
            }
        }
    }

    /// Visit every value in left-to-right order.
    ///
    /// The visitor may abort with any error type that absorbs
    /// [`SharrayError`]; the first failure (visit, store, or decode)
    /// short-circuits all remaining siblings. This is the only operation
    /// that reads O(N/width) nodes. The traversal is single-pass and cannot
    /// be resumed; restart with a fresh handle.
    pub fn try_for_each<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        E: From<SharrayError>,
        F: FnMut(&V) -> Result<(), E>,
    {
        self.walk(&mut visit)
    }

    /// [`try_for_each`](Self::try_for_each) with the visitor erroring as
    /// [`SharrayError`] directly.
    pub fn for_each<F>(&self, visit: F) -> SharrayResult<()>
    where
        F: FnMut(&V) -> SharrayResult<()>,
    {
        self.try_for_each(visit)
    }

    fn walk<E, F>(&self, visit: &mut F) -> Result<(), E>
    where
        E: From<SharrayError>,
        F: FnMut(&V) -> Result<(), E>,
    {
        match &self.node.items {
            Items::Values(values) => {
                for value in values {
                    visit(value)?;
                }
                Ok(())
            }
            Items::Refs(refs) => {
                for r in refs {
                    self.child(*r).map_err(E::from)?.walk(visit)?;
                }
                Ok(())
            }
        }
    }

    /// Collect the whole array into a `Vec`, in order.
    pub fn to_vec(&self) -> SharrayResult<Vec<V>>
    where
        V: Clone,
    {
        let mut out = Vec::new();
        self.for_each(|v| {
            out.push(v.clone());
            Ok(())
        })?;
        Ok(out)
    }
}
