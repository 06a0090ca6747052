//! The node model: the unit of storage for a sharray.
//!
//! A [`Node`] is either a leaf holding caller-supplied values or an internal
//! node holding references to children one level down. The two cases are a
//! tagged enum ([`Items`]), so in-memory construction is well-formed by
//! type; decoded bytes are untrusted and get a structural check in
//! [`Node::decode`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use sharray_types::ContentRef;

use crate::error::{SharrayError, SharrayResult};

/// A single tree node as persisted in the store.
///
/// No count and no width are persisted -- `height` and the item list are the
/// entire on-wire record. The enclosing tree's `width` is supplied
/// out-of-band at load time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node<V> {
    /// Distance to the leaf level. `0` marks a leaf.
    pub height: u32,
    /// Values (leaf) or child references (internal), in array order.
    pub items: Items<V>,
}

/// Node contents, discriminated by the node's height.
///
/// Within one node all items are the same kind: `Values` iff `height == 0`,
/// `Refs` iff `height > 0`. [`Node::decode`] enforces the correlation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Items<V> {
    /// Leaf payload values.
    Values(Vec<V>),
    /// References to children at exactly `height - 1`.
    Refs(Vec<ContentRef>),
}

impl<V> Items<V> {
    /// Number of items in the node.
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Refs(refs) => refs.len(),
        }
    }

    /// Returns `true` if the node holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Node<V> {
    /// Create a leaf node from a chunk of values.
    pub fn leaf(values: Vec<V>) -> Self {
        Self {
            height: 0,
            items: Items::Values(values),
        }
    }

    /// Create an internal node from a chunk of child references.
    ///
    /// The children must all sit at `height - 1`; the builder guarantees
    /// this by constructing one level at a time.
    pub fn internal(height: u32, refs: Vec<ContentRef>) -> Self {
        debug_assert!(height > 0, "internal nodes sit above the leaf level");
        Self {
            height,
            items: Items::Refs(refs),
        }
    }

    /// Returns `true` if this is a leaf node.
    pub fn is_leaf(&self) -> bool {
        self.height == 0
    }

    /// Number of items in this node.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this node holds no items (only a valid state for
    /// the root of an empty array).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<V: Serialize> Node<V> {
    /// Serialize this node for storage.
    pub fn encode(&self) -> SharrayResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| SharrayError::Encode(e.to_string()))
    }
}

impl<V: DeserializeOwned> Node<V> {
    /// Decode a node from bytes fetched by `id`, validating structure.
    ///
    /// Decoded bytes are untrusted: a leaf holding references or an internal
    /// node holding values means the tree was built with a different width
    /// or the store is corrupt ([`SharrayError::ReferenceType`]). An
    /// internal node with no children can never be produced by the builder
    /// and is rejected outright.
    pub fn decode(id: ContentRef, bytes: &[u8]) -> SharrayResult<Self> {
        let node: Self = serde_json::from_slice(bytes).map_err(|e| SharrayError::Decode {
            id,
            reason: e.to_string(),
        })?;

        match (&node.items, node.height) {
            (Items::Values(_), 0) => Ok(node),
            (Items::Refs(refs), h) if h > 0 => {
                if refs.is_empty() {
                    return Err(SharrayError::Decode {
                        id,
                        reason: "internal node with no children".to_string(),
                    });
                }
                Ok(node)
            }
            (_, height) => Err(SharrayError::ReferenceType { id, height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Thing {
        foo: i64,
        bar: String,
    }

    fn decode_own_bytes(node: &Node<Thing>) -> SharrayResult<Node<Thing>> {
        let bytes = node.encode().unwrap();
        Node::decode(ContentRef::from_bytes(&bytes), &bytes)
    }

    #[test]
    fn leaf_roundtrip() {
        let node = Node::leaf(vec![
            Thing {
                foo: 1,
                bar: "catdog".into(),
            },
            Thing {
                foo: 2,
                bar: "dogcat".into(),
            },
        ]);
        let decoded = decode_own_bytes(&node).unwrap();
        assert_eq!(node, decoded);
        assert!(decoded.is_leaf());
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn internal_roundtrip() {
        let node: Node<Thing> = Node::internal(
            2,
            vec![
                ContentRef::from_bytes(b"child-a"),
                ContentRef::from_bytes(b"child-b"),
            ],
        );
        let decoded = decode_own_bytes(&node).unwrap();
        assert_eq!(node, decoded);
        assert!(!decoded.is_leaf());
    }

    #[test]
    fn empty_leaf_is_valid() {
        let node: Node<Thing> = Node::leaf(vec![]);
        let decoded = decode_own_bytes(&node).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn decode_rejects_internal_holding_values() {
        // Bypass the constructors to forge a structurally corrupt node.
        let node = Node {
            height: 1,
            items: Items::Values(vec![Thing {
                foo: 0,
                bar: String::new(),
            }]),
        };
        let err = decode_own_bytes(&node).unwrap_err();
        assert!(matches!(
            err,
            SharrayError::ReferenceType { height: 1, .. }
        ));
    }

    #[test]
    fn decode_rejects_leaf_holding_refs() {
        let node: Node<Thing> = Node {
            height: 0,
            items: Items::Refs(vec![ContentRef::from_bytes(b"x")]),
        };
        let err = decode_own_bytes(&node).unwrap_err();
        assert!(matches!(err, SharrayError::ReferenceType { height: 0, .. }));
    }

    #[test]
    fn decode_rejects_childless_internal() {
        let node: Node<Thing> = Node {
            height: 3,
            items: Items::Refs(vec![]),
        };
        let err = decode_own_bytes(&node).unwrap_err();
        assert!(matches!(err, SharrayError::Decode { .. }));
    }

    #[test]
    fn decode_rejects_garbage() {
        let bytes = b"not a node";
        let err =
            Node::<Thing>::decode(ContentRef::from_bytes(bytes), bytes).unwrap_err();
        assert!(matches!(err, SharrayError::Decode { .. }));
    }
}
