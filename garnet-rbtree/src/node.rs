//! Node representation: arena indices, colors, and slots.

use core::fmt;

use static_assertions::assert_eq_size;

/// Node color.
///
/// There is no resting "double black" state; the black-height deficit
/// tracked during delete rebalancing lives in an explicit token inside
/// the fixup loop and can never escape a public operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("R"),
            Color::Black => f.write_str("B"),
        }
    }
}

/// Index of a node in a tree's arena.
///
/// Links between nodes (child and parent alike) are indices, never
/// owning references; the arena owns every node. [`NodeId::NIL`] is the
/// shared "absent child" value and is never a valid arena index.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The sentinel index standing in for every missing child.
    ///
    /// Color queries treat NIL as Black.
    pub const NIL: NodeId = NodeId(u32::MAX);

    /// Whether this is the sentinel index.
    pub fn is_nil(self) -> bool {
        self == Self::NIL
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize);
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

assert_eq_size!(Color, u8);
assert_eq_size!(NodeId, u32);

/// A live tree node.
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub key: K,
    pub color: Color,
    pub left: NodeId,
    pub right: NodeId,
    pub parent: NodeId,
}

impl<K> Node<K> {
    /// New nodes are always Red with both children absent.
    pub(crate) fn new(key: K, parent: NodeId) -> Self {
        Self {
            key,
            color: Color::Red,
            left: NodeId::NIL,
            right: NodeId::NIL,
            parent,
        }
    }
}

/// Arena cell. Vacant cells thread the free list.
#[derive(Debug)]
pub(crate) enum Slot<K> {
    Occupied(Node<K>),
    Vacant(NodeId),
}
