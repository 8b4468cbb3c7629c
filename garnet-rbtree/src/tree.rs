//! The red-black tree engine.
//!
//! Nodes live in an index-based arena owned by the tree; the reserved
//! index [`NodeId::NIL`] stands in for every absent child, so every
//! live node has two structural children and color queries never
//! branch on null links. Rebalancing after insertion and deletion runs
//! as iterative state machines walking toward the root.

use core::cmp::Ordering;
use core::mem;

use tracing::trace;

use crate::error::{Result, TreeError};
use crate::node::{Color, Node, NodeId, Slot};

/// A red-black tree storing totally ordered keys.
///
/// Guarantees O(log n) insert, delete, and lookup. Duplicate keys are
/// rejected, not overwritten. All operations run to completion without
/// yielding; callers needing concurrent access must serialize mutation
/// externally.
pub struct RbTree<K> {
    pub(crate) root: NodeId,
    slots: Vec<Slot<K>>,
    /// Head of the vacant-slot free list.
    free: NodeId,
    len: usize,
}

impl<K> RbTree<K> {
    /// Create an initially empty tree.
    pub const fn new() -> Self {
        Self {
            root: NodeId::NIL,
            slots: Vec::new(),
            free: NodeId::NIL,
            len: 0,
        }
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// The root node, if the tree is non-empty.
    ///
    /// Entry point for read-only structural introspection (rendering,
    /// debugging): a [`NodeRef`] exposes key, color, and links without
    /// any way to mutate the tree through it.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.view(self.root)
    }

    /// Height of the tree: the longest downward path from the root,
    /// in edges. −1 for an empty tree.
    pub fn height(&self) -> i32 {
        self.height_from(self.root)
    }

    pub(crate) fn height_from(&self, id: NodeId) -> i32 {
        if id.is_nil() {
            return -1;
        }
        let node = self.node(id);
        1 + self.height_from(node.left).max(self.height_from(node.right))
    }

    pub(crate) fn view(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        (!id.is_nil()).then_some(NodeRef { tree: self, id })
    }

    // ========================================================================
    // Arena plumbing
    // ========================================================================

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        debug_assert!(!id.is_nil());
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("link to a vacant slot"),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        debug_assert!(!id.is_nil());
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("link to a vacant slot"),
        }
    }

    fn alloc(&mut self, key: K, parent: NodeId) -> NodeId {
        let node = Node::new(key, parent);
        if self.free.is_nil() {
            let id = NodeId::from_index(self.slots.len());
            self.slots.push(Slot::Occupied(node));
            id
        } else {
            let id = self.free;
            match mem::replace(&mut self.slots[id.index()], Slot::Occupied(node)) {
                Slot::Vacant(next) => self.free = next,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            }
            id
        }
    }

    /// Vacate a slot and recover the owned node.
    fn release(&mut self, id: NodeId) -> Node<K> {
        match mem::replace(&mut self.slots[id.index()], Slot::Vacant(self.free)) {
            Slot::Occupied(node) => {
                self.free = id;
                node
            }
            Slot::Vacant(_) => unreachable!("released a vacant slot"),
        }
    }

    // ========================================================================
    // Color queries (NIL reads Black)
    // ========================================================================

    fn color_of(&self, id: NodeId) -> Color {
        if id.is_nil() {
            Color::Black
        } else {
            self.node(id).color
        }
    }

    fn is_red(&self, id: NodeId) -> bool {
        self.color_of(id) == Color::Red
    }

    fn is_black(&self, id: NodeId) -> bool {
        self.color_of(id) == Color::Black
    }
}

impl<K: Ord> RbTree<K> {
    /// Build a tree by inserting keys in iteration order.
    ///
    /// Insertion order affects the resulting shape, not the logical
    /// content. A duplicate key in the input fails the whole build.
    pub fn try_from_iter<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    /// Whether the key is present.
    pub fn find(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    /// Number of edges between the root and the node holding `key`.
    pub fn depth(&self, key: &K) -> Result<usize> {
        let mut current = self.root;
        let mut depth = 0;
        while !current.is_nil() {
            match key.cmp(&self.node(current).key) {
                Ordering::Equal => return Ok(depth),
                Ordering::Less => current = self.node(current).left,
                Ordering::Greater => current = self.node(current).right,
            }
            depth += 1;
        }
        Err(TreeError::KeyNotFound)
    }

    pub(crate) fn lookup(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while !current.is_nil() {
            match key.cmp(&self.node(current).key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = self.node(current).left,
                Ordering::Greater => current = self.node(current).right,
            }
        }
        None
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert `key`, rebalancing as needed.
    ///
    /// Fails with [`TreeError::DuplicateKey`] if an equal key is
    /// already present; the tree is untouched in that case.
    pub fn insert(&mut self, key: K) -> Result<()> {
        // Find the attachment point before allocating anything, so a
        // duplicate leaves no trace.
        let mut parent = NodeId::NIL;
        let mut current = self.root;
        let mut attach_left = false;
        while !current.is_nil() {
            parent = current;
            match key.cmp(&self.node(current).key) {
                Ordering::Equal => return Err(TreeError::DuplicateKey),
                Ordering::Less => {
                    current = self.node(current).left;
                    attach_left = true;
                }
                Ordering::Greater => {
                    current = self.node(current).right;
                    attach_left = false;
                }
            }
        }

        let id = self.alloc(key, parent);
        if parent.is_nil() {
            self.root = id;
        } else if attach_left {
            self.node_mut(parent).left = id;
        } else {
            self.node_mut(parent).right = id;
        }
        self.len += 1;

        self.insert_fixup(id);
        trace!(len = self.len, "inserted key");
        Ok(())
    }

    /// Restore the red-black invariants after attaching a Red node.
    ///
    /// The loop runs while the current node's parent is Red: a Red
    /// uncle means recolor and ascend to the grandparent; a Black uncle
    /// means straighten any zig-zag with one rotation, then recolor and
    /// rotate the grandparent, which terminates. The root is recolored
    /// Black unconditionally at exit.
    fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let parent = self.node(node).parent;
            if parent.is_nil() || self.is_black(parent) {
                break;
            }
            // A Red parent is never the root, so the grandparent exists.
            let grandparent = self.node(parent).parent;

            if parent == self.node(grandparent).left {
                let uncle = self.node(grandparent).right;

                if self.is_red(uncle) {
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    node = grandparent;
                } else {
                    if node == self.node(parent).right {
                        node = parent;
                        self.rotate_left(node);
                    }
                    let parent = self.node(node).parent;
                    let grandparent = self.node(parent).parent;
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.node(grandparent).left;

                if self.is_red(uncle) {
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    node = grandparent;
                } else {
                    if node == self.node(parent).left {
                        node = parent;
                        self.rotate_right(node);
                    }
                    let parent = self.node(node).parent;
                    let grandparent = self.node(parent).parent;
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }

        if !self.root.is_nil() {
            self.node_mut(self.root).color = Color::Black;
        }
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Remove `key`, rebalancing as needed.
    ///
    /// Fails with [`TreeError::EmptyTree`] if the tree has no nodes and
    /// [`TreeError::KeyNotFound`] if no node matches; the tree is
    /// untouched in either case.
    pub fn delete(&mut self, key: &K) -> Result<()> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let target = self.lookup(key).ok_or(TreeError::KeyNotFound)?;
        self.remove_node(target);
        self.len -= 1;
        trace!(len = self.len, "removed key");
        Ok(())
    }

    fn remove_node(&mut self, target: NodeId) {
        // A node with two children is reduced to a simpler removal:
        // retarget to the in-order predecessor (which has no right
        // child) and move its key up afterwards. One retarget always
        // suffices.
        let mut copy_up = None;
        let mut victim = target;
        let node = self.node(target);
        if !node.left.is_nil() && !node.right.is_nil() {
            let mut pred = node.left;
            while !self.node(pred).right.is_nil() {
                pred = self.node(pred).right;
            }
            copy_up = Some(target);
            victim = pred;
        }

        let removed = self.unlink(victim);
        if let Some(dst) = copy_up {
            self.node_mut(dst).key = removed.key;
        }
    }

    /// Detach a node with at most one child, splicing that child (or
    /// NIL) into its place and repairing any black-height deficit.
    fn unlink(&mut self, node: NodeId) -> Node<K> {
        let left = self.node(node).left;
        let right = self.node(node).right;
        let parent = self.node(node).parent;
        debug_assert!(left.is_nil() || right.is_nil());
        let child = if left.is_nil() { right } else { left };

        if parent.is_nil() {
            self.root = child;
        } else if self.node(parent).left == node {
            self.node_mut(parent).left = child;
        } else {
            self.node_mut(parent).right = child;
        }
        if !child.is_nil() {
            self.node_mut(child).parent = parent;
        }

        let removed = self.release(node);

        if child.is_nil() {
            // Leaf. A Red leaf carries no black-height obligation, and
            // a root leaf empties the tree outright.
            if !parent.is_nil() && removed.color == Color::Black {
                self.delete_fixup(NodeId::NIL, parent);
            }
        } else if removed.color == Color::Red || self.is_red(child) {
            // The spliced child absorbs the removed black (the two
            // cannot both be Red).
            self.node_mut(child).color = Color::Black;
        } else {
            self.delete_fixup(child, parent);
        }

        removed
    }

    /// Resolve a black-height deficit.
    ///
    /// `node` is the position short one black — possibly NIL when a
    /// Black leaf was just detached — and `parent` its parent. The pair
    /// is the deficit token: no sentinel state is ever marked, and the
    /// transient "double black" cannot outlive this call.
    fn delete_fixup(&mut self, mut node: NodeId, mut parent: NodeId) {
        loop {
            if parent.is_nil() {
                // The deficit reached the root: every path loses one
                // black uniformly, so black-heights stay consistent.
                if !node.is_nil() {
                    self.node_mut(node).color = Color::Black;
                }
                return;
            }

            let node_is_left = self.node(parent).left == node;
            let sibling = if node_is_left {
                self.node(parent).right
            } else {
                self.node(parent).left
            };
            // The deficit side is short one black, so the sibling
            // subtree has black-height >= 1 and cannot be NIL.
            debug_assert!(!sibling.is_nil());

            if self.is_red(sibling) {
                // Red sibling: rotate it above the parent. The new
                // sibling is a child of the old one, hence Black, so
                // the retry lands in one of the terminal-capable cases.
                self.node_mut(sibling).color = Color::Black;
                self.node_mut(parent).color = Color::Red;
                if node_is_left {
                    self.rotate_left(parent);
                } else {
                    self.rotate_right(parent);
                }
                continue;
            }

            let sibling_left = self.node(sibling).left;
            let sibling_right = self.node(sibling).right;

            if self.is_red(sibling_left) || self.is_red(sibling_right) {
                // Black sibling with a Red nephew: one or two rotations
                // bring the nephew up, the parent's old color moves to
                // the new subtree root, and the deficit is gone.
                let parent_color = self.node(parent).color;
                if node_is_left {
                    if self.is_red(sibling_left) {
                        // Near nephew: double rotation.
                        self.rotate_right(sibling);
                        self.rotate_left(parent);
                        self.node_mut(sibling_left).color = parent_color;
                        self.node_mut(sibling).color = Color::Black;
                    } else {
                        self.rotate_left(parent);
                        self.node_mut(sibling).color = parent_color;
                        self.node_mut(sibling_right).color = Color::Black;
                    }
                } else if self.is_red(sibling_right) {
                    // Near nephew: double rotation.
                    self.rotate_left(sibling);
                    self.rotate_right(parent);
                    self.node_mut(sibling_right).color = parent_color;
                    self.node_mut(sibling).color = Color::Black;
                } else {
                    self.rotate_right(parent);
                    self.node_mut(sibling).color = parent_color;
                    self.node_mut(sibling_left).color = Color::Black;
                }
                self.node_mut(parent).color = Color::Black;
                if !node.is_nil() {
                    self.node_mut(node).color = Color::Black;
                }
                return;
            }

            // Black sibling, both nephews Black: recolor the sibling
            // Red. A Red parent absorbs the deficit; a Black parent
            // becomes the new deficit carrier.
            self.node_mut(sibling).color = Color::Red;
            if !node.is_nil() {
                self.node_mut(node).color = Color::Black;
            }
            if self.is_red(parent) {
                self.node_mut(parent).color = Color::Black;
                return;
            }
            node = parent;
            parent = self.node(parent).parent;
        }
    }

    // ========================================================================
    // Rotations
    // ========================================================================

    /// Rotate the subtree rooted at `node` to the left. The right child
    /// takes `node`'s position; colors are untouched and in-order key
    /// order is preserved by construction.
    fn rotate_left(&mut self, node: NodeId) {
        let pivot = self.node(node).right;
        debug_assert!(!pivot.is_nil());
        let inner = self.node(pivot).left;

        self.node_mut(node).right = inner;
        if !inner.is_nil() {
            self.node_mut(inner).parent = node;
        }

        let parent = self.node(node).parent;
        self.node_mut(pivot).parent = parent;
        if parent.is_nil() {
            self.root = pivot;
        } else if self.node(parent).left == node {
            self.node_mut(parent).left = pivot;
        } else {
            self.node_mut(parent).right = pivot;
        }

        self.node_mut(pivot).left = node;
        self.node_mut(node).parent = pivot;
    }

    /// Rotate the subtree rooted at `node` to the right. Mirror of
    /// [`Self::rotate_left`].
    fn rotate_right(&mut self, node: NodeId) {
        let pivot = self.node(node).left;
        debug_assert!(!pivot.is_nil());
        let inner = self.node(pivot).right;

        self.node_mut(node).left = inner;
        if !inner.is_nil() {
            self.node_mut(inner).parent = node;
        }

        let parent = self.node(node).parent;
        self.node_mut(pivot).parent = parent;
        if parent.is_nil() {
            self.root = pivot;
        } else if self.node(parent).right == node {
            self.node_mut(parent).right = pivot;
        } else {
            self.node_mut(parent).left = pivot;
        }

        self.node_mut(pivot).right = node;
        self.node_mut(node).parent = pivot;
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a node.
///
/// Exposes the key, color, and structural links for external consumers
/// (rendering, testing, debugging). Holding a `NodeRef` borrows the
/// tree, so the structure cannot change underneath it.
#[derive(Clone, Copy)]
pub struct NodeRef<'a, K> {
    tree: &'a RbTree<K>,
    id: NodeId,
}

impl<'a, K> NodeRef<'a, K> {
    /// The arena index of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The key stored at this node.
    pub fn key(&self) -> &'a K {
        &self.tree.node(self.id).key
    }

    /// The color of this node.
    pub fn color(&self) -> Color {
        self.tree.node(self.id).color
    }

    /// The left child, if present.
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.tree.view(self.tree.node(self.id).left)
    }

    /// The right child, if present.
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.tree.view(self.tree.node(self.id).right)
    }

    /// The parent, if this node is not the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.tree.view(self.tree.node(self.id).parent)
    }

    /// The other child of this node's parent. None for the root, or
    /// when the sibling position is empty.
    pub fn sibling(&self) -> Option<NodeRef<'a, K>> {
        let parent = self.parent()?;
        let parent_node = self.tree.node(parent.id);
        let sibling = if parent_node.left == self.id {
            parent_node.right
        } else {
            parent_node.left
        };
        self.tree.view(sibling)
    }

    /// The parent's sibling. None for the root and the root's direct
    /// children.
    pub fn uncle(&self) -> Option<NodeRef<'a, K>> {
        self.parent()?.sibling()
    }

    /// The parent's parent. None for the root and the root's direct
    /// children.
    pub fn grandparent(&self) -> Option<NodeRef<'a, K>> {
        self.parent()?.parent()
    }

    /// Whether this node is its parent's left child. False for the root.
    pub fn is_left_child(&self) -> bool {
        self.parent()
            .is_some_and(|p| self.tree.node(p.id).left == self.id)
    }

    /// Whether this node is its parent's right child. False for the root.
    pub fn is_right_child(&self) -> bool {
        self.parent()
            .is_some_and(|p| self.tree.node(p.id).right == self.id)
    }

    /// Whether both children are absent.
    pub fn is_leaf(&self) -> bool {
        let node = self.tree.node(self.id);
        node.left.is_nil() && node.right.is_nil()
    }

    /// Height of the subtree rooted here, in edges. A leaf has height 0.
    pub fn height(&self) -> i32 {
        self.tree.height_from(self.id)
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}
