//! Iterative tree traversals.
//!
//! All four traversals produce finite, restartable sequences of node
//! views and skip absent children. They are read-only; the borrow on
//! the tree prevents mutation while an iterator is live. The LIFO
//! scratch storage is [`garnet_list::Stack`]; breadth-first uses a FIFO
//! queue.

use std::collections::VecDeque;

use garnet_list::Stack;

use crate::node::NodeId;
use crate::tree::{NodeRef, RbTree};

impl<K> RbTree<K> {
    /// Visit each node before its children (node, left, right).
    pub fn preorder(&self) -> Preorder<'_, K> {
        let mut stack = Stack::new();
        if !self.root.is_nil() {
            stack.push(self.root);
        }
        Preorder { tree: self, stack }
    }

    /// Visit nodes in ascending key order (left, node, right).
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder {
            tree: self,
            stack: Stack::new(),
            current: self.root,
        }
    }

    /// Visit each node after its children (left, right, node).
    pub fn postorder(&self) -> Postorder<'_, K> {
        // Two stacks: the first drives a reversed preorder, the second
        // replays it backwards, which is postorder without any
        // child-revisit bookkeeping.
        let mut pending = Stack::new();
        let mut output = Stack::new();
        if !self.root.is_nil() {
            pending.push(self.root);
        }
        while let Some(id) = pending.pop() {
            output.push(id);
            let node = self.node(id);
            if !node.left.is_nil() {
                pending.push(node.left);
            }
            if !node.right.is_nil() {
                pending.push(node.right);
            }
        }
        Postorder {
            tree: self,
            output,
        }
    }

    /// Visit nodes level by level, left to right within a level.
    pub fn breadth_first(&self) -> BreadthFirst<'_, K> {
        let mut queue = VecDeque::new();
        if !self.root.is_nil() {
            queue.push_back(self.root);
        }
        BreadthFirst { tree: self, queue }
    }
}

/// Iterator produced by [`RbTree::preorder`].
pub struct Preorder<'a, K> {
    tree: &'a RbTree<K>,
    stack: Stack<NodeId>,
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Right first so the left subtree is visited first.
        if !node.right.is_nil() {
            self.stack.push(node.right);
        }
        if !node.left.is_nil() {
            self.stack.push(node.left);
        }
        self.tree.view(id)
    }
}

/// Iterator produced by [`RbTree::inorder`].
pub struct Inorder<'a, K> {
    tree: &'a RbTree<K>,
    stack: Stack<NodeId>,
    current: NodeId,
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        // Descend leftmost from `current`, then emit the stack top and
        // move into its right subtree.
        while !self.current.is_nil() {
            self.stack.push(self.current);
            self.current = self.tree.node(self.current).left;
        }
        let id = self.stack.pop()?;
        self.current = self.tree.node(id).right;
        self.tree.view(id)
    }
}

/// Iterator produced by [`RbTree::postorder`].
pub struct Postorder<'a, K> {
    tree: &'a RbTree<K>,
    output: Stack<NodeId>,
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.output.pop()?;
        self.tree.view(id)
    }
}

/// Iterator produced by [`RbTree::breadth_first`].
pub struct BreadthFirst<'a, K> {
    tree: &'a RbTree<K>,
    queue: VecDeque<NodeId>,
}

impl<'a, K> Iterator for BreadthFirst<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.tree.node(id);
        if !node.left.is_nil() {
            self.queue.push_back(node.left);
        }
        if !node.right.is_nil() {
            self.queue.push_back(node.right);
        }
        self.tree.view(id)
    }
}
