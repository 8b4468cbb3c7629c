//! Structural invariant checking.

use core::fmt;

use crate::node::{Color, NodeId};
use crate::tree::RbTree;

impl<K: Ord + fmt::Debug> RbTree<K> {
    /// Asserts every red-black and BST invariant over the whole tree.
    ///
    /// Panics with a description of the first violation found: root
    /// must be Black, no Red node may have a Red child, every
    /// root-to-leaf path must carry the same number of Black nodes,
    /// keys must be in strict BST order, and every child's parent link
    /// must point back at its parent. Intended for tests and external
    /// harnesses; call it between operations, never during one.
    #[track_caller]
    pub fn assert_invariants(&self) {
        if self.root.is_nil() {
            assert_eq!(self.len(), 0, "empty tree must have length 0");
            return;
        }
        assert!(
            self.node(self.root).parent.is_nil(),
            "root cannot have a parent"
        );
        assert_eq!(
            self.node(self.root).color,
            Color::Black,
            "root must be Black"
        );
        let (_, count) = self.check_subtree(self.root, None, None);
        assert_eq!(count, self.len(), "node count must match tree length");
    }

    /// Returns (black-height, node count) of the subtree, asserting
    /// invariants on the way down.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> (usize, usize) {
        if id.is_nil() {
            return (0, 0);
        }
        let node = self.node(id);

        if let Some(lower) = lower {
            assert!(
                node.key > *lower,
                "BST order violated: {:?} is not greater than {:?}",
                node.key,
                lower
            );
        }
        if let Some(upper) = upper {
            assert!(
                node.key < *upper,
                "BST order violated: {:?} is not less than {:?}",
                node.key,
                upper
            );
        }

        for child in [node.left, node.right] {
            if !child.is_nil() {
                assert_eq!(
                    self.node(child).parent,
                    id,
                    "child's parent link does not point back at {:?}",
                    node.key
                );
                if node.color == Color::Red {
                    assert_eq!(
                        self.node(child).color,
                        Color::Black,
                        "Red node {:?} has a Red child",
                        node.key
                    );
                }
            }
        }

        let (left_black, left_count) = self.check_subtree(node.left, lower, Some(&node.key));
        let (right_black, right_count) = self.check_subtree(node.right, Some(&node.key), upper);
        assert_eq!(
            left_black, right_black,
            "black-height mismatch under {:?}",
            node.key
        );

        let black = left_black + usize::from(node.color == Color::Black);
        (black, left_count + right_count + 1)
    }
}
