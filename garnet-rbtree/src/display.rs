//! Console pretty-printer.
//!
//! Renders the tree sideways, right subtree on top, one node per line.
//! A debugging convenience only; the algorithmic contract lives in
//! [`crate::tree`].

use core::fmt;

use crate::node::NodeId;
use crate::tree::RbTree;

impl<K: fmt::Display> fmt::Display for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let root = self.node(self.root);
        self.fmt_subtree(f, root.right, true, "")?;
        writeln!(f, "{} ({})", root.key, root.color)?;
        self.fmt_subtree(f, root.left, false, "")
    }
}

impl<K: fmt::Display> RbTree<K> {
    fn fmt_subtree(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        is_right: bool,
        indent: &str,
    ) -> fmt::Result {
        if id.is_nil() {
            return Ok(());
        }
        let node = self.node(id);
        let above = if is_right { "        " } else { " |      " };
        self.fmt_subtree(f, node.right, true, &format!("{indent}{above}"))?;
        let branch = if is_right { " /" } else { " \\" };
        writeln!(f, "{indent}{branch}----- {} ({})", node.key, node.color)?;
        let below = if is_right { " |      " } else { "        " };
        self.fmt_subtree(f, node.left, false, &format!("{indent}{below}"))
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        // Inorder without the iterator machinery to keep bounds minimal.
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while !current.is_nil() {
                stack.push(current);
                current = self.node(current).left;
            }
            let Some(id) = stack.pop() else { break };
            let node = self.node(id);
            entries.entry(&format_args!("{:?} ({})", node.key, node.color));
            current = node.right;
        }
        entries.finish()
    }
}
