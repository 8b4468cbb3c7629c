//! Graphviz export of the tree structure.
//!
//! Maps node color to a fill attribute and links to labelled edges;
//! consumes only the read-only introspection surface.

use core::fmt;

use crate::node::{Color, NodeId};
use crate::tree::RbTree;

/// Displayable graphviz rendering of an [`RbTree`].
pub struct Dot<'a, K> {
    pub(crate) tree: &'a RbTree<K>,
}

impl<K> RbTree<K> {
    /// Render the tree in graphviz dot format.
    pub fn dot(&self) -> Dot<'_, K> {
        Dot { tree: self }
    }
}

impl<K: fmt::Display> Dot<'_, K> {
    fn node_fmt(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        let node = self.tree.node(id);
        let fill = match node.color {
            Color::Red => "red",
            Color::Black => "black",
        };
        writeln!(
            f,
            r#"    n{id} [label="{key}" style=filled fillcolor={fill} fontcolor=white];"#,
            id = id.index(),
            key = node.key,
        )?;

        if !node.parent.is_nil() {
            writeln!(
                f,
                r#"    n{} -> n{} [label="up" style=dashed];"#,
                id.index(),
                node.parent.index()
            )?;
        }
        for (child, side) in [(node.left, "left"), (node.right, "right")] {
            if !child.is_nil() {
                writeln!(
                    f,
                    r#"    n{} -> n{} [label="{side}"];"#,
                    id.index(),
                    child.index()
                )?;
                self.node_fmt(f, child)?;
            }
        }
        Ok(())
    }
}

impl<K: fmt::Display> fmt::Display for Dot<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        if !self.tree.root.is_nil() {
            self.node_fmt(f, self.tree.root)?;
        }
        write!(f, "}}")
    }
}
