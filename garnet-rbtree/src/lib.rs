//! Red-black tree ordered-key storage.
//!
//! The ordered-map primitive underlying higher-level indexing and
//! storage structures: a self-balancing binary search tree with
//! guaranteed O(log n) insert, delete, and lookup. Nodes are stored in
//! an index-based arena owned by the tree, so structural links
//! (children and parent alike) are plain indices and ownership never
//! cycles.
//!
//! Duplicate keys are rejected. Failures ([`TreeError`]) always leave
//! the tree exactly as it was before the call.
//!
//! ```
//! use garnet_rbtree::RbTree;
//!
//! let mut tree = RbTree::try_from_iter([20, 10, 30]).unwrap();
//! assert!(tree.find(&10));
//! tree.delete(&10).unwrap();
//! assert!(!tree.find(&10));
//!
//! let keys: Vec<i32> = tree.inorder().map(|n| *n.key()).collect();
//! assert_eq!(keys, vec![20, 30]);
//! ```
//!
//! The tree is single-threaded: no operation yields, and callers
//! needing concurrent access must serialize all mutation externally.

mod check;
mod display;
#[cfg(feature = "dot")]
mod dot;
mod error;
mod node;
mod traverse;
mod tree;

#[cfg(feature = "dot")]
pub use dot::Dot;
pub use error::{Result, TreeError};
pub use node::{Color, NodeId};
pub use traverse::{BreadthFirst, Inorder, Postorder, Preorder};
pub use tree::{NodeRef, RbTree};
