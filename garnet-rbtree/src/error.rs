//! Error types for tree operations.

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur during tree operations.
///
/// Every variant reflects a precondition violation by the caller; the
/// tree is left exactly as it was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The key being inserted already exists in the tree.
    #[error("a duplicate item exists in the tree")]
    DuplicateKey,

    /// The key being removed or looked up is not in the tree.
    #[error("the item cannot be found in the tree")]
    KeyNotFound,

    /// The tree has no nodes to remove.
    #[error("the tree is empty")]
    EmptyTree,
}
