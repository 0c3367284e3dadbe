use thiserror::Error;

/// Errors returned by the fallible [`OrderedTree`](crate::OrderedTree)
/// operations. Both are caller contract violations and are reported before
/// the tree is touched.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TreeError {
    /// A traversal was requested without an invocable callback.
    #[error("traversal callback is not invocable")]
    InvalidArgument,
    /// A node handle was absent or does not belong to this tree.
    #[error("node is not part of this tree")]
    NotInTree,
}
