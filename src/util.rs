/// What happened to the subtree an insertion descended into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum InsertResult {
    /// A new leaf was attached.
    Inserted,
    /// An equal value already existed so the subtree is unchanged.
    Duplicate,
}

/// What happened to the subtree a deletion descended into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DeleteResult {
    /// The value wasn't found so nothing was deleted.
    NotFound,
    /// The node holding the value was unlinked.
    Deleted,
}
