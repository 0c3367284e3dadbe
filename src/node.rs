use std::cmp;

use crate::util::{DeleteResult, InsertResult};

/// An owned, possibly absent, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one value and owns its (possibly absent) left and right
/// subtrees. Nodes are only handed out by reference, so the accessors here
/// are read-only; values are rewritten through the tree's traversals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, holding values less than this node's value.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding values greater than this node's value.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Number of edges on the longest path from this node down to a leaf.
    /// A leaf has a height of 0.
    ///
    /// This is computed by walking the subtree every time it is called.
    pub fn height(&self) -> isize {
        1 + height(self.left()).max(height(self.right()))
    }

    /// Left height minus right height. The subtree rooted here is locally
    /// balanced when this is within `-1..=1`.
    pub(crate) fn balance_factor(&self) -> isize {
        height(self.left()) - height(self.right())
    }
}

/// Height of a possibly absent subtree. An absent subtree has a height of -1.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map(Node::height).unwrap_or(-1)
}

/// Builds a minimal height subtree holding the next `len` values of
/// `values`, which must yield them in ascending order.
///
/// The root of every subtree is the lower middle of its range, so for a
/// range `[start, end]` the root is `start + (end - start) / 2`.
pub(crate) fn build<T, I>(len: usize, values: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build(mid, values);
    let value = values.next()?;
    let right = build(len - mid - 1, values);

    Some(Box::new(Node { value, left, right }))
}

pub(crate) fn find<T>(link: &Link<T>, value: &T) -> bool
where
    T: cmp::Ord,
{
    match link {
        None => false,
        Some(node) => match value.cmp(&node.value) {
            cmp::Ordering::Less => find(&node.left, value),
            cmp::Ordering::Equal => true,
            cmp::Ordering::Greater => find(&node.right, value),
        },
    }
}

/// Takes ownership of a subtree and returns the subtree with `value`
/// attached as a new leaf. An equal value already in the subtree leaves it
/// unchanged.
pub(crate) fn insert<T>(link: Link<T>, value: T) -> (Link<T>, InsertResult)
where
    T: cmp::Ord,
{
    match link {
        None => (Some(Box::new(Node::leaf(value))), InsertResult::Inserted),
        Some(mut node) => {
            let result = match value.cmp(&node.value) {
                cmp::Ordering::Less => {
                    let (left, result) = insert(node.left.take(), value);
                    node.left = left;
                    result
                }
                cmp::Ordering::Equal => InsertResult::Duplicate,
                cmp::Ordering::Greater => {
                    let (right, result) = insert(node.right.take(), value);
                    node.right = right;
                    result
                }
            };
            (Some(node), result)
        }
    }
}

/// Takes ownership of a subtree and returns it without the node holding
/// `value`, if there was one.
pub(crate) fn delete<T>(link: Link<T>, value: &T) -> (Link<T>, DeleteResult)
where
    T: cmp::Ord,
{
    let mut node = match link {
        None => return (None, DeleteResult::NotFound),
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        cmp::Ordering::Less => {
            let (left, result) = delete(node.left.take(), value);
            node.left = left;
            (Some(node), result)
        }
        cmp::Ordering::Greater => {
            let (right, result) = delete(node.right.take(), value);
            node.right = right;
            (Some(node), result)
        }
        cmp::Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => (right, DeleteResult::Deleted),
            (left, None) => (left, DeleteResult::Deleted),

            // With two children this node takes over its in-order successor's
            // value, which is unlinked from the right subtree.
            (left, Some(right)) => {
                let (successor, right) = take_min(right);
                node.value = successor;
                node.left = left;
                node.right = right;
                (Some(node), DeleteResult::Deleted)
            }
        },
    }
}

/// Unlinks the left-most node of the subtree, returning its value and what
/// remains of the subtree.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, left) = take_min(left);
            node.left = left;
            (min, Some(node))
        }
    }
}

/// Consumes a subtree, pushing its values onto `out` in-order.
pub(crate) fn drain_in_order<T>(link: Link<T>, out: &mut Vec<T>) {
    if let Some(node) = link {
        let Node { value, left, right } = *node;
        drain_in_order(left, out);
        out.push(value);
        drain_in_order(right, out);
    }
}
