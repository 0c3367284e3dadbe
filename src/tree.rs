use std::cmp;
use std::fmt;
use std::ptr;

use log::{debug, trace};

use crate::error::TreeError;
use crate::node::{self, Link, Node};
use crate::pretty;
use crate::traverse::{self, BreadthFirst, Iter, LevelOrder, Order};
use crate::util::{DeleteResult, InsertResult};

/// A set of unique values stored in a Binary Search Tree.
///
/// The tree is built balanced. [`insert`](Self::insert) and
/// [`delete`](Self::delete) do not rebalance it, call
/// [`rebalance`](Self::rebalance) for that.
///
/// # Examples
///
/// ```
/// use bst::OrderedTree;
///
/// let mut tree: OrderedTree<_> = [3, 1, 2, 3].into_iter().collect();
/// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
///
/// tree.insert(0);
/// assert!(tree.find(&0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T> OrderedTree<T> {
    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterates over the values in-order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Iterates over the nodes in level order. Useful for getting node handles
    /// to pass to [`height`](Self::height) and [`depth`](Self::depth).
    pub fn nodes(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(self.root())
    }

    /// Height of the given subtree: the number of edges on the longest path
    /// from `node` down to a leaf. An absent node has a height of -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::OrderedTree;
    ///
    /// let tree = OrderedTree::new([1]);
    /// assert_eq!(tree.height(tree.root()), 0);
    /// assert_eq!(tree.height(None), -1);
    /// ```
    pub fn height(&self, node: Option<&Node<T>>) -> isize {
        node::height(node)
    }

    /// Depth of `node`, defined as the height of the root minus the height of
    /// `node`. The root has a depth of 0.
    ///
    /// Returns [`TreeError::NotInTree`] if `node` is absent or is not one of
    /// this tree's nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{OrderedTree, TreeError};
    ///
    /// let tree = OrderedTree::new([1, 2, 3]);
    /// assert_eq!(tree.depth(tree.root()), Ok(0));
    /// assert_eq!(tree.depth(tree.root().and_then(|n| n.left())), Ok(1));
    /// assert_eq!(tree.depth(None), Err(TreeError::NotInTree));
    /// ```
    pub fn depth(&self, node: Option<&Node<T>>) -> Result<isize, TreeError> {
        let node = node.ok_or(TreeError::NotInTree)?;
        if !self.nodes().any(|n| ptr::eq(n, node)) {
            return Err(TreeError::NotInTree);
        }

        Ok(self.height(self.root()) - node.height())
    }

    /// Whether every node's left and right subtree heights differ by at
    /// most one.
    pub fn is_balanced(&self) -> bool {
        self.nodes().all(|n| (-1..=1).contains(&n.balance_factor()))
    }

    /// Calls `f` with each value, node first, then the left subtree, then the
    /// right subtree.
    ///
    /// `f` may rewrite values in place. Rewriting them out of order breaks
    /// lookups until the tree is rebuilt.
    pub fn pre_order<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        traverse::pre_order(&mut self.root, &mut f);
    }

    /// Calls `f` with each value, left subtree first, then the node, then the
    /// right subtree. Values are visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new([2, 3, 1]);
    /// let mut seen = vec![];
    /// tree.in_order(|v| seen.push(*v));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn in_order<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        traverse::in_order(&mut self.root, &mut f);
    }

    /// Calls `f` with each value, left subtree first, then the right subtree,
    /// then the node.
    pub fn post_order<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        traverse::post_order(&mut self.root, &mut f);
    }

    /// Calls `f` with each value breadth-first: the root, then each level from
    /// left to right.
    pub fn level_order<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.level_order_with(LevelOrder::default(), f);
    }

    /// Like [`level_order`](Self::level_order) with an explicit queue
    /// strategy.
    pub fn level_order_with<F>(&mut self, strategy: LevelOrder, mut f: F)
    where
        F: FnMut(&mut T),
    {
        traverse::level_order(&mut self.root, strategy, &mut f);
    }

    /// Calls `callback` with each value in the given order.
    ///
    /// A missing callback is rejected with [`TreeError::InvalidArgument`]
    /// before any node is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Order, OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new([1, 2, 3]);
    /// assert_eq!(tree.traverse(Order::Post, Some(|v: &mut i32| *v += 1)), Ok(()));
    /// assert_eq!(
    ///     tree.traverse(Order::Pre, None::<fn(&mut i32)>),
    ///     Err(TreeError::InvalidArgument),
    /// );
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&2, &3, &4]);
    /// ```
    pub fn traverse<F>(&mut self, order: Order, callback: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&mut T),
    {
        let f = callback.ok_or(TreeError::InvalidArgument)?;
        match order {
            Order::Pre => self.pre_order(f),
            Order::In => self.in_order(f),
            Order::Post => self.post_order(f),
            Order::Level => self.level_order(f),
        }
        Ok(())
    }
}

impl<T> OrderedTree<T>
where
    T: cmp::Ord,
{
    /// Builds a minimal height tree holding each distinct value of `values`
    /// once.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::OrderedTree;
    ///
    /// let tree = OrderedTree::new([5, 1, 3, 1]);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();

        // A stable sort keeps the first of any run of equal values in front,
        // and that is the one `dedup` keeps.
        values.sort();
        values.dedup();

        let len = values.len();
        let root = node::build(len, &mut values.into_iter());
        let tree = Self { root, len };
        debug!(
            "built tree of {} values with height {}",
            len,
            tree.height(tree.root())
        );

        tree
    }

    /// Whether the tree holds `value`.
    pub fn find(&self, value: &T) -> bool {
        node::find(&self.root, value)
    }

    /// Attaches `value` as a new leaf. If the tree already holds an equal
    /// value it is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::default();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) {
        let (root, result) = node::insert(self.root.take(), value);
        self.root = root;

        match result {
            InsertResult::Inserted => {
                self.len += 1;
                trace!("inserted value, tree now holds {}", self.len);
            }
            InsertResult::Duplicate => trace!("ignored duplicate insert"),
        }
    }

    /// Removes `value` from the tree, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new([1, 2, 3]);
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert!(!tree.find(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete(&mut self, value: &T) {
        let (root, result) = node::delete(self.root.take(), value);
        self.root = root;

        match result {
            DeleteResult::Deleted => {
                self.len -= 1;
                trace!("deleted value, tree now holds {}", self.len);
            }
            DeleteResult::NotFound => trace!("ignored delete of absent value"),
        }
    }

    /// Rebuilds the tree from its in-order contents if it isn't balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::default();
    /// for x in 0..10 {
    ///     tree.insert(x);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(tree.root()), 3);
    /// ```
    pub fn rebalance(&mut self) {
        if self.is_balanced() {
            return;
        }

        let before = self.height(self.root());
        let mut values = Vec::with_capacity(self.len);
        node::drain_in_order(self.root.take(), &mut values);

        *self = Self::new(values);
        debug!(
            "rebalanced tree of {} values from height {} to {}",
            self.len,
            before,
            self.height(self.root())
        );
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: cmp::Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pretty::write(f, self.root())
    }
}
