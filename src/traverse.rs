use std::collections::VecDeque;

use crate::node::{Link, Node};

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. Ascending on a tree whose
    /// values have not been rewritten out of order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
    /// Breadth-first: the root, then each level left to right.
    Level,
}

/// How a level-order traversal walks its queue. Both strategies visit nodes
/// in the same order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LevelOrder {
    /// Drain an explicit queue in a loop.
    #[default]
    Iterative,
    /// Visit one level, then recurse on the queue of its children.
    ///
    /// Recursion depth is the height of the tree plus one.
    Recursive,
}

pub(crate) fn pre_order<T, F>(link: &mut Link<T>, f: &mut F)
where
    F: FnMut(&mut T),
{
    if let Some(node) = link {
        f(&mut node.value);
        pre_order(&mut node.left, f);
        pre_order(&mut node.right, f);
    }
}

pub(crate) fn in_order<T, F>(link: &mut Link<T>, f: &mut F)
where
    F: FnMut(&mut T),
{
    if let Some(node) = link {
        in_order(&mut node.left, f);
        f(&mut node.value);
        in_order(&mut node.right, f);
    }
}

pub(crate) fn post_order<T, F>(link: &mut Link<T>, f: &mut F)
where
    F: FnMut(&mut T),
{
    if let Some(node) = link {
        post_order(&mut node.left, f);
        post_order(&mut node.right, f);
        f(&mut node.value);
    }
}

pub(crate) fn level_order<T, F>(link: &mut Link<T>, strategy: LevelOrder, f: &mut F)
where
    F: FnMut(&mut T),
{
    let mut queue: VecDeque<&mut Box<Node<T>>> = link.iter_mut().collect();

    match strategy {
        LevelOrder::Iterative => {
            while let Some(node) = queue.pop_front() {
                visit_enqueue(node, &mut queue, f);
            }
        }
        LevelOrder::Recursive => level_order_recurse(queue, f),
    }
}

/// Visits every node of `level`, collecting the next level as it goes.
fn level_order_recurse<'a, T, F>(mut level: VecDeque<&'a mut Box<Node<T>>>, f: &mut F)
where
    F: FnMut(&mut T),
{
    if level.is_empty() {
        return;
    }

    let mut next = VecDeque::with_capacity(level.len() * 2);
    while let Some(node) = level.pop_front() {
        visit_enqueue(node, &mut next, f);
    }

    level_order_recurse(next, f);
}

/// Hands the node's value to `f` and queues its children, left first.
fn visit_enqueue<'a, T, F>(
    node: &'a mut Box<Node<T>>,
    queue: &mut VecDeque<&'a mut Box<Node<T>>>,
    f: &mut F,
) where
    F: FnMut(&mut T),
{
    let Node { value, left, right } = &mut **node;
    f(value);
    queue.extend(left);
    queue.extend(right);
}

/// An iterator over the values of a tree in ascending order.
///
/// Created by [`OrderedTree::iter`](crate::OrderedTree::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Stacks `node` and its chain of left children, smallest on top.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Everything left of the top node has been yielded already.
        let n = self.stack.pop()?;
        self.push_left_spine(n.right());
        Some(n.value())
    }
}

/// An iterator over the nodes of a tree in level order.
///
/// Created by [`OrderedTree::nodes`](crate::OrderedTree::nodes).
#[derive(Debug, Clone)]
pub struct BreadthFirst<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> BreadthFirst<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;
        self.queue.extend(v.left());
        self.queue.extend(v.right());
        Some(v)
    }
}
