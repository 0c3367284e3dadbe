use bst::{LevelOrder, Node, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Delete(v) => {
                tree.delete(v);
                set.remove(v);
            }
            Op::Rebalance => {
                tree.rebalance();
                assert!(tree.is_balanced());
            }
            Op::Iter => {
                assert!(tree.iter().eq(set.iter()));
            }
        }

        assert!(is_search_tree(tree.root(), None, None));
    }
}

/// Checks every value lies strictly between the bounds inherited from its
/// ancestors, which also rules out duplicates.
fn is_search_tree<T: Ord>(node: Option<&Node<T>>, lo: Option<&T>, hi: Option<&T>) -> bool {
    match node {
        None => true,
        Some(n) => {
            let v = n.value();
            lo.map_or(true, |lo| lo < v)
                && hi.map_or(true, |hi| v < hi)
                && is_search_tree(n.left(), lo, Some(v))
                && is_search_tree(n.right(), Some(v), hi)
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new(xs.iter().copied());
    let mut set: BTreeSet<_> = xs.into_iter().collect();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|v| tree.find(v))
}

#[quickcheck]
fn construction_is_balanced_and_sorted(xs: Vec<i16>) -> bool {
    let tree = OrderedTree::new(xs.iter().copied());
    let set: BTreeSet<_> = xs.into_iter().collect();

    // A minimal height tree of n values has height floor(lg n).
    let want_height = match set.len() {
        0 => -1,
        n => (usize::BITS - 1 - n.leading_zeros()) as isize,
    };

    tree.is_balanced()
        && tree.height(tree.root()) == want_height
        && tree.iter().eq(set.iter())
        && is_search_tree(tree.root(), None, None)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::default();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = OrderedTree::new(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = OrderedTree::new(xs);
    tree.insert(x);
    let before = tree.clone();
    tree.insert(x);

    tree == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.find(x))
        && still_present.iter().all(|x| tree.find(x))
        && is_search_tree(tree.root(), None, None)
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new(xs);
    tree.extend(inserts);
    let want: BTreeSet<_> = tree.iter().copied().collect();

    let mut pre = vec![];
    let mut post = vec![];
    let mut level = vec![];
    let mut level_recursive = vec![];
    let mut inorder = vec![];
    tree.pre_order(|v| pre.push(*v));
    tree.post_order(|v| post.push(*v));
    tree.level_order(|v| level.push(*v));
    tree.level_order_with(LevelOrder::Recursive, |v| level_recursive.push(*v));
    tree.in_order(|v| inorder.push(*v));

    let same_set = |seen: &[i8]| {
        seen.len() == want.len() && seen.iter().copied().collect::<BTreeSet<_>>() == want
    };

    same_set(&pre)
        && same_set(&post)
        && same_set(&level)
        && level == level_recursive
        && inorder.windows(2).all(|w| w[0] < w[1])
        && inorder.iter().eq(want.iter())
}

#[quickcheck]
fn rebalance_restores_balance(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new(xs);
    tree.extend(inserts);
    let before: Vec<_> = tree.iter().copied().collect();

    tree.rebalance();

    tree.is_balanced() && tree.iter().eq(before.iter()) && tree.len() == before.len()
}

#[quickcheck]
fn depth_is_root_height_minus_height(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new(xs);
    tree.extend(inserts);
    let root_height = tree.height(tree.root());

    tree.depth(tree.root()).map_or(tree.is_empty(), |d| d == 0)
        && tree
            .nodes()
            .all(|n| tree.depth(Some(n)) == Ok(root_height - tree.height(Some(n))))
}
