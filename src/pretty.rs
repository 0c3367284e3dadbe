//! A textual diagram of a tree for debugging.
//!
//! The diagram is rotated a quarter turn: the root sits at the left edge,
//! right subtrees are drawn above their parent and left subtrees below it.
//!
//! ```
//! use bst::{pretty, OrderedTree};
//!
//! let tree = OrderedTree::new([1, 2, 3, 4]);
//! assert_eq!(
//!     pretty::render(tree.root()),
//!     "\
//! │       ┌── 4
//! │   ┌── 3
//! └── 2
//!     └── 1
//! "
//! );
//! ```

use std::fmt::{self, Write};

use crate::node::Node;

/// Renders the subtree rooted at `root` as a diagram, one line per node.
/// An absent root renders as an empty string.
pub fn render<T>(root: Option<&Node<T>>) -> String
where
    T: fmt::Display,
{
    let mut buf = String::new();
    write(&mut buf, root).expect("writing to a String cannot fail");
    buf
}

/// Writes the diagram of the subtree rooted at `root` to `buf`.
pub fn write<T, W>(buf: &mut W, root: Option<&Node<T>>) -> fmt::Result
where
    T: fmt::Display,
    W: Write,
{
    match root {
        Some(n) => recurse(n, buf, "", true),
        None => Ok(()),
    }
}

fn recurse<T, W>(n: &Node<T>, buf: &mut W, prefix: &str, is_left: bool) -> fmt::Result
where
    T: fmt::Display,
    W: Write,
{
    if let Some(right) = n.right() {
        let prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        recurse(right, buf, &prefix, false)?;
    }

    writeln!(
        buf,
        "{prefix}{}{}",
        if is_left { "└── " } else { "┌── " },
        n.value()
    )?;

    if let Some(left) = n.left() {
        let prefix = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        recurse(left, buf, &prefix, true)?;
    }

    Ok(())
}
