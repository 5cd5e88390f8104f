//! An unbalanced binary search tree.
//!
//! [`Tree`](struct.Tree.html) owns a chain of boxed [`Node`](struct.Node.html)s ordered by a
//! comparator. What happens when an inserted key is already present is decided by an
//! [`UpdateStrategy`](strategy/trait.UpdateStrategy.html): [`Reject`](struct.Reject.html) keeps
//! the stored value, [`Accept`](struct.Accept.html) overwrites it.
//!
//! # Examples
//!
//! ```
//! use bst::{Accept, Tree};
//!
//! let mut tree = Tree::with_strategy(Accept);
//!
//! tree.insert(0, "root");
//! tree.insert(1, "right");
//! tree.insert(-1, "left");
//! tree.insert(0, "uproot");
//!
//! assert_eq!(tree.iter().collect::<Vec<_>>(),
//!            [(&-1, &"left"), (&0, &"uproot"), (&1, &"right")]);
//! ```

mod node;
pub mod strategy;
mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

#[cfg(feature = "serde")]
mod serde;

pub use node::{Direction, IntoIter, Iter, Node};
pub use strategy::{Accept, Reject, UpdateStrategy};
pub use tree::Tree;
