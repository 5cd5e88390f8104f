//! Policies deciding what happens when an inserted key is already present.

use super::Node;

/// Resolves an insert-time key collision.
///
/// `resolve` is called exactly when the incoming node's key compares equal to the key of
/// `existing`. It returns the handle the insertion reports along with whether the insertion
/// counts as having taken place. It may change `existing`'s value but never its key.
///
/// # Examples
///
/// A strategy that keeps the larger of the two values:
///
/// ```
/// use bst::{Node, Tree, UpdateStrategy};
///
/// struct KeepMax;
///
/// impl<K> UpdateStrategy<K, u32> for KeepMax {
///     fn resolve<'a>(&self, existing: &'a mut Node<K, u32>, incoming: Node<K, u32>)
///         -> (Option<&'a mut Node<K, u32>>, bool) {
///
///         let replaced = *incoming.value() > *existing.value();
///         if replaced { *existing.value_mut() = incoming.into_value(); }
///         (Some(existing), replaced)
///     }
/// }
///
/// let mut tree = Tree::with_strategy(KeepMax);
/// tree.insert("a", 3);
/// assert_eq!(tree.insert("a", 1).1, false);
/// assert_eq!(tree.insert("a", 7).1, true);
/// assert_eq!(tree.get(&"a"), Some(&7));
/// ```
pub trait UpdateStrategy<K, V> {
    /// Decides between the `existing` node and the `incoming` one carrying the same key.
    fn resolve<'a>(&self, existing: &'a mut Node<K, V>, incoming: Node<K, V>)
        -> (Option<&'a mut Node<K, V>>, bool);
}

/// Keeps the existing value and reports that nothing was inserted.
///
/// # Examples
///
/// ```
/// let mut tree = bst::Tree::new();
/// tree.insert(0, "root");
///
/// let (node, inserted) = tree.insert(0, "uproot");
/// assert!(!inserted);
/// assert_eq!(node.unwrap().value(), &"root");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reject;

impl<K, V> UpdateStrategy<K, V> for Reject {
    fn resolve<'a>(&self, existing: &'a mut Node<K, V>, _incoming: Node<K, V>)
        -> (Option<&'a mut Node<K, V>>, bool) {

        (Some(existing), false)
    }
}

/// Overwrites the existing value in place and reports an insertion.
///
/// # Examples
///
/// ```
/// use bst::{Accept, Tree};
///
/// let mut tree = Tree::with_strategy(Accept);
/// tree.insert(0, "root");
///
/// let (node, inserted) = tree.insert(0, "uproot");
/// assert!(inserted);
/// assert_eq!(node.unwrap().value(), &"uproot");
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Accept;

impl<K, V> UpdateStrategy<K, V> for Accept {
    fn resolve<'a>(&self, existing: &'a mut Node<K, V>, incoming: Node<K, V>)
        -> (Option<&'a mut Node<K, V>>, bool) {

        *existing.value_mut() = incoming.into_value();
        (Some(existing), true)
    }
}

impl<'s, K, V, S: ?Sized> UpdateStrategy<K, V> for &'s S where S: UpdateStrategy<K, V> {
    fn resolve<'a>(&self, existing: &'a mut Node<K, V>, incoming: Node<K, V>)
        -> (Option<&'a mut Node<K, V>>, bool) {

        (**self).resolve(existing, incoming)
    }
}
