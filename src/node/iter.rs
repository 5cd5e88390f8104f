use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::ptr;
use super::{Link, Node};

/// An in-order cursor over a tree, yielding entries in ascending key order.
///
/// The cursor keeps the path of not-yet-visited ancestors on a stack, deepest on top. The end
/// sentinel has an empty stack and no current node.
///
/// Acquire through [`Tree::begin`](struct.Tree.html#method.begin),
/// [`Tree::iter`](struct.Tree.html#method.iter) or [`Node::begin`](struct.Node.html#method.begin).
///
/// # Examples
///
/// ```
/// let mut tree = bst::Tree::new();
///
/// tree.insert(2, "b");
/// tree.insert(1, "a");
/// tree.insert(3, "c");
///
/// let mut it = tree.begin();
///
/// while it != tree.end() {
///     let (key, value) = it.get().unwrap();
///     println!("{:?}: {:?}", key, value);
///     it.advance();
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a> {
    ancestors: Vec<&'a Node<K, V>>,
    current: Option<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn begin(root: Option<&'a Node<K, V>>) -> Self {
        let mut it = Iter::end();
        if let Some(root) = root { it.wind_left(root); }
        it
    }

    pub(crate) fn end() -> Self { Iter { ancestors: vec![], current: None } }

    // Descends along left children from `node`, stacking every node passed on the way.
    fn wind_left(&mut self, mut node: &'a Node<K, V>) {
        while let Some(left) = node.left() {
            self.ancestors.push(node);
            node = left;
        }

        self.current = Some(node);
    }

    /// Moves to the next entry in key order. Advancing the end sentinel leaves it at the end.
    pub fn advance(&mut self) {
        match self.current {
            None => self.ancestors.clear(),
            Some(node) => match node.right() {
                Some(right) => self.wind_left(right),
                None => self.current = self.ancestors.pop(),
            },
        }
    }

    /// Returns the current entry, or `None` at the end.
    pub fn get(&self) -> Option<(&'a K, &'a V)> { self.current.map(|node| (&node.key, &node.value)) }

    /// Returns the current node, or `None` at the end.
    pub fn node(&self) -> Option<&'a Node<K, V>> { self.current }

    /// Checks if the cursor is at the end sentinel.
    pub fn is_end(&self) -> bool { self.current.is_none() }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter { ancestors: self.ancestors.clone(), current: self.current }
    }
}

impl<'a, K, V> Debug for Iter<'a, K, V> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Iter").field("current", &self.get()).field("depth", &self.ancestors.len())
            .finish()
    }
}

/// Two cursors are equal when they sit on the same node and agree on the top of their
/// ancestor stacks. This is enough to detect the end of a traversal, but it does not compare
/// whole paths.
impl<'a, K, V> PartialEq for Iter<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        let same_current = match (self.current, other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        };

        same_current && match (self.ancestors.last(), other.ancestors.last()) {
            (None, None) => true,
            (Some(&a), Some(&b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ancestors.len() + self.current.map_or(0, |_| 1), None)
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// An iterator that consumes a tree, yielding its entries in ascending key order.
///
/// Acquire through [`Tree::into_iter`](struct.Tree.html#method.into_iter) or the `IntoIterator`
/// trait:
///
/// ```
/// let mut tree = bst::Tree::new();
///
/// tree.insert(2, "b");
/// tree.insert(1, "a");
/// tree.insert(3, "c");
///
/// for (key, value) in tree {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct IntoIter<K, V> {
    ancestors: Vec<Box<Node<K, V>>>,
    size: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(root: Link<K, V>, size: usize) -> Self {
        let mut it = IntoIter { ancestors: vec![], size: size };
        it.wind_left(root);
        it
    }

    fn wind_left(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.ancestors.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let mut node = self.ancestors.pop()?;
        self.wind_left(node.right.take());
        self.size -= 1;
        Some(node.into_key_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        for node in self.ancestors.drain(..) { super::drop_link(Some(node)); }
    }
}
