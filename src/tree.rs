//! A binary search tree that owns its root.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::ops;
use super::node::{self, Direction, IntoIter, Iter, Link, Node};
use super::strategy::{Reject, UpdateStrategy};

/// An unbalanced binary search tree with a pluggable policy for key collisions.
///
/// Keys are ordered by the comparator `C`. When an inserted key is already present, the update
/// strategy `S` decides whether the stored value is kept ([`Reject`](struct.Reject.html), the
/// default) or overwritten ([`Accept`](struct.Accept.html)).
///
/// The tree never rebalances: inserting keys in sorted order produces a list-shaped tree and
/// makes every operation linear in the number of entries.
///
/// The behavior of this tree is undefined if a key's ordering relative to any other key changes
/// while the key is in the tree. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct Tree<K, V, S = Reject, C = Natural<K>> where C: Compare<K> {
    root: Link<K, V>,
    len: usize,
    cmp: C,
    strategy: S,
}

impl<K, V> Tree<K, V> where K: Ord {
    /// Creates an empty tree ordered according to the natural order of its keys that rejects
    /// updates to existing keys.
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
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Tree::with_cmp_and_strategy(compare::natural(), Reject) }
}

impl<K, V, S> Tree<K, V, S> where K: Ord, S: UpdateStrategy<K, V> {
    /// Creates an empty tree ordered according to the natural order of its keys that resolves
    /// key collisions with the given strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Accept, Tree};
    ///
    /// let mut tree = Tree::with_strategy(Accept);
    ///
    /// tree.insert(1, "a");
    /// tree.insert(1, "b");
    ///
    /// assert_eq!(tree.get(&1), Some(&"b"));
    /// ```
    pub fn with_strategy(strategy: S) -> Self {
        Tree::with_cmp_and_strategy(compare::natural(), strategy)
    }
}

impl<K, V, C> Tree<K, V, Reject, C> where C: Compare<K> {
    /// Creates an empty tree ordered according to the given comparator that rejects updates to
    /// existing keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = bst::Tree::with_cmp(natural().rev());
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Tree::with_cmp_and_strategy(cmp, Reject) }
}

impl<K, V, S, C> Tree<K, V, S, C> where C: Compare<K>, S: UpdateStrategy<K, V> {
    /// Creates an empty tree ordered according to the given comparator that resolves key
    /// collisions with the given strategy.
    pub fn with_cmp_and_strategy(cmp: C, strategy: S) -> Self {
        Tree { root: None, len: 0, cmp: cmp, strategy: strategy }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2, "b");
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2, "b");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Returns a reference to the tree's update strategy.
    pub fn strategy(&self) -> &S { &self.strategy }

    /// Returns a reference to the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K, V>> { self.root.as_deref() }

    /// Removes all entries from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// tree.clear();
    ///
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        node::drop_link(self.root.take());
        self.len = 0;
    }

    /// Inserts an entry into the tree.
    ///
    /// Returns the node now holding the key and whether the insertion took place. If the key is
    /// already present, the tree's update strategy decides both.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    ///
    /// let (node, inserted) = tree.insert(1, "right");
    /// assert!(inserted);
    /// assert_eq!(node.unwrap().value(), &"right");
    ///
    /// let (node, inserted) = tree.insert(1, "outright");
    /// assert!(!inserted);
    /// assert_eq!(node.unwrap().value(), &"right");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Option<&mut Node<K, V>>, bool) {
        self.insert_node(Some(Node::new(key, value)))
    }

    /// Inserts a node into the tree.
    ///
    /// Behaves like [`insert`](#method.insert), except that inserting `None` is a no-op that
    /// returns `(None, false)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Node, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(0, "root");
    ///
    /// let (node, inserted) = tree.insert_node(None);
    /// assert!(node.is_none());
    /// assert!(!inserted);
    ///
    /// let (node, inserted) = tree.insert_node(Some(Node::new(-1, "left")));
    /// assert_eq!(node.unwrap().key(), &-1);
    /// assert!(inserted);
    /// ```
    pub fn insert_node(&mut self, node: Option<Node<K, V>>) -> (Option<&mut Node<K, V>>, bool) {
        let node = match node {
            None => return (None, false),
            Some(node) => Box::new(node),
        };

        match self.root {
            None => {
                self.len += 1;
                (Some(&mut **self.root.insert(node)), true)
            }
            Some(ref mut root) => {
                let placement = node::insert(&mut **root, &self.cmp, &self.strategy, Some(node));
                if placement.is_attached() { self.len += 1; }
                placement.into_pair()
            }
        }
    }

    /// Returns the node holding the given key, or `None` if the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// assert!(tree.find(&1).is_none());
    ///
    /// tree.insert(1, "a");
    /// let node = tree.find(&1).unwrap();
    /// assert_eq!((node.key(), node.value()), (&1, &"a"));
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Option<&Node<K, V>> where C: Compare<Q, K> {
        self.root.as_deref().and_then(|root| node::find(root, &self.cmp, key))
    }

    /// Checks if the tree contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.find(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the tree
    /// does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// assert_eq!(tree.get(&1), None);
    /// tree.insert(1, "a");
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.find(key).map(Node::value)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None` if the
    /// tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// tree.insert(1, "a");
    ///
    /// if let Some(value) = tree.get_mut(&1) { *value = "b"; }
    ///
    /// assert_eq!(tree.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        let cmp = &self.cmp;
        self.root.as_deref_mut().and_then(|root| node::find_mut(root, cmp, key)).map(Node::value_mut)
    }

    /// Removes and returns the entry whose key is equal to the given key, returning `None` if
    /// the tree does not contain the key.
    ///
    /// Removing the key held by the root keeps the root node in place and moves a descendant's
    /// entry into it. Removing the last entry empties the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    ///
    /// tree.insert(10, "ten");
    /// tree.insert(11, "eleven");
    /// tree.insert(5, "five");
    /// tree.insert(6, "six");
    ///
    /// assert_eq!(tree.remove(&10), Some((10, "ten")));
    /// assert_eq!(tree.remove(&10), None);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(),
    ///            [(&5, &"five"), (&6, &"six"), (&11, &"eleven")]);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let lone = match self.root.as_deref() {
            None => return None,
            Some(root) => root.is_leaf() && node::find(root, &self.cmp, key).is_some(),
        };

        let key_value = if lone {
            self.root.take().map(|root| root.into_key_value())
        } else {
            node::remove(self.root.as_deref_mut()?, &self.cmp, key)
        };

        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Removes the root's direct child in the given direction and re-inserts that child's
    /// subtrees. Returns the removed node, which has no children, or `None` if there is no such
    /// child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Direction, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(0, "root");
    /// tree.insert(-1, "left");
    /// tree.insert(1, "right");
    /// tree.insert(3, "three");
    ///
    /// let removed = tree.remove_next(Direction::Right).unwrap();
    /// assert_eq!(removed.into_key_value(), (1, "right"));
    ///
    /// assert!(tree.find(&1).is_none());
    /// assert_eq!(tree.get(&3), Some(&"three"));
    /// ```
    pub fn remove_next(&mut self, dir: Direction) -> Option<Node<K, V>> {
        let removed = node::remove_next(self.root.as_deref_mut()?, &self.cmp, dir)?;
        self.len -= 1;
        Some(*removed)
    }

    /// Returns a reference to the tree's minimum key and a reference to its associated value,
    /// or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> { self.extremum(Direction::Left) }

    /// Returns a reference to the tree's maximum key and a reference to its associated value,
    /// or `None` if the tree is empty.
    pub fn max(&self) -> Option<(&K, &V)> { self.extremum(Direction::Right) }

    fn extremum(&self, dir: Direction) -> Option<(&K, &V)> {
        self.root.as_deref().map(|root| root.extremum(dir)).map(|node| (node.key(), node.value()))
    }

    /// Returns a cursor positioned at the tree's minimum key, or the end sentinel if the tree is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// assert!(tree.begin() == tree.end());
    ///
    /// tree.insert(0, "root");
    /// tree.insert(1, "right");
    /// tree.insert(-1, "left");
    ///
    /// let mut it = tree.begin();
    /// let mut keys = vec![];
    ///
    /// while it != tree.end() {
    ///     keys.push(*it.get().unwrap().0);
    ///     it.advance();
    /// }
    ///
    /// assert_eq!(keys, [-1, 0, 1]);
    /// ```
    pub fn begin(&self) -> Iter<K, V> { Iter::begin(self.root.as_deref()) }

    /// Returns the end sentinel.
    pub fn end(&self) -> Iter<K, V> { Iter::end() }

    /// Returns an iterator over the tree's entries in ascending key order.
    pub fn iter(&self) -> Iter<K, V> { self.begin() }
}

impl<K, V, S, C> Clone for Tree<K, V, S, C>
    where K: Clone, V: Clone, S: Clone, C: Compare<K> + Clone {

    fn clone(&self) -> Self {
        Tree {
            root: node::clone_link(&self.root),
            len: self.len,
            cmp: self.cmp.clone(),
            strategy: self.strategy.clone(),
        }
    }
}

impl<K, V, S, C> Debug for Tree<K, V, S, C>
    where K: Debug, V: Debug, S: UpdateStrategy<K, V>, C: Compare<K> {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.debug_map().entries(self.iter()).finish() }
}

impl<K, V, S, C> Default for Tree<K, V, S, C>
    where S: UpdateStrategy<K, V> + Default, C: Compare<K> + Default {

    fn default() -> Self { Tree::with_cmp_and_strategy(Default::default(), Default::default()) }
}

impl<K, V, S, C> Drop for Tree<K, V, S, C> where C: Compare<K> {
    fn drop(&mut self) { node::drop_link(self.root.take()); }
}

impl<K, V, S, C> Extend<(K, V)> for Tree<K, V, S, C>
    where S: UpdateStrategy<K, V>, C: Compare<K> {

    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, S, C> FromIterator<(K, V)> for Tree<K, V, S, C>
    where S: UpdateStrategy<K, V> + Default, C: Compare<K> + Default {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut tree: Self = Default::default();
        tree.extend(it);
        tree
    }
}

impl<K, V, S, C> Hash for Tree<K, V, S, C>
    where K: Hash, V: Hash, S: UpdateStrategy<K, V>, C: Compare<K> {

    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, S, C, Q: ?Sized> ops::Index<&'a Q> for Tree<K, V, S, C>
    where S: UpdateStrategy<K, V>, C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, S, C> IntoIterator for &'a Tree<K, V, S, C>
    where S: UpdateStrategy<K, V>, C: Compare<K> {

    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, S, C> IntoIterator for Tree<K, V, S, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(mut self) -> IntoIter<K, V> { IntoIter::new(self.root.take(), self.len) }
}

impl<K, V, S, C> PartialEq for Tree<K, V, S, C>
    where V: PartialEq, S: UpdateStrategy<K, V>, C: Compare<K> {

    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, S, C> Eq for Tree<K, V, S, C> where V: Eq, S: UpdateStrategy<K, V>, C: Compare<K> {}
