mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::fmt::{self, Debug};
use std::mem::replace;
use super::strategy::UpdateStrategy;

pub use self::iter::{IntoIter, Iter};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// The child slot an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The slot holding strictly smaller keys.
    Left,
    /// The slot holding strictly greater keys.
    Right,
}

impl Direction {
    /// Returns the other direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A binary search tree vertex: one key/value pair and up to two owned subtrees.
///
/// Every key in the left subtree compares less than `key`, and every key in the right subtree
/// compares greater.
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    /// Creates a childless node.
    ///
    /// # Examples
    ///
    /// ```
    /// let node = bst::Node::new(1, "a");
    /// assert_eq!(node.key(), &1);
    /// assert_eq!(node.value(), &"a");
    /// assert!(node.is_leaf());
    /// ```
    pub fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, key: key, value: value }
    }

    /// Returns a reference to the node's key.
    pub fn key(&self) -> &K { &self.key }

    /// Returns a reference to the node's value.
    pub fn value(&self) -> &V { &self.value }

    /// Returns a mutable reference to the node's value.
    pub fn value_mut(&mut self) -> &mut V { &mut self.value }

    /// Returns the node's left child, if any.
    pub fn left(&self) -> Option<&Node<K, V>> { self.left.as_deref() }

    /// Returns the node's right child, if any.
    pub fn right(&self) -> Option<&Node<K, V>> { self.right.as_deref() }

    /// Returns the node's child in the given direction, if any.
    pub fn child(&self, dir: Direction) -> Option<&Node<K, V>> { self.slot(dir).as_deref() }

    /// Checks if the node has no children.
    pub fn is_leaf(&self) -> bool { self.left.is_none() && self.right.is_none() }

    /// Consumes the node, returning its key and value.
    pub fn into_key_value(self) -> (K, V) { (self.key, self.value) }

    /// Consumes the node, returning its value.
    pub fn into_value(self) -> V { self.value }

    /// Returns the leftmost or rightmost node of this subtree.
    pub fn extremum(&self, dir: Direction) -> &Node<K, V> {
        let mut node = self;
        while let Some(child) = node.child(dir) { node = child; }
        node
    }

    /// Returns an iterator positioned at the smallest key of this subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// tree.insert(0, "root");
    /// tree.insert(1, "right");
    /// tree.insert(-1, "left");
    ///
    /// let root = tree.root().unwrap();
    /// let mut it = root.begin();
    /// assert_eq!(it.get(), Some((&-1, &"left")));
    /// it.advance();
    /// it.advance();
    /// it.advance();
    /// assert!(it == root.end());
    /// ```
    pub fn begin(&self) -> Iter<K, V> { Iter::begin(Some(self)) }

    /// Returns the end sentinel.
    pub fn end(&self) -> Iter<K, V> { Iter::end() }

    /// Detaches the direct child in the given direction, handing over its whole subtree.
    pub(crate) fn disconnect(&mut self, dir: Direction) -> Link<K, V> { self.slot_mut(dir).take() }

    fn slot(&self, dir: Direction) -> &Link<K, V> {
        match dir {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    fn slot_mut(&mut self, dir: Direction) -> &mut Link<K, V> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    // Takes over the child's content and subtrees, returning this node's old key and value.
    fn absorb(&mut self, child: Box<Node<K, V>>) -> (K, V) {
        let child = *child;
        self.left = child.left;
        self.right = child.right;
        (replace(&mut self.key, child.key), replace(&mut self.value, child.value))
    }
}

impl<K, V> Debug for Node<K, V> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Node").field("key", &self.key).field("value", &self.value).finish()
    }
}

/// The outcome of an insertion.
pub enum Placement<'a, K: 'a, V: 'a> {
    /// Nothing was given to insert.
    Absent,
    /// The node was attached to a previously empty slot.
    Attached(&'a mut Node<K, V>),
    /// The key was already present and the update strategy decided.
    Resolved(Option<&'a mut Node<K, V>>, bool),
}

impl<'a, K, V> Placement<'a, K, V> {
    pub fn is_attached(&self) -> bool { matches!(*self, Placement::Attached(_)) }

    pub fn into_pair(self) -> (Option<&'a mut Node<K, V>>, bool) {
        match self {
            Placement::Absent => (None, false),
            Placement::Attached(node) => (Some(node), true),
            Placement::Resolved(node, inserted) => (node, inserted),
        }
    }
}

enum Seat<'a, K: 'a, V: 'a> {
    Vacant(&'a mut Node<K, V>),
    Occupied(&'a mut Node<K, V>, Box<Node<K, V>>),
}

// Walks down to the empty slot where `new` belongs and moves it there, or stops at the node
// already holding its key.
fn seat<'a, K, V, C>(node: &'a mut Node<K, V>, cmp: &C, new: Box<Node<K, V>>) -> Seat<'a, K, V>
    where C: Compare<K> {

    let mut node = node;

    loop {
        let link = match cmp.compare(&new.key, &node.key) {
            Equal => return Seat::Occupied(node, new),
            Less => &mut node.left,
            Greater => &mut node.right,
        };

        match link {
            Some(next) => node = &mut **next,
            None => return Seat::Vacant(&mut **link.insert(new)),
        }
    }
}

pub fn insert<'a, K, V, C, S>(node: &'a mut Node<K, V>, cmp: &C, strategy: &S, new: Link<K, V>)
    -> Placement<'a, K, V> where C: Compare<K>, S: UpdateStrategy<K, V> {

    let new = match new {
        None => return Placement::Absent,
        Some(new) => new,
    };

    match seat(node, cmp, new) {
        Seat::Vacant(node) => Placement::Attached(node),
        Seat::Occupied(existing, new) => {
            let (node, inserted) = strategy.resolve(existing, *new);
            Placement::Resolved(node, inserted)
        }
    }
}

// Re-attaches a detached subtree whose keys are all absent from the tree rooted at `node`.
fn graft<K, V, C>(node: &mut Node<K, V>, cmp: &C, link: Link<K, V>) where C: Compare<K> {
    if let Some(subtree) = link {
        let seated = seat(node, cmp, subtree);
        debug_assert!(matches!(seated, Seat::Vacant(_)), "grafted subtree collided with a key");
    }
}

pub fn find<'a, K, V, C, Q: ?Sized>(node: &'a Node<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    let mut node = node;

    loop {
        node = match cmp.compare(key, &node.key) {
            Equal => return Some(node),
            Less => node.left.as_deref()?,
            Greater => node.right.as_deref()?,
        };
    }
}

pub fn find_mut<'a, K, V, C, Q: ?Sized>(node: &'a mut Node<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut Node<K, V>> where C: Compare<Q, K> {

    let mut node = node;

    loop {
        let next = match cmp.compare(key, &node.key) {
            Equal => return Some(node),
            Less => &mut node.left,
            Greater => &mut node.right,
        };

        node = next.as_deref_mut()?;
    }
}

enum Locus<'a, K: 'a, V: 'a> {
    Here,
    Below(&'a mut Node<K, V>, Direction),
}

// Finds the node holding `key`: either `node` itself or the direct child of the returned
// parent in the returned direction.
fn locate<'a, K, V, C, Q: ?Sized>(node: &'a mut Node<K, V>, cmp: &C, key: &Q)
    -> Option<Locus<'a, K, V>> where C: Compare<Q, K> {

    let mut dir = match cmp.compare(key, &node.key) {
        Equal => return Some(Locus::Here),
        Less => Direction::Left,
        Greater => Direction::Right,
    };

    let mut parent = node;

    loop {
        let next = match parent.child(dir) {
            None => return None,
            Some(child) => match cmp.compare(key, &child.key) {
                Equal => None,
                Less => Some(Direction::Left),
                Greater => Some(Direction::Right),
            },
        };

        match next {
            None => return Some(Locus::Below(parent, dir)),
            Some(next) => {
                parent = parent.slot_mut(dir).as_deref_mut()?;
                dir = next;
            }
        }
    }
}

/// Removes the node holding `key` from the tree rooted at `node`, returning its key and value.
///
/// If `node` itself holds the key, its content is replaced by a child's (the left one if
/// present) and the node stays in place. A childless `node` cannot unlink itself, so that case
/// reports `None` and leaves the tree untouched.
pub fn remove<K, V, C, Q: ?Sized>(node: &mut Node<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<K> + Compare<Q, K> {

    match locate(node, cmp, key)? {
        Locus::Below(parent, dir) => remove_next(parent, cmp, dir).map(|node| node.into_key_value()),
        Locus::Here => {
            let dir = if node.left.is_some() { Direction::Left } else { Direction::Right };
            let child = node.disconnect(dir)?;
            let rest = node.disconnect(dir.opposite());
            let key_value = node.absorb(child);
            graft(node, cmp, rest);
            Some(key_value)
        }
    }
}

/// Removes the direct child of `node` in the given direction, re-inserting the child's own
/// subtrees below `node`. The returned node is childless.
pub fn remove_next<K, V, C>(node: &mut Node<K, V>, cmp: &C, dir: Direction) -> Option<Box<Node<K, V>>>
    where C: Compare<K> {

    let mut removed = node.disconnect(dir)?;
    let left = removed.disconnect(Direction::Left);
    let right = removed.disconnect(Direction::Right);
    graft(node, cmp, left);
    graft(node, cmp, right);
    Some(removed)
}

/// Copies a subtree without recursing once per level.
pub fn clone_link<K, V>(link: &Link<K, V>) -> Link<K, V> where K: Clone, V: Clone {
    // Post-order: a node is copied once both of its children sit on top of `copies`.
    let mut pending: Vec<(&Node<K, V>, bool)> =
        link.as_deref().map(|node| (node, false)).into_iter().collect();
    let mut copies: Vec<Box<Node<K, V>>> = vec![];

    while let Some((node, children_done)) = pending.pop() {
        if children_done {
            let right = node.right.as_ref().and_then(|_| copies.pop());
            let left = node.left.as_ref().and_then(|_| copies.pop());
            copies.push(Box::new(Node {
                left: left,
                right: right,
                key: node.key.clone(),
                value: node.value.clone(),
            }));
        } else {
            pending.push((node, true));
            pending.extend(node.right().map(|right| (right, false)));
            pending.extend(node.left().map(|left| (left, false)));
        }
    }

    copies.pop()
}

/// Drops a subtree without recursing once per level.
pub fn drop_link<K, V>(link: Link<K, V>) {
    let mut stack: Vec<Box<Node<K, V>>> = link.into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
