use bst::{Direction, Node, Tree};
use compare::Compare;
use quickcheck::{Arbitrary, Gen};

pub trait Remove<K, C> where C: Compare<K> {
    fn remove<V>(&self, tree: &mut Tree<K, V, bst::Reject, C>) -> Option<(K, V)>;
}

macro_rules! remove {
    ($K:ty, $V:ty, $R:ty) => {
        mod remove {
            use crate::Remove;
            use quickcheck::{TestResult, quickcheck};
            use bst::Tree;

            #[test]
            fn removes_key() {
                fn test(mut tree: Tree<$K, $V>, removal: $R) -> TestResult {
                    match removal.remove(&mut tree) {
                        None => TestResult::discard(),
                        Some((ref key, _)) => TestResult::from_bool(
                            !tree.contains_key(key) &&
                            tree.get(key).is_none() &&
                            tree.get_mut(key).is_none() &&
                            tree.iter().find(|e| e.0 == key).is_none()
                        ),
                    }
                }

                quickcheck(test as fn(Tree<$K, $V>, $R) -> TestResult);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut tree: Tree<$K, $V>, removal: $R) -> bool {
                    let old_tree = tree.clone();

                    match removal.remove(&mut tree) {
                        None => tree == old_tree,
                        Some((ref key, _)) =>
                            tree.iter().collect::<Vec<_>>() ==
                               old_tree.iter().filter(|e| e.0 != key).collect::<Vec<_>>()
                    }
                }

                quickcheck(test as fn(Tree<$K, $V>, $R) -> bool);
            }

            #[test]
            fn sets_len() {
                fn test(mut tree: Tree<$K, $V>, removal: $R) -> bool {
                    let old_len = tree.len();

                    match removal.remove(&mut tree) {
                        None => tree.len() == old_len,
                        Some(_) => tree.len() == old_len - 1,
                    }
                }

                quickcheck(test as fn(Tree<$K, $V>, $R) -> bool);
            }

            #[test]
            fn keeps_order() {
                fn test(mut tree: Tree<$K, $V>, removal: $R) -> bool {
                    removal.remove(&mut tree);
                    let keys: Vec<_> = tree.iter().map(|e| e.0).collect();
                    keys.windows(2).all(|w| w[0] < w[1])
                }

                quickcheck(test as fn(Tree<$K, $V>, $R) -> bool);
            }
        }
    }
}

macro_rules! insert {
    ($K:ty, $V:ty, $S:ty, $overwrite:expr) => {
        mod insert {
            use quickcheck::quickcheck;
            use bst::Tree;

            #[test]
            fn sets_len() {
                fn test(mut tree: Tree<$K, $V, $S>, key: $K, value: $V) -> bool {
                    let old_len = tree.len();
                    let existed = tree.contains_key(&key);
                    tree.insert(key, value);

                    tree.len() == if existed { old_len } else { old_len + 1 }
                }

                quickcheck(test as fn(Tree<$K, $V, $S>, $K, $V) -> bool);
            }

            #[test]
            fn inserts_key() {
                fn test(mut tree: Tree<$K, $V, $S>, key: $K, value: $V) -> bool {
                    let old_value = tree.get(&key).cloned();
                    tree.insert(key, value);

                    let expected = match old_value {
                        Some(old_value) if !$overwrite => old_value,
                        _ => value,
                    };

                    tree.contains_key(&key) &&
                    tree.get(&key) == Some(&expected) &&
                    tree.iter().filter(|e| *e.0 == key).collect::<Vec<_>>() == [(&key, &expected)]
                }

                quickcheck(test as fn(Tree<$K, $V, $S>, $K, $V) -> bool);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut tree: Tree<$K, $V, $S>, key: $K, value: $V) -> bool {
                    let old_tree = tree.clone();
                    tree.insert(key, value);

                    tree.iter().filter(|e| *e.0 != key).collect::<Vec<_>>() ==
                        old_tree.iter().filter(|e| *e.0 != key).collect::<Vec<_>>()
                }

                quickcheck(test as fn(Tree<$K, $V, $S>, $K, $V) -> bool);
            }

            #[test]
            fn reports_insertion() {
                fn test(mut tree: Tree<$K, $V, $S>, key: $K, value: $V) -> bool {
                    let existed = tree.contains_key(&key);
                    let (node, inserted) = tree.insert(key, value);

                    inserted == (!existed || $overwrite) && node.map(|node| *node.key()) == Some(key)
                }

                quickcheck(test as fn(Tree<$K, $V, $S>, $K, $V) -> bool);
            }

            #[test]
            fn is_idempotent() {
                fn test(mut tree: Tree<$K, $V, $S>, key: $K, value: $V) -> bool {
                    tree.insert(key, value);
                    let once = tree.clone();
                    tree.insert(key, value);
                    tree == once
                }

                quickcheck(test as fn(Tree<$K, $V, $S>, $K, $V) -> bool);
            }
        }
    }
}

mod reject {
    insert!{u32, u16, bst::Reject, false}
}

mod accept {
    insert!{u32, u16, bst::Accept, true}
}

#[derive(Clone, Debug)]
struct Find<Q>(Q);

impl<Q> Arbitrary for Find<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Find(Q::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> { Box::new(self.0.shrink().map(Find)) }
}

impl<Q, K, C> Remove<K, C> for Find<Q> where C: Compare<K> + Compare<Q, K> {
    fn remove<V>(&self, tree: &mut Tree<K, V, bst::Reject, C>) -> Option<(K, V)> {
        tree.remove(&self.0)
    }
}

mod find {
    use quickcheck::quickcheck;
    use bst::Tree;

    #[test]
    fn agrees_with_iter() {
        fn test(tree: Tree<u32, u16>, key: u32) -> bool {
            tree.get(&key) == tree.iter().find(|e| *e.0 == key).map(|e| e.1)
        }

        quickcheck(test as fn(Tree<u32, u16>, u32) -> bool);
    }

    #[test]
    fn agrees_with_get() {
        fn test(tree: Tree<u32, u16>, key: u32) -> bool {
            tree.find(&key).map(|node| node.value()) == tree.get(&key)
        }

        quickcheck(test as fn(Tree<u32, u16>, u32) -> bool);
    }

    remove!{u32, u16, crate::Find<u32>}
}

#[derive(Clone, Debug)]
struct Next(bool);

impl Arbitrary for Next {
    fn arbitrary(gen: &mut Gen) -> Self { Next(bool::arbitrary(gen)) }
}

impl Next {
    fn dir(&self) -> Direction { if self.0 { Direction::Left } else { Direction::Right } }
}

impl<K, C> Remove<K, C> for Next where C: Compare<K> {
    fn remove<V>(&self, tree: &mut Tree<K, V, bst::Reject, C>) -> Option<(K, V)> {
        tree.remove_next(self.dir()).map(Node::into_key_value)
    }
}

mod next {
    use quickcheck::quickcheck;
    use bst::Tree;

    #[test]
    fn removes_root_child() {
        fn test(mut tree: Tree<u32, u16>, next: crate::Next) -> bool {
            let child = tree.root().and_then(|root| root.child(next.dir())).map(|node| *node.key());
            tree.remove_next(next.dir()).map(|node| *node.key()) == child
        }

        quickcheck(test as fn(Tree<u32, u16>, crate::Next) -> bool);
    }

    #[test]
    fn returns_leaf() {
        fn test(mut tree: Tree<u32, u16>, next: crate::Next) -> bool {
            tree.remove_next(next.dir()).map_or(true, |node| node.is_leaf())
        }

        quickcheck(test as fn(Tree<u32, u16>, crate::Next) -> bool);
    }

    remove!{u32, u16, crate::Next}
}

#[derive(Clone, Debug)]
struct Min;

impl Arbitrary for Min { fn arbitrary(_gen: &mut Gen) -> Self { Min } }

impl<K, C> Remove<K, C> for Min where K: Clone, C: Compare<K> {
    fn remove<V>(&self, tree: &mut Tree<K, V, bst::Reject, C>) -> Option<(K, V)> {
        let key = tree.min()?.0.clone();
        tree.remove(&key)
    }
}

mod min {
    use quickcheck::quickcheck;
    use bst::Tree;

    #[test]
    fn agrees_with_iter() {
        fn test(tree: Tree<u32, u16>) -> bool {
            tree.min() == tree.iter().next()
        }

        quickcheck(test as fn(Tree<u32, u16>) -> bool);
    }

    remove!{u32, u16, crate::Min}
}

#[derive(Clone, Debug)]
struct Max;

impl Arbitrary for Max { fn arbitrary(_gen: &mut Gen) -> Self { Max } }

impl<K, C> Remove<K, C> for Max where K: Clone, C: Compare<K> {
    fn remove<V>(&self, tree: &mut Tree<K, V, bst::Reject, C>) -> Option<(K, V)> {
        let key = tree.max()?.0.clone();
        tree.remove(&key)
    }
}

mod max {
    use quickcheck::quickcheck;
    use bst::Tree;

    #[test]
    fn agrees_with_iter() {
        fn test(tree: Tree<u32, u16>) -> bool {
            tree.max() == tree.iter().last()
        }

        quickcheck(test as fn(Tree<u32, u16>) -> bool);
    }

    remove!{u32, u16, crate::Max}
}

mod iter {
    use quickcheck::quickcheck;
    use bst::Tree;

    #[test]
    fn is_sorted() {
        fn test(tree: Tree<u32, u16>) -> bool {
            let keys: Vec<_> = tree.iter().map(|e| *e.0).collect();
            keys.windows(2).all(|w| w[0] < w[1])
        }

        quickcheck(test as fn(Tree<u32, u16>) -> bool);
    }

    #[test]
    fn agrees_with_len() {
        fn test(tree: Tree<u32, u16>) -> bool {
            tree.iter().count() == tree.len()
        }

        quickcheck(test as fn(Tree<u32, u16>) -> bool);
    }

    #[test]
    fn agrees_with_cursor() {
        fn test(tree: Tree<u32, u16>) -> bool {
            let mut entries = vec![];
            let mut it = tree.begin();

            while it != tree.end() {
                entries.push(it.get().unwrap());
                it.advance();
            }

            entries == tree.iter().collect::<Vec<_>>()
        }

        quickcheck(test as fn(Tree<u32, u16>) -> bool);
    }

    #[test]
    fn agrees_with_into_iter() {
        fn test(tree: Tree<u32, u16>) -> bool {
            let entries: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
            let len = tree.len();
            let it = tree.into_iter();
            it.len() == len && it.collect::<Vec<_>>() == entries
        }

        quickcheck(test as fn(Tree<u32, u16>) -> bool);
    }

    #[test]
    fn contains_every_key() {
        fn test(keys: Vec<u32>) -> bool {
            let tree: Tree<u32, ()> = keys.iter().map(|&key| (key, ())).collect();
            keys.iter().all(|key| tree.contains_key(key))
        }

        quickcheck(test as fn(Vec<u32>) -> bool);
    }
}
