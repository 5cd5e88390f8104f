use compare::Compare;
use ::quickcheck::{Arbitrary, Gen};
use super::{Tree, UpdateStrategy};

impl<K, V, S, C> Arbitrary for Tree<K, V, S, C>
    where K: Arbitrary, V: Arbitrary, S: 'static + Clone + UpdateStrategy<K, V> + Default,
          C: 'static + Clone + Compare<K> + Default {

    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<(K, V)>::arbitrary(gen).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<(K, V)> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
