use ::serde::de::{Deserializer, MapAccess, Visitor};
use ::serde::ser::{SerializeMap, Serializer};
use ::serde::{Deserialize, Serialize};
use compare::Compare;
use std::fmt;
use std::marker::PhantomData;
use super::{Tree, UpdateStrategy};

// Entries go out in ascending key order. Reading them back inserts in that order, so the
// rebuilt tree leans right whatever the original shape was.
impl<K, V, S, C> Serialize for Tree<K, V, S, C>
    where K: Serialize, V: Serialize, S: UpdateStrategy<K, V>, C: Compare<K> {

    fn serialize<Ser: Serializer>(&self, s: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = s.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() { map.serialize_entry(k, v)?; }
        map.end()
    }
}

struct TreeVisitor<K, V, S, C> {
    pd: PhantomData<(K, V, S, C)>,
}

impl<'de, K, V, S, C> Visitor<'de> for TreeVisitor<K, V, S, C>
    where K: Deserialize<'de>, V: Deserialize<'de>, S: UpdateStrategy<K, V> + Default,
          C: Compare<K> + Default {

    type Value = Tree<K, V, S, C>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str("a map") }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut tree = Tree::default();
        while let Some((key, value)) = access.next_entry()? { tree.insert(key, value); }
        Ok(tree)
    }
}

impl<'de, K, V, S, C> Deserialize<'de> for Tree<K, V, S, C>
    where K: Deserialize<'de>, V: Deserialize<'de>, S: UpdateStrategy<K, V> + Default,
          C: Compare<K> + Default {

    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_map(TreeVisitor { pd: PhantomData })
    }
}
