use std::{
    borrow::Borrow,
    collections::HashMap,
    hash::Hash,
    marker::PhantomData,
    ops::{Deref, Index},
};

#[derive(Debug)]
pub struct OpaqueIndex<T> {
    index: usize,
    _p: PhantomData<T>,
}

impl<T> OpaqueIndex<T> {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            _p: PhantomData,
        }
    }
}

// Manual Clone impl so T doesn't inherit the requirement
impl<T> Clone for OpaqueIndex<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OpaqueIndex<T> {}

impl<T> Deref for OpaqueIndex<T> {
    type Target = usize;

    fn deref(&self) -> &Self::Target {
        &self.index
    }
}

impl<T> PartialEq for OpaqueIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for OpaqueIndex<T> {}

/// A keyed lookup table that remembers insertion order
#[derive(Debug)]
pub struct HashVec<K, V> {
    pairs: Vec<(K, V)>,
    hm: HashMap<K, OpaqueIndex<V>>,
}

// Vector-like lookup
impl<K, V> Index<OpaqueIndex<V>> for HashVec<K, V> {
    type Output = V;

    fn index(&self, index: OpaqueIndex<V>) -> &Self::Output {
        &self.pairs[*index].1
    }
}

impl<K, V> HashVec<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Get the cheap-to-use opaque key
    pub fn get_opaque<Q>(&self, key: &Q) -> Option<OpaqueIndex<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.hm.get(key).copied()
    }

    /// Hashmap-like lookup
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_opaque(key).map(|index| &self[index])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.hm.contains_key(key)
    }

    /// Value slot for the key, created with its default on first use
    pub fn entry_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let index = match self.hm.get(&key) {
            Some(index) => **index,
            None => {
                let index = self.pairs.len();
                self.hm.insert(key.clone(), OpaqueIndex::new(index));
                self.pairs.push((key, V::default()));
                index
            }
        };
        &mut self.pairs[index].1
    }

    /// Pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.pairs.iter().map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> Default for HashVec<K, V> {
    fn default() -> Self {
        Self {
            pairs: vec![],
            hm: HashMap::new(),
        }
    }
}
