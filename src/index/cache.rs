//! Result caching for clue evaluation
//!
//! The cache is split into a storage capability (`Cache`) and a key encoding
//! strategy (`KeyEncoder`), composed by `InMemoryCache`.

use crate::core::{Clue, Color, WordSet};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Key-value cache capability
pub trait Cache<K, V> {
    /// Look up a value; a miss is `None`
    fn get(&self, key: &K) -> Option<&V>;

    /// Store a value, replacing any previous one for the same key
    fn set(&mut self, key: &K, value: V);

    /// Take over the entries of `other` that this cache does not hold yet
    fn absorb(&mut self, other: Self)
    where
        Self: Sized;
}

/// Strategy for turning a key into its storage form
pub trait KeyEncoder<K> {
    type Encoded: Eq + Hash;

    fn encode(&self, key: &K) -> Self::Encoded;
}

/// Cache storing values in a hash map under encoded keys
#[derive(Debug, Clone)]
pub struct InMemoryCache<K, V, E: KeyEncoder<K>> {
    encoder: E,
    entries: FxHashMap<E::Encoded, V>,
    _key: PhantomData<fn(&K)>,
}

impl<K, V, E: KeyEncoder<K>> InMemoryCache<K, V, E> {
    #[must_use]
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            entries: FxHashMap::default(),
            _key: PhantomData,
        }
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, E: KeyEncoder<K> + Default> Default for InMemoryCache<K, V, E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<K, V, E: KeyEncoder<K>> Cache<K, V> for InMemoryCache<K, V, E> {
    fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(&self.encoder.encode(key))
    }

    fn set(&mut self, key: &K, value: V) {
        self.entries.insert(self.encoder.encode(key), value);
    }

    fn absorb(&mut self, other: Self) {
        for (key, value) in other.entries {
            self.entries.entry(key).or_insert(value);
        }
    }
}

/// Encoded clue: only position, character and derived color matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClueKey {
    pub position: usize,
    pub character: char,
    pub color: Color,
}

/// Encodes clues so that flag combinations with the same color share an entry
#[derive(Debug, Clone, Copy, Default)]
pub struct ClueKeyEncoder;

impl KeyEncoder<Clue> for ClueKeyEncoder {
    type Encoded = ClueKey;

    fn encode(&self, clue: &Clue) -> ClueKey {
        ClueKey {
            position: clue.position(),
            character: clue.character(),
            color: clue.color(),
        }
    }
}

/// Cache of per-clue consistent word sets
pub type ClueCache = InMemoryCache<Clue, WordSet, ClueKeyEncoder>;
