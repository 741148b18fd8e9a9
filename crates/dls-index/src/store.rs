//! `KeyedStore` — fixed-capacity bucketed hash map with chained entries.
//!
//! # Scope
//!
//! The backing store for entity records keyed by small integer IDs.  The
//! bucket array never resizes: the load factor grows without bound as
//! entries accumulate.  That is an accepted simplification for the entity
//! counts this simulation targets (hundreds, against a default of 1024
//! buckets), not an O(1)-at-scale guarantee — callers with larger data
//! should size `with_capacity` accordingly.
//!
//! There is no delete: entity lifecycles only ever create and update.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Default bucket count; comfortably above the expected entity counts.
const DEFAULT_CAPACITY: usize = 1024;

// ── Entry ────────────────────────────────────────────────────────────────────

/// One link of a bucket chain.
#[derive(Debug)]
struct Entry<K, V> {
    key:   K,
    value: V,
    next:  Option<Box<Entry<K, V>>>,
}

// ── KeyedStore ───────────────────────────────────────────────────────────────

/// Bucketed hash map: O(1) amortized insert and lookup for ID-keyed entities.
///
/// At most one entry exists per key: [`put`](Self::put) on an existing key
/// overwrites the value in place rather than adding a chain link.
#[derive(Debug)]
pub struct KeyedStore<K, V> {
    buckets: Vec<Option<Box<Entry<K, V>>>>,
    len:     usize,
}

impl<K: Copy + Eq + Hash, V> KeyedStore<K, V> {
    /// Create a store with the default bucket count.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a store with exactly `capacity` buckets (never resized).
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "KeyedStore capacity must be non-zero");
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        KeyedStore { buckets, len: 0 }
    }

    /// Insert or overwrite.  Existing keys are updated in place; new keys
    /// are prepended to their bucket chain.
    pub fn put(&mut self, key: K, value: V) {
        let idx = self.bucket_of(&key);

        let mut cur = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cur {
            if entry.key == key {
                entry.value = value;
                return;
            }
            cur = entry.next.as_deref_mut();
        }

        let head = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Entry { key, value, next: head }));
        self.len += 1;
    }

    /// Look up `key`; `None` on miss (never an error).
    pub fn get(&self, key: K) -> Option<&V> {
        let mut cur = self.buckets[self.bucket_of(&key)].as_deref();
        while let Some(entry) = cur {
            if entry.key == key {
                return Some(&entry.value);
            }
            cur = entry.next.as_deref();
        }
        None
    }

    /// Mutable lookup, for in-place entity updates.
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let idx = self.bucket_of(&key);
        let mut cur = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cur {
            if entry.key == key {
                return Some(&mut entry.value);
            }
            cur = entry.next.as_deref_mut();
        }
        None
    }

    pub fn exists(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// All stored keys, in no particular order.
    pub fn keys(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.len);
        for head in &self.buckets {
            let mut cur = head.as_deref();
            while let Some(entry) = cur {
                out.push(entry.key);
                cur = entry.next.as_deref();
            }
        }
        out
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket count (fixed at construction).
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn bucket_of(&self, key: &K) -> usize {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.buckets.len()
    }
}

impl<K: Copy + Eq + Hash, V> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
