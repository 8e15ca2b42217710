//! Least-recently-used cache
//!
//! A hash map from key to arena slot plus an intrusive doubly linked
//! recency list over the arena. `head` is the most recently used entry and
//! `tail` the next eviction victim. Evicted slots are recycled.

use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    capacity: usize,
    map: HashMap<K, usize>,
    entries: Vec<Entry<K, V>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    pub fn new(capacity: usize) -> AlgorithmResult<Self> {
        if capacity == 0 {
            return Err(AlgorithmError::invalid_parameter(
                "capacity",
                "must be at least 1",
            ));
        }
        Ok(Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Looks up `key` and marks it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let slot = *self.map.get(key)?;
        self.detach(slot);
        self.attach_front(slot);
        Some(&self.entries[slot].value)
    }

    /// Inserts or replaces `key`, evicting the least recently used entry
    /// when the cache is over capacity
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&slot) = self.map.get(&key) {
            self.entries[slot].value = value;
            self.detach(slot);
            self.attach_front(slot);
            return;
        }

        if self.map.len() == self.capacity {
            if let Some(victim) = self.tail {
                self.detach(victim);
                self.map.remove(&self.entries[victim].key);
                trace!("lru evicting slot {}", victim);
                self.entries[victim] = Entry {
                    key: key.clone(),
                    value,
                    prev: None,
                    next: None,
                };
                self.map.insert(key, victim);
                self.attach_front(victim);
                return;
            }
        }

        let slot = self.entries.len();
        self.entries.push(Entry {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.map.insert(key, slot);
        self.attach_front(slot);
    }

    /// Keys from most to least recently used
    pub fn keys_by_recency(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.map.len());
        let mut current = self.head;
        while let Some(slot) = current {
            keys.push(&self.entries[slot].key);
            current = self.entries[slot].next;
        }
        keys
    }

    fn detach(&mut self, slot: usize) {
        let (prev, next) = (self.entries[slot].prev, self.entries[slot].next);
        match prev {
            Some(p) => self.entries[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entries[n].prev = prev,
            None => self.tail = prev,
        }
        self.entries[slot].prev = None;
        self.entries[slot].next = None;
    }

    fn attach_front(&mut self, slot: usize) {
        self.entries[slot].next = self.head;
        self.entries[slot].prev = None;
        if let Some(old_head) = self.head {
            self.entries[old_head].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eviction_order() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.get(&1), Some(&1));

        cache.put(3, 3);
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&3), Some(&3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_update_refreshes_recency() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("a", 10);
        cache.put("c", 3);

        assert_eq!(cache.get(&"a"), Some(&10));
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.keys_by_recency(), vec![&"a", &"c"]);
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = LruCache::new(1).unwrap();
        cache.put('x', 1);
        cache.put('y', 2);
        assert_eq!(cache.get(&'x'), None);
        assert_eq!(cache.get(&'y'), Some(&2));
        assert!(LruCache::<u8, u8>::new(0).is_err());
    }
}
