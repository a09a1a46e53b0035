use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

/// in-memory response cache where every entry expires a fixed duration
/// after it was stored. expired entries are dropped on lookup and purged
/// whenever a new entry is stored.
#[derive(Debug)]
pub struct ResponseCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, (Instant, V)>,
}

impl<K: Eq + Hash, V: Clone> ResponseCache<K, V> {
    pub fn new(ttl: Duration) -> ResponseCache<K, V> {
        ResponseCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some((stored_at, _)) => stored_at.elapsed() >= self.ttl,
        };
        if expired {
            self.entries.remove(key);
            None
        } else {
            self.entries.get(key).map(|(_, v)| v.clone())
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, (stored_at, _)| stored_at.elapsed() < ttl);
        self.entries.insert(key, (Instant::now(), value));
    }
}
