use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Small TTL cache: key to (value, expiry). Entries are overwritten on
/// re-insert and ignored once expired; nothing is ever evicted, and the map
/// grows with the number of distinct keys.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, (V, Instant)>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value if it has not expired yet.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.lock().ok()?;

        entries.get(key).and_then(|(value, expires_at)| {
            if Instant::now() < *expires_at {
                Some(value.clone())
            } else {
                None
            }
        })
    }

    pub fn insert(&self, key: String, value: V) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, (value, Instant::now() + self.ttl));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_hit_within_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("prices_730_us".to_string(), 42);

        assert_eq!(cache.get("prices_730_us"), Some(42));
        assert_eq!(cache.get("prices_570_us"), None);
    }

    #[test]
    fn test_miss_after_expiry() {
        let cache = TtlCache::new(Duration::from_millis(20));
        cache.insert("prices_730_us".to_string(), 42);

        sleep(Duration::from_millis(40));
        assert_eq!(cache.get("prices_730_us"), None);
    }

    #[test]
    fn test_reinsert_overwrites() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("prices_730_us".to_string(), 1);
        cache.insert("prices_730_us".to_string(), 2);

        assert_eq!(cache.get("prices_730_us"), Some(2));
    }
}
