// ── TTL-keyed connection cache ──
//
// Process-wide store shared by every in-flight poll. Knows nothing about
// HTTP or auth semantics; it maps an opaque key to a value with a per-entry
// max age. Expiry is checked lazily on read -- there is no sweeper task, so
// reads pay the eviction cost.

use std::hash::Hash;
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    max_age: Duration,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self) -> bool {
        self.inserted_at.elapsed() < self.max_age
    }
}

/// Concurrent map from an opaque key to a value with a bounded lifetime.
///
/// Safe for concurrent `get`/`set` from unrelated polls; a same-key `set`
/// race resolves last-write-wins. An entry is observably present only while
/// `now - inserted_at < max_age`; after that, `get` reports absence and the
/// entry is removed in passing.
#[derive(Debug)]
pub struct TtlCache<K: Eq + Hash, V> {
    entries: DashMap<K, CacheEntry<V>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Look up `key`. Absence covers both "never set" and "expired".
    pub fn get(&self, key: &K) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_fresh() => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            // Re-check freshness under the write lock; a concurrent set may
            // have replaced the entry since the read above.
            self.entries.remove_if(key, |_, entry| !entry.is_fresh());
        }
        None
    }

    /// Insert or overwrite the entry for `key`.
    pub fn set(&self, key: K, value: V, max_age: Duration) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                max_age,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn get_returns_value_before_expiry() {
        let cache = TtlCache::new();
        cache.set("controller", 7u32, Duration::from_secs(60));

        assert_eq!(cache.get(&"controller"), Some(7));

        tokio::time::advance(Duration::from_secs(59)).await;
        assert_eq!(cache.get(&"controller"), Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn entry_expires_at_max_age() {
        let cache = TtlCache::new();
        cache.set("controller", 7u32, Duration::from_secs(60));

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(cache.get(&"controller"), None);
        assert!(cache.is_empty(), "expired entry should be removed on read");
    }

    #[tokio::test(start_paused = true)]
    async fn set_overwrites_expired_entry() {
        let cache = TtlCache::new();
        cache.set("controller", 1u32, Duration::from_secs(10));

        tokio::time::advance(Duration::from_secs(11)).await;
        cache.set("controller", 2u32, Duration::from_secs(10));

        assert_eq!(cache.get(&"controller"), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn keys_differing_only_in_password_are_independent() {
        let cache = TtlCache::new();
        let key_a = ("host", 443u16, "monitor", "hunter2");
        let key_b = ("host", 443u16, "monitor", "hunter3");

        cache.set(key_a, "session-a", Duration::from_secs(60));
        assert_eq!(cache.get(&key_a), Some("session-a"));
        assert_eq!(cache.get(&key_b), None);

        cache.set(key_b, "session-b", Duration::from_secs(60));
        assert_eq!(cache.get(&key_a), Some("session-a"));
        assert_eq!(cache.get(&key_b), Some("session-b"));
    }

    #[tokio::test(start_paused = true)]
    async fn per_entry_max_age_is_respected() {
        let cache = TtlCache::new();
        cache.set("short", 1u32, Duration::from_secs(5));
        cache.set("long", 2u32, Duration::from_secs(500));

        tokio::time::advance(Duration::from_secs(6)).await;
        assert_eq!(cache.get(&"short"), None);
        assert_eq!(cache.get(&"long"), Some(2));
    }
}
