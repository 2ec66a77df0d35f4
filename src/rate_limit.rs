use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;

// Counter for a single client key
struct CounterEntry {
    count: u32,
    window_start: Instant,
}

// Bounded request counter. Tracks at most `capacity` client keys; each
// key counts requests since its window opened and is treated as absent
// once the window is older than `ttl`. When the cache is full the least
// recently used key is dropped, which hands that client a fresh window
// early - an accepted approximation of a sliding-window counter.
pub struct RateLimiter {
    entries: Mutex<LruCache<String, CounterEntry>>,
    max_requests: u32,
    ttl: Duration,
}

impl RateLimiter {
    pub fn new(capacity: usize, max_requests: u32, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            max_requests,
            ttl,
        }
    }

    // Count one request for `key` and return the new total within the
    // current window.
    pub fn hit(&self, key: &str) -> u32 {
        let now = Instant::now();
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(entry) = entries.get_mut(key) {
            // window expired..? reset it
            if entry.window_start.elapsed() > self.ttl {
                entry.count = 1;
                entry.window_start = now;
                return 1;
            }
            entry.count = entry.count.saturating_add(1);
            return entry.count;
        }

        entries.put(
            key.to_string(),
            CounterEntry {
                count: 1,
                window_start: now,
            },
        );
        1
    }

    pub fn allows(&self, count: u32) -> bool {
        count <= self.max_requests
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn sixth_request_is_rejected() {
        let limiter = RateLimiter::new(500, 5, Duration::from_secs(3600));
        for _ in 0..5 {
            let count = limiter.hit("203.0.113.7");
            assert!(limiter.allows(count));
        }
        assert!(!limiter.allows(limiter.hit("203.0.113.7")));
    }

    #[test]
    fn counter_resets_after_ttl() {
        let limiter = RateLimiter::new(500, 1, Duration::from_millis(20));
        assert!(limiter.allows(limiter.hit("203.0.113.7")));
        assert!(!limiter.allows(limiter.hit("203.0.113.7")));

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(limiter.hit("203.0.113.7"), 1);
    }

    #[test]
    fn keys_count_independently() {
        let limiter = RateLimiter::new(500, 2, Duration::from_secs(3600));
        limiter.hit("a");
        limiter.hit("a");
        assert_eq!(limiter.hit("b"), 1);

        assert!(!limiter.allows(limiter.hit("a")));
        assert!(limiter.allows(limiter.hit("b")));
    }

    #[test]
    fn eviction_hands_out_a_fresh_window() {
        let limiter = RateLimiter::new(2, 5, Duration::from_secs(3600));
        limiter.hit("a");
        limiter.hit("a");
        limiter.hit("b");
        // third key evicts "a", so its count starts over
        limiter.hit("c");
        assert_eq!(limiter.hit("a"), 1);
    }

    #[test]
    fn concurrent_hits_do_not_interfere() {
        let limiter = Arc::new(RateLimiter::new(500, 1000, Duration::from_secs(3600)));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || {
                    let key = format!("client-{}", i % 2);
                    for _ in 0..50 {
                        limiter.hit(&key);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // two threads per key, 50 hits each, plus the final probe
        assert_eq!(limiter.hit("client-0"), 101);
        assert_eq!(limiter.hit("client-1"), 101);
    }
}
