//! Cache-busting query values for the processed result assets.
//!
//! The server always writes its output to the same static path, so every
//! render appends a fresh stamp to defeat the browser cache.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

type Clock = Arc<dyn Fn() -> u64 + Send + Sync>;

/// Issues strictly increasing millisecond stamps.
pub struct CacheBuster {
    clock: Clock,
    last: AtomicU64,
}

impl CacheBuster {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(|| Utc::now().timestamp_millis().max(0) as u64))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
        }
    }

    /// Next stamp: the current time in milliseconds, bumped past the previous
    /// stamp when the clock has not advanced.
    pub fn stamp(&self) -> u64 {
        let now = (self.clock)();
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }

    /// `path` with a fresh stamp as its query string.
    pub fn bust(&self, path: &str) -> String {
        format!("{}?{}", path, self.stamp())
    }
}

impl Default for CacheBuster {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CacheBuster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheBuster")
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamps_differ_within_same_millisecond() {
        let buster = CacheBuster::with_clock(Arc::new(|| 1_700_000_000_000));
        let first = buster.bust("/static/result.jpg");
        let second = buster.bust("/static/result.jpg");
        assert_eq!(first, "/static/result.jpg?1700000000000");
        assert_eq!(second, "/static/result.jpg?1700000000001");
    }

    #[test]
    fn test_stamp_follows_clock_when_it_advances() {
        let ticks = Arc::new(AtomicU64::new(100));
        let clock_ticks = ticks.clone();
        let buster =
            CacheBuster::with_clock(Arc::new(move || clock_ticks.load(Ordering::SeqCst)));
        assert_eq!(buster.stamp(), 100);
        ticks.store(500, Ordering::SeqCst);
        assert_eq!(buster.stamp(), 500);
    }

    #[test]
    fn test_stamp_never_goes_backwards() {
        let ticks = Arc::new(AtomicU64::new(900));
        let clock_ticks = ticks.clone();
        let buster =
            CacheBuster::with_clock(Arc::new(move || clock_ticks.load(Ordering::SeqCst)));
        assert_eq!(buster.stamp(), 900);
        ticks.store(10, Ordering::SeqCst);
        assert_eq!(buster.stamp(), 901);
    }

    #[test]
    fn test_real_clock_stamps_are_unique() {
        let buster = CacheBuster::new();
        let stamps: Vec<u64> = (0..50).map(|_| buster.stamp()).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }
}
