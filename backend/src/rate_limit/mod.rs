//! Per-address submission quota.
//!
//! - `SubmissionLimiter`: fixed-window counters keyed by client address, shared
//!   across actix workers through `web::Data`. Every access goes through one
//!   async mutex, so concurrent requests from the same address never lose an
//!   increment.
//! - `start_sweeper`: a long-running task, spawned in `main.rs`, that drops
//!   counters whose window has elapsed so the map does not grow without bound.
//!
//! Counters live in memory only and reset when the process restarts.

mod clock;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::ManualClock;

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Length of a counting window.
    pub window: Duration,
    /// Submissions allowed per address per window.
    pub max_submissions: u32,
    /// How often `start_sweeper` removes stale counters.
    pub sweep_interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(15 * 60),
            max_submissions: 10,
            sweep_interval: Duration::from_secs(30 * 60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed { count: u32 },
    Limited { count: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Counter {
    window_start: Instant,
    count: u32,
}

pub struct SubmissionLimiter {
    counters: Mutex<HashMap<String, Counter>>,
    clock: Arc<dyn Clock>,
    config: RateLimitConfig,
}

impl SubmissionLimiter {
    pub fn new(config: RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Counts one submission from `address` and decides whether it may proceed.
    ///
    /// Rejected submissions are counted too.
    pub async fn check(&self, address: &str) -> Verdict {
        let now = self.clock.now();
        let mut counters = self.counters.lock().await;

        let counter = counters.entry(address.to_string()).or_insert(Counter {
            window_start: now,
            count: 0,
        });
        if self.expired(counter, now) {
            *counter = Counter {
                window_start: now,
                count: 0,
            };
        }

        counter.count = counter.count.saturating_add(1);
        if counter.count > self.config.max_submissions {
            Verdict::Limited {
                count: counter.count,
            }
        } else {
            Verdict::Allowed {
                count: counter.count,
            }
        }
    }

    /// Removes every counter whose window has elapsed. Returns how many went.
    pub async fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut counters = self.counters.lock().await;
        let before = counters.len();
        counters.retain(|_, counter| !self.expired(counter, now));
        before - counters.len()
    }

    #[cfg(test)]
    pub async fn tracked(&self) -> usize {
        self.counters.lock().await.len()
    }

    fn expired(&self, counter: &Counter, now: Instant) -> bool {
        now.saturating_duration_since(counter.window_start) > self.config.window
    }
}

/// Sweeps `limiter` every `sweep_interval`, forever.
///
/// The first sweep happens one full interval after the task starts.
pub async fn start_sweeper(limiter: Arc<SubmissionLimiter>) {
    let period = limiter.config().sweep_interval;
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    loop {
        ticker.tick().await;
        let removed = limiter.sweep().await;
        debug!("Rate limit sweep removed {} stale counters", removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(15 * 60);

    fn limiter() -> (SubmissionLimiter, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let limiter = SubmissionLimiter::new(RateLimitConfig::default(), clock.clone());
        (limiter, clock)
    }

    #[actix_web::test]
    async fn tenth_submission_passes_and_eleventh_is_limited() {
        let (limiter, _clock) = limiter();
        for expected in 1..=10 {
            assert_eq!(
                limiter.check("10.0.0.1").await,
                Verdict::Allowed { count: expected }
            );
        }
        assert_eq!(
            limiter.check("10.0.0.1").await,
            Verdict::Limited { count: 11 }
        );
        assert_eq!(
            limiter.check("10.0.0.1").await,
            Verdict::Limited { count: 12 }
        );
    }

    #[actix_web::test]
    async fn addresses_are_counted_separately() {
        let (limiter, _clock) = limiter();
        for _ in 0..11 {
            limiter.check("10.0.0.1").await;
        }
        assert_eq!(
            limiter.check("10.0.0.2").await,
            Verdict::Allowed { count: 1 }
        );
    }

    #[actix_web::test]
    async fn window_resets_once_elapsed() {
        let (limiter, clock) = limiter();
        for _ in 0..11 {
            limiter.check("10.0.0.1").await;
        }

        // Still inside the window at exactly its length.
        clock.advance(WINDOW);
        assert!(matches!(
            limiter.check("10.0.0.1").await,
            Verdict::Limited { .. }
        ));

        clock.advance(Duration::from_secs(1));
        assert_eq!(
            limiter.check("10.0.0.1").await,
            Verdict::Allowed { count: 1 }
        );
    }

    #[actix_web::test]
    async fn sweep_removes_only_stale_counters() {
        let (limiter, clock) = limiter();
        limiter.check("10.0.0.1").await;
        clock.advance(Duration::from_secs(10 * 60));
        limiter.check("10.0.0.2").await;
        clock.advance(Duration::from_secs(6 * 60));

        assert_eq!(limiter.sweep().await, 1);
        assert_eq!(limiter.tracked().await, 1);
        assert_eq!(
            limiter.check("10.0.0.2").await,
            Verdict::Allowed { count: 2 }
        );
    }

    #[actix_web::test]
    async fn sweeper_task_runs_periodically() {
        let clock = Arc::new(ManualClock::new());
        let limiter = Arc::new(SubmissionLimiter::new(
            RateLimitConfig {
                sweep_interval: Duration::from_millis(10),
                ..RateLimitConfig::default()
            },
            clock.clone(),
        ));
        limiter.check("10.0.0.1").await;
        clock.advance(WINDOW + Duration::from_secs(1));

        let sweeper = tokio::spawn(start_sweeper(limiter.clone()));
        tokio::time::sleep(Duration::from_millis(100)).await;
        sweeper.abort();

        assert_eq!(limiter.tracked().await, 0);
    }
}
