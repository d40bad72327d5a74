//! Call-rate limiter
//!
//! Enforces a minimum spacing between permitted actions, with an
//! optional sliding-window cap on calls per second. This is a pure
//! delay primitive: it never fails and has no abort path. Retry and
//! backoff on the gated operation belong to the caller.
//!
//! All bookkeeping lives behind a `tokio::sync::Mutex`, so genuinely
//! concurrent callers are serialized and stay correctly throttled.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;

/// Width of the sliding window for the per-second cap
const WINDOW: Duration = Duration::from_millis(1000);

/// Slack added when waiting for the window to open
const WINDOW_SLACK: Duration = Duration::from_millis(10);

/// Rate limiter configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Minimum spacing between calls, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Optional cap on calls within any 1000ms window
    #[serde(default)]
    pub max_requests_per_second: Option<u32>,
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            max_requests_per_second: None,
        }
    }
}

/// Counters reported by [`RateLimiter::stats`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimiterStats {
    pub delay_ms: u64,
    pub total_requests: u64,
    pub max_requests_per_second: Option<u32>,
}

#[derive(Debug)]
struct LimiterState {
    delay: Duration,
    last_request: Option<Instant>,
    total_requests: u64,
    window: VecDeque<Instant>,
}

/// Minimum-spacing rate limiter with an optional per-second cap
#[derive(Debug)]
pub struct RateLimiter {
    max_requests_per_second: Option<u32>,
    state: Mutex<LimiterState>,
}

impl RateLimiter {
    /// Limiter with a fixed spacing and no per-second cap
    pub fn new(delay: Duration) -> Self {
        Self::with_config(RateLimiterConfig {
            delay_ms: delay.as_millis() as u64,
            max_requests_per_second: None,
        })
    }

    pub fn with_config(config: RateLimiterConfig) -> Self {
        Self {
            max_requests_per_second: config.max_requests_per_second,
            state: Mutex::new(LimiterState {
                delay: Duration::from_millis(config.delay_ms),
                last_request: None,
                total_requests: 0,
                window: VecDeque::new(),
            }),
        }
    }

    /// Suspend until the next call is permitted
    ///
    /// Sleeps out the remainder of the configured spacing, then, when a
    /// per-second cap is set, waits for the sliding window to open.
    /// Always eventually resolves.
    pub async fn wait_if_needed(&self) {
        let mut state = self.state.lock().await;

        if let Some(last) = state.last_request {
            let elapsed = last.elapsed();
            if elapsed < state.delay {
                let wait = state.delay - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "Pacing next request");
                sleep(wait).await;
            }
        }

        if let Some(cap) = self.max_requests_per_second {
            loop {
                let now = Instant::now();
                while let Some(front) = state.window.front() {
                    if now.duration_since(*front) > WINDOW {
                        state.window.pop_front();
                    } else {
                        break;
                    }
                }

                if (state.window.len() as u32) < cap.max(1) {
                    break;
                }

                // Window is full; wait for the oldest timestamp to age out
                let oldest = state.window[0];
                let wait = WINDOW.saturating_sub(now.duration_since(oldest)) + WINDOW_SLACK;
                debug!(
                    wait_ms = wait.as_millis() as u64,
                    in_window = state.window.len(),
                    "Per-second window full"
                );
                sleep(wait).await;
            }
        }

        let now = Instant::now();
        state.last_request = Some(now);
        state.total_requests += 1;
        if self.max_requests_per_second.is_some() {
            state.window.push_back(now);
        }
    }

    /// Change the spacing for subsequent calls
    ///
    /// Callers already suspended keep their original wait.
    pub async fn set_delay(&self, delay: Duration) {
        self.state.lock().await.delay = delay;
    }

    pub async fn stats(&self) -> RateLimiterStats {
        let state = self.state.lock().await;
        RateLimiterStats {
            delay_ms: state.delay.as_millis() as u64,
            total_requests: state.total_requests,
            max_requests_per_second: self.max_requests_per_second,
        }
    }

    /// Clear counters and the window without touching the configured delay
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.last_request = None;
        state.total_requests = 0;
        state.window.clear();
    }
}
