// src/core/rate_limit.rs
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window rate limiter keyed by client identity.
///
/// Each client owns a deque of request timestamps inside the trailing
/// window. The trim-and-append sequence for a key runs under the map lock,
/// so two concurrent requests from the same client can never both slip
/// under the limit.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window_seconds: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_seconds),
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or deny a request from `client_id`.
    ///
    /// Denied requests are not recorded, so hammering a closed window does
    /// not push the window further out.
    pub fn allow(&self, client_id: &str) -> bool {
        self.allow_at(client_id, Instant::now())
    }

    // Clock-explicit variant; `allow` always passes the real now.
    pub(crate) fn allow_at(&self, client_id: &str, now: Instant) -> bool {
        let mut requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
        let times = requests.entry(client_id.to_string()).or_default();

        // Drop timestamps that fell out of the window
        while let Some(&front) = times.front() {
            if now.duration_since(front) > self.window {
                times.pop_front();
            } else {
                break;
            }
        }

        if times.len() >= self.max_requests {
            return false;
        }

        times.push_back(now);
        true
    }

    /// Evict clients whose entire window has expired.
    ///
    /// `allow` already trims per-key, but never removes the key itself;
    /// without this sweep the map grows by one entry per client identity
    /// ever seen.
    pub fn sweep(&self) {
        self.sweep_at(Instant::now())
    }

    pub(crate) fn sweep_at(&self, now: Instant) {
        let mut requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
        let before = requests.len();
        requests.retain(|_, times| {
            times
                .back()
                .is_some_and(|&last| now.duration_since(last) <= self.window)
        });
        let evicted = before - requests.len();
        if evicted > 0 {
            log::debug!("Rate limiter sweep evicted {} idle clients", evicted);
        }
    }

    /// Number of client identities currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    pub fn window_seconds(&self) -> u64 {
        self.window.as_secs()
    }
}
