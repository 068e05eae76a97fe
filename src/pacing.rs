//! Simulated network latency for connect/join/save actions.
//!
//! DESIGN
//! ======
//! Mock actions complete after a short uniform delay so the UI gets a
//! believable pending state; nothing here affects correctness. The window is
//! tunable through `MURGE_LATENCY_MIN_MS` / `MURGE_LATENCY_MAX_MS`.
//!
//! A deferred action is a plain spawned task. Once scheduled it runs to
//! completion even if the screen that scheduled it is gone; callers that
//! care can hold the handle and abort it.

use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;

const DEFAULT_LATENCY_MIN_MS: u64 = 500;
const DEFAULT_LATENCY_MAX_MS: u64 = 1500;

/// Inclusive sampling window for simulated latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyWindow {
    min_ms: u64,
    max_ms: u64,
}

impl LatencyWindow {
    /// Window with `max` raised to `min` when the pair is inverted.
    #[must_use]
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms: max_ms.max(min_ms) }
    }

    /// Window from the environment, falling back to 500..=1500 ms.
    #[must_use]
    pub fn from_env() -> Self {
        let min_ms = env_parse("MURGE_LATENCY_MIN_MS", DEFAULT_LATENCY_MIN_MS);
        let max_ms = env_parse("MURGE_LATENCY_MAX_MS", DEFAULT_LATENCY_MAX_MS);
        Self::new(min_ms, max_ms)
    }

    #[must_use]
    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    #[must_use]
    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Uniform draw from the window.
    #[must_use]
    pub fn sample(&self) -> Duration {
        Duration::from_millis(rand::rng().random_range(self.min_ms..=self.max_ms))
    }
}

impl Default for LatencyWindow {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY_MIN_MS, DEFAULT_LATENCY_MAX_MS)
    }
}

/// One draw from the env-configured window.
#[must_use]
pub fn latency() -> Duration {
    LatencyWindow::from_env().sample()
}

/// Run `action` after `delay` on the runtime. The handle can be awaited for
/// completion or aborted; dropping it detaches the task.
pub fn defer<F>(delay: Duration, action: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        action();
    })
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "pacing_test.rs"]
mod tests;
