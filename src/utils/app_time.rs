// src/utils/app_time.rs
// Monotonic clock used by the frame loops. Wall-clock month maths uses chrono instead.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Time from `earlier` to `later`, zero if the clock appears to run backwards.
pub fn since(earlier: AppInstant, later: AppInstant) -> Duration {
    later.saturating_duration_since(earlier)
}
