use std::time::Duration;

use crate::utils::app_time::{AppInstant, since};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// A self-rescheduling per-frame callback.
///
/// While armed, every `run_frame` runs the body and asks for another frame.
/// `cancel` is final until `start` is called again: no frame is requested
/// after it.
#[derive(Debug)]
pub struct FrameLoop {
    name: &'static str,
    armed: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            armed: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.armed {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_frame_loops {
                log::info!("Frame loop '{}' armed", self.name);
            }
        }
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        if self.armed {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_frame_loops {
                log::info!(
                    "Frame loop '{}' cancelled after {} frames",
                    self.name,
                    self.frames
                );
            }
        }
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs `body` if armed. Returns whether the next frame should be requested.
    pub fn run_frame(&mut self, body: impl FnOnce()) -> bool {
        if !self.armed {
            return false;
        }
        body();
        self.frames += 1;
        self.armed
    }
}

/// Interval timer polled from the frame loop, in the manner of `setInterval`.
///
/// Missed periods collapse into a single fire.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period: Duration,
    next_due: Option<AppInstant>,
}

impl PeriodicTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn start(&mut self, now: AppInstant) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// True once per elapsed period. Never true after `cancel`.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.period;
        if next <= now && !self.period.is_zero() {
            // Skip every period we slept through
            let behind = since(due, now).as_nanos() / self.period.as_nanos();
            let skip = u32::try_from(behind).unwrap_or(u32::MAX);
            next = due + self.period.saturating_mul(skip.saturating_add(1));
        } else if self.period.is_zero() {
            next = now;
        }
        self.next_due = Some(next);
        true
    }

    pub fn time_until_next(&self, now: AppInstant) -> Option<Duration> {
        self.next_due.map(|due| since(now, due))
    }
}
