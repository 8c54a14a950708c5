use super::frame_loop::PeriodicTimer;
use crate::config::TICKER;
use crate::domain::RunState;
use crate::utils::app_time::{AppInstant, since};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Periodic scale bump of the ticker figure.
///
/// Runs on its own timer, independent of the frame loops. Only bumps while
/// the ticker is running.
#[derive(Debug, Clone)]
pub struct PulseEffect {
    timer: PeriodicTimer,
    bumped_at: Option<AppInstant>,
}

impl Default for PulseEffect {
    fn default() -> Self {
        Self {
            timer: PeriodicTimer::new(TICKER.pulse.period),
            bumped_at: None,
        }
    }
}

impl PulseEffect {
    pub fn enable(&mut self, now: AppInstant) {
        if !self.timer.is_active() {
            self.timer.start(now);
        }
    }

    pub fn disable(&mut self) {
        self.timer.cancel();
        self.bumped_at = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.timer.is_active()
    }

    /// Polls the timer. Returns true when a bump started on this call.
    pub fn update(&mut self, now: AppInstant, run_state: RunState) -> bool {
        if !self.timer.poll(now) || !run_state.is_running() {
            return false;
        }
        self.bumped_at = Some(now);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_pulse_events {
            log::info!("Pulse");
        }
        true
    }

    pub fn scale(&self, now: AppInstant) -> f32 {
        match self.bumped_at {
            Some(at) if since(at, now) < TICKER.pulse.hold => TICKER.pulse.scale,
            _ => 1.0,
        }
    }
}
