use chrono::{DateTime, Local};

use super::frame_loop::FrameLoop;
use super::pulse::PulseEffect;
use super::state::TickerState;
use crate::ticker::{EarningsAnimator, TickReading, TickerDisplay};
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Owns the state holder and the earnings side of the animation: the
/// animator, its frame loop and the pulse timer.
pub struct TickerEngine {
    /// The Live Configuration State
    pub state: TickerState,

    animator: EarningsAnimator,
    ticker_loop: FrameLoop,
    pulse: PulseEffect,
}

impl TickerEngine {
    /// Creates the engine with its frame loop armed.
    pub fn new(state: TickerState, now: AppInstant) -> Self {
        let mut ticker_loop = FrameLoop::new("earnings");
        ticker_loop.start();

        let mut engine = Self {
            state,
            animator: EarningsAnimator::new(),
            ticker_loop,
            pulse: PulseEffect::default(),
        };
        engine.sync_pulse(now);
        engine
    }

    /// THE FRAME.
    /// Returns TRUE while the ticker loop wants another frame, which tells the
    /// UI to keep requesting repaints. Paused still returns true; the display
    /// just stays frozen.
    pub fn update(&mut self, wall_now: DateTime<Local>, now: AppInstant) -> bool {
        self.sync_pulse(now);

        let state = &self.state;
        let animator = &mut self.animator;
        let wants_frame = self.ticker_loop.run_frame(|| {
            animator.tick(wall_now, state.config(), state.run_state());
        });

        if wants_frame {
            self.pulse.update(now, self.state.run_state());
        }
        wants_frame
    }

    pub fn display(&self) -> &TickerDisplay {
        self.animator.display()
    }

    pub fn last_reading(&self) -> Option<TickReading> {
        self.animator.last_reading()
    }

    /// Current scale of the figure; 1.0 unless a pulse bump is in progress.
    pub fn pulse_scale(&self, now: AppInstant) -> f32 {
        self.pulse.scale(now)
    }

    pub fn pulse_enabled(&self) -> bool {
        self.pulse.is_enabled()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker_loop.is_armed()
    }

    /// Teardown: no further frames, no further pulses.
    pub fn shutdown(&mut self) {
        self.ticker_loop.cancel();
        self.pulse.disable();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Ticker engine stopped after {} frames",
                self.ticker_loop.frames()
            );
        }
    }

    /// The pulse only runs while motion is allowed and the engine is alive.
    fn sync_pulse(&mut self, now: AppInstant) {
        let wanted = self.ticker_loop.is_armed() && !self.state.low_motion();
        if wanted && !self.pulse.is_enabled() {
            self.pulse.enable(now);
        } else if !wanted && self.pulse.is_enabled() {
            self.pulse.disable();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICKER;
    use crate::domain::{RunState, SalaryConfig, TargetMonth};
    use crate::ticker::compute_month_bounds;
    use crate::utils::app_time::now;
    use chrono::TimeDelta;

    fn engine(low_motion: bool) -> (TickerEngine, AppInstant) {
        let config = SalaryConfig {
            amount: 29_000.0,
            currency: "¥".to_string(),
            target_month: TargetMonth::new(2024, 2).unwrap(),
        };
        let t0 = now();
        let state = TickerState::new(config, RunState::Running, low_motion);
        (TickerEngine::new(state, t0), t0)
    }

    #[test]
    fn update_publishes_and_requests_next_frame() {
        let (mut engine, t0) = engine(false);
        let bounds = compute_month_bounds(engine.state.config().target_month);

        assert!(engine.update(bounds.midpoint(), t0));
        assert_eq!(engine.display().integer, "14,500");
        assert!(engine.last_reading().is_some());
    }

    #[test]
    fn paused_engine_keeps_looping_without_changes() {
        let (mut engine, t0) = engine(false);
        let bounds = compute_month_bounds(engine.state.config().target_month);
        engine.update(bounds.midpoint(), t0);
        let frozen = engine.display().clone();

        engine.state.toggle_run_state();
        let later = bounds.midpoint() + TimeDelta::days(3);
        assert!(engine.update(later, t0), "loop re-arms while paused");
        assert_eq!(engine.display(), &frozen);
    }

    #[test]
    fn shutdown_stops_frames_and_pulse() {
        let (mut engine, t0) = engine(false);
        assert!(engine.pulse_enabled());

        engine.shutdown();
        let bounds = compute_month_bounds(engine.state.config().target_month);
        assert!(!engine.update(bounds.end, t0 + TICKER.pulse.period));
        assert!(!engine.is_ticking());
        assert!(!engine.pulse_enabled());
        assert_eq!(engine.display().integer, "0", "nothing published after teardown");
    }

    #[test]
    fn low_motion_disables_pulse() {
        let (mut engine, t0) = engine(false);
        let bounds = compute_month_bounds(engine.state.config().target_month);
        assert!(engine.pulse_enabled());

        engine.state.set_motion_preference(true);
        let fire_at = t0 + TICKER.pulse.period;
        engine.update(bounds.midpoint(), fire_at);
        assert!(!engine.pulse_enabled());
        assert_eq!(engine.pulse_scale(fire_at), 1.0);

        engine.state.set_motion_preference(false);
        engine.update(bounds.midpoint(), fire_at);
        assert!(engine.pulse_enabled());
    }

    #[test]
    fn pulse_bumps_while_running() {
        let (mut engine, t0) = engine(false);
        let bounds = compute_month_bounds(engine.state.config().target_month);
        let fire_at = t0 + TICKER.pulse.period;
        engine.update(bounds.midpoint(), fire_at);
        assert_eq!(engine.pulse_scale(fire_at), TICKER.pulse.scale);
    }
}
