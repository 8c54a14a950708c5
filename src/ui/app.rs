use eframe::{Frame, egui};

use crate::engine::{TickerEngine, TickerState};
use crate::ui::particle_layer::ParticleLayer;
use crate::ui::ui_panels::{ControlEvent, ControlInputs};
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub struct SalaryFlowApp {
    pub(super) engine: TickerEngine,
    pub(super) particles: ParticleLayer,
    pub(super) inputs: ControlInputs,
    pub(super) show_help: bool,
}

impl SalaryFlowApp {
    pub fn new(cc: &eframe::CreationContext, state: TickerState) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self::with_state(state)
    }

    /// Builds the app without a window; the particle layer mounts on the
    /// first frame once the surface size is known.
    pub fn with_state(state: TickerState) -> Self {
        let inputs = ControlInputs::new(state.config().amount, state.config().target_month);

        #[cfg(debug_assertions)]
        log::info!(
            "Starting ticker: {} {} for {} ({})",
            state.config().currency,
            state.config().amount,
            state.config().target_month,
            state.run_state()
        );

        Self {
            engine: TickerEngine::new(state, now()),
            particles: ParticleLayer::default(),
            inputs,
            show_help: false,
        }
    }

    pub fn state(&self) -> &TickerState {
        &self.engine.state
    }

    /// Routes every control event to its state mutator.
    pub(super) fn apply_control_events(&mut self, events: Vec<ControlEvent>) {
        for event in events {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("UI event: {:?}", event);
            }

            let state = &mut self.engine.state;
            match event {
                ControlEvent::Amount(text) => {
                    state.set_amount(&text);
                }
                ControlEvent::Month(month) => state.set_month(month),
                ControlEvent::Currency(currency) => state.set_currency(currency),
                ControlEvent::ToggleRunState => {
                    state.toggle_run_state();
                }
                ControlEvent::LowMotion(low_motion) => state.set_motion_preference(low_motion),
            }
        }
    }

    /// Runs the particle layer for this frame: mounted while motion is
    /// allowed, torn down otherwise.
    pub(super) fn particle_frame(&mut self, size: egui::Vec2) -> bool {
        if self.engine.state.low_motion() {
            self.particles.unmount();
            return false;
        }
        self.particles.mount(size);
        self.particles.frame(size)
    }
}

impl eframe::App for SalaryFlowApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.engine.shutdown();
        self.particles.unmount();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut events = self.handle_global_shortcuts(ctx);
        events.extend(self.render_controls_panel(ctx));
        self.apply_control_events(events);

        let wants_frame = self.render_central_panel(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }

        // Self-rescheduling loop: as long as a frame loop is armed, ask for the next frame
        if wants_frame {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RunState, SalaryConfig, TargetMonth};
    use eframe::egui::{Event, Key, Modifiers, Pos2, RawInput, Rect, vec2};

    fn app(low_motion: bool) -> SalaryFlowApp {
        let config = SalaryConfig {
            amount: 29_000.0,
            currency: "¥".to_string(),
            target_month: TargetMonth::new(2024, 2).unwrap(),
        };
        SalaryFlowApp::with_state(TickerState::new(config, RunState::Running, low_motion))
    }

    fn screen(width: f32, height: f32) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(width, height))),
            ..Default::default()
        }
    }

    #[test]
    fn control_events_reach_the_state() {
        let mut app = app(false);
        app.apply_control_events(vec![
            ControlEvent::Amount("12000".to_string()),
            ControlEvent::Month(TargetMonth::new(2025, 1).unwrap()),
            ControlEvent::Currency("$".to_string()),
            ControlEvent::ToggleRunState,
            ControlEvent::LowMotion(true),
        ]);

        let state = app.state();
        assert_eq!(state.config().amount, 12_000.0);
        assert_eq!(state.config().target_month, TargetMonth::new(2025, 1).unwrap());
        assert_eq!(state.config().currency, "$");
        assert_eq!(state.run_state(), RunState::Paused);
        assert!(state.low_motion());
    }

    #[test]
    fn garbage_amount_becomes_zero() {
        let mut app = app(false);
        app.apply_control_events(vec![ControlEvent::Amount("abc".to_string())]);
        assert_eq!(app.state().config().amount, 0.0);
    }

    #[test]
    fn low_motion_tears_particles_down() {
        let mut app = app(false);
        assert!(app.particle_frame(vec2(800.0, 600.0)));
        assert_eq!(app.particles.len(), 80);

        app.apply_control_events(vec![ControlEvent::LowMotion(true)]);
        assert!(!app.particle_frame(vec2(800.0, 600.0)));
        assert!(!app.particles.is_mounted());
    }

    #[test]
    fn central_panel_ticks_and_mounts_particles() {
        let mut app = app(false);
        let ctx = egui::Context::default();
        let mut wants_frame = false;
        let _ = ctx.run(screen(800.0, 600.0), |ctx| {
            wants_frame = app.render_central_panel(ctx);
        });

        assert!(wants_frame);
        assert!(app.particles.is_mounted());
        // February 2024 is long over, so the full amount is shown
        assert_eq!(app.engine.display().integer, "29,000");
        assert_eq!(app.engine.display().progress, "February 2024 progress: 100.0000000%");
    }

    #[test]
    fn space_and_arrow_shortcuts() {
        let mut app = app(false);
        let ctx = egui::Context::default();
        let mut input = screen(800.0, 600.0);
        for key in [Key::Space, Key::ArrowRight] {
            input.events.push(Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            });
        }

        let mut events = Vec::new();
        let _ = ctx.run(input, |ctx| {
            events = app.handle_global_shortcuts(ctx);
        });
        assert_eq!(
            events,
            vec![
                ControlEvent::ToggleRunState,
                ControlEvent::Month(TargetMonth::new(2024, 3).unwrap()),
            ]
        );
        assert_eq!(app.inputs.month_text, "2024-03");
    }
}
