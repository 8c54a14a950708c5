use chrono::Local;
use eframe::egui::{
    Align2, CentralPanel, Context, FontId, Frame, Grid, Key, Margin, RichText, TopBottomPanel, Ui,
    Window, vec2,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ticker_view::TickerView;
use crate::ui::ui_panels::{ControlEvent, ControlsPanel, Panel};
use crate::ui::utils::{paint_vertical_gradient, spaced_separator};
use crate::utils::app_time;

use super::app::SalaryFlowApp;

impl SalaryFlowApp {
    pub(super) fn render_controls_panel(&mut self, ctx: &Context) -> Vec<ControlEvent> {
        let panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.controls_panel)
            .inner_margin(Margin::symmetric(16, 10));

        let mut events = Vec::new();
        TopBottomPanel::bottom("controls_panel")
            .frame(panel_frame)
            .show(ctx, |ui| {
                let state = &self.engine.state;
                let mut panel = ControlsPanel::new(
                    &mut self.inputs,
                    &state.config().currency,
                    state.config().target_month,
                    state.run_state(),
                    state.low_motion(),
                );
                events = panel.render(ui);
            });
        events
    }

    /// Background, particles and the ticker figure. Returns whether any
    /// frame loop wants another frame.
    pub(super) fn render_central_panel(&mut self, ctx: &Context) -> bool {
        let mut wants_frame = false;

        CentralPanel::default().frame(Frame::new()).show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();
            let colors = UI_CONFIG.colors;

            paint_vertical_gradient(
                painter,
                rect,
                colors.background_top,
                colors.background_middle,
                colors.background_bottom,
            );

            wants_frame |= self.particle_frame(rect.size());
            self.particles.paint(painter, rect.min);

            let now = app_time::now();
            wants_frame |= self.engine.update(Local::now(), now);

            let state = &self.engine.state;
            TickerView {
                display: self.engine.display(),
                currency: &state.config().currency,
                scale: self.engine.pulse_scale(now),
                glow: !state.low_motion(),
                paused: !state.run_state().is_running(),
            }
            .paint(painter, rect);

            painter.text(
                rect.right_top() + vec2(-10.0, 8.0),
                Align2::RIGHT_TOP,
                UI_TEXT.version_tag,
                FontId::proportional(11.0),
                colors.version_tag,
            );
        });

        wants_frame
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label_subdued(UI_TEXT.help_intro);
                ui.add_space(5.0);

                // Note: any keys added here have to be hand-inserted in handle_global_shortcuts, too
                let shortcuts = [
                    ("Space", UI_TEXT.help_pause),
                    ("M", UI_TEXT.help_low_motion),
                    ("←", UI_TEXT.help_prev_month),
                    ("→", UI_TEXT.help_next_month),
                    ("H", UI_TEXT.help_toggle),
                ];

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });

                spaced_separator(ui);
                ui.label_subdued(UI_TEXT.version_tag);
            });
    }

    /// Keyboard equivalents of the controls. Ignored while a text field has
    /// focus so typing a salary never pauses the ticker.
    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        if ctx.wants_keyboard_input() {
            return events;
        }

        let month = self.engine.state.config().target_month;
        let low_motion = self.engine.state.low_motion();

        ctx.input(|i| {
            if i.key_pressed(Key::Space) {
                events.push(ControlEvent::ToggleRunState);
            }

            if i.key_pressed(Key::M) {
                events.push(ControlEvent::LowMotion(!low_motion));
            }

            let step = if i.key_pressed(Key::ArrowLeft) {
                Some(month.prev())
            } else if i.key_pressed(Key::ArrowRight) {
                Some(month.next())
            } else {
                None
            };
            if let Some(month) = step {
                self.inputs.show_month(month);
                events.push(ControlEvent::Month(month));
            }

            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }

            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }
        });

        events
    }
}
