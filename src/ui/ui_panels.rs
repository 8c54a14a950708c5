use eframe::egui::{Button, ComboBox, RichText, TextEdit, Ui, vec2};
use strum::IntoEnumIterator;

use crate::domain::{CurrencySymbol, RunState, TargetMonth};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// One user action on the controls; each maps onto exactly one state mutator.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Raw amount text, parsed by the state holder
    Amount(String),
    Month(TargetMonth),
    Currency(String),
    ToggleRunState,
    LowMotion(bool),
}

/// Text buffers behind the input fields. They outlive a single frame so the
/// user can type half-finished values.
#[derive(Debug, Clone, Default)]
pub struct ControlInputs {
    pub amount_text: String,
    pub month_text: String,
    pub month_error: Option<String>,
}

impl ControlInputs {
    pub fn new(amount: f64, month: TargetMonth) -> Self {
        Self {
            amount_text: amount.to_string(),
            month_text: month.to_string(),
            month_error: None,
        }
    }

    /// Re-syncs the month field after a change made elsewhere (buttons, keys).
    pub fn show_month(&mut self, month: TargetMonth) {
        self.month_text = month.to_string();
        self.month_error = None;
    }

    /// Non-empty text that does not read as a finite number (counted as 0).
    pub fn amount_is_invalid(&self) -> bool {
        let text = self.amount_text.trim();
        !text.is_empty() && !text.parse::<f64>().is_ok_and(f64::is_finite)
    }

    /// Validates the month field; keeps the error text for display.
    fn parse_month_text(&mut self) -> Option<TargetMonth> {
        match self.month_text.parse::<TargetMonth>() {
            Ok(month) => {
                self.month_error = None;
                Some(month)
            }
            Err(e) => {
                self.month_error = Some(e.to_string());
                None
            }
        }
    }
}

/// Bottom panel with the amount, month, currency, pause and motion controls
pub struct ControlsPanel<'a> {
    inputs: &'a mut ControlInputs,
    currency: &'a str,
    month: TargetMonth,
    run_state: RunState,
    low_motion: bool,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(
        inputs: &'a mut ControlInputs,
        currency: &'a str,
        month: TargetMonth,
        run_state: RunState,
        low_motion: bool,
    ) -> Self {
        Self {
            inputs,
            currency,
            month,
            run_state,
            low_motion,
        }
    }

    fn render_amount_input(&mut self, ui: &mut Ui) -> Option<ControlEvent> {
        let mut changed = None;
        ui.vertical(|ui| {
            ui.label_field(UI_TEXT.label_amount);
            let response = ui.add(
                TextEdit::singleline(&mut self.inputs.amount_text)
                    .desired_width(120.0)
                    .font(eframe::egui::TextStyle::Monospace),
            );
            if response.changed() {
                changed = Some(ControlEvent::Amount(self.inputs.amount_text.clone()));
            }
            if self.inputs.amount_is_invalid() {
                ui.label_warning(UI_TEXT.warning_amount_invalid);
            }
        });
        changed
    }

    fn render_month_input(&mut self, ui: &mut Ui) -> Option<ControlEvent> {
        let mut changed = None;
        ui.vertical(|ui| {
            ui.label_field(UI_TEXT.label_month);
            ui.horizontal(|ui| {
                if ui
                    .small_button(UI_TEXT.button_prev_month)
                    .on_hover_text(UI_TEXT.tooltip_prev_month)
                    .clicked()
                {
                    let month = self.month.prev();
                    self.inputs.show_month(month);
                    changed = Some(ControlEvent::Month(month));
                }

                let response = ui.add(
                    TextEdit::singleline(&mut self.inputs.month_text)
                        .desired_width(70.0)
                        .hint_text("YYYY-MM")
                        .font(eframe::egui::TextStyle::Monospace),
                );
                if response.changed() {
                    if let Some(month) = self.inputs.parse_month_text() {
                        changed = Some(ControlEvent::Month(month));
                    }
                }
                if response.lost_focus() && self.inputs.month_error.is_some() {
                    // Give up on the bad text, show what is actually in use
                    self.inputs.show_month(self.month);
                }

                if ui
                    .small_button(UI_TEXT.button_next_month)
                    .on_hover_text(UI_TEXT.tooltip_next_month)
                    .clicked()
                {
                    let month = self.month.next();
                    self.inputs.show_month(month);
                    changed = Some(ControlEvent::Month(month));
                }
            });
            if let Some(error) = &self.inputs.month_error {
                ui.label_error(error.clone());
            }
        });
        changed
    }

    fn render_currency_selector(&mut self, ui: &mut Ui) -> Option<ControlEvent> {
        let mut selected = self.currency.to_string();
        ui.vertical(|ui| {
            ui.label_field(UI_TEXT.label_currency);
            ComboBox::from_id_salt("currency_selector")
                .selected_text(RichText::new(self.currency).monospace())
                .width(60.0)
                .show_ui(ui, |ui| {
                    for symbol in CurrencySymbol::iter() {
                        let text = symbol.to_string();
                        ui.selectable_value(&mut selected, text.clone(), text);
                    }
                });
        });
        (selected != self.currency).then_some(ControlEvent::Currency(selected))
    }

    fn render_run_state_button(&mut self, ui: &mut Ui) -> Option<ControlEvent> {
        let (text, fill) = match self.run_state {
            RunState::Running => (UI_TEXT.button_pause, UI_CONFIG.colors.pause_button),
            RunState::Paused => (UI_TEXT.button_resume, UI_CONFIG.colors.resume_button),
        };
        let button = Button::new(RichText::new(text).strong())
            .fill(fill)
            .min_size(vec2(110.0, 28.0));
        ui.add(button)
            .clicked()
            .then_some(ControlEvent::ToggleRunState)
    }

    fn render_motion_toggle(&mut self, ui: &mut Ui) -> Option<ControlEvent> {
        let mut low_motion = self.low_motion;
        ui.toggle_value(&mut low_motion, UI_TEXT.label_low_motion)
            .on_hover_text(UI_TEXT.tooltip_low_motion);
        (low_motion != self.low_motion).then_some(ControlEvent::LowMotion(low_motion))
    }
}

impl<'a> Panel for ControlsPanel<'a> {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;

            events.extend(self.render_amount_input(ui));
            events.extend(self.render_month_input(ui));
            events.extend(self.render_currency_selector(ui));

            ui.separator();

            ui.vertical(|ui| {
                ui.add_space(14.0);
                ui.horizontal(|ui| {
                    events.extend(self.render_run_state_button(ui));
                    events.extend(self.render_motion_toggle(ui));
                });
            });
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_start_from_config_values() {
        let inputs = ControlInputs::new(29_000.0, TargetMonth::new(2024, 2).unwrap());
        assert_eq!(inputs.amount_text, "29000");
        assert_eq!(inputs.month_text, "2024-02");
        assert!(inputs.month_error.is_none());
    }

    #[test]
    fn flags_unreadable_amounts() {
        let mut inputs = ControlInputs::new(1.0, TargetMonth::new(2024, 2).unwrap());
        assert!(!inputs.amount_is_invalid());
        inputs.amount_text = "12abc".to_string();
        assert!(inputs.amount_is_invalid());
        inputs.amount_text = "inf".to_string();
        assert!(inputs.amount_is_invalid());
        inputs.amount_text = "  ".to_string();
        assert!(!inputs.amount_is_invalid());
    }

    #[test]
    fn bad_month_text_records_error() {
        let mut inputs = ControlInputs::new(1.0, TargetMonth::new(2024, 2).unwrap());
        inputs.month_text = "2024-1x".to_string();
        assert!(inputs.parse_month_text().is_none());
        assert!(inputs.month_error.is_some());

        inputs.show_month(TargetMonth::new(2024, 3).unwrap());
        assert_eq!(inputs.month_text, "2024-03");
        assert!(inputs.month_error.is_none());
    }
}
