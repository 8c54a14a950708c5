use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for hints and secondary info).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Small uppercase caption placed above an input field.
    fn label_field(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a warning/info message (Yellow/Gold).
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn label_field(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.label(
            RichText::new(text)
                .small()
                .strong()
                .color(UI_CONFIG.colors.label),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(Color32::from_rgb(255, 100, 100)),
        );
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::from_rgb(255, 215, 0)));
    }
}
