use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    // Three stops of the vertical background gradient
    pub background_top: Color32,
    pub background_middle: Color32,
    pub background_bottom: Color32,
    pub controls_panel: Color32,
    pub figure: Color32,
    pub currency: Color32,
    pub decimals: Color32,
    pub progress: Color32,
    pub glow: Color32,
    pub resume_button: Color32,
    pub pause_button: Color32,
    pub version_tag: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Size of the integer part relative to the panel width
    pub figure_width_fraction: f32,
    pub figure_min_size: f32,
    pub figure_max_size: f32,
    /// Currency symbol and decimals relative to the integer part
    pub currency_size_ratio: f32,
    pub decimals_size_ratio: f32,
    pub progress_font_size: f32,
    pub heading_font_size: f32,
    /// Offsets (px) of the glow copies painted under the figure
    pub glow_radius: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(148, 163, 184),        // slate-400
        heading: Color32::from_rgb(216, 180, 254),      // purple-300
        subsection_heading: Color32::from_rgb(192, 132, 252),
        background_top: Color32::from_rgb(2, 6, 23),    // slate-950
        background_middle: Color32::from_rgb(59, 7, 100), // purple-950
        background_bottom: Color32::from_rgb(15, 23, 42), // slate-900
        controls_panel: Color32::from_rgb(30, 41, 59),  // slate-800
        figure: Color32::from_rgb(243, 232, 255),
        currency: Color32::from_rgb(192, 132, 252),
        decimals: Color32::from_rgba_premultiplied(173, 144, 203, 204),
        progress: Color32::from_rgba_premultiplied(117, 100, 127, 128),
        glow: Color32::from_rgba_premultiplied(34, 17, 49, 50),
        resume_button: Color32::from_rgb(22, 163, 74),  // green-600
        pause_button: Color32::from_rgb(51, 65, 85),    // slate-700
        version_tag: Color32::from_rgba_premultiplied(64, 64, 64, 64),
    },
    figure_width_fraction: 0.11,
    figure_min_size: 40.0,
    figure_max_size: 150.0,
    currency_size_ratio: 0.55,
    decimals_size_ratio: 0.45,
    progress_font_size: 15.0,
    heading_font_size: 16.0,
    glow_radius: 3.0,
};
