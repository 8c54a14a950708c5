// User interface components
pub mod app;
pub mod config;
pub mod particle_layer;
pub mod styles;
pub mod ticker_view;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::SalaryFlowApp;
pub use config::UI_CONFIG;
