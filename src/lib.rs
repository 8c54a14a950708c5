#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod particles;
pub mod ticker;
pub mod ui;
pub mod utils;

// The engine: state holder, frame loops and pulse
pub mod engine;

// Re-export commonly used types
pub use domain::{CurrencySymbol, RunState, SalaryConfig, TargetMonth};
pub use engine::{TickerEngine, TickerState};
pub use ticker::{TickerSnapshot, snapshot};
pub use ui::SalaryFlowApp;
pub use utils::app_time;

use anyhow::Context;
use chrono::Local;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Monthly salary to spread over the month
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// Currency symbol shown in front of the figure
    #[arg(long)]
    pub currency: Option<String>,

    /// Month to track, as YYYY-MM (defaults to the current local month)
    #[arg(long)]
    pub month: Option<TargetMonth>,

    /// Start with the ticker paused
    #[arg(long, default_value_t = false)]
    pub paused: bool,

    /// Start in low motion mode (no particles, glow or pulse)
    #[arg(long, default_value_t = false)]
    pub low_motion: bool,

    /// Print one reading as JSON and exit without opening a window
    #[arg(long, default_value_t = false)]
    pub snapshot: bool,
}

impl Cli {
    pub fn salary_config(&self) -> SalaryConfig {
        let mut config = SalaryConfig::default();
        if let Some(amount) = self.amount {
            config.amount = if amount.is_finite() { amount } else { 0.0 };
        }
        if let Some(currency) = &self.currency {
            config.currency = currency.clone();
        }
        if let Some(month) = self.month {
            config.target_month = month;
        }
        config
    }

    pub fn initial_state(&self) -> TickerState {
        let run_state = if self.paused {
            RunState::Paused
        } else {
            RunState::Running
        };
        TickerState::new(self.salary_config(), run_state, self.low_motion)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, state: TickerState) -> Box<dyn eframe::App> {
    let app = ui::SalaryFlowApp::new(cc, state);
    Box::new(app)
}

/// Headless mode: one reading of the configured month, as pretty JSON.
pub fn snapshot_json(cli: &Cli) -> anyhow::Result<String> {
    let reading = snapshot(&cli.salary_config(), Local::now());
    serde_json::to_string_pretty(&reading).context("Failed to serialize ticker snapshot")
}

pub fn print_snapshot(cli: &Cli) -> anyhow::Result<()> {
    let json = snapshot_json(cli)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "salary-flow",
            "--amount",
            "29000",
            "--currency",
            "$",
            "--month",
            "2024-02",
            "--paused",
            "--low-motion",
        ]);
        let state = cli.initial_state();

        assert_eq!(state.config().amount, 29_000.0);
        assert_eq!(state.config().currency, "$");
        assert_eq!(state.config().target_month, TargetMonth::new(2024, 2).unwrap());
        assert_eq!(state.run_state(), RunState::Paused);
        assert!(state.low_motion());
    }

    #[test]
    fn no_flags_gives_default_config() {
        let cli = Cli::parse_from(["salary-flow"]);
        let state = cli.initial_state();

        assert_eq!(state.config().amount, 10_000.0);
        assert_eq!(state.config().currency, "¥");
        assert_eq!(state.run_state(), RunState::Running);
        assert!(!state.low_motion());
    }

    #[test]
    fn negative_amount_is_accepted() {
        let cli = Cli::parse_from(["salary-flow", "--amount", "-500"]);
        assert_eq!(cli.salary_config().amount, -500.0);
    }

    #[test]
    fn bad_month_flag_is_rejected() {
        assert!(Cli::try_parse_from(["salary-flow", "--month", "2024-13"]).is_err());
        assert!(Cli::try_parse_from(["salary-flow", "--month", "next"]).is_err());
    }

    #[test]
    fn snapshot_of_past_month_is_complete() {
        let cli = Cli::parse_from(["salary-flow", "--amount", "29000", "--month", "2024-02"]);
        let json = snapshot_json(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["month"], "2024-02");
        assert_eq!(value["month_label"], "February 2024");
        assert_eq!(value["earned_text"], "29,000.000000");
        assert_eq!(value["progress_pct"], "100.0000000");
        assert_eq!(value["days_in_month"], 29);
    }
}
