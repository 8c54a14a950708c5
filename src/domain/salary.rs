use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::month::TargetMonth;
use crate::config::TICKER;

/// User-editable ticker settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryConfig {
    /// Monthly amount. Any finite number; zero and negatives render fine.
    pub amount: f64,
    /// Display symbol only, no conversion happens.
    pub currency: String,
    pub target_month: TargetMonth,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            amount: TICKER.default_amount,
            currency: TICKER.default_currency.to_string(),
            target_month: TargetMonth::current(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
pub enum RunState {
    #[default]
    #[strum(to_string = "Running")]
    Running,
    #[strum(to_string = "Paused")]
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// Symbols offered by the currency picker. The config itself stores any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum CurrencySymbol {
    #[strum(to_string = "¥")]
    Yuan,
    #[strum(to_string = "$")]
    Dollar,
    #[strum(to_string = "€")]
    Euro,
    #[strum(to_string = "£")]
    Pound,
    #[strum(to_string = "₹")]
    Rupee,
}

/// Lenient amount parsing: anything unparsable or non-finite becomes 0.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
