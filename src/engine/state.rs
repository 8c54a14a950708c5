use crate::domain::{MonthParseError, RunState, SalaryConfig, TargetMonth, parse_amount};

/// Single source of truth for what the ticker shows.
///
/// Pure data holder: every effective mutation bumps `revision`, which is the
/// only change notification the rest of the app needs.
#[derive(Debug, Clone)]
pub struct TickerState {
    config: SalaryConfig,
    run_state: RunState,
    low_motion: bool,
    revision: u64,
}

impl Default for TickerState {
    fn default() -> Self {
        Self::new(SalaryConfig::default(), RunState::Running, false)
    }
}

impl TickerState {
    pub fn new(config: SalaryConfig, run_state: RunState, low_motion: bool) -> Self {
        Self {
            config,
            run_state,
            low_motion,
            revision: 0,
        }
    }

    pub fn config(&self) -> &SalaryConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn low_motion(&self) -> bool {
        self.low_motion
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Parses user text; anything that is not a finite number becomes 0.
    pub fn set_amount(&mut self, text: &str) -> f64 {
        let amount = parse_amount(text);
        self.set_amount_value(amount);
        amount
    }

    pub fn set_amount_value(&mut self, amount: f64) {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        if self.config.amount.to_bits() != amount.to_bits() {
            self.config.amount = amount;
            self.touch();
        }
    }

    pub fn set_month(&mut self, month: TargetMonth) {
        if self.config.target_month != month {
            self.config.target_month = month;
            self.touch();
        }
    }

    /// Invalid text leaves the current month untouched.
    pub fn set_month_str(&mut self, text: &str) -> Result<(), MonthParseError> {
        let month: TargetMonth = text.parse()?;
        self.set_month(month);
        Ok(())
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        let currency = currency.into();
        if self.config.currency != currency {
            self.config.currency = currency;
            self.touch();
        }
    }

    pub fn toggle_run_state(&mut self) -> RunState {
        self.run_state = self.run_state.toggled();
        self.touch();
        self.run_state
    }

    pub fn set_motion_preference(&mut self, low_motion: bool) {
        if self.low_motion != low_motion {
            self.low_motion = low_motion;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TickerState {
        let config = SalaryConfig {
            amount: 10_000.0,
            currency: "¥".to_string(),
            target_month: TargetMonth::new(2024, 2).unwrap(),
        };
        TickerState::new(config, RunState::Running, false)
    }

    #[test]
    fn invalid_amount_coerces_to_zero() {
        let mut state = state();
        assert_eq!(state.set_amount("not a number"), 0.0);
        assert_eq!(state.config().amount, 0.0);
        assert_eq!(state.revision(), 1);

        state.set_amount_value(f64::NAN);
        assert_eq!(state.config().amount, 0.0);
        assert_eq!(state.revision(), 1, "no change, no notification");
    }

    #[test]
    fn bad_month_text_keeps_previous_month() {
        let mut state = state();
        assert!(state.set_month_str("2024-99").is_err());
        assert_eq!(state.config().target_month, TargetMonth::new(2024, 2).unwrap());
        assert_eq!(state.revision(), 0);

        state.set_month_str("2025-01").unwrap();
        assert_eq!(state.config().target_month, TargetMonth::new(2025, 1).unwrap());
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn toggles_and_flags_bump_revision() {
        let mut state = state();
        assert_eq!(state.toggle_run_state(), RunState::Paused);
        state.set_motion_preference(true);
        state.set_motion_preference(true);
        state.set_currency("$");
        state.set_currency("$");
        assert!(state.low_motion());
        assert_eq!(state.config().currency, "$");
        assert_eq!(state.revision(), 3);
    }
}
