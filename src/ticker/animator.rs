use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;

use super::format::{format_grouped, format_percent, progress_line, split_amount};
use crate::config::TICKER;
use crate::domain::{RunState, SalaryConfig, TargetMonth};
use crate::utils::TimeUtils;
use crate::utils::time_utils::{local_midnight, nanos_between};

/// First instant of a month and first instant of the month after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl MonthBounds {
    pub fn total_span_ns(&self) -> i64 {
        nanos_between(self.start, self.end)
    }

    pub fn midpoint(&self) -> DateTime<Local> {
        self.start + TimeDelta::nanoseconds(self.total_span_ns() / 2)
    }
}

pub fn compute_month_bounds(target: TargetMonth) -> MonthBounds {
    MonthBounds {
        start: local_midnight(target.first_day()),
        end: local_midnight(target.next().first_day()),
    }
}

/// One evaluation of the ticker at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickReading {
    pub elapsed_ms: f64,
    pub total_ms: f64,
    /// Elapsed fraction of the month, always within [0, 1]
    pub ratio: f64,
    pub earned: f64,
}

/// Linear interpolation of `amount` over the month.
///
/// `now` outside the month is clamped to its edges. A month without length
/// uses `TICKER.zero_span_ratio`.
pub fn compute_reading(now: DateTime<Local>, bounds: &MonthBounds, amount: f64) -> TickReading {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let total_ns = bounds.total_span_ns();

    let (elapsed_ns, ratio) = if total_ns <= 0 {
        (0, TICKER.zero_span_ratio)
    } else {
        let elapsed_ns = nanos_between(bounds.start, now).clamp(0, total_ns);
        (elapsed_ns, elapsed_ns as f64 / total_ns as f64)
    };

    let ns_in_ms = TimeUtils::NS_IN_MS as f64;
    TickReading {
        elapsed_ms: elapsed_ns as f64 / ns_in_ms,
        total_ms: total_ns.max(0) as f64 / ns_in_ms,
        ratio,
        earned: amount * ratio,
    }
}

/// The three text regions the animator writes to every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerDisplay {
    pub integer: String,
    pub decimal: String,
    pub progress: String,
}

impl Default for TickerDisplay {
    fn default() -> Self {
        Self {
            integer: "0".to_string(),
            decimal: format!(
                "{}{}",
                TICKER.decimal_separator,
                "0".repeat(TICKER.amount_fraction_digits)
            ),
            progress: "Calculating...".to_string(),
        }
    }
}

impl TickerDisplay {
    fn publish(&mut self, reading: &TickReading, month_label: &str) {
        let formatted = format_grouped(reading.earned, TICKER.amount_fraction_digits);
        let (integer, decimal) = split_amount(&formatted);
        self.integer = integer;
        self.decimal = decimal;
        self.progress = progress_line(month_label, reading.ratio);
    }
}

/// Turns "now" plus the configuration into display text, once per frame.
///
/// Owns its output buffers and overwrites them in place; the UI only reads
/// the final text.
#[derive(Debug, Default)]
pub struct EarningsAnimator {
    display: TickerDisplay,
    bounds_cache: Option<(TargetMonth, MonthBounds, String)>,
    last_reading: Option<TickReading>,
    frames_published: u64,
}

impl EarningsAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes and publishes a new reading. Paused: returns `None` and
    /// leaves the display exactly as it was.
    pub fn tick(
        &mut self,
        now: DateTime<Local>,
        config: &SalaryConfig,
        run_state: RunState,
    ) -> Option<TickReading> {
        if !run_state.is_running() {
            return None;
        }

        let (bounds, label) = self.bounds_for(config.target_month);
        let reading = compute_reading(now, &bounds, config.amount);
        self.display.publish(&reading, &label);
        self.last_reading = Some(reading);
        self.frames_published += 1;
        Some(reading)
    }

    pub fn display(&self) -> &TickerDisplay {
        &self.display
    }

    pub fn last_reading(&self) -> Option<TickReading> {
        self.last_reading
    }

    pub fn frames_published(&self) -> u64 {
        self.frames_published
    }

    fn bounds_for(&mut self, month: TargetMonth) -> (MonthBounds, String) {
        match &self.bounds_cache {
            Some((cached, bounds, label)) if *cached == month => (*bounds, label.clone()),
            _ => {
                let bounds = compute_month_bounds(month);
                let label = month.label();
                self.bounds_cache = Some((month, bounds, label.clone()));
                (bounds, label)
            }
        }
    }
}

/// Single reading in a form that can be printed as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct TickerSnapshot {
    pub taken_at: String,
    pub month: String,
    pub month_label: String,
    pub currency: String,
    pub amount: f64,
    pub earned: f64,
    pub earned_text: String,
    pub progress_pct: String,
    pub elapsed_days: f64,
    pub days_in_month: i64,
}

/// Evaluates the ticker once regardless of run state.
pub fn snapshot(config: &SalaryConfig, now: DateTime<Local>) -> TickerSnapshot {
    let bounds = compute_month_bounds(config.target_month);
    let reading = compute_reading(now, &bounds, config.amount);
    TickerSnapshot {
        taken_at: now.to_rfc3339(),
        month: config.target_month.to_string(),
        month_label: config.target_month.label(),
        currency: config.currency.clone(),
        amount: config.amount,
        earned: reading.earned,
        earned_text: format_grouped(reading.earned, TICKER.amount_fraction_digits),
        progress_pct: format_percent(reading.ratio),
        elapsed_days: reading.elapsed_ms / TimeUtils::MS_IN_D as f64,
        days_in_month: config.target_month.days_in_month(),
    }
}
