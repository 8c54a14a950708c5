//! Earnings ticker configuration

use std::time::Duration;

/// Settings for the "breathing" bump the figure does while running
pub struct PulseSettings {
    /// Time between two bumps
    pub period: Duration,
    /// How long the figure stays enlarged after a bump
    pub hold: Duration,
    /// Scale applied while enlarged (1.0 = no change)
    pub scale: f32,
}

/// The Master Ticker Configuration
pub struct TickerConfig {
    // Starting values when nothing is given on the command line
    pub default_amount: f64,
    pub default_currency: &'static str,

    // Fractional digits shown for the earned amount
    pub amount_fraction_digits: usize,
    // Fractional digits shown for the month progress percentage
    pub percent_fraction_digits: usize,
    // Thousands separator and decimal point used by the formatter
    pub group_separator: char,
    pub decimal_separator: char,

    // Ratio used when the month has no length at all
    pub zero_span_ratio: f64,

    pub pulse: PulseSettings,
}

pub const TICKER: TickerConfig = TickerConfig {
    default_amount: 10_000.0,
    default_currency: "¥",
    amount_fraction_digits: 6,
    percent_fraction_digits: 7,
    group_separator: ',',
    decimal_separator: '.',
    zero_span_ratio: 1.0,
    pulse: PulseSettings {
        period: Duration::from_secs(2),
        hold: Duration::from_millis(100),
        scale: 1.02,
    },
};
