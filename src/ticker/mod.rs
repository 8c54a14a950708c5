// Earnings animator: month bounds, interpolation and display text
pub mod animator;
pub mod format;

pub use animator::{
    EarningsAnimator, MonthBounds, TickReading, TickerDisplay, TickerSnapshot,
    compute_month_bounds, compute_reading, snapshot,
};
