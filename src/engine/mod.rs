pub mod core;
pub mod frame_loop;
pub mod pulse;
pub mod state;

// Re-export key components
pub use self::core::TickerEngine;
pub use frame_loop::{FrameLoop, PeriodicTimer};
pub use pulse::PulseEffect;
pub use state::TickerState;
