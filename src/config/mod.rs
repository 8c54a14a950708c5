//! Configuration module for the salary ticker.

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod particles;
pub mod ticker;

// Re-export commonly used items
pub use particles::{PARTICLES, ParticleConfig};
pub use ticker::{PulseSettings, TICKER, TickerConfig};
