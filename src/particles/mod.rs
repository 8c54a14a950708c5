pub mod field;

pub use field::{Particle, ParticleField, particle_count};
