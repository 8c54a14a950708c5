//! Particle background configuration

use std::ops::Range;

pub struct ParticleConfig {
    /// One particle per this many pixels of viewport width
    pub width_per_particle: f32,
    /// Upper bound on the batch size
    pub max_particles: usize,
    pub radius_range: Range<f32>,
    /// Pixels per frame
    pub speed_range: Range<f32>,
    pub opacity_range: Range<f32>,
    /// How far past the top edge a particle may drift before it is recycled,
    /// and how far below the bottom edge it re-enters
    pub recycle_margin: f32,
    /// Particle tint (rgb); alpha comes from the particle's opacity
    pub tint: [u8; 3],
    /// Opacity of the whole particle layer
    pub layer_opacity: f32,
}

pub const PARTICLES: ParticleConfig = ParticleConfig {
    width_per_particle: 10.0,
    max_particles: 100,
    radius_range: 0.5..2.5,
    speed_range: 0.1..0.6,
    opacity_range: 0.1..0.6,
    recycle_margin: 10.0,
    tint: [255, 200, 255], // Purple/pink
    layer_opacity: 0.4,
};
