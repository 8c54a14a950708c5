use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

use crate::config::PARTICLES;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Pixels moved upwards per step
    pub speed_y: f32,
    pub opacity: f32,
}

/// Batch size for a viewport `width` pixels wide.
///
/// A fractional count rounds up, so 305 px yields 31 particles.
pub fn particle_count(width: f32) -> usize {
    if width.is_nan() || width <= 0.0 {
        return 0;
    }
    let count = (width / PARTICLES.width_per_particle).min(PARTICLES.max_particles as f32);
    count.ceil() as usize
}

/// Upward-drifting dots, recycled at the bottom once they leave the top.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, StdRng::from_rng(&mut rand::rng()))
    }

    /// Reproducible field for tests and demos.
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
        };
        field.initialize(width, height);
        field
    }

    /// Throws away every particle and generates a fresh batch for the given size.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let count = particle_count(self.width);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle {
                x: self.rng.random::<f32>() * self.width,
                y: self.rng.random::<f32>() * self.height,
                radius: sample(&mut self.rng, &PARTICLES.radius_range),
                speed_y: sample(&mut self.rng, &PARTICLES.speed_range),
                opacity: sample(&mut self.rng, &PARTICLES.opacity_range),
            };
            self.particles.push(particle);
        }
    }

    /// Regenerates from scratch; existing particles are not carried over.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.initialize(width, height);
    }

    /// Returns true when the size differed and the field was regenerated.
    pub fn resize_if_changed(&mut self, width: f32, height: f32) -> bool {
        if self.width == width.max(0.0) && self.height == height.max(0.0) {
            return false;
        }
        self.resize(width, height);
        true
    }

    /// Moves every particle up by its speed. Particles that drift past the top
    /// margin re-enter just below the bottom edge at a new horizontal position.
    pub fn step(&mut self) {
        let margin = PARTICLES.recycle_margin;
        for particle in &mut self.particles {
            particle.y -= particle.speed_y;
            if particle.y < -margin {
                particle.y = self.height + margin;
                particle.x = self.rng.random::<f32>() * self.width;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Uniform sample in `[start, end)`; an empty range yields `start`.
fn sample(rng: &mut StdRng, range: &Range<f32>) -> f32 {
    range.start + (range.end - range.start).max(0.0) * rng.random::<f32>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_scales_with_width_and_caps() {
        assert_eq!(particle_count(1000.0), 100);
        assert_eq!(particle_count(4000.0), 100);
        assert_eq!(particle_count(300.0), 30);
        assert_eq!(particle_count(305.0), 31);
        assert_eq!(particle_count(0.0), 0);
        assert_eq!(particle_count(-50.0), 0);
    }

    #[test]
    fn initial_particles_respect_ranges() {
        let field = ParticleField::with_seed(800.0, 600.0, 7);
        assert_eq!(field.len(), 80);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!(PARTICLES.radius_range.contains(&p.radius));
            assert!(PARTICLES.speed_range.contains(&p.speed_y));
            assert!(PARTICLES.opacity_range.contains(&p.opacity));
        }
    }

    #[test]
    fn step_moves_particles_up() {
        let mut field = ParticleField::with_seed(300.0, 600.0, 1);
        let before: Vec<Particle> = field.particles().to_vec();
        field.step();
        for (old, new) in before.iter().zip(field.particles()) {
            if old.y - old.speed_y >= -PARTICLES.recycle_margin {
                assert_eq!(new.y, old.y - old.speed_y);
                assert_eq!(new.x, old.x);
            }
        }
    }

    #[test]
    fn particle_past_top_is_recycled_in_same_step() {
        let mut field = ParticleField::with_seed(300.0, 600.0, 3);
        field.particles[0].y = -PARTICLES.recycle_margin + 0.05;
        field.particles[0].speed_y = 0.5;

        field.step();

        let recycled = field.particles()[0];
        assert_eq!(recycled.y, 600.0 + PARTICLES.recycle_margin);
        assert!((0.0..300.0).contains(&recycled.x));
        assert_eq!(field.len(), 30);
    }

    #[test]
    fn never_depletes_over_many_steps() {
        let mut field = ParticleField::with_seed(500.0, 40.0, 11);
        let count = field.len();
        for _ in 0..10_000 {
            field.step();
        }
        assert_eq!(field.len(), count);
        let floor = -PARTICLES.recycle_margin - PARTICLES.speed_range.end;
        let ceiling = 40.0 + PARTICLES.recycle_margin;
        assert!(field.particles().iter().all(|p| p.y >= floor && p.y <= ceiling));
    }

    #[test]
    fn resize_regenerates_whole_set() {
        let mut field = ParticleField::with_seed(1000.0, 800.0, 5);
        assert_eq!(field.len(), 100);

        assert!(field.resize_if_changed(300.0, 200.0));
        assert_eq!(field.len(), 30);
        assert_eq!(field.size(), (300.0, 200.0));
        assert!(field.particles().iter().all(|p| p.x < 300.0 && p.y < 200.0));

        assert!(!field.resize_if_changed(300.0, 200.0));
    }

    #[test]
    fn zero_sized_viewport_is_empty_and_steps_safely() {
        let mut field = ParticleField::with_seed(0.0, 0.0, 9);
        assert!(field.is_empty());
        field.step();
        assert!(field.is_empty());
    }
}
