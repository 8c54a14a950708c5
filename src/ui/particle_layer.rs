use eframe::egui::{Color32, Painter, Pos2, Vec2, vec2};

use crate::config::PARTICLES;
use crate::engine::FrameLoop;
use crate::particles::ParticleField;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The mounted particle background: field, stepping loop and the viewport
/// size it watches for resizes.
///
/// Unmounting drops all three, so nothing keeps running in low motion mode.
#[derive(Debug)]
pub struct ParticleLayer {
    field: Option<ParticleField>,
    frame_loop: FrameLoop,
    watched_size: Option<Vec2>,
}

impl Default for ParticleLayer {
    fn default() -> Self {
        Self {
            field: None,
            frame_loop: FrameLoop::new("particles"),
            watched_size: None,
        }
    }
}

impl ParticleLayer {
    pub fn mount(&mut self, size: Vec2) {
        if self.is_mounted() {
            return;
        }
        self.field = Some(ParticleField::new(size.x, size.y));
        self.watched_size = Some(size);
        self.frame_loop.start();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_particle_lifecycle {
            log::info!(
                "Particle field mounted at {:.0}x{:.0} ({} particles)",
                size.x,
                size.y,
                self.len()
            );
        }
    }

    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.frame_loop.cancel();
        self.field = None;
        self.watched_size = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_particle_lifecycle {
            log::info!("Particle field torn down");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.field.is_some()
    }

    pub fn len(&self) -> usize {
        self.field.as_ref().map_or(0, ParticleField::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One frame of the particle loop for a surface of `size`.
    ///
    /// A changed size regenerates the whole field before stepping. Returns
    /// whether the loop wants another frame.
    pub fn frame(&mut self, size: Vec2) -> bool {
        let Some(field) = self.field.as_mut() else {
            return false;
        };

        if self.watched_size != Some(size) {
            self.watched_size = Some(size);
            field.resize(size.x, size.y);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_particle_lifecycle {
                log::info!(
                    "Viewport resized to {:.0}x{:.0}, regenerated {} particles",
                    size.x,
                    size.y,
                    field.len()
                );
            }
        }

        self.frame_loop.run_frame(|| field.step())
    }

    /// Full redraw of every particle, relative to `origin` (top-left of the surface).
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let Some(field) = self.field.as_ref() else {
            return;
        };

        let [r, g, b] = PARTICLES.tint;
        for particle in field.particles() {
            let alpha = (particle.opacity * PARTICLES.layer_opacity * 255.0).round() as u8;
            painter.circle_filled(
                origin + vec2(particle.x, particle.y),
                particle.radius,
                Color32::from_rgba_unmultiplied(r, g, b, alpha),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_generates_and_loops() {
        let mut layer = ParticleLayer::default();
        assert!(!layer.frame(vec2(1000.0, 700.0)), "nothing runs before mount");

        layer.mount(vec2(1000.0, 700.0));
        assert!(layer.is_mounted());
        assert_eq!(layer.len(), 100);
        assert!(layer.frame(vec2(1000.0, 700.0)));
    }

    #[test]
    fn resize_regenerates_from_scratch() {
        let mut layer = ParticleLayer::default();
        layer.mount(vec2(1000.0, 700.0));
        assert!(layer.frame(vec2(300.0, 700.0)));
        assert_eq!(layer.len(), 30);
    }

    #[test]
    fn unmount_cancels_loop_and_drops_field() {
        let mut layer = ParticleLayer::default();
        layer.mount(vec2(500.0, 400.0));
        layer.unmount();

        assert!(!layer.is_mounted());
        assert!(layer.is_empty());
        assert!(!layer.frame(vec2(500.0, 400.0)));
        assert!(!layer.frame(vec2(800.0, 400.0)), "resizes are no longer watched");
        assert!(!layer.is_mounted());
    }

    #[test]
    fn remount_after_teardown_starts_fresh() {
        let mut layer = ParticleLayer::default();
        layer.mount(vec2(500.0, 400.0));
        layer.unmount();
        layer.mount(vec2(200.0, 400.0));
        assert_eq!(layer.len(), 20);
        assert!(layer.frame(vec2(200.0, 400.0)));
    }
}
