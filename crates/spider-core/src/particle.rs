//! Particle set generation.
//!
//! A generation pass samples a fresh set of particles uniformly over the
//! surface. The set is returned whole; callers swap it in place of the old
//! one, so no reader ever sees a half-built set.

use crate::config::FieldConfig;
use crate::constants::HUE_MAX_DEG;
use crate::error::FieldError;
use glam::Vec2;
use rand::Rng;

/// Measured size of the rendering surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// Accepts only finite, strictly positive dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self, FieldError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(width) && ok(height) {
            Ok(Self { width, height })
        } else {
            Err(FieldError::InvalidSurface { width, height })
        }
    }

    /// `floor(width * height / area_per_particle)`.
    pub fn particle_count(&self, config: &FieldConfig) -> usize {
        let area = self.width as f64 * self.height as f64;
        (area / config.area_per_particle).floor() as usize
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub origin: Vec2,
    pub size: f32,
    pub hue: f32,
}

pub fn generate<R: Rng + ?Sized>(
    surface: &Surface,
    config: &FieldConfig,
    rng: &mut R,
) -> Vec<Particle> {
    let count = surface.particle_count(config);
    let (size_min, size_max) = config.size_range;
    (0..count)
        .map(|id| {
            let x = rng.gen_range(0.0..surface.width);
            let y = rng.gen_range(0.0..surface.height);
            let size = rng.gen_range(size_min..size_max);
            let hue = rng.gen_range(0.0..HUE_MAX_DEG);
            Particle {
                id,
                origin: Vec2::new(x, y),
                size,
                hue,
            }
        })
        .collect()
}
