//! Mutable state of one mounted particle field.
//!
//! The field is driven entirely by the host's events: mount, pointer moves and
//! resizes. Everything visual is derived on demand through [`ParticleField::scene`].

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::particle::{generate, Particle, Surface};
use crate::scene::Scene;
use glam::Vec2;
use instant::Instant;
use rand::Rng;

/// The most recent resize that has not been applied yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingResize {
    pub width: f32,
    pub height: f32,
    pub deadline: Instant,
}

pub struct ParticleField {
    pub config: FieldConfig,
    surface: Option<Surface>,
    pointer: Vec2,
    particles: Vec<Particle>,
    generation: u64,
    pending: Option<PendingResize>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            surface: None,
            pointer: Vec2::ZERO,
            particles: Vec::new(),
            generation: 0,
            pending: None,
        }
    }

    /// Measure the surface and run the first generation pass.
    ///
    /// An unmeasurable surface leaves the field empty; a later resize will
    /// populate it.
    pub fn mount<R: Rng + ?Sized>(
        &mut self,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Result<usize, FieldError> {
        self.surface = Some(Surface::new(width, height)?);
        self.regenerate(rng)
    }

    /// Replace the whole particle set for the current surface.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, FieldError> {
        let surface = self.surface.ok_or(FieldError::NotMeasured)?;
        self.particles = generate(&surface, &self.config, rng);
        self.generation += 1;
        log::debug!(
            "generation {}: {} particles for {}x{}",
            self.generation,
            self.particles.len(),
            surface.width,
            surface.height
        );
        Ok(self.particles.len())
    }

    #[inline]
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    /// Number of completed generation passes.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn pending(&self) -> Option<PendingResize> {
        self.pending
    }

    /// Record a resize; it supersedes any earlier pending one. Returns the
    /// instant after which [`settle`](Self::settle) will apply it.
    pub fn note_resize(&mut self, width: f32, height: f32, now: Instant) -> Instant {
        let deadline = now + self.config.settle_delay;
        self.pending = Some(PendingResize {
            width,
            height,
            deadline,
        });
        deadline
    }

    /// Apply the pending resize if its settle delay has elapsed.
    pub fn settle<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
    ) -> Option<Result<usize, FieldError>> {
        let due = matches!(self.pending, Some(p) if now >= p.deadline);
        if due {
            self.flush(rng)
        } else {
            None
        }
    }

    /// Apply the pending resize immediately, for hosts whose own timer already
    /// did the waiting.
    pub fn flush<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Result<usize, FieldError>> {
        let p = self.pending.take()?;
        Some(self.mount(p.width, p.height, rng))
    }

    /// Drop the pending resize without applying it. Returns whether one existed.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.particles, self.pointer, &self.config)
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}
