use crate::color::Hsla;
use crate::config::FieldConfig;
use crate::force::displace;
use crate::links::{peer_links, pointer_links, Segment};
use crate::particle::Particle;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Vec2,
    pub radius: f32,
    pub color: Hsla,
}

/// Flat draw list for one frame. Draw order is peer links, pointer links, dots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub peer_links: Vec<Segment>,
    pub pointer_links: Vec<Segment>,
    pub dots: Vec<Dot>,
}

impl Scene {
    pub fn build(particles: &[Particle], pointer: Vec2, config: &FieldConfig) -> Self {
        let dots = particles
            .iter()
            .map(|p| {
                let d = displace(p.origin, pointer, config);
                Dot {
                    center: d.position,
                    radius: p.size,
                    color: Hsla::vivid(p.hue, d.brightness, d.opacity),
                }
            })
            .collect();
        Self {
            peer_links: peer_links(particles, config),
            pointer_links: pointer_links(particles, pointer, config),
            dots,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty() && self.peer_links.is_empty() && self.pointer_links.is_empty()
    }
}
