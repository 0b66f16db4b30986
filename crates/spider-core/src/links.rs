use crate::color::Hsla;
use crate::config::FieldConfig;
use crate::constants::{PEER_LINK_WIDTH, POINTER_LINK_WIDTH};
use crate::grid::PeerGrid;
use crate::particle::Particle;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Hsla,
    pub width: f32,
}

/// Linear fade from `max_opacity` at distance 0 to 0 at `range`.
#[inline]
pub fn pointer_link_opacity(distance: f32, range: f32, max_opacity: f32) -> f32 {
    (max_opacity - (distance / range) * max_opacity).max(0.0)
}

/// Segments from each particle origin within range to the pointer.
pub fn pointer_links(particles: &[Particle], pointer: Vec2, config: &FieldConfig) -> Vec<Segment> {
    particles
        .iter()
        .filter_map(|p| {
            let d = p.origin.distance(pointer);
            (d < config.pointer_link_range).then(|| Segment {
                from: p.origin,
                to: pointer,
                color: Hsla::vivid(
                    p.hue,
                    config.pointer_link_lightness,
                    pointer_link_opacity(
                        d,
                        config.pointer_link_range,
                        config.pointer_link_max_opacity,
                    ),
                ),
                width: POINTER_LINK_WIDTH,
            })
        })
        .collect()
}

/// Exhaustive scan over every unordered pair, returned as `(i, j)` with `i < j`
/// in lexicographic order.
pub fn peer_pairs(particles: &[Particle], range: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            if a.origin.distance(b.origin) < range {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Peer-link segments. Large sets go through the grid index, which yields the
/// same pairs as the exhaustive scan.
pub fn peer_links(particles: &[Particle], config: &FieldConfig) -> Vec<Segment> {
    let range = config.peer_link_range;
    let pairs = if particles.len() > config.peer_grid_threshold {
        PeerGrid::build(particles, range).pairs(particles)
    } else {
        peer_pairs(particles, range)
    };
    let color = Hsla::white(config.peer_link_opacity);
    pairs
        .into_iter()
        .map(|(i, j)| Segment {
            from: particles[i].origin,
            to: particles[j].origin,
            color,
            width: PEER_LINK_WIDTH,
        })
        .collect()
}
