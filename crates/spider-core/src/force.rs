use crate::config::FieldConfig;
use glam::Vec2;

/// Per-frame visual state of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement {
    pub position: Vec2,
    pub opacity: f32,
    /// HSL lightness in percent.
    pub brightness: f32,
    /// Normalized proximity weight, 0 when at rest.
    pub force: f32,
}

/// Proximity weight in (0, 1] for `distance < max_distance`, otherwise 0.
#[inline]
pub fn force_at(distance: f32, max_distance: f32) -> f32 {
    if distance < max_distance {
        (max_distance - distance) / max_distance
    } else {
        0.0
    }
}

/// Pulls `origin` part of the way toward `pointer`, brightening it as it nears.
///
/// The offset never exceeds `pull_strength * max_distance`, so particles stay
/// close to their origin whatever the pointer does.
pub fn displace(origin: Vec2, pointer: Vec2, config: &FieldConfig) -> Displacement {
    let offset = pointer - origin;
    let distance = offset.length();
    if distance >= config.max_distance {
        return Displacement {
            position: origin,
            opacity: config.rest_opacity,
            brightness: config.rest_brightness,
            force: 0.0,
        };
    }
    let force = force_at(distance, config.max_distance);
    Displacement {
        position: origin + offset * (config.pull_strength * force),
        opacity: config.rest_opacity + config.opacity_gain * force,
        brightness: config.rest_brightness + config.brightness_gain * force,
        force,
    }
}
