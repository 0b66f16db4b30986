use crate::constants::*;
use std::time::Duration;

/// Tunable parameters of the particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: f64,
    pub size_range: (f32, f32),
    pub max_distance: f32,
    pub pull_strength: f32,
    pub rest_opacity: f32,
    pub opacity_gain: f32,
    pub rest_brightness: f32,
    pub brightness_gain: f32,
    pub pointer_link_range: f32,
    pub pointer_link_max_opacity: f32,
    pub pointer_link_lightness: f32,
    pub peer_link_range: f32,
    pub peer_link_opacity: f32,
    pub peer_grid_threshold: usize,
    pub settle_delay: Duration,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            size_range: (PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            max_distance: MAX_DISTANCE,
            pull_strength: PULL_STRENGTH,
            rest_opacity: REST_OPACITY,
            opacity_gain: OPACITY_GAIN,
            rest_brightness: REST_BRIGHTNESS,
            brightness_gain: BRIGHTNESS_GAIN,
            pointer_link_range: POINTER_LINK_RANGE,
            pointer_link_max_opacity: POINTER_LINK_MAX_OPACITY,
            pointer_link_lightness: POINTER_LINK_LIGHTNESS,
            peer_link_range: PEER_LINK_RANGE,
            peer_link_opacity: PEER_LINK_OPACITY,
            peer_grid_threshold: PEER_GRID_THRESHOLD,
            settle_delay: Duration::from_millis(RESIZE_SETTLE_MS),
        }
    }
}
