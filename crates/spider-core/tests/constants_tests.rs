// Host-side tests for tuning constants and the default configuration.

use spider_core::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_nest_the_way_the_visuals_expect() {
    // pointer links fade out before the pull does
    assert!(POINTER_LINK_RANGE < MAX_DISTANCE);
    assert!(PEER_LINK_RANGE < POINTER_LINK_RANGE);
    assert!(PARTICLE_SIZE_MIN > 0.0 && PARTICLE_SIZE_MIN < PARTICLE_SIZE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_and_lightness_stay_in_css_range() {
    assert!(REST_OPACITY + OPACITY_GAIN <= 1.0);
    assert!(REST_BRIGHTNESS + BRIGHTNESS_GAIN <= 100.0);
    assert!(POINTER_LINK_MAX_OPACITY > 0.0 && POINTER_LINK_MAX_OPACITY <= 1.0);
    assert!(PEER_LINK_OPACITY > 0.0 && PEER_LINK_OPACITY <= 1.0);
}

#[test]
fn default_config_mirrors_constants() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.area_per_particle, AREA_PER_PARTICLE);
    assert_eq!(cfg.size_range, (PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX));
    assert_eq!(cfg.max_distance, 200.0);
    assert_eq!(cfg.pull_strength, 0.3);
    assert_eq!(cfg.pointer_link_range, 150.0);
    assert_eq!(cfg.peer_link_range, 80.0);
    assert_eq!(cfg.settle_delay, Duration::from_millis(100));
}
