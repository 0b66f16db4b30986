// Tuning constants for the particle field. `FieldConfig::default()` mirrors these.

// Generation
pub const AREA_PER_PARTICLE: f64 = 8000.0; // px² of surface per particle
pub const PARTICLE_SIZE_MIN: f32 = 2.0; // radius, inclusive
pub const PARTICLE_SIZE_MAX: f32 = 6.0; // radius, exclusive
pub const HUE_MAX_DEG: f32 = 360.0;

// Force model
pub const MAX_DISTANCE: f32 = 200.0; // falloff radius of the pointer pull
pub const PULL_STRENGTH: f32 = 0.3; // fraction of the pointer offset applied at full force
pub const REST_OPACITY: f32 = 0.6;
pub const OPACITY_GAIN: f32 = 0.4; // added at full force
pub const REST_BRIGHTNESS: f32 = 50.0; // HSL lightness, percent
pub const BRIGHTNESS_GAIN: f32 = 30.0;

// Pointer links
pub const POINTER_LINK_RANGE: f32 = 150.0;
pub const POINTER_LINK_MAX_OPACITY: f32 = 0.4;
pub const POINTER_LINK_LIGHTNESS: f32 = 60.0;
pub const POINTER_LINK_WIDTH: f32 = 1.0;

// Peer links
pub const PEER_LINK_RANGE: f32 = 80.0;
pub const PEER_LINK_OPACITY: f32 = 0.1;
pub const PEER_LINK_WIDTH: f32 = 0.5;

// Above this many particles the peer scan switches to the grid index
pub const PEER_GRID_THRESHOLD: usize = 400;

// Regenerate this long after the last resize event
pub const RESIZE_SETTLE_MS: u64 = 100;
