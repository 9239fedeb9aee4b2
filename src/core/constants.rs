use glam::Vec3;

// Shared tuning constants for the preset engine and the web frontend.

// Transitions
pub const DEFAULT_TRANSITION_SECS: f64 = 0.9; // preset-to-preset blend time
pub const MIN_TRANSITION_SECS: f64 = 0.04; // shortest interpolated transition

// Carousel layout (CSS `--item-w` / `--gap` fallbacks, px)
pub const DEFAULT_ITEM_WIDTH: f32 = 260.0;
pub const DEFAULT_ITEM_GAP: f32 = 12.0;
pub const SWIPE_THRESHOLD_FRACTION: f32 = 0.22; // of one item width
pub const TRACK_TRANSITION_CSS: &str = "transform 480ms cubic-bezier(.22,.9,.28,1)";

// Persistence
pub const PRESET_INDEX_STORAGE_KEY: &str = "frostCanvasPresetIndex";

// Parameter names
pub const NOISE_SCALE: &str = "noise_scale";
pub const NOISE_STRENGTH: &str = "noise_strength";
pub const ANIMATION_SPEED: &str = "animation_speed";
pub const GRAIN_INTENSITY: &str = "grain_intensity";
pub const VIGNETTE_STRENGTH: &str = "vignette_strength";
pub const DOMAIN_WARP_STRENGTH: &str = "domain_warp_strength";
pub const TURBULENCE: &str = "turbulence";
pub const GRADIENT_ANGLE: &str = "gradient_angle";
pub const COLOR_SPREAD: &str = "color_spread";
pub const FLOW_SPEED: &str = "flow_speed";
pub const PALETTE_A: &str = "palette_a";
pub const PALETTE_B: &str = "palette_b";
pub const PALETTE_C: &str = "palette_c";
pub const PALETTE_D: &str = "palette_d";

/// Defaults for scalar parameters, in registration order.
pub const SCALAR_DEFAULTS: [(&str, f32); 10] = [
    (NOISE_SCALE, 0.3),
    (NOISE_STRENGTH, 0.35),
    (ANIMATION_SPEED, 0.5),
    (GRAIN_INTENSITY, 0.03),
    (VIGNETTE_STRENGTH, 3.0),
    (DOMAIN_WARP_STRENGTH, 0.15),
    (TURBULENCE, 0.2),
    (GRADIENT_ANGLE, 0.0),
    (COLOR_SPREAD, 1.0),
    (FLOW_SPEED, 0.3),
];

/// Defaults for the cosine palette terms (offset, amplitude, frequency, phase).
pub const PALETTE_DEFAULTS: [(&str, Vec3); 4] = [
    (PALETTE_A, Vec3::new(0.9, 0.65, 1.0)),
    (PALETTE_B, Vec3::new(0.5, 0.5, 0.5)),
    (PALETTE_C, Vec3::new(1.0, 0.7, 0.4)),
    (PALETTE_D, Vec3::new(0.0, 0.15, 0.2)),
];

// Float tolerance used when comparing parameter values
pub const PARAM_EPSILON: f32 = 1e-5;
