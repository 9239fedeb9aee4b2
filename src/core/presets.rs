use super::constants::{PALETTE_DEFAULTS, SCALAR_DEFAULTS};
use super::error::ConfigError;
use super::params::{ParamSet, ParamValue};
use glam::Vec3;

/// Named, immutable target for every animatable parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    name: String,
    description: Option<String>,
    values: ParamSet,
}

impl Preset {
    pub fn new(name: impl Into<String>, values: ParamSet) -> Self {
        Self {
            name: name.into(),
            description: None,
            values,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Chip tooltip: the description when there is one, else the name.
    pub fn title(&self) -> &str {
        self.description().unwrap_or(&self.name)
    }

    pub fn values(&self) -> &ParamSet {
        &self.values
    }
}

/// Ordered, read-only list of presets with circular indexing.
#[derive(Clone, Debug)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl PresetRegistry {
    /// Every preset must define the same parameter names, with the same
    /// kinds, as the first one.
    pub fn new(presets: Vec<Preset>) -> Result<Self, ConfigError> {
        let reference = presets.first().ok_or(ConfigError::EmptyRegistry)?;
        for p in presets.iter().skip(1) {
            check_same_shape(reference, p)?;
        }
        log::debug!("[preset] registry with {} presets", presets.len());
        Ok(Self { presets })
    }

    /// The bundled preset library.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(builtin_presets())
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.presets.len()
    }

    /// Maps any integer onto `[0, count)`.
    #[inline]
    pub fn wrap(&self, index: i64) -> usize {
        wrap_index(index, self.count())
    }

    /// Preset at `index`, wrapped into range.
    #[inline]
    pub fn get(&self, index: usize) -> &Preset {
        &self.presets[index % self.presets.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> + '_ {
        self.presets.iter()
    }
}

/// `(i mod n)` in `[0, n)`; zero when `n == 0`.
#[inline]
pub fn wrap_index(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    index.rem_euclid(count as i64) as usize
}

fn check_same_shape(reference: &Preset, preset: &Preset) -> Result<(), ConfigError> {
    let missing: Vec<String> = reference
        .values
        .names()
        .filter(|n| !preset.values.contains(n))
        .map(str::to_string)
        .collect();
    let unexpected: Vec<String> = preset
        .values
        .names()
        .filter(|n| !reference.values.contains(n))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(ConfigError::ParamMismatch {
            preset: preset.name.clone(),
            reference: reference.name.clone(),
            missing,
            unexpected,
        });
    }
    for (name, value) in preset.values.iter() {
        let Some(expected) = reference.values.get(name) else {
            continue;
        };
        if expected.kind() != value.kind() {
            return Err(ConfigError::KindMismatch {
                preset: preset.name.clone(),
                param: name.to_string(),
                expected: expected.kind().as_str(),
                found: value.kind().as_str(),
            });
        }
    }
    Ok(())
}

// Scalars follow SCALAR_DEFAULTS order:
// noise scale/strength, speed, grain, vignette, warp, turbulence, angle, spread, flow.
fn preset(name: &str, description: &str, scalars: [f32; 10], palette: [[f32; 3]; 4]) -> Preset {
    let mut values = ParamSet::new();
    for ((param, _), v) in SCALAR_DEFAULTS.iter().zip(scalars) {
        values.insert(param, ParamValue::Scalar(v));
    }
    for ((param, _), v) in PALETTE_DEFAULTS.iter().zip(palette) {
        values.insert(param, ParamValue::Vector(Vec3::from_array(v)));
    }
    Preset::new(name, values).with_description(description)
}

pub fn builtin_presets() -> Vec<Preset> {
    vec![
        preset(
            "Frost",
            "Cool lilac haze with soft grain",
            [0.3, 0.35, 0.5, 0.03, 3.0, 0.15, 0.2, 0.0, 1.0, 0.3],
            [
                [0.9, 0.65, 1.0],
                [0.5, 0.5, 0.5],
                [1.0, 0.7, 0.4],
                [0.0, 0.15, 0.2],
            ],
        ),
        preset(
            "Aurora",
            "Green and teal ribbons drifting north",
            [0.45, 0.5, 0.35, 0.025, 2.4, 0.28, 0.35, 1.2, 1.3, 0.45],
            [
                [0.2, 0.6, 0.5],
                [0.3, 0.45, 0.4],
                [1.0, 1.0, 0.8],
                [0.55, 0.25, 0.05],
            ],
        ),
        preset(
            "Ember",
            "Slow molten orange with deep shadows",
            [0.6, 0.4, 0.25, 0.05, 3.0, 0.2, 0.45, 2.4, 0.8, 0.2],
            [
                [0.6, 0.3, 0.15],
                [0.45, 0.3, 0.2],
                [0.8, 0.9, 1.0],
                [0.0, 0.1, 0.2],
            ],
        ),
        preset(
            "Lagoon",
            "Bright shallow-water blues",
            [0.25, 0.3, 0.4, 0.02, 1.8, 0.1, 0.15, 4.2, 1.5, 0.35],
            [
                [0.35, 0.7, 0.85],
                [0.3, 0.3, 0.25],
                [0.9, 0.8, 1.1],
                [0.6, 0.45, 0.3],
            ],
        ),
        preset(
            "Orchid",
            "Magenta bloom over violet",
            [0.35, 0.45, 0.45, 0.035, 2.6, 0.3, 0.25, 5.5, 1.1, 0.4],
            [
                [0.75, 0.45, 0.8],
                [0.35, 0.3, 0.4],
                [1.0, 1.2, 0.9],
                [0.8, 0.1, 0.35],
            ],
        ),
        preset(
            "Graphite",
            "Near-monochrome steel with heavy grain",
            [0.8, 0.25, 0.2, 0.08, 3.0, 0.05, 0.1, 0.8, 0.6, 0.15],
            [
                [0.35, 0.37, 0.4],
                [0.2, 0.2, 0.22],
                [0.6, 0.6, 0.6],
                [0.0, 0.05, 0.1],
            ],
        ),
    ]
}
