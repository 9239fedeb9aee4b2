//! Grouped views over the parameter set: the cosine palette and the scalar
//! shader settings, plus partial updates for both.

use super::constants::*;
use super::error::ParamError;
use super::params::{ParamSet, ParamValue};
use glam::Vec3;

/// Cosine palette `a + b * cos(2π (c * t + d))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub d: Vec3,
}

impl Palette {
    pub fn from_params(params: &ParamSet) -> Self {
        let pick = |name: &str, i: usize| params.vector(name).unwrap_or(PALETTE_DEFAULTS[i].1);
        Self {
            a: pick(PALETTE_A, 0),
            b: pick(PALETTE_B, 1),
            c: pick(PALETTE_C, 2),
            d: pick(PALETTE_D, 3),
        }
    }

    /// Evaluates the palette at `t`.
    pub fn color_at(&self, t: f32) -> Vec3 {
        let phase = (self.c * t + self.d) * std::f32::consts::TAU;
        self.a + self.b * Vec3::new(phase.x.cos(), phase.y.cos(), phase.z.cos())
    }

    /// `a`, `b`, `c`, `d` flattened, three components each.
    pub fn to_array(&self) -> [f32; 12] {
        let mut out = [0.0; 12];
        for (chunk, v) in out.chunks_exact_mut(3).zip([self.a, self.b, self.c, self.d]) {
            chunk.copy_from_slice(&v.to_array());
        }
        out
    }

    /// CSS `rgb(r, g, b)` of a palette term, clamped to the displayable range.
    pub fn css_rgb(v: Vec3) -> String {
        let c = (v.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        format!("rgb({}, {}, {})", c.x as u8, c.y as u8, c.z as u8)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PalettePatch {
    pub a: Option<Vec3>,
    pub b: Option<Vec3>,
    pub c: Option<Vec3>,
    pub d: Option<Vec3>,
}

impl PalettePatch {
    /// Builds a patch from loose component slices, as handed over by JavaScript.
    pub fn from_slices(
        a: Option<&[f32]>,
        b: Option<&[f32]>,
        c: Option<&[f32]>,
        d: Option<&[f32]>,
    ) -> Result<Self, ParamError> {
        fn term(param: &str, v: Option<&[f32]>) -> Result<Option<Vec3>, ParamError> {
            match v {
                None => Ok(None),
                Some(&[x, y, z]) => Ok(Some(Vec3::new(x, y, z))),
                Some(other) => Err(ParamError::Length {
                    param: param.to_string(),
                    expected: 3,
                    found: other.len(),
                }),
            }
        }
        Ok(Self {
            a: term(PALETTE_A, a)?,
            b: term(PALETTE_B, b)?,
            c: term(PALETTE_C, c)?,
            d: term(PALETTE_D, d)?,
        })
    }

    pub fn updates(&self) -> impl Iterator<Item = (&'static str, ParamValue)> {
        [
            (PALETTE_A, self.a),
            (PALETTE_B, self.b),
            (PALETTE_C, self.c),
            (PALETTE_D, self.d),
        ]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name, ParamValue::Vector(v))))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderConfig {
    pub noise_scale: f32,
    pub noise_strength: f32,
    pub animation_speed: f32,
    pub grain_intensity: f32,
    pub vignette_strength: f32,
    pub domain_warp_strength: f32,
    pub turbulence: f32,
    pub gradient_angle: f32,
    pub color_spread: f32,
    pub flow_speed: f32,
}

impl ShaderConfig {
    pub fn from_params(params: &ParamSet) -> Self {
        let pick = |i: usize| {
            let (name, default) = SCALAR_DEFAULTS[i];
            params.scalar(name).unwrap_or(default)
        };
        Self {
            noise_scale: pick(0),
            noise_strength: pick(1),
            animation_speed: pick(2),
            grain_intensity: pick(3),
            vignette_strength: pick(4),
            domain_warp_strength: pick(5),
            turbulence: pick(6),
            gradient_angle: pick(7),
            color_spread: pick(8),
            flow_speed: pick(9),
        }
    }

    /// Fields in declaration order.
    pub fn to_array(&self) -> [f32; 10] {
        [
            self.noise_scale,
            self.noise_strength,
            self.animation_speed,
            self.grain_intensity,
            self.vignette_strength,
            self.domain_warp_strength,
            self.turbulence,
            self.gradient_angle,
            self.color_spread,
            self.flow_speed,
        ]
    }
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self::from_params(&ParamSet::new())
    }
}

/// Partial scalar update; `None` fields are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfigPatch {
    pub noise_scale: Option<f32>,
    pub noise_strength: Option<f32>,
    pub animation_speed: Option<f32>,
    pub grain_intensity: Option<f32>,
    pub vignette_strength: Option<f32>,
    pub domain_warp_strength: Option<f32>,
    pub turbulence: Option<f32>,
    pub gradient_angle: Option<f32>,
    pub color_spread: Option<f32>,
    pub flow_speed: Option<f32>,
}

impl ConfigPatch {
    pub fn updates(&self) -> impl Iterator<Item = (&'static str, ParamValue)> {
        [
            (NOISE_SCALE, self.noise_scale),
            (NOISE_STRENGTH, self.noise_strength),
            (ANIMATION_SPEED, self.animation_speed),
            (GRAIN_INTENSITY, self.grain_intensity),
            (VIGNETTE_STRENGTH, self.vignette_strength),
            (DOMAIN_WARP_STRENGTH, self.domain_warp_strength),
            (TURBULENCE, self.turbulence),
            (GRADIENT_ANGLE, self.gradient_angle),
            (COLOR_SPREAD, self.color_spread),
            (FLOW_SPEED, self.flow_speed),
        ]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name, ParamValue::Scalar(v))))
    }
}
