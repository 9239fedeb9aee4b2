//! Binding table for the tuning panel: one row per slider, each naming the
//! parameter (and vector component) it drives. Built once and handed to the
//! panel, so the panel never reaches into the store directly.

use super::constants::*;
use super::controller::PresetController;
use super::error::ParamError;
use super::params::{ParamSet, ParamValue};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlBinding {
    pub folder: &'static str,
    pub label: &'static str,
    pub param: &'static str,
    /// Vector component (0 = R/x, 1 = G/y, 2 = B/z); `None` for scalars.
    pub component: Option<usize>,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ControlBinding {
    const fn scalar(
        folder: &'static str,
        label: &'static str,
        param: &'static str,
        min: f32,
        max: f32,
        step: f32,
    ) -> Self {
        Self {
            folder,
            label,
            param,
            component: None,
            min,
            max,
            step,
        }
    }

    const fn channel(folder: &'static str, param: &'static str, component: usize, max: f32) -> Self {
        let label = match component {
            0 => "R",
            1 => "G",
            _ => "B",
        };
        Self {
            folder,
            label,
            param,
            component: Some(component),
            min: 0.0,
            max,
            step: 0.01,
        }
    }

    /// Stable element id, e.g. `noise_scale` or `palette_a.1`.
    pub fn id(&self) -> String {
        match self.component {
            Some(c) => format!("{}.{}", self.param, c),
            None => self.param.to_string(),
        }
    }

    pub fn read(&self, params: &ParamSet) -> Option<f32> {
        match (params.get(self.param)?, self.component) {
            (ParamValue::Scalar(s), None) => Some(s),
            (ParamValue::Vector(v), Some(c)) if c < 3 => Some(v[c]),
            _ => None,
        }
    }

    /// Clamps to `[min, max]` and snaps to the nearest step from `min`.
    pub fn quantize(&self, value: f32) -> f32 {
        let v = if value.is_finite() { value } else { self.min };
        let snapped = if self.step > 0.0 {
            self.min + ((v - self.min) / self.step).round() * self.step
        } else {
            v
        };
        snapped.clamp(self.min, self.max)
    }

    /// Writes a slider value through the controller; returns the value
    /// actually applied.
    pub fn write(&self, controller: &mut PresetController, value: f32) -> Result<f32, ParamError> {
        let v = self.quantize(value);
        let next = match self.component {
            None => ParamValue::Scalar(v),
            Some(c) => {
                let current = controller
                    .current_values()
                    .vector(self.param)
                    .ok_or_else(|| ParamError::Unknown(self.id()))?;
                let mut updated = current;
                updated[c.min(2)] = v;
                ParamValue::Vector(updated)
            }
        };
        controller.set_parameter_override(self.param, next)?;
        Ok(v)
    }
}

pub fn default_bindings() -> Vec<ControlBinding> {
    use ControlBinding as B;
    let mut rows = vec![
        B::scalar("Animation", "Speed", ANIMATION_SPEED, 0.0, 0.5, 0.01),
        B::scalar("Animation", "Flow Speed", FLOW_SPEED, 0.0, 1.0, 0.01),
        B::scalar("Gradient", "Angle", GRADIENT_ANGLE, 0.0, TAU, 0.01),
        B::scalar("Gradient", "Color Spread", COLOR_SPREAD, 0.1, 3.0, 0.1),
        B::scalar("Gradient", "Warp Strength", DOMAIN_WARP_STRENGTH, 0.0, 0.5, 0.01),
        B::scalar("Gradient", "Turbulence", TURBULENCE, 0.0, 1.0, 0.05),
        B::scalar("Noise", "Scale", NOISE_SCALE, 0.1, 3.0, 0.1),
        B::scalar("Noise", "Strength", NOISE_STRENGTH, 0.0, 1.0, 0.05),
        B::scalar("Grain", "Intensity", GRAIN_INTENSITY, 0.0, 0.2, 0.01),
        B::scalar("Vignette", "Strength", VIGNETTE_STRENGTH, 0.0, 3.0, 0.1),
    ];
    let palette = [
        ("Palette A - Offset", PALETTE_A, 1.0),
        ("Palette B - Amplitude", PALETTE_B, 1.0),
        ("Palette C - Frequency", PALETTE_C, 2.0),
        ("Palette D - Phase", PALETTE_D, 1.0),
    ];
    for (folder, param, max) in palette {
        rows.extend((0..3).map(|c| B::channel(folder, param, c, max)));
    }
    rows
}
