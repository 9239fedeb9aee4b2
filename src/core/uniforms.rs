use super::params::ParamSet;
use super::settings::{Palette, ShaderConfig};

/// Uniform block for `gradient.wgsl`. Every member is a vec4-sized slot so
/// the layout matches WGSL's 16-byte alignment without hidden padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub animation_speed: f32,
    /// noise scale, noise strength, grain, vignette
    pub noise: [f32; 4],
    /// domain warp, turbulence, gradient angle, color spread
    pub shape: [f32; 4],
    /// flow speed, unused x3
    pub flow: [f32; 4],
    pub palette_a: [f32; 4],
    pub palette_b: [f32; 4],
    pub palette_c: [f32; 4],
    pub palette_d: [f32; 4],
}

impl GradientUniforms {
    pub fn pack(params: &ParamSet, time: f32, resolution: [f32; 2]) -> Self {
        let cfg = ShaderConfig::from_params(params);
        let pal = Palette::from_params(params);
        Self {
            resolution,
            time,
            animation_speed: cfg.animation_speed,
            noise: [
                cfg.noise_scale,
                cfg.noise_strength,
                cfg.grain_intensity,
                cfg.vignette_strength,
            ],
            shape: [
                cfg.domain_warp_strength,
                cfg.turbulence,
                cfg.gradient_angle,
                cfg.color_spread,
            ],
            flow: [cfg.flow_speed, 0.0, 0.0, 0.0],
            palette_a: pal.a.extend(1.0).to_array(),
            palette_b: pal.b.extend(1.0).to_array(),
            palette_c: pal.c.extend(1.0).to_array(),
            palette_d: pal.d.extend(1.0).to_array(),
        }
    }
}
