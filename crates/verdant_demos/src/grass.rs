//! Grass field settings and blade placement.
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use verdant_core::glam::{Mat4, Vec3};
use verdant_core::instancing::{self, ScatterParams};

/// WGSL for the wind-sway material.
pub const SWAY_SHADER: &str = include_str!("../shaders/vertex_displacement.wgsl");

/// `[grass]` table of the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GrassFieldConfig {
    /// Number of blades; also the number of transforms generated.
    pub blade_count: usize,
    /// Blades land on integer X/Z cells in `[-half_extent, half_extent]`.
    pub half_extent: i32,
    pub blade_scale: [f32; 3],
    /// Fixed seed for a reproducible field; random when absent.
    pub seed: Option<u64>,
    /// Use the wind-sway shader instead of the plain lit one.
    pub sway: bool,
}

impl Default for GrassFieldConfig {
    fn default() -> Self {
        Self {
            blade_count: 10_000,
            half_extent: 30,
            blade_scale: [1.0, 1.5, 1.0],
            seed: None,
            sway: true,
        }
    }
}

impl GrassFieldConfig {
    pub fn scatter_params(&self) -> ScatterParams {
        ScatterParams {
            count: self.blade_count,
            half_extent: self.half_extent,
            scale: Vec3::from(self.blade_scale),
        }
    }

    /// One model matrix per blade. The result's length is `blade_count`.
    pub fn blade_transforms(&self) -> Vec<Mat4> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        instancing::scatter(&self.scatter_params(), &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_field() {
        let cfg = GrassFieldConfig::default();
        let params = cfg.scatter_params();
        assert_eq!(params.count, 10_000);
        assert_eq!(params.half_extent, 30);
        assert_eq!(params.scale, Vec3::new(1.0, 1.5, 1.0));
    }

    #[test]
    fn transform_count_follows_blade_count() {
        let cfg = GrassFieldConfig {
            blade_count: 123,
            seed: Some(1),
            ..Default::default()
        };
        assert_eq!(cfg.blade_transforms().len(), 123);
    }

    #[test]
    fn seeded_fields_repeat() {
        let cfg = GrassFieldConfig {
            blade_count: 64,
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(cfg.blade_transforms(), cfg.blade_transforms());
    }

    #[test]
    fn blades_stay_inside_the_field() {
        let cfg = GrassFieldConfig {
            blade_count: 500,
            half_extent: 5,
            seed: Some(3),
            ..Default::default()
        };
        for m in cfg.blade_transforms() {
            let t = m.w_axis;
            assert!(t.x.abs() <= 5.0 && t.z.abs() <= 5.0);
            assert_eq!(t.y, 0.0);
        }
    }

    #[test]
    fn sway_shader_uses_time() {
        assert!(SWAY_SHADER.contains("frame.view_pos.w"));
    }
}
