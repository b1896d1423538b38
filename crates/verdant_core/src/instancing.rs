//! Random placement of mesh instances on the ground plane.
//!
//! The result is an owned `Vec<Mat4>`; its length is the instance count, so
//! callers never track the count separately.
use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};
use rand::Rng;

/// Parameters for [`scatter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterParams {
    /// Number of transforms to generate.
    pub count: usize,
    /// Instances land on integer X/Z coordinates in `[-half_extent, half_extent]`.
    pub half_extent: i32,
    /// Scale applied to every instance.
    pub scale: Vec3,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            count: 10_000,
            half_extent: 30,
            scale: Vec3::new(1.0, 1.5, 1.0),
        }
    }
}

/// Generates `params.count` model matrices (`T * R * S`).
///
/// Each instance is translated to a random integer grid cell, turned about +Y
/// by a random whole percentage of a full turn, then scaled by `params.scale`.
pub fn scatter<R: Rng>(params: &ScatterParams, rng: &mut R) -> Vec<Mat4> {
    let extent = params.half_extent.abs();
    (0..params.count)
        .map(|_| {
            let x = rng.gen_range(-extent..=extent) as f32;
            let z = rng.gen_range(-extent..=extent) as f32;
            let turn = rng.gen_range(0..=100u32) as f32 / 100.0;
            Mat4::from_scale_rotation_translation(
                params.scale,
                Quat::from_rotation_y(turn * TAU),
                Vec3::new(x, 0.0, z),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn produces_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = ScatterParams { count: 250, ..Default::default() };
        assert_eq!(scatter(&params, &mut rng).len(), 250);
        let empty = ScatterParams { count: 0, ..Default::default() };
        assert!(scatter(&empty, &mut rng).is_empty());
    }

    #[test]
    fn translations_are_integral_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = ScatterParams { count: 500, half_extent: 3, ..Default::default() };
        for m in scatter(&params, &mut rng) {
            let (scale, _, t) = m.to_scale_rotation_translation();
            assert_eq!(t.y, 0.0);
            assert!(t.x.abs() <= 3.0 && t.z.abs() <= 3.0);
            assert!((t.x - t.x.round()).abs() < 1e-4);
            assert!((t.z - t.z.round()).abs() < 1e-4);
            assert!((scale - params.scale).length() < 1e-4);
        }
    }

    #[test]
    fn rotation_stays_about_y() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = ScatterParams { count: 64, scale: Vec3::ONE, ..Default::default() };
        for m in scatter(&params, &mut rng) {
            let up = m.transform_vector3(Vec3::Y);
            assert!((up - Vec3::Y).length() < 1e-5);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let params = ScatterParams { count: 100, ..Default::default() };
        let a = scatter(&params, &mut StdRng::seed_from_u64(11));
        let b = scatter(&params, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
