//! Layout of the lit showcase scene: a ground plane with four coloured cubes.
use verdant_core::glam::{Mat4, Vec3};
use verdant_core::Color;

pub const GROUND_SIZE: f32 = 20.0;
pub const CUBE_SIZE: f32 = 2.0;
pub const GRID_SLICES: u32 = 40;
pub const GRID_SPACING: f32 = 0.5;

/// Cube centres and colours, one per quadrant.
pub const CUBES: [(Vec3, Color); 4] = [
    (Vec3::new(5.0, 0.0, 5.0), Color::BLUE),
    (Vec3::new(5.0, 0.0, -5.0), Color::YELLOW),
    (Vec3::new(-5.0, 0.0, 5.0), Color::RED),
    (Vec3::new(-5.0, 0.0, -5.0), Color::GREEN),
];

#[inline]
pub fn cube_transform(position: Vec3) -> Mat4 {
    Mat4::from_translation(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_cube_per_quadrant() {
        let mut signs: Vec<(bool, bool)> = CUBES
            .iter()
            .map(|(p, _)| (p.x > 0.0, p.z > 0.0))
            .collect();
        signs.sort();
        signs.dedup();
        assert_eq!(signs.len(), 4);
    }

    #[test]
    fn cubes_sit_on_the_ground_plane() {
        let half = GROUND_SIZE / 2.0;
        for (p, _) in CUBES {
            assert!(p.x.abs() + CUBE_SIZE / 2.0 <= half);
            assert!(p.z.abs() + CUBE_SIZE / 2.0 <= half);
        }
    }
}
