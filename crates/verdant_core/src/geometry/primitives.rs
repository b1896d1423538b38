//! Procedural meshes used by the demos.
//!
//! Every builder is a pure function: the same call always produces a
//! bit-identical result.
use glam::{Vec2, Vec3};

use super::{LineMesh, Mesh, MeshError};
use crate::color::Color;

/// A single blade of grass for instanced rendering.
///
/// Seven vertices form a tapered strip: a 0.8-wide base at y = 0, two
/// narrower rows at y = 1 and y = 2, and an apex at y = 3.  Each of the two
/// lower row transitions is a quad split into two triangles; one triangle
/// closes the tip.  All triangles wind counter-clockwise seen from +Z.
///
/// No normals are supplied; upload derives them from the winding.
pub fn grass_blade() -> Result<Mesh, MeshError> {
    #[rustfmt::skip]
    let vertices = [
        Vec3::new(-0.4,   0.0, 0.0), // left base
        Vec3::new( 0.4,   0.0, 0.0), // right base
        Vec3::new(-0.25,  1.0, 0.0),
        Vec3::new( 0.25,  1.0, 0.0),
        Vec3::new(-0.125, 2.0, 0.0),
        Vec3::new( 0.125, 2.0, 0.0),
        Vec3::new( 0.0,   3.0, 0.0), // apex
    ];

    #[rustfmt::skip]
    let indices: [u16; 15] = [
        0, 1, 2,  1, 3, 2, // base → row 1
        2, 3, 4,  3, 5, 4, // row 1 → row 2
        4, 5, 6,           // row 2 → apex
    ];

    #[rustfmt::skip]
    let texcoords = [
        Vec2::new(0.0, 0.0),  Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 0.33), Vec2::new(1.0, 0.33),
        Vec2::new(0.0, 0.66), Vec2::new(1.0, 0.66),
        Vec2::new(0.5, 1.0),
    ];

    Mesh::new(&vertices, &texcoords, &indices)
}

/// Flat rectangle in the XZ plane, centred at the origin and facing +Y.
pub fn plane(width: f32, depth: f32) -> Result<Mesh, MeshError> {
    let (hw, hd) = (width * 0.5, depth * 0.5);
    let vertices = [
        Vec3::new(-hw, 0.0, hd),
        Vec3::new(hw, 0.0, hd),
        Vec3::new(hw, 0.0, -hd),
        Vec3::new(-hw, 0.0, -hd),
    ];
    let texcoords = [Vec2::new(0.0, 0.0), Vec2::X, Vec2::ONE, Vec2::Y];
    Mesh::new(&vertices, &texcoords, &[0, 1, 2, 0, 2, 3])?.with_normals(&[Vec3::Y; 4])
}

/// Axis-aligned box centred at the origin with flat per-face normals.
///
/// 24 vertices (4 per face) so every face keeps its own normal; 36 indices.
pub fn cube(width: f32, height: f32, depth: f32) -> Result<Mesh, MeshError> {
    // (normal, u, v) with u × v == normal so the quad winds CCW.
    #[rustfmt::skip]
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::Z,     Vec3::X,     Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::X,     Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z,     Vec3::Y),
        (Vec3::Y,     Vec3::X,     Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X,     Vec3::Z),
    ];
    const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    let size = Vec3::new(width, height, depth);
    let mut vertices = Vec::with_capacity(24);
    let mut texcoords = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = vertices.len() as u16;
        for (su, sv) in CORNERS {
            vertices.push((normal + u * su + v * sv) * 0.5 * size);
            texcoords.push(Vec2::new((su + 1.0) * 0.5, (sv + 1.0) * 0.5));
            normals.push(normal);
        }
        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(&vertices, &texcoords, &indices)?.with_normals(&normals)
}

/// Reference grid in the XZ plane, centred on the origin.
///
/// `slices / 2` lines are laid out on each side of the two axes, `spacing`
/// apart.  The lines through the origin are drawn darker.
pub fn grid(slices: u32, spacing: f32) -> LineMesh {
    const AXIS: Color = Color::rgb(0.5, 0.5, 0.5);
    const LINE: Color = Color::rgb(0.75, 0.75, 0.75);

    let half = (slices / 2) as i32;
    let extent = half as f32 * spacing;
    let mut lines = LineMesh::new();

    for i in -half..=half {
        let color = if i == 0 { AXIS } else { LINE };
        let offset = i as f32 * spacing;
        lines.push(Vec3::new(offset, 0.0, -extent), Vec3::new(offset, 0.0, extent), color);
        lines.push(Vec3::new(-extent, 0.0, offset), Vec3::new(extent, 0.0, offset), color);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grass_blade_counts() {
        let m = grass_blade().unwrap();
        assert_eq!(m.vertex_count(), 7);
        assert_eq!(m.triangle_count(), 5);
        assert_eq!(m.indices().len(), 15);
        assert!(m.indices().iter().all(|&i| i < 7));
        assert!(!m.has_normals());
    }

    #[test]
    fn grass_blade_anchors() {
        let m = grass_blade().unwrap();
        assert_eq!(m.texcoords()[0], Vec2::new(0.0, 0.0));
        assert_eq!(m.texcoords()[6], Vec2::new(0.5, 1.0));
        assert_eq!(m.vertices()[6], Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn grass_blade_is_deterministic() {
        let a = grass_blade().unwrap();
        let b = grass_blade().unwrap();
        assert_eq!(a, b);
        let bits = |m: &Mesh| -> Vec<u32> {
            m.vertices()
                .iter()
                .flat_map(|v| v.to_array())
                .chain(m.texcoords().iter().flat_map(|t| t.to_array()))
                .map(f32::to_bits)
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn grass_blade_triangles_climb_one_level_each() {
        let m = grass_blade().unwrap();
        for (t, tri) in m.triangles().enumerate() {
            let ys: Vec<f32> = tri.iter().map(|&i| m.vertices()[i as usize].y).collect();
            let lo = ys.iter().copied().fold(f32::INFINITY, f32::min);
            let hi = ys.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(lo, (t / 2) as f32, "triangle {t} starts on the wrong level");
            assert_eq!(hi, (t / 2 + 1) as f32, "triangle {t} ends on the wrong level");
        }
    }

    #[test]
    fn grass_blade_faces_positive_z() {
        let mut m = grass_blade().unwrap();
        m.generate_normals().unwrap();
        for n in m.normals() {
            assert!((*n - Vec3::Z).length() < 1e-5);
        }
    }

    #[test]
    fn grass_blade_narrows_towards_apex() {
        let m = grass_blade().unwrap();
        let width = |row: usize| m.vertices()[row * 2 + 1].x - m.vertices()[row * 2].x;
        assert!(width(0) > width(1));
        assert!(width(1) > width(2));
    }

    #[test]
    fn plane_faces_up() {
        let mut m = plane(20.0, 20.0).unwrap();
        assert_eq!(m.vertex_count(), 4);
        assert_eq!(m.triangle_count(), 2);
        // winding agrees with the supplied normals
        m.generate_normals().unwrap();
        assert!(m.normals().iter().all(|n| (*n - Vec3::Y).length() < 1e-6));
    }

    #[test]
    fn cube_winding_matches_face_normals() {
        let m = cube(2.0, 2.0, 2.0).unwrap();
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.triangle_count(), 12);
        for [a, b, c] in m.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let face = (m.vertices()[b] - m.vertices()[a])
                .cross(m.vertices()[c] - m.vertices()[a])
                .normalize();
            assert!((face - m.normals()[a]).length() < 1e-5);
        }
        assert!(m.vertices().iter().all(|v| v.abs().max_element() <= 1.0 + 1e-6));
    }

    #[test]
    fn cube_respects_extents() {
        let m = cube(2.0, 4.0, 6.0).unwrap();
        let max = m.vertices().iter().fold(Vec3::ZERO, |acc, v| acc.max(v.abs()));
        assert!((max - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn grid_line_count_and_extent() {
        let g = grid(40, 0.5);
        assert_eq!(g.segment_count(), 82);
        assert_eq!(g.colors.len(), g.positions.len());
        assert!(g.positions.iter().all(|p| p.x.abs() <= 10.0 && p.z.abs() <= 10.0));
        assert!(g.positions.iter().all(|p| p.y == 0.0));
    }
}
