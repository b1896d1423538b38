use glam::{Vec2, Vec3};
use verdant_core::primitives;

#[test]
fn build_upload_release() {
    let mut mesh = primitives::grass_blade().expect("blade builds");

    assert_eq!(mesh.vertex_count(), 7);
    assert_eq!(mesh.triangle_count(), 5);
    assert_eq!(mesh.indices().len(), 15);
    assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()));
    assert_eq!(mesh.texcoords()[0], Vec2::ZERO);
    assert_eq!(mesh.texcoords()[6], Vec2::new(0.5, 1.0));
    assert_eq!(mesh.vertices()[6], Vec3::new(0.0, 3.0, 0.0));

    // Upload's CPU-side post-condition: one normal per vertex.
    assert!(!mesh.has_normals());
    mesh.generate_normals().expect("normals allocate");
    let flat: Vec<f32> = mesh.normals().iter().flat_map(|n| n.to_array()).collect();
    assert_eq!(flat.len(), 7 * 3);

    mesh.release();
    assert!(mesh.is_released());
    assert!(mesh.vertices().is_empty());
    assert!(mesh.texcoords().is_empty());
    assert!(mesh.normals().is_empty());
    assert!(mesh.indices().is_empty());
}

#[test]
fn every_build_is_identical() {
    let first = primitives::grass_blade().unwrap();
    for _ in 0..16 {
        assert_eq!(primitives::grass_blade().unwrap(), first);
    }
}
