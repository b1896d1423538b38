//! GPU vertex formats used by the built-in pipelines.
//!
//! Each type is `#[repr(C)]` + `Pod` so `bytemuck` can reinterpret slices as
//! bytes.  The attribute locations are mirrored by `assets/shaders/lit.wgsl`
//! and `assets/shaders/lines.wgsl`; custom material shaders must use the
//! same locations.
use verdant_core::{Color, Mesh};

// ── Mesh vertex ───────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space unit normal.
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2 // uv
    ];

    /// Returns the `VertexBufferLayout` for buffer slot 0.
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Interleaves a mesh's tables.  Missing normals are written as zero; the
    /// upload path generates them before calling this.
    pub fn interleave(mesh: &Mesh) -> Vec<Vertex> {
        let normals = mesh.normals();
        mesh.vertices()
            .iter()
            .zip(mesh.texcoords())
            .enumerate()
            .map(|(i, (p, uv))| Vertex {
                position: p.to_array(),
                normal: normals.get(i).map_or([0.0; 3], |n| n.to_array()),
                uv: uv.to_array(),
            })
            .collect()
    }
}

// ── Per-instance data ─────────────────────────────────────────────────────────

/// One model matrix per instance, fed through buffer slot 1 with
/// `VertexStepMode::Instance` (locations 3‥6, one column each).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl InstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4
    ];

    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<&glam::Mat4> for InstanceRaw {
    fn from(m: &glam::Mat4) -> Self {
        Self { model: m.to_cols_array_2d() }
    }
}

// ── Line vertex ───────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x4
    ];

    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn new(position: glam::Vec3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};
    use verdant_core::primitives;

    #[test]
    fn strides_match_shader_expectations() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 64);
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
    }

    #[test]
    fn interleave_keeps_vertex_order() {
        let mut mesh = primitives::grass_blade().unwrap();
        mesh.generate_normals().unwrap();
        let verts = Vertex::interleave(&mesh);
        assert_eq!(verts.len(), 7);
        assert_eq!(verts[6].position, [0.0, 3.0, 0.0]);
        assert_eq!(verts[6].uv, [0.5, 1.0]);
        assert!((Vec3::from(verts[0].normal) - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn interleave_without_normals_writes_zero() {
        let mesh = primitives::grass_blade().unwrap();
        assert!(Vertex::interleave(&mesh).iter().all(|v| v.normal == [0.0; 3]));
    }

    #[test]
    fn instance_raw_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let raw = InstanceRaw::from(&m);
        assert_eq!(raw.model[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
