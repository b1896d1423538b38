//! A mesh resident on the GPU: a vertex/index buffer pair plus counts.
//!
//! Created by [`crate::Renderer::upload_mesh`].  Queued draws hold their own
//! handles to the buffers, so dropping a `GpuMesh` mid-frame is safe: the
//! memory is freed once the last queued draw referencing it is gone.
use std::sync::Arc;

use verdant_core::Mesh;

use crate::error::RenderError;
use crate::geometry::Vertex;
use crate::resources::buffer;

pub struct GpuMesh {
    pub(crate) vertex_buffer: Arc<wgpu::Buffer>,
    pub(crate) index_buffer: Arc<wgpu::Buffer>,
    index_count: u32,
    vertex_count: u32,
    label: String,
}

impl GpuMesh {
    /// Generates normals when the mesh has none, then creates the GPU buffers.
    ///
    /// `dynamic` adds `COPY_DST` so the geometry can be rewritten later.
    pub fn upload(
        device: &wgpu::Device,
        label: &str,
        mesh: &mut Mesh,
        dynamic: bool,
    ) -> Result<Self, RenderError> {
        if mesh.vertex_count() == 0 || mesh.triangle_count() == 0 {
            return Err(RenderError::EmptyMesh(label.to_string()));
        }
        if !mesh.has_normals() {
            mesh.generate_normals()?;
        }

        let extra = if dynamic {
            wgpu::BufferUsages::COPY_DST
        } else {
            wgpu::BufferUsages::empty()
        };
        let vertices = Vertex::interleave(mesh);
        let vertex_buffer = buffer::create_vertex(device, &format!("{label} VB"), &vertices, extra);
        let index_buffer = buffer::create_index(device, &format!("{label} IB"), mesh.indices(), extra);

        log::debug!(
            "uploaded mesh `{label}`: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices().len() as u32,
            vertex_count: mesh.vertex_count() as u32,
            label: label.to_string(),
        })
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gives up this handle.  The buffers are freed once no queued draw
    /// still references them.
    pub fn release(self) {
        log::debug!("released mesh `{}`", self.label);
    }
}
