//! Static line geometry (e.g. the reference grid) resident on the GPU.
use std::sync::Arc;

use verdant_core::LineMesh;

use crate::error::RenderError;
use crate::geometry::LineVertex;
use crate::resources::buffer;

pub struct GpuLines {
    pub(crate) vertex_buffer: Arc<wgpu::Buffer>,
    vertex_count: u32,
}

impl GpuLines {
    pub fn upload(device: &wgpu::Device, label: &str, lines: &LineMesh) -> Result<Self, RenderError> {
        if lines.is_empty() {
            return Err(RenderError::EmptyMesh(label.to_string()));
        }
        let vertices: Vec<LineVertex> = lines
            .positions
            .iter()
            .zip(&lines.colors)
            .map(|(p, c)| LineVertex::new(*p, *c))
            .collect();
        Ok(Self {
            vertex_buffer: buffer::create_vertex(
                device,
                label,
                &vertices,
                wgpu::BufferUsages::empty(),
            ),
            vertex_count: vertices.len() as u32,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}
