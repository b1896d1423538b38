//! Data assembled once per frame and handed immutably to every `RenderPass`.
use std::ops::Range;
use std::sync::Arc;

/// One instanced mesh draw, fully resolved to GPU handles.
pub struct DrawCommand {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    pub pipeline: Arc<wgpu::RenderPipeline>,
    /// Material bind group (group 1).
    pub material_bind_group: Arc<wgpu::BindGroup>,
    /// Slots of the frame's instance buffer this draw reads.
    pub instances: Range<u32>,
}

pub struct LineCommand {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub vertex_count: u32,
}

pub struct FramePacket {
    pub clear_color: wgpu::Color,
    /// Frame + light bind group (group 0).
    pub frame_bind_group: Arc<wgpu::BindGroup>,
    pub instance_buffer: Arc<wgpu::Buffer>,
    pub draws: Vec<DrawCommand>,
    pub lines: Vec<LineCommand>,
}
