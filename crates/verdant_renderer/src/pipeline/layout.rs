//! Bind-group layouts shared by every built-in and custom pipeline.
//!
//! Custom material shaders must declare the same groups:
//!
//! | group | binding | contents                                   |
//! |-------|---------|--------------------------------------------|
//! | 0     | 0       | `FrameUniform` (view_proj, view_pos + time) |
//! | 0     | 1       | `LightUniform`                             |
//! | 1     | 0       | `MaterialUniform` (colour)                 |
use std::sync::Arc;

#[derive(Clone)]
pub struct PipelineLayouts {
    /// group(0): per-frame camera/time and light uniforms.
    pub frame: Arc<wgpu::BindGroupLayout>,
    /// group(1): per-material colour.
    pub material: Arc<wgpu::BindGroupLayout>,
}

impl PipelineLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let frame = Arc::new(device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Layout: Frame"),
            entries: &[uniform_entry(0), uniform_entry(1)],
        }));

        let material = Arc::new(device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Layout: Material"),
            entries: &[uniform_entry(0)],
        }));

        Self { frame, material }
    }
}
