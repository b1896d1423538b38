//! Per-frame GPU state bound at group 0: camera, eye position, elapsed time
//! and the light.
use std::sync::Arc;

use glam::Mat4;
use verdant_core::Camera;

use crate::light::{DirectionalLight, LightUniform};
use crate::resources::buffer;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = eye position (`viewPos`), w = elapsed seconds.
    pub view_pos: [f32; 4],
}

impl FrameUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view_pos: [0.0; 4],
        }
    }

    pub fn update(&mut self, camera: &Camera, time: f32) {
        self.view_proj = camera.build_view_projection_matrix().to_cols_array_2d();
        self.view_pos = camera.eye.extend(time).to_array();
    }
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GpuFrame {
    pub uniform: FrameUniform,
    frame_buffer: Arc<wgpu::Buffer>,
    light_buffer: Arc<wgpu::Buffer>,
    pub bind_group: Arc<wgpu::BindGroup>,
}

impl GpuFrame {
    /// `layout` must match [`crate::pipeline::PipelineLayouts::frame`].
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, light: &DirectionalLight) -> Self {
        let uniform = FrameUniform::new();
        let frame_buffer = buffer::create_uniform(device, "Frame Uniform Buffer", &uniform);
        let light_buffer =
            buffer::create_uniform(device, "Light Uniform Buffer", &LightUniform::from(light));

        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: frame_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: light_buffer.as_entire_binding(),
                },
            ],
        }));

        Self {
            uniform,
            frame_buffer,
            light_buffer,
            bind_group,
        }
    }

    /// Uploads camera, time and light. Call once per frame before any pass
    /// records.
    pub fn sync(&mut self, queue: &wgpu::Queue, camera: &Camera, time: f32, light: &DirectionalLight) {
        self.uniform.update(camera, time);
        buffer::update_uniform(queue, &self.frame_buffer, &self.uniform);
        buffer::update_uniform(queue, &self.light_buffer, &LightUniform::from(light));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn view_pos_packs_time_in_w() {
        let camera = Camera::looking_at(Vec3::new(10.0, 5.0, 10.0), Vec3::new(0.0, 1.0, 0.0), 60.0);
        let mut u = FrameUniform::new();
        u.update(&camera, 2.5);
        assert_eq!(u.view_pos, [10.0, 5.0, 10.0, 2.5]);
        assert_eq!(u.view_proj, camera.build_view_projection_matrix().to_cols_array_2d());
    }

    #[test]
    fn uniform_size_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<FrameUniform>() % 16, 0);
    }
}
