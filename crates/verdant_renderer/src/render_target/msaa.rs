//! Multisampled colour texture that resolves into the swapchain frame.
use crate::resources::texture::{self, RenderTextureDesc};

pub struct MsaaTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl MsaaTarget {
    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (texture, view) = texture::create_attachment(
            device,
            &RenderTextureDesc {
                label: "Color MSAA Texture",
                width,
                height,
                format,
                sample_count,
            },
        );
        Self { texture, view, format, sample_count }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.format, self.sample_count);
    }
}
