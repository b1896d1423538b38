//! Helpers for creating render-attachment textures.

/// Descriptor for a 2-D render-attachment texture.
pub struct RenderTextureDesc<'a> {
    pub label: &'a str,
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    /// MSAA sample count (1 = no MSAA).
    pub sample_count: u32,
}

/// Creates a 2-D `RENDER_ATTACHMENT` texture and its default view.
pub fn create_attachment(
    device: &wgpu::Device,
    desc: &RenderTextureDesc<'_>,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(desc.label),
        size: wgpu::Extent3d {
            width: desc.width.max(1),
            height: desc.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: desc.sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: desc.format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}
