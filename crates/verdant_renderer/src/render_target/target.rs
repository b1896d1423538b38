//! Size-dependent attachments shared by every pass: the depth buffer and,
//! when multisampling, the MSAA colour texture.
use super::{DepthTarget, MsaaTarget};

pub struct RenderTarget {
    pub msaa: Option<MsaaTarget>,
    pub depth: DepthTarget,
    pub width: u32,
    pub height: u32,
    sample_count: u32,
}

impl RenderTarget {
    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let sample_count = sample_count.max(1);
        let msaa = (sample_count > 1)
            .then(|| MsaaTarget::new(device, width, height, format, sample_count));
        Self {
            msaa,
            depth: DepthTarget::new(device, width, height, sample_count),
            width,
            height,
            sample_count,
        }
    }

    /// Recreates all attachments. No-op when the size is unchanged.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        if let Some(msaa) = &mut self.msaa {
            msaa.resize(device, width, height);
        }
        self.depth.resize(device, width, height);
    }

    #[inline]
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Returns the `(render_view, resolve_target)` pair for drawing into
    /// `frame`.
    pub fn color_views<'a>(
        &'a self,
        frame: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &self.msaa {
            Some(msaa) => (&msaa.view, Some(frame)),
            None => (frame, None),
        }
    }

    #[inline]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.view
    }
}
