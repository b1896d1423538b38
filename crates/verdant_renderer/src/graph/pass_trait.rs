//! Every stage of the frame implements `RenderPass`.
//!
//! `prepare` runs before any pass opens a `wgpu::RenderPass`, so it is the
//! place for `queue.write_buffer` calls. `execute` records draw commands.
use wgpu::{CommandEncoder, Device, Queue, TextureView};

use crate::graph::FramePacket;

pub trait RenderPass: Send + Sync + 'static {
    /// Debug label.
    fn name(&self) -> &str;

    /// Called whenever the render target is resized.
    #[allow(unused_variables)]
    fn on_resize(&mut self, device: &Device, queue: &Queue, width: u32, height: u32) {}

    #[allow(unused_variables)]
    fn prepare(&mut self, device: &Device, queue: &Queue, packet: &FramePacket) {}

    /// - `color_view`: colour attachment (the MSAA texture when active)
    /// - `resolve_target`: swapchain view when multisampling, else `None`
    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        resolve_target: Option<&TextureView>,
        depth_view: &TextureView,
        packet: &FramePacket,
    );
}
