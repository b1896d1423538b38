//! Draws queued line lists on top of the world pass output.
use wgpu::{
    CommandEncoder, LoadOp, Operations, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::LinePipeline;

pub struct LinePass {
    pipeline: LinePipeline,
}

impl LinePass {
    pub fn new(pipeline: LinePipeline) -> Self {
        Self { pipeline }
    }
}

impl RenderPass for LinePass {
    fn name(&self) -> &str {
        "Line Pass"
    }

    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        resolve_target: Option<&TextureView>,
        depth_view: &TextureView,
        packet: &FramePacket,
    ) {
        if packet.lines.is_empty() {
            return;
        }

        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some(self.name()),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: color_view,
                resolve_target,
                ops: Operations {
                    load: LoadOp::Load,
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(Operations {
                    load: LoadOp::Load,
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*packet.frame_bind_group, &[]);
        for line in &packet.lines {
            rpass.set_vertex_buffer(0, line.vertex_buffer.slice(..));
            rpass.draw(0..line.vertex_count, 0..1);
        }
    }
}
