//! Opaque mesh pass.
//!
//! Clears colour and depth, binds the frame group and the shared instance
//! buffer once, then emits one instanced `draw_indexed` per queued command.
use wgpu::{
    CommandEncoder, LoadOp, Operations, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::graph::{FramePacket, RenderPass};

#[derive(Default)]
pub struct WorldPass;

impl WorldPass {
    pub fn new() -> Self {
        Self
    }
}

impl RenderPass for WorldPass {
    fn name(&self) -> &str {
        "World Pass"
    }

    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        resolve_target: Option<&TextureView>,
        depth_view: &TextureView,
        packet: &FramePacket,
    ) {
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some(self.name()),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: color_view,
                resolve_target,
                ops: Operations {
                    load: LoadOp::Clear(packet.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(Operations {
                    load: LoadOp::Clear(1.0),
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if packet.draws.is_empty() {
            return;
        }

        rpass.set_bind_group(0, &*packet.frame_bind_group, &[]);
        rpass.set_vertex_buffer(1, packet.instance_buffer.slice(..));

        for cmd in &packet.draws {
            rpass.set_pipeline(&cmd.pipeline);
            rpass.set_bind_group(1, &*cmd.material_bind_group, &[]);
            rpass.set_vertex_buffer(0, cmd.vertex_buffer.slice(..));
            rpass.set_index_buffer(cmd.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..cmd.index_count, 0, cmd.instances.clone());
        }
    }
}
