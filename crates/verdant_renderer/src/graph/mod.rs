pub mod frame_packet;
pub mod pass_trait;
pub mod queue;

pub use frame_packet::{DrawCommand, FramePacket, LineCommand};
pub use pass_trait::RenderPass;
pub use queue::DrawQueue;
