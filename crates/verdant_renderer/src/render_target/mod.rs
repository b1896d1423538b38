pub mod depth;
pub mod msaa;
pub mod target;

pub use depth::DepthTarget;
pub use msaa::MsaaTarget;
pub use target::RenderTarget;
