pub mod layout;
pub mod lines;
pub mod world;

pub use layout::PipelineLayouts;
pub use lines::LinePipeline;
pub use world::{MeshPipelineDesc, LIT_SHADER};
