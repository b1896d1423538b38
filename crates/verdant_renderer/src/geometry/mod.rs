pub mod lines;
pub mod mesh;
pub mod vertex;

pub use lines::GpuLines;
pub use mesh::GpuMesh;
pub use vertex::{InstanceRaw, LineVertex, Vertex};
