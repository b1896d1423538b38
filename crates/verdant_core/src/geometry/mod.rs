pub mod lines;
pub mod mesh;
pub mod primitives;

pub use lines::LineMesh;
pub use mesh::{Mesh, MeshError};
