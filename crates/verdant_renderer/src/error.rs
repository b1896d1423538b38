use thiserror::Error;
use verdant_core::MeshError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("mesh `{0}` has no geometry to upload")]
    EmptyMesh(String),
    #[error("instanced draw needs {needed} transforms but only {available} were supplied")]
    NotEnoughTransforms { needed: usize, available: usize },
    #[error("instance count {0} exceeds the per-frame limit")]
    TooManyInstances(usize),
    #[error("shader `{label}` failed validation: {message}")]
    Shader { label: String, message: String },
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
