//! verdant_core: CPU-side building blocks shared by the renderer and the demos.
//!
//! Nothing in this crate touches the GPU unless the `gpu` feature is on, and
//! nothing touches the window system unless `input` is on.

pub mod color;
pub mod geometry;
pub mod instancing;
pub mod scene;
pub mod time;

#[cfg(feature = "gpu")]
pub mod context;

#[cfg(feature = "input")]
pub mod input;

pub use color::Color;
pub use geometry::{primitives, LineMesh, Mesh, MeshError};
pub use instancing::ScatterParams;
pub use scene::Camera;
pub use time::{Time, TimeClock};

#[cfg(feature = "input")]
pub use input::{InputState, KeyCode, MouseButton};
#[cfg(feature = "input")]
pub use scene::{CameraMode, CameraRig};

pub use glam;
