//! Camera state and the input-driven rig that moves it.

pub mod camera;
#[cfg(feature = "input")]
pub mod controller;

pub use camera::Camera;
#[cfg(feature = "input")]
pub use controller::{CameraMode, CameraRig};
