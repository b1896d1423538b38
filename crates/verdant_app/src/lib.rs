//! Window, event loop and configuration for Verdant programs.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use verdant_app::{App, AppConfig, AppContext, VerdantApp};
//!
//! struct Scene;
//!
//! impl VerdantApp for Scene {
//!     fn draw_3d(&mut self, renderer: &mut Renderer, ctx: &mut AppContext) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load_or_default(verdant_app::DEFAULT_CONFIG_PATH)?;
//!     verdant_app::logging::init(config.log_level)?;
//!     App::new(Scene).with_config(config).run()
//! }
//! ```

pub mod builder;
pub mod config;
pub mod context;
mod graphics;
pub mod logging;
mod runner;
pub mod traits;

pub use builder::{App, AppConfig};
pub use config::{ConfigError, ConfigFile, DEFAULT_CONFIG_PATH};
pub use context::AppContext;
pub use traits::VerdantApp;

// Re-exports so programs can depend on `verdant_app` alone.
pub use verdant_core::{
    primitives, CameraMode, CameraRig, Color, InputState, KeyCode, MouseButton, Time,
};
pub use verdant_core::glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use verdant_renderer::{
    DirectionalLight, GpuLines, GpuMesh, Material, MaterialDesc, MaterialShader, Renderer,
};
