use verdant_renderer::Renderer;

use crate::context::AppContext;

/// The trait every Verdant program implements.
///
/// All methods have defaults, so a program only overrides what it needs.
/// Errors returned from `setup` or `draw_3d` stop the event loop and are
/// returned from [`crate::App::run`].
///
/// ```rust,ignore
/// struct Field { blade: Option<GpuMesh> }
///
/// impl VerdantApp for Field {
///     fn setup(&mut self, ctx: &mut AppContext) -> anyhow::Result<()> {
///         let renderer = ctx.renderer().context("no renderer")?;
///         let mut mesh = primitives::grass_blade()?;
///         self.blade = Some(renderer.upload_mesh("blade", &mut mesh, false)?);
///         Ok(())
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait VerdantApp {
    /// Called once after the window and GPU are ready, before the first
    /// frame.
    fn setup(&mut self, ctx: &mut AppContext) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called every frame before drawing.
    fn update(&mut self, ctx: &mut AppContext) {}

    /// Queue this frame's draws on `renderer`.
    fn draw_3d(&mut self, renderer: &mut Renderer, ctx: &mut AppContext) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called after the surface and renderer have been resized.
    fn on_resize(&mut self, new_size: (u32, u32), ctx: &mut AppContext) {}

    /// Called for every raw winit `WindowEvent`.
    fn on_window_event(&mut self, event: &winit::event::WindowEvent, ctx: &mut AppContext) {}
}
