use verdant_core::{InputState, Time};
use verdant_renderer::Renderer;
use winit::window::Window;

/// Per-frame context passed to every [`crate::VerdantApp`] callback.
pub struct AppContext<'a> {
    /// Keyboard and mouse state for this frame. Mutable so camera rigs can
    /// consume the accumulated mouse motion.
    pub input: &'a mut InputState,

    /// Frame timing: delta, elapsed, FPS.
    pub time: Time,

    /// Current window size in physical pixels.
    pub window_size: (u32, u32),

    pub window: &'a Window,

    /// Renderer access in `setup` and `update`. `None` inside `draw_3d`,
    /// which receives the renderer as an explicit argument.
    pub renderer: Option<&'a mut Renderer>,

    pub(crate) exit_requested: bool,
}

impl<'a> AppContext<'a> {
    /// Stops the event loop after the current frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn renderer(&mut self) -> Option<&mut Renderer> {
        self.renderer.as_deref_mut()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.window_size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.window_size.1
    }
}
