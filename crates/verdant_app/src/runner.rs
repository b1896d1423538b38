use std::sync::Arc;

use anyhow::Context as _;
use verdant_core::{InputState, KeyCode, TimeClock};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::builder::AppConfig;
use crate::context::AppContext;
use crate::graphics::GraphicsState;
use crate::traits::VerdantApp;

// `app` is declared first so it (and every GPU resource it owns) is dropped
// before the graphics state.
struct Runner<A: VerdantApp> {
    app: A,
    config: AppConfig,
    window: Option<Arc<Window>>,
    graphics: Option<GraphicsState>,
    input: InputState,
    window_size: (u32, u32),
    clock: TimeClock,
    /// First fatal error; stops the loop and is returned from `run`.
    error: Option<anyhow::Error>,
}

impl<A: VerdantApp> Runner<A> {
    fn new(app: A, config: AppConfig) -> Self {
        Self {
            app,
            config,
            window: None,
            graphics: None,
            input: InputState::new(),
            window_size: (0, 0),
            clock: TimeClock::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );
        let size = window.inner_size();
        self.window_size = (size.width, size.height);

        let mut gfx = pollster::block_on(GraphicsState::new(window.clone(), &self.config))?;

        {
            let time = self.clock.peek();
            let mut ctx = AppContext {
                input: &mut self.input,
                time,
                window_size: self.window_size,
                window: &window,
                renderer: Some(&mut gfx.renderer),
                exit_requested: false,
            };
            self.app.setup(&mut ctx).context("setup failed")?;
            if ctx.exit_requested {
                event_loop.exit();
            }
        }

        log::info!("entering main loop");
        self.window = Some(window);
        self.graphics = Some(gfx);
        Ok(())
    }

    /// Runs one update/draw/present cycle.
    fn frame(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let (Some(gfx), Some(window)) = (&mut self.graphics, &self.window) else {
            return Ok(());
        };

        let time = self.clock.tick();
        if let Some(fps) = self.clock.take_average_fps() {
            window.set_title(&format!("{} - {fps:.0} FPS", self.config.title));
        }

        // ── 1. UPDATE ────────────────────────────────────────────────────────
        {
            let mut ctx = AppContext {
                input: &mut self.input,
                time,
                window_size: self.window_size,
                window,
                renderer: Some(&mut gfx.renderer),
                exit_requested: false,
            };
            self.app.update(&mut ctx);
            if ctx.exit_requested {
                event_loop.exit();
                return Ok(());
            }
        }

        // ── 2. DRAW 3D ───────────────────────────────────────────────────────
        gfx.renderer.set_time(time.elapsed as f32);
        {
            let mut ctx = AppContext {
                input: &mut self.input,
                time,
                window_size: self.window_size,
                window,
                // handed to draw_3d explicitly
                renderer: None,
                exit_requested: false,
            };
            self.app
                .draw_3d(&mut gfx.renderer, &mut ctx)
                .context("draw failed")?;
            if ctx.exit_requested {
                event_loop.exit();
            }
        }

        // ── 3. PRESENT ────────────────────────────────────────────────────────
        // Early returns below must discard what draw_3d queued.
        let frame = match gfx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                gfx.renderer.discard_frame();
                gfx.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                anyhow::bail!("surface out of memory");
            }
            Err(e) => {
                log::warn!("skipping frame: {e}");
                gfx.renderer.discard_frame();
                return Ok(());
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gfx.renderer.begin_frame();
        gfx.renderer.render_to_view(&mut encoder, &view);
        gfx.renderer.context.queue.submit(Some(encoder.finish()));
        frame.present();

        // just_pressed and mouse deltas are valid until here
        self.input.end_frame();
        window.request_redraw();
        Ok(())
    }
}

impl<A: VerdantApp> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(window) = self.window.clone() {
            let time = self.clock.peek();
            let mut ctx = AppContext {
                input: &mut self.input,
                time,
                window_size: self.window_size,
                window: &window,
                renderer: self.graphics.as_mut().map(|g| &mut g.renderer),
                exit_requested: false,
            };
            self.app.on_window_event(&event, &mut ctx);
            if ctx.exit_requested {
                event_loop.exit();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    self.input.update_key(code, pressed);
                    if pressed && code == KeyCode::Escape && self.config.exit_on_escape {
                        log::info!("escape pressed, exiting");
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input
                    .update_mouse_button(button, state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.set_mouse_position(position.x, position.y);
            }
            WindowEvent::Resized(size) => {
                let new_size = (size.width, size.height);
                self.window_size = new_size;
                if let (Some(gfx), Some(window)) = (&mut self.graphics, self.window.clone()) {
                    gfx.resize(size.width, size.height);
                    let time = self.clock.peek();
                    let mut ctx = AppContext {
                        input: &mut self.input,
                        time,
                        window_size: new_size,
                        window: &window,
                        renderer: Some(&mut gfx.renderer),
                        exit_requested: false,
                    };
                    self.app.on_resize(new_size, &mut ctx);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.frame(event_loop) {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.add_mouse_motion(dx, dy);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

pub(crate) fn run_internal<A: VerdantApp + 'static>(config: AppConfig, app: A) -> anyhow::Result<()> {
    let mut runner = Runner::new(app, config);
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    // Poll = spin the loop as fast as possible; no sleeping between frames.
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut runner)?;

    match runner.error.take() {
        Some(err) => Err(err),
        None => {
            log::info!("shut down cleanly");
            Ok(())
        }
    }
}
