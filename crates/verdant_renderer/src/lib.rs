//! `verdant_renderer`: GPU layer for Verdant.
//!
//! # Module layout
//!
//! | Module          | Responsibility                                        |
//! |-----------------|-------------------------------------------------------|
//! | `resources`     | Buffer/texture helpers, per-frame instance buffer     |
//! | `geometry`      | Vertex formats, `GpuMesh`, `GpuLines`                 |
//! | `pipeline`      | Bind-group layouts, mesh and line pipelines           |
//! | `render_target` | Depth + optional MSAA attachments                     |
//! | `frame`/`light` | Per-frame uniforms (camera, time, light)              |
//! | `material`      | `MaterialDesc` → `Material`                           |
//! | `graph`         | `RenderPass` trait + `FramePacket`                    |
//! | `passes`        | Built-in passes: `WorldPass`, `LinePass`              |
pub mod error;
pub mod frame;
pub mod geometry;
pub mod graph;
pub mod light;
pub mod material;
pub mod passes;
pub mod pipeline;
pub mod render_target;
pub mod resources;

pub use error::RenderError;
pub use geometry::{GpuLines, GpuMesh};
pub use graph::{FramePacket, RenderPass};
pub use light::DirectionalLight;
pub use material::{Material, MaterialDesc, MaterialShader};
pub use render_target::RenderTarget;
pub use verdant_core::context::EngineContext;

use std::collections::HashMap;
use std::sync::Arc;

use glam::Mat4;
use verdant_core::{Camera, Color, LineMesh, Mesh};

use frame::GpuFrame;
use graph::{DrawCommand, DrawQueue, LineCommand};
use passes::{LinePass, WorldPass};
use pipeline::{world, LinePipeline, MeshPipelineDesc, PipelineLayouts, LIT_SHADER};
use resources::InstanceBuffer;

const INITIAL_INSTANCE_CAPACITY: usize = 1024;

/// Top-level renderer.
///
/// Draw calls made during a frame are queued; [`Renderer::render_to_view`]
/// uploads the queued instance transforms, runs every registered pass, and
/// clears the queue.
pub struct Renderer {
    pub context: EngineContext,
    pub render_target: RenderTarget,
    /// Executed in insertion order every frame.
    pub passes: Vec<Box<dyn RenderPass>>,

    pub camera: Camera,
    pub light: DirectionalLight,
    pub clear_color: Color,

    format: wgpu::TextureFormat,
    layouts: PipelineLayouts,
    gpu_frame: GpuFrame,
    pipelines: HashMap<(MaterialShader, bool), Arc<wgpu::RenderPipeline>>,

    queue: DrawQueue,
    instances: InstanceBuffer,
    time: f32,
}

impl Renderer {
    /// Creates a renderer with the default world + line passes.
    pub fn new(
        context: EngineContext,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let device = &context.device;

        let render_target = RenderTarget::new(device, width, height, format, sample_count);
        let layouts = PipelineLayouts::new(device);

        let light = DirectionalLight::default();
        let gpu_frame = GpuFrame::new(device, &layouts.frame, &light);

        let line_pipeline =
            LinePipeline::new(device, format, render_target.sample_count(), &layouts);
        let passes: Vec<Box<dyn RenderPass>> = vec![
            Box::new(WorldPass::new()),
            Box::new(LinePass::new(line_pipeline)),
        ];

        let mut camera = Camera::default();
        camera.set_viewport_size(width, height);

        let instances = InstanceBuffer::new(device, INITIAL_INSTANCE_CAPACITY);

        log::info!(
            "renderer ready: {width}x{height} {format:?}, {}x MSAA",
            render_target.sample_count()
        );

        Self {
            context,
            render_target,
            passes,
            camera,
            light,
            clear_color: Color::RAY_WHITE,
            format,
            layouts,
            gpu_frame,
            pipelines: HashMap::new(),
            queue: DrawQueue::new(),
            instances,
            time: 0.0,
        }
    }

    // ── Resources ─────────────────────────────────────────────────────────────

    /// Uploads `mesh`, generating its normals first when it has none.
    pub fn upload_mesh(&self, label: &str, mesh: &mut Mesh, dynamic: bool) -> Result<GpuMesh, RenderError> {
        GpuMesh::upload(&self.context.device, label, mesh, dynamic)
    }

    pub fn upload_lines(&self, label: &str, lines: &LineMesh) -> Result<GpuLines, RenderError> {
        GpuLines::upload(&self.context.device, label, lines)
    }

    /// Builds a material, compiling its pipeline on first use of each
    /// shader/culling combination.
    pub fn create_material(&mut self, desc: MaterialDesc) -> Result<Material, RenderError> {
        let key = (desc.shader.clone(), desc.double_sided);
        let pipeline = match self.pipelines.get(&key) {
            Some(p) => p.clone(),
            None => {
                let (label, source) = match &desc.shader {
                    MaterialShader::Lit => ("Lit Pipeline", LIT_SHADER),
                    MaterialShader::Custom { label, source } => (&**label, &**source),
                };
                let pipeline = world::create_mesh_pipeline(
                    &self.context.device,
                    &MeshPipelineDesc {
                        label,
                        source,
                        double_sided: desc.double_sided,
                    },
                    self.format,
                    self.render_target.sample_count(),
                    &self.layouts,
                )?;
                self.pipelines.insert(key, pipeline.clone());
                pipeline
            }
        };
        Ok(Material::new(
            &self.context.device,
            &self.layouts.material,
            pipeline,
            &desc.label,
            desc.color,
        ))
    }

    // ── Draw queue ────────────────────────────────────────────────────────────

    /// Queues `count` instances of `mesh`, one per leading entry of
    /// `transforms`. A `count` of zero queues nothing.
    pub fn draw_mesh_instanced(
        &mut self,
        mesh: &GpuMesh,
        material: &Material,
        transforms: &[Mat4],
        count: usize,
    ) -> Result<(), RenderError> {
        let instances = self.queue.push_instances(transforms, count)?;
        if instances.is_empty() {
            return Ok(());
        }
        self.queue.push_draw(DrawCommand {
            vertex_buffer: mesh.vertex_buffer.clone(),
            index_buffer: mesh.index_buffer.clone(),
            index_count: mesh.index_count(),
            pipeline: material.pipeline.clone(),
            material_bind_group: material.bind_group.clone(),
            instances,
        });
        Ok(())
    }

    /// Queues a single instance of `mesh` at `transform`.
    pub fn draw_mesh(&mut self, mesh: &GpuMesh, material: &Material, transform: Mat4) -> Result<(), RenderError> {
        self.draw_mesh_instanced(mesh, material, &[transform], 1)
    }

    pub fn draw_lines(&mut self, lines: &GpuLines) {
        self.queue.push_lines(LineCommand {
            vertex_buffer: lines.vertex_buffer.clone(),
            vertex_count: lines.vertex_count(),
        });
    }

    /// Number of instances queued so far this frame.
    #[inline]
    pub fn queued_instances(&self) -> usize {
        self.queue.instance_count()
    }

    // ── Frame API ─────────────────────────────────────────────────────────────

    /// Elapsed seconds exposed to shaders as `frame.view_pos.w`.
    pub fn set_time(&mut self, seconds: f32) {
        self.time = seconds;
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Renders everything queued this frame into `view` and empties the queue.
    pub fn render_to_view(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let device = &self.context.device;
        let queue = &self.context.queue;

        self.gpu_frame.sync(queue, &self.camera, self.time, &self.light);
        self.instances.upload(device, queue, self.queue.staging());

        let (draws, lines) = self.queue.take_commands();
        let packet = FramePacket {
            clear_color: self.clear_color.to_wgpu(),
            frame_bind_group: self.gpu_frame.bind_group.clone(),
            instance_buffer: self.instances.buffer.clone(),
            draws,
            lines,
        };

        let (color_view, resolve_target) = self.render_target.color_views(view);
        let depth_view = self.render_target.depth_view();

        for pass in &mut self.passes {
            pass.prepare(device, queue, &packet);
            pass.execute(encoder, color_view, resolve_target, depth_view, &packet);
        }

        self.queue.clear();
    }

    /// Drops everything queued this frame without rendering it.  Call this
    /// whenever a frame is skipped after drawing (e.g. the surface was lost).
    pub fn discard_frame(&mut self) {
        if !self.queue.is_empty() {
            log::trace!("discarding {} queued instances", self.queue.instance_count());
        }
        self.queue.clear();
    }

    // ── Pass management ───────────────────────────────────────────────────────

    /// Appends a custom pass. Passes execute in insertion order.
    pub fn add_pass(&mut self, pass: Box<dyn RenderPass>) {
        self.passes.push(pass);
    }

    // ── Resize ────────────────────────────────────────────────────────────────

    /// Recreates size-dependent attachments and updates the camera aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.render_target.resize(&self.context.device, width, height);
        self.camera.set_viewport_size(width, height);
        for pass in &mut self.passes {
            pass.on_resize(&self.context.device, &self.context.queue, width, height);
        }
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }
}
