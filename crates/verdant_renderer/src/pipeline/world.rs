//! Instanced mesh pipelines.
//!
//! Every mesh pipeline reads [`Vertex`] from slot 0 and [`InstanceRaw`] from
//! slot 1, binds the frame group at 0 and the material group at 1, and
//! writes depth. Only the shader source and the cull mode vary.
use std::sync::Arc;

use crate::error::RenderError;
use crate::geometry::{InstanceRaw, Vertex};
use crate::pipeline::PipelineLayouts;
use crate::render_target::DepthTarget;

/// Built-in Lambert + ambient shader.
pub const LIT_SHADER: &str = include_str!("../../../../assets/shaders/lit.wgsl");

pub struct MeshPipelineDesc<'a> {
    pub label: &'a str,
    pub source: &'a str,
    /// Disables back-face culling (thin geometry such as grass blades).
    pub double_sided: bool,
}

impl MeshPipelineDesc<'_> {
    #[inline]
    pub fn cull_mode(&self) -> Option<wgpu::Face> {
        if self.double_sided {
            None
        } else {
            Some(wgpu::Face::Back)
        }
    }
}

/// Compiles `desc.source` and links it into a render pipeline.
///
/// Shader and pipeline validation errors are captured with an error scope
/// and returned as [`RenderError::Shader`].
pub fn create_mesh_pipeline(
    device: &wgpu::Device,
    desc: &MeshPipelineDesc<'_>,
    target_format: wgpu::TextureFormat,
    sample_count: u32,
    layouts: &PipelineLayouts,
) -> Result<Arc<wgpu::RenderPipeline>, RenderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(desc.label),
        source: wgpu::ShaderSource::Wgsl(desc.source.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Mesh Pipeline Layout"),
        bind_group_layouts: &[&layouts.frame, &layouts.material],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout(), InstanceRaw::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: desc.cull_mode(),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DepthTarget::FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: sample_count,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(RenderError::Shader {
            label: desc.label.to_string(),
            message: err.to_string(),
        });
    }
    log::debug!("compiled mesh pipeline `{}`", desc.label);
    Ok(Arc::new(pipeline))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_sided_disables_culling() {
        let desc = MeshPipelineDesc {
            label: "grass",
            source: LIT_SHADER,
            double_sided: true,
        };
        assert_eq!(desc.cull_mode(), None);
        let desc = MeshPipelineDesc { double_sided: false, ..desc };
        assert_eq!(desc.cull_mode(), Some(wgpu::Face::Back));
    }

    #[test]
    fn lit_shader_declares_entry_points() {
        assert!(LIT_SHADER.contains("fn vs_main"));
        assert!(LIT_SHADER.contains("fn fs_main"));
        assert!(LIT_SHADER.contains("@location(6)"));
    }
}
