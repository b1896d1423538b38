//! Surface appearance: a base colour plus the pipeline that shades it.
use std::borrow::Cow;
use std::sync::Arc;

use verdant_core::Color;

use crate::resources::buffer;

/// Which WGSL program a material runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MaterialShader {
    /// Built-in Lambert + ambient shader.
    Lit,
    /// User WGSL source. Must expose `vs_main`/`fs_main` and the bind groups
    /// and vertex locations documented in [`crate::pipeline::PipelineLayouts`].
    Custom {
        label: Cow<'static, str>,
        source: Cow<'static, str>,
    },
}

impl MaterialShader {
    pub fn custom(label: impl Into<Cow<'static, str>>, source: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom {
            label: label.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MaterialDesc {
    pub label: String,
    pub color: Color,
    pub shader: MaterialShader,
    /// Draw both faces of every triangle.
    pub double_sided: bool,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            label: "material".to_string(),
            color: Color::WHITE,
            shader: MaterialShader::Lit,
            double_sided: false,
        }
    }
}

impl MaterialDesc {
    pub fn lit(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            ..Default::default()
        }
    }

    pub fn with_shader(mut self, shader: MaterialShader) -> Self {
        self.shader = shader;
        self
    }

    pub fn double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub color: [f32; 4],
}

/// A material ready to draw with. Cheap to clone; clones share GPU state.
#[derive(Clone)]
pub struct Material {
    pub(crate) pipeline: Arc<wgpu::RenderPipeline>,
    pub(crate) bind_group: Arc<wgpu::BindGroup>,
    buffer: Arc<wgpu::Buffer>,
    color: Color,
}

impl Material {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        pipeline: Arc<wgpu::RenderPipeline>,
        label: &str,
        color: Color,
    ) -> Self {
        let buffer = buffer::create_uniform(
            device,
            &format!("{label} Material Uniform"),
            &MaterialUniform { color: color.to_array() },
        );
        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        }));
        Self {
            pipeline,
            bind_group,
            buffer,
            color,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Rewrites the material colour; visible from the next submitted frame.
    pub fn set_color(&mut self, queue: &wgpu::Queue, color: Color) {
        self.color = color;
        buffer::update_uniform(queue, &self.buffer, &MaterialUniform { color: color.to_array() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_desc_defaults_to_single_sided() {
        let desc = MaterialDesc::lit("plane", Color::WHITE);
        assert_eq!(desc.shader, MaterialShader::Lit);
        assert!(!desc.double_sided);
    }

    #[test]
    fn builder_sets_custom_shader() {
        let desc = MaterialDesc::lit("grass", Color::GREEN)
            .with_shader(MaterialShader::custom("sway", "// wgsl"))
            .double_sided(true);
        assert!(desc.double_sided);
        assert!(matches!(desc.shader, MaterialShader::Custom { ref label, .. } if label == "sway"));
    }
}
