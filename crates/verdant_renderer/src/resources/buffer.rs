//! Thin wrappers over `wgpu::Buffer` creation that enforce common usage
//! patterns and remove boilerplate from higher-level modules.
use std::sync::Arc;
use wgpu::util::DeviceExt;

/// Creates a GPU uniform buffer initialised with `data`.
///
/// The buffer is created with `UNIFORM | COPY_DST` so it can be rewritten
/// every frame.
pub fn create_uniform<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &T,
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        }),
    )
}

/// Creates a GPU vertex buffer from a slice of `Pod` data.  `extra` is OR-ed
/// into the usage (e.g. `COPY_DST` for dynamic geometry).
pub fn create_vertex<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
    extra: wgpu::BufferUsages,
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::VERTEX | extra,
        }),
    )
}

/// Creates a GPU index buffer from a slice of `u16` indices.
pub fn create_index(
    device: &wgpu::Device,
    label: &str,
    data: &[u16],
    extra: wgpu::BufferUsages,
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::INDEX | extra,
        }),
    )
}

/// Writes `data` to an existing uniform buffer.
pub fn update_uniform<T: bytemuck::Pod>(queue: &wgpu::Queue, buffer: &wgpu::Buffer, data: &T) {
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(data));
}
