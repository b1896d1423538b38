//! Growable vertex buffer holding every instance transform queued this frame.
//!
//! Draw calls append their transforms to an [`InstanceStaging`] on the CPU.
//! Once per frame the staging data is written to the GPU in a single
//! `write_buffer`, and each draw references its own contiguous range through
//! the `instances` argument of `draw_indexed`.
use std::ops::Range;
use std::sync::Arc;

use glam::Mat4;

use crate::error::RenderError;
use crate::geometry::InstanceRaw;

/// Largest number of instances accepted in one frame.
pub const MAX_INSTANCES_PER_FRAME: usize = 1 << 20;

/// CPU-side accumulation of instance transforms for the current frame.
#[derive(Default)]
pub struct InstanceStaging {
    data: Vec<InstanceRaw>,
}

impl InstanceStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the first `count` transforms and returns their instance range.
    ///
    /// Fails without queuing anything when fewer than `count` transforms are
    /// supplied.
    pub fn push(&mut self, transforms: &[Mat4], count: usize) -> Result<Range<u32>, RenderError> {
        if transforms.len() < count {
            return Err(RenderError::NotEnoughTransforms {
                needed: count,
                available: transforms.len(),
            });
        }
        if self.data.len() + count > MAX_INSTANCES_PER_FRAME {
            return Err(RenderError::TooManyInstances(self.data.len() + count));
        }
        let start = self.data.len() as u32;
        self.data.extend(transforms[..count].iter().map(InstanceRaw::from));
        Ok(start..self.data.len() as u32)
    }

    #[inline]
    pub fn as_slice(&self) -> &[InstanceRaw] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// GPU side of the per-frame instance data.
pub struct InstanceBuffer {
    pub buffer: Arc<wgpu::Buffer>,
    /// Current capacity in number of instances.
    capacity: usize,
}

impl InstanceBuffer {
    pub fn new(device: &wgpu::Device, initial_capacity: usize) -> Self {
        let capacity = initial_capacity.max(1);
        Self {
            buffer: Self::create_buffer(device, capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows (doubling) until `staging` fits, then uploads it.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, staging: &InstanceStaging) {
        if staging.is_empty() {
            return;
        }
        let needed = staging.len();
        if needed > self.capacity {
            self.capacity = grown_capacity(self.capacity, needed);
            self.buffer = Self::create_buffer(device, self.capacity);
            log::debug!("instance buffer grown to {} slots", self.capacity);
        }
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(staging.as_slice()));
    }

    fn create_buffer(device: &wgpu::Device, capacity: usize) -> Arc<wgpu::Buffer> {
        Arc::new(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (capacity * std::mem::size_of::<InstanceRaw>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }))
    }
}

/// Doubles `current` until it reaches `needed`.
fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut cap = current.max(1);
    while cap < needed {
        cap *= 2;
    }
    cap
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn transforms(n: usize) -> Vec<Mat4> {
        (0..n)
            .map(|i| Mat4::from_translation(Vec3::new(i as f32, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn ranges_are_contiguous() {
        let mut staging = InstanceStaging::new();
        assert_eq!(staging.push(&transforms(10), 10).unwrap(), 0..10);
        assert_eq!(staging.push(&transforms(4), 3).unwrap(), 10..13);
        assert_eq!(staging.len(), 13);
        // only the first `count` transforms are taken
        assert_eq!(staging.as_slice()[12].model[3][0], 2.0);
    }

    #[test]
    fn short_transform_slice_is_rejected() {
        let mut staging = InstanceStaging::new();
        let err = staging.push(&transforms(2), 5).unwrap_err();
        assert!(matches!(err, RenderError::NotEnoughTransforms { needed: 5, available: 2 }));
        assert!(staging.is_empty());
    }

    #[test]
    fn zero_count_queues_nothing() {
        let mut staging = InstanceStaging::new();
        let range = staging.push(&[], 0).unwrap();
        assert!(range.is_empty());
        assert!(staging.is_empty());
    }

    #[test]
    fn instance_cap_is_enforced() {
        let mut staging = InstanceStaging::new();
        let batch = transforms(1 << 16);
        for _ in 0..(MAX_INSTANCES_PER_FRAME >> 16) {
            staging.push(&batch, batch.len()).unwrap();
        }
        assert_eq!(staging.len(), MAX_INSTANCES_PER_FRAME);

        let err = staging.push(&batch, 1).unwrap_err();
        assert!(matches!(err, RenderError::TooManyInstances(n) if n == MAX_INSTANCES_PER_FRAME + 1));
        assert_eq!(staging.len(), MAX_INSTANCES_PER_FRAME);

        staging.clear();
        assert_eq!(staging.push(&batch, 1).unwrap(), 0..1);
    }

    #[test]
    fn capacity_doubles() {
        assert_eq!(grown_capacity(1024, 1025), 2048);
        assert_eq!(grown_capacity(1024, 10_000), 16_384);
        assert_eq!(grown_capacity(0, 3), 4);
        assert_eq!(grown_capacity(8, 8), 8);
    }
}
