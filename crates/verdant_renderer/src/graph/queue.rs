//! Per-frame draw queue: staged instance transforms plus the commands that
//! reference them.
//!
//! Everything queued between two presents lives here.  The renderer drains
//! it in `render_to_view`; a frame that is never rendered must be dropped
//! with [`DrawQueue::clear`] so the next frame starts empty.
use std::ops::Range;

use glam::Mat4;

use crate::error::RenderError;
use crate::graph::{DrawCommand, LineCommand};
use crate::resources::InstanceStaging;

#[derive(Default)]
pub struct DrawQueue {
    staging: InstanceStaging,
    draws: Vec<DrawCommand>,
    lines: Vec<LineCommand>,
}

impl DrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages the first `count` transforms; see [`InstanceStaging::push`].
    pub fn push_instances(&mut self, transforms: &[Mat4], count: usize) -> Result<Range<u32>, RenderError> {
        self.staging.push(transforms, count)
    }

    pub fn push_draw(&mut self, draw: DrawCommand) {
        self.draws.push(draw);
    }

    pub fn push_lines(&mut self, lines: LineCommand) {
        self.lines.push(lines);
    }

    #[inline]
    pub fn staging(&self) -> &InstanceStaging {
        &self.staging
    }

    #[inline]
    pub fn instance_count(&self) -> usize {
        self.staging.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.staging.is_empty() && self.draws.is_empty() && self.lines.is_empty()
    }

    /// Moves the queued commands out; staged instances stay until
    /// [`DrawQueue::clear`] because they still have to be uploaded.
    pub fn take_commands(&mut self) -> (Vec<DrawCommand>, Vec<LineCommand>) {
        (std::mem::take(&mut self.draws), std::mem::take(&mut self.lines))
    }

    /// Drops everything queued so far.
    pub fn clear(&mut self) {
        self.staging.clear();
        self.draws.clear();
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::instance_buffer::MAX_INSTANCES_PER_FRAME;
    use glam::Vec3;

    fn field(n: usize) -> Vec<Mat4> {
        (0..n)
            .map(|i| Mat4::from_translation(Vec3::new(i as f32, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn cleared_frames_do_not_accumulate() {
        let blades = field(10_000);
        let mut queue = DrawQueue::new();
        // a long run of frames that never reach the surface
        for _ in 0..200 {
            let range = queue.push_instances(&blades, blades.len()).unwrap();
            assert_eq!(range, 0..10_000);
            queue.clear();
            assert!(queue.is_empty());
        }
        assert_eq!(queue.instance_count(), 0);
    }

    #[test]
    fn uncleared_frames_hit_the_instance_cap() {
        let blades = field(10_000);
        let mut queue = DrawQueue::new();
        let frames = MAX_INSTANCES_PER_FRAME / blades.len();
        for _ in 0..frames {
            queue.push_instances(&blades, blades.len()).unwrap();
        }
        let err = queue.push_instances(&blades, blades.len()).unwrap_err();
        assert!(matches!(err, RenderError::TooManyInstances(n) if n == (frames + 1) * 10_000));
        // the failed push leaves the queue untouched
        assert_eq!(queue.instance_count(), frames * 10_000);
    }

    #[test]
    fn take_commands_keeps_staged_instances() {
        let mut queue = DrawQueue::new();
        queue.push_instances(&field(3), 3).unwrap();
        let (draws, lines) = queue.take_commands();
        assert!(draws.is_empty() && lines.is_empty());
        assert_eq!(queue.instance_count(), 3);
        queue.clear();
        assert!(queue.is_empty());
    }
}
