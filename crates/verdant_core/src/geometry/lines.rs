//! Coloured line segments, consumed in pairs (line-list topology).
use glam::Vec3;

use crate::color::Color;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineMesh {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Color>,
}

impl LineMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one segment from `a` to `b`.
    pub fn push(&mut self, a: Vec3, b: Vec3, color: Color) {
        self.positions.extend([a, b]);
        self.colors.extend([color, color]);
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
