//! One directional light plus a flat ambient term.
use glam::Vec3;
use verdant_core::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Where the light "sits"; only the direction towards `target` matters.
    pub position: Vec3,
    pub target: Vec3,
    pub color: Color,
    /// Ambient intensity added to every lit surface, in `[0, 1]`.
    pub ambient: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(20.0, 20.0, 0.0),
            target: Vec3::ZERO,
            color: Color::WHITE,
            ambient: 0.2,
        }
    }
}

impl DirectionalLight {
    pub fn new(position: Vec3, target: Vec3, color: Color) -> Self {
        Self {
            position,
            target,
            color,
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient.clamp(0.0, 1.0);
        self
    }

    /// Unit direction the light travels in. Falls back to straight down when
    /// `position == target`.
    pub fn direction(&self) -> Vec3 {
        let dir = (self.target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            Vec3::NEG_Y
        } else {
            dir
        }
    }
}

/// std140 image of [`DirectionalLight`] (binding 1 of group 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// xyz = direction, w unused.
    pub direction: [f32; 4],
    pub color: [f32; 4],
    /// rgb = ambient colour, a = 1.
    pub ambient: [f32; 4],
}

impl From<&DirectionalLight> for LightUniform {
    fn from(light: &DirectionalLight) -> Self {
        let a = light.ambient;
        Self {
            direction: light.direction().extend(0.0).to_array(),
            color: light.color.to_array(),
            ambient: [a, a, a, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_points_from_position_to_target() {
        let light = DirectionalLight::new(Vec3::new(10.0, 10.0, 0.0), Vec3::ZERO, Color::WHITE);
        let d = light.direction();
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!(d.x < 0.0 && d.y < 0.0);
        assert_eq!(d.z, 0.0);
    }

    #[test]
    fn coincident_points_fall_back_to_down() {
        let light = DirectionalLight::new(Vec3::ONE, Vec3::ONE, Color::WHITE);
        assert_eq!(light.direction(), Vec3::NEG_Y);
    }

    #[test]
    fn uniform_carries_ambient() {
        let u = LightUniform::from(&DirectionalLight::default().with_ambient(0.2));
        assert_eq!(u.ambient, [0.2, 0.2, 0.2, 1.0]);
        assert_eq!(std::mem::size_of::<LightUniform>(), 48);
    }
}
