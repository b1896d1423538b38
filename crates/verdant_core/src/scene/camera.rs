use glam::{Mat4, Vec3};

/// Perspective camera shared by the renderer and the demos.
///
/// Applications mutate it directly (or through a `CameraRig`); the renderer
/// reads it once per frame to fill the per-frame uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // --- view parameters --------------------------------------------------
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    // --- projection parameters --------------------------------------------
    /// Vertical field of view in radians.
    pub fovy: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0f32.to_radians(),
            aspect: 1.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Perspective camera looking from `eye` at `target` with a vertical field
    /// of view given in degrees.
    pub fn looking_at(eye: Vec3, target: Vec3, fovy_degrees: f32) -> Self {
        Self {
            eye,
            target,
            fovy: fovy_degrees.to_radians(),
            ..Default::default()
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar)
    }

    /// Build the combined view-projection matrix from the current parameters.
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update aspect ratio when viewport dimensions change.  Zero-height
    /// viewports (minimised windows) are ignored.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_screen_centre() {
        let cam = Camera::looking_at(Vec3::new(10.0, 5.0, 10.0), Vec3::new(0.0, 1.0, 0.0), 60.0);
        let clip = cam.build_view_projection_matrix() * cam.target.extend(1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn zero_height_keeps_aspect() {
        let mut cam = Camera::default();
        cam.set_viewport_size(800, 600);
        let aspect = cam.aspect;
        cam.set_viewport_size(800, 0);
        assert_eq!(cam.aspect, aspect);
    }
}
