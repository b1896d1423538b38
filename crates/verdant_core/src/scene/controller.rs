use std::collections::HashMap;

use glam::{Mat3, Vec3};

use crate::input::{InputState, KeyCode, MouseButton};
use crate::scene::Camera;

/// How a [`CameraRig`] moves its camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Fly with the bound keys; hold the right mouse button to look around.
    Free,
    /// Circle the target automatically at `angular_speed` radians per second,
    /// keeping the current radius and height.
    Orbital { angular_speed: f32 },
}

/// Maps keys to camera-space directions and applies one frame of motion.
///
/// Free mode uses WASD for the horizontal plane and Space / Left Ctrl for
/// vertical motion by default.
///
/// # Example
/// ```rust,ignore
/// use verdant_core::{CameraMode, CameraRig};
///
/// let mut rig = CameraRig::new(CameraMode::Free);
/// rig.speed = 10.0;
/// rig.update(&mut camera, &mut input, ctx.time.delta);
/// ```
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub mode: CameraMode,
    /// Key → camera-space direction (x = right, y = up, z = forward).
    mappings: HashMap<KeyCode, Vec3>,
    /// Translation speed in world-units per second.
    pub speed: f32,
    /// Look sensitivity in radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
}

impl CameraRig {
    pub fn new(mode: CameraMode) -> Self {
        let mut mappings = HashMap::new();
        mappings.insert(KeyCode::KeyW, Vec3::Z);
        mappings.insert(KeyCode::KeyS, Vec3::NEG_Z);
        mappings.insert(KeyCode::KeyA, Vec3::NEG_X);
        mappings.insert(KeyCode::KeyD, Vec3::X);
        mappings.insert(KeyCode::Space, Vec3::Y);
        mappings.insert(KeyCode::ControlLeft, Vec3::NEG_Y);
        Self {
            mode,
            mappings,
            speed: 5.0,
            mouse_sensitivity: 0.003,
        }
    }

    /// Orbital rig with the classic half a radian per second.
    pub fn orbital() -> Self {
        Self::new(CameraMode::Orbital { angular_speed: 0.5 })
    }

    /// Binds `key` to a camera-space direction, replacing any older binding.
    pub fn bind(&mut self, key: KeyCode, dir: Vec3) {
        self.mappings.insert(key, dir);
    }

    /// Sum of the directions whose keys are held.  Not normalised.
    pub fn direction(&self, input: &InputState) -> Vec3 {
        self.mappings
            .iter()
            .filter(|(key, _)| input.is_key_pressed(**key))
            .map(|(_, dir)| *dir)
            .sum()
    }

    /// Applies one frame of motion.  `dt` is elapsed time in seconds.
    pub fn update(&self, camera: &mut Camera, input: &mut InputState, dt: f32) {
        match self.mode {
            CameraMode::Free => self.fly(camera, input, dt),
            CameraMode::Orbital { angular_speed } => orbit(camera, angular_speed * dt),
        }
    }

    fn fly(&self, camera: &mut Camera, input: &mut InputState, dt: f32) {
        let forward = (camera.target - camera.eye).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let right = forward.cross(camera.up).normalize_or_zero();

        // ── Translation ───────────────────────────────────────────────────
        let dir = self.direction(input);
        if dir.length_squared() > 1e-6 {
            let world = (forward * dir.z + right * dir.x + camera.up * dir.y).normalize_or_zero();
            let disp = world * self.speed * dt;
            camera.eye += disp;
            camera.target += disp;
        }

        // ── Right-drag look ───────────────────────────────────────────────
        let (dx, dy) = input.consume_mouse_delta();
        if !input.is_button_down(MouseButton::Right) || (dx == 0.0 && dy == 0.0) {
            return;
        }
        let yaw = Mat3::from_axis_angle(camera.up, -dx * self.mouse_sensitivity);
        let look = yaw * forward;

        // Stop just short of the poles so `right` never degenerates.
        const LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
        let pitch_now = look.dot(camera.up).clamp(-1.0, 1.0).asin();
        let pitch = (-dy * self.mouse_sensitivity).clamp(-LIMIT - pitch_now, LIMIT - pitch_now);
        let look = Mat3::from_axis_angle(right, pitch) * look;

        let distance = (camera.target - camera.eye).length();
        camera.target = camera.eye + look.normalize() * distance;
    }
}

/// Rotates the eye about the target's vertical axis by `angle` radians.
fn orbit(camera: &mut Camera, angle: f32) {
    let offset = camera.eye - camera.target;
    camera.eye = camera.target + Mat3::from_rotation_y(angle) * offset;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::looking_at(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO, 60.0)
    }

    #[test]
    fn orbit_preserves_radius_and_height() {
        let rig = CameraRig::orbital();
        let mut cam = camera();
        let mut input = InputState::new();
        for _ in 0..100 {
            rig.update(&mut cam, &mut input, 0.016);
        }
        assert!((cam.eye.y - 10.0).abs() < 1e-4);
        let radius = Vec3::new(cam.eye.x, 0.0, cam.eye.z).length();
        assert!((radius - 10.0).abs() < 1e-3);
        assert_ne!(cam.eye, camera().eye);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn free_mode_moves_forward_with_w() {
        let rig = CameraRig::new(CameraMode::Free);
        let mut cam = camera();
        let mut input = InputState::new();
        input.update_key(KeyCode::KeyW, true);
        let before = (cam.target - cam.eye).length();
        rig.update(&mut cam, &mut input, 1.0);
        assert!(cam.eye.z < 10.0);
        // eye and target move together
        assert!(((cam.target - cam.eye).length() - before).abs() < 1e-4);
    }

    #[test]
    fn free_mode_ignores_motion_without_right_button() {
        let rig = CameraRig::new(CameraMode::Free);
        let mut cam = camera();
        let mut input = InputState::new();
        input.add_mouse_motion(50.0, 0.0);
        rig.update(&mut cam, &mut input, 0.016);
        assert_eq!(cam, camera());
        // the delta was consumed rather than saved for later
        assert_eq!(input.consume_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn free_look_turns_the_target() {
        let rig = CameraRig::new(CameraMode::Free);
        let mut cam = camera();
        let mut input = InputState::new();
        input.update_mouse_button(MouseButton::Right, true);
        input.add_mouse_motion(100.0, 0.0);
        rig.update(&mut cam, &mut input, 0.016);
        assert_eq!(cam.eye, camera().eye);
        assert!(cam.target.x > 0.0);
    }
}
