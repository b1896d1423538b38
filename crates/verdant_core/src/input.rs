use std::collections::HashSet;

/// Re-exported key and mouse enums from `winit` so callers don't need a
/// direct winit dependency.
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// State of the keyboard and mouse at a given moment.
///
/// The runner feeds it the events coming from `winit`; the camera rig and
/// the demos query it.
#[derive(Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    mouse_pos: (f64, f64),
    /// raw motion accumulated since the last `consume_mouse_delta`
    mouse_delta: (f32, f32),
}

impl InputState {
    /// Creates a fresh, empty input state.
    pub fn new() -> Self {
        Default::default()
    }

    /// Called by the event loop when a keyboard event arrives.
    pub fn update_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.keys_down.insert(key) {
                self.keys_pressed.insert(key);
            }
        } else {
            self.keys_down.remove(&key);
        }
    }

    /// Returns true while the given key is held down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns true only on the frame the key went down.
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Called by the event loop when a mouse button event arrives.
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(button);
        } else {
            self.mouse_buttons.remove(&button);
        }
    }

    /// Returns true if the given mouse button is currently held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// Update the current mouse cursor position (window coordinates).
    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        self.mouse_pos = (x, y);
    }

    /// Retrieve the last recorded mouse position.
    pub fn mouse_position(&self) -> (f64, f64) {
        self.mouse_pos
    }

    /// Accumulate raw device motion (not clamped to the window).
    pub fn add_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.mouse_delta.0 += dx as f32;
        self.mouse_delta.1 += dy as f32;
    }

    /// Retrieve and reset the mouse movement delta (in pixels) since the
    /// last call.
    pub fn consume_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Clears per-frame edge state.  The runner calls this after every frame.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_tracking() {
        let mut state = InputState::new();
        assert!(!state.is_key_pressed(KeyCode::KeyW));
        state.update_key(KeyCode::KeyW, true);
        assert!(state.is_key_pressed(KeyCode::KeyW));
        assert!(state.just_pressed(KeyCode::KeyW));
        state.end_frame();
        assert!(!state.just_pressed(KeyCode::KeyW));
        // key repeat does not re-trigger the edge
        state.update_key(KeyCode::KeyW, true);
        assert!(!state.just_pressed(KeyCode::KeyW));
        state.update_key(KeyCode::KeyW, false);
        assert!(!state.is_key_pressed(KeyCode::KeyW));
    }

    #[test]
    fn mouse_tracking() {
        let mut state = InputState::new();
        assert!(!state.is_button_down(MouseButton::Right));
        state.update_mouse_button(MouseButton::Right, true);
        assert!(state.is_button_down(MouseButton::Right));
        state.set_mouse_position(10.0, 20.0);
        assert_eq!(state.mouse_position(), (10.0, 20.0));
        state.add_mouse_motion(3.0, -1.0);
        state.add_mouse_motion(2.0, 6.0);
        assert_eq!(state.consume_mouse_delta(), (5.0, 5.0));
        // consumption resets
        assert_eq!(state.consume_mouse_delta(), (0.0, 0.0));
    }
}
