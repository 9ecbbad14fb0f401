//! Per-frame input snapshots.
//!
//! The render loop drains the SDL event pump into these structs once per
//! frame and pulls from them afterwards, keeping camera updates
//! synchronous and deterministic within a frame boundary.

use std::collections::HashSet;

use glam::Vec2;
use sdl2::{keyboard::Keycode, mouse::MouseButton};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the edge-triggered sets at the start of a frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn key_down(&mut self, key: Keycode) {
        self.down.insert(key);
        self.pressed.insert(key);
    }

    pub fn key_up(&mut self, key: Keycode) {
        self.down.remove(&key);
        self.released.insert(key);
    }
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    pub position: Vec2,
    /// Look delta accumulated this frame: +x right, +y up.
    pub delta: Vec2,
    pub scroll_delta: f32,
    pub down: HashSet<MouseButton>,
    pub pressed: HashSet<MouseButton>,
    pub released: HashSet<MouseButton>,
    seeded: bool,
}

impl MouseState {
    /// Clears the per-frame deltas and edge-triggered sets.
    pub fn begin_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
        self.pressed.clear();
        self.released.clear();
    }

    /// Records a motion event. The very first event only seeds the cursor
    /// state; its relative motion is discarded because it would read as a
    /// large spurious jump.
    pub fn push_motion(&mut self, position: Vec2, relative: Vec2) {
        self.position = position;
        if !self.seeded {
            self.seeded = true;
            return;
        }
        // Screen-space y grows downward, look-space y grows upward.
        self.delta += Vec2::new(relative.x, -relative.y);
    }

    pub fn push_scroll(&mut self, y: f32) {
        self.scroll_delta += y;
    }

    pub fn button_down(&mut self, button: MouseButton) {
        self.down.insert(button);
        self.pressed.insert(button);
    }

    pub fn button_up(&mut self, button: MouseButton) {
        self.down.remove(&button);
        self.released.insert(button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_motion_event_only_seeds() {
        let mut mouse = MouseState::default();
        mouse.push_motion(Vec2::new(640.0, 360.0), Vec2::new(640.0, 360.0));
        assert_eq!(mouse.delta, Vec2::ZERO);
        mouse.push_motion(Vec2::new(650.0, 355.0), Vec2::new(10.0, -5.0));
        assert_eq!(mouse.delta, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn deltas_accumulate_within_a_frame_and_reset() {
        let mut mouse = MouseState::default();
        mouse.push_motion(Vec2::ZERO, Vec2::ZERO);
        mouse.push_motion(Vec2::new(2.0, 1.0), Vec2::new(2.0, 1.0));
        mouse.push_motion(Vec2::new(5.0, 1.0), Vec2::new(3.0, 0.0));
        assert_eq!(mouse.delta, Vec2::new(5.0, -1.0));
        mouse.begin_frame();
        assert_eq!(mouse.delta, Vec2::ZERO);
    }

    #[test]
    fn pressed_is_edge_triggered_while_down_persists() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::W);
        assert!(keyboard.pressed.contains(&Keycode::W));
        assert!(keyboard.down.contains(&Keycode::W));
        keyboard.begin_frame();
        assert!(!keyboard.pressed.contains(&Keycode::W));
        assert!(keyboard.down.contains(&Keycode::W));
        keyboard.key_up(Keycode::W);
        assert!(!keyboard.down.contains(&Keycode::W));
        assert!(keyboard.released.contains(&Keycode::W));
    }
}
