//! First-person fly camera.
//!
//! Keyboard input translates the camera along its basis vectors, mouse
//! deltas steer yaw and pitch, and the scroll wheel adjusts the movement
//! speed.

use glam::{Mat4, Vec3};

const YAW: f32 = -90.0;
const PITCH: f32 = 0.0;
const SPEED: f32 = 2.5;
const SENSITIVITY: f32 = 0.1;
const ZOOM: f32 = 45.0;

/// Pitch is held inside this bound so the view never flips over the
/// vertical.
const PITCH_LIMIT: f32 = 89.0;
const SPEED_MIN: f32 = 0.01;
const SPEED_MAX: f32 = 0.1;
const SPEED_STEP: f32 = 0.01;

/// Movement directions understood by [`Camera::process_keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// A first-person camera with a yaw/pitch orientation model.
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    /// Yaw and pitch in degrees.
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    /// Field of view in degrees, used for the perspective projection.
    pub zoom: f32,
}

impl Camera {
    /// Creates a camera at the given position looking down the -Z axis.
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: YAW,
            pitch: PITCH,
            speed: SPEED,
            sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Returns the world-to-camera transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translates the camera along its basis, scaled by
    /// `speed * delta_time` so movement speed is independent of frame
    /// rate.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Applies a mouse delta to yaw and pitch and recomputes the basis.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch += y_offset * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Adjusts the movement speed in fixed steps, held to [0.01, 0.1]
    /// once inside that range.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        if y_offset > 0.0 && self.speed < SPEED_MAX {
            self.speed = (self.speed + SPEED_STEP).min(SPEED_MAX);
        }
        if y_offset < 0.0 && self.speed > SPEED_MIN {
            self.speed = (self.speed - SPEED_STEP).max(SPEED_MIN);
        }
    }

    /// Standard spherical-to-Cartesian conversion from yaw and pitch.
    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert!(camera.front.abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(camera.right.abs_diff_eq(Vec3::X, 1e-6));
        assert!(camera.up.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        for _ in 0..100 {
            camera.process_mouse_movement(3.0, 500.0);
        }
        assert!(camera.pitch <= 89.0);
        for _ in 0..300 {
            camera.process_mouse_movement(-3.0, -500.0);
        }
        assert!(camera.pitch >= -89.0);
    }

    #[test]
    fn forward_movement_scales_with_delta_time() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.speed = 1.0;
        let front = camera.front;
        camera.process_keyboard(CameraMovement::Forward, 0.5);
        assert!(camera.position.abs_diff_eq(front * 0.5, 1e-6));
    }

    #[test]
    fn view_matrix_is_look_at() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        let expected =
            Mat4::look_at_rh(camera.position, camera.position + camera.front, camera.up);
        assert_eq!(camera.view_matrix(), expected);
    }

    #[test]
    fn scroll_speed_stays_in_bounds() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.speed = 0.05;
        for _ in 0..50 {
            camera.process_mouse_scroll(1.0);
        }
        assert!((camera.speed - SPEED_MAX).abs() < 1e-6);
        for _ in 0..50 {
            camera.process_mouse_scroll(-1.0);
        }
        assert!((camera.speed - SPEED_MIN).abs() < 1e-6);
    }
}
