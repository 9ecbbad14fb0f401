//! Per-frame rendering of the tabletop scene.

use glam::Mat4;
use glow::HasContext;

use crate::camera::Camera;
use crate::geometry::ShapeKind;
use crate::scene::Scene;

/// Near plane of the perspective projection.
const NEAR: f32 = 0.1;
/// Far plane of the perspective projection.
const FAR: f32 = 100.0;
/// Divisor applied to the fixed orthographic view volume.
const ORTHO_SCALE: f32 = 120.0;

/// Drives the frame sequence: clear, draw the five textured entries with
/// the scene program, then the lamp marker with the lamp program.
pub struct Renderer {
    width: u32,
    height: u32,
    /// Perspective projection when true, the fixed orthographic volume
    /// otherwise.
    pub perspective: bool,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            perspective: true,
        }
    }

    /// Tracks the drawable size for the projection aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Switches between the perspective and orthographic projections.
    pub fn toggle_projection(&mut self) {
        self.perspective = !self.perspective;
    }

    /// Camera-to-clip transform for the current projection mode.
    pub fn projection(&self, fov_degrees: f32) -> Mat4 {
        if self.perspective {
            Mat4::perspective_rh_gl(
                fov_degrees.to_radians(),
                self.width as f32 / self.height as f32,
                NEAR,
                FAR,
            )
        } else {
            Mat4::orthographic_rh_gl(
                800.0 / ORTHO_SCALE,
                -800.0 / ORTHO_SCALE,
                -600.0 / ORTHO_SCALE,
                600.0 / ORTHO_SCALE,
                -2.5,
                6.5,
            )
        }
    }

    /// Renders one frame. The caller presents it by swapping the window
    /// buffers afterwards.
    pub fn render(&self, gl: &glow::Context, scene: &Scene, camera: &Camera) {
        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let view = camera.view_matrix();
        let projection = self.projection(camera.zoom);

        scene.scene_program.use_program();
        scene.scene_program.set_uniform("view", view);
        scene.scene_program.set_uniform("projection", projection);
        scene.scene_program.set_uniform("lightColor", scene.light.color);
        scene.scene_program.set_uniform("lightPos", scene.light.position);
        scene.scene_program.set_uniform("viewPosition", camera.position);
        scene.scene_program.set_uniform("uvScale", scene.uv_scale);

        for entry in &scene.entries {
            scene.texture(entry.texture).bind_to_unit(0);
            scene.scene_program.set_uniform("model", entry.transform.matrix());
            scene.mesh(entry.shape).draw();
        }

        scene.lamp_program.use_program();
        scene.lamp_program.set_uniform("model", scene.lamp_transform.matrix());
        scene.lamp_program.set_uniform("view", view);
        scene.lamp_program.set_uniform("projection", projection);
        scene.mesh(ShapeKind::LampMarker).draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_perspective() {
        let renderer = Renderer::new(1280, 720);
        assert!(renderer.perspective);
        let expected = Mat4::perspective_rh_gl(45f32.to_radians(), 1280.0 / 720.0, 0.1, 100.0);
        assert_eq!(renderer.projection(45.0), expected);
    }

    #[test]
    fn toggle_switches_to_the_fixed_orthographic_volume() {
        let mut renderer = Renderer::new(1280, 720);
        renderer.toggle_projection();
        assert!(!renderer.perspective);
        let expected = Mat4::orthographic_rh_gl(
            800.0 / 120.0,
            -800.0 / 120.0,
            -600.0 / 120.0,
            600.0 / 120.0,
            -2.5,
            6.5,
        );
        assert_eq!(renderer.projection(45.0), expected);
        renderer.toggle_projection();
        assert!(renderer.perspective);
    }

    #[test]
    fn resize_updates_the_aspect_ratio() {
        let mut renderer = Renderer::new(1280, 720);
        renderer.resize(1920, 1080);
        let expected = Mat4::perspective_rh_gl(45f32.to_radians(), 1920.0 / 1080.0, 0.1, 100.0);
        assert_eq!(renderer.projection(45.0), expected);
    }
}
