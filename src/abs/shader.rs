//! OpenGL shader compilation and uniform management.
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for
//! managing OpenGL shaders, along with the [`Uniform`] trait for typed
//! uniform upload. Uniform locations are resolved once at link time and
//! cached, so draw-time lookups never go back to the driver.

use std::collections::HashMap;
use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3};
use glow::HasContext;

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
    _shader_type: u32,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(|e| e.to_string())?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(log);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
                _shader_type: shader_type,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents a value that can be uploaded to a uniform variable.
pub trait Uniform {
    /// Uploads the value to the given uniform location.
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_i32(Some(location), *self);
        }
    }
}

impl Uniform for Vec2 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_2_f32(Some(location), self.x, self.y);
        }
    }
}

impl Uniform for Vec3 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_3_f32(Some(location), self.x, self.y, self.z);
        }
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref());
        }
    }
}

impl<T: Uniform> Uniform for &T {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).set_uniform(gl, location);
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
    uniforms: HashMap<String, glow::UniformLocation>,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    ///
    /// On success the program is left bound as the current program, so
    /// callers can set uniforms immediately after construction. The
    /// active uniforms are enumerated into a location cache at this
    /// point.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let program = gl.create_program().map_err(|e| e.to_string())?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(log);
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            let mut uniforms = HashMap::new();
            for i in 0..gl.get_active_uniforms(program) {
                if let Some(active) = gl.get_active_uniform(program, i) {
                    if let Some(location) = gl.get_uniform_location(program, &active.name) {
                        uniforms.insert(active.name, location);
                    }
                }
            }

            gl.use_program(Some(program));

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
                uniforms,
            })
        }
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Verifies that every given uniform name resolved at link time.
    ///
    /// A missing name means the shader source and the host code disagree;
    /// callers should treat this as a startup failure rather than letting
    /// uploads silently no-op every frame.
    pub fn require_uniforms(&self, names: &[&str]) -> Result<(), String> {
        let missing: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| !self.uniforms.contains_key(*name))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("missing required uniforms: {}", missing.join(", ")))
        }
    }

    /// Sets a uniform variable in the shader program.
    ///
    /// Names absent from the location cache assert in debug builds and
    /// are skipped in release builds.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        match self.uniforms.get(name) {
            Some(location) => value.set_uniform(&self.gl, location),
            None => debug_assert!(false, "uniform `{name}` is not active in this program"),
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
