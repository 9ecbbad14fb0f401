//! Scene resources and draw entries.
//!
//! The [`Scene`] owns every GPU resource drawn each frame: the five
//! meshes, the four textures and the two shader programs, plus the draw
//! entry table and the light parameters. The renderer only reads them.

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3};

use crate::abs::{Mesh, PixelData, ShaderProgram, Texture};
use crate::geometry::ShapeKind;
use crate::settings::Settings;
use crate::shader_program;

/// Uniform names the scene program must resolve at link time.
const SCENE_UNIFORMS: &[&str] = &[
    "model",
    "view",
    "projection",
    "lightColor",
    "lightPos",
    "viewPosition",
    "uTexture",
    "uvScale",
];

/// Uniform names the lamp program must resolve at link time.
const LAMP_UNIFORMS: &[&str] = &["model", "view", "projection"];

/// World-space position of the point light and its marker.
const LIGHT_POSITION: Vec3 = Vec3::new(2.0, 0.5, -5.0);
/// Uniform scale of the lamp marker.
const LAMP_SCALE: f32 = 2.0;
/// Tilt of the lamp marker, radians about the X axis.
const LAMP_TILT: f32 = -0.25;

/// Texture roles in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Metal,
    Floor,
    Wood,
    YellowWood,
}

impl TextureKind {
    /// File name under the settings' texture directory.
    fn file_name(self) -> &'static str {
        match self {
            TextureKind::Metal => "metalTexture.jpg",
            TextureKind::Floor => "floorTexture.jpg",
            TextureKind::Wood => "woodTexture.jpg",
            TextureKind::YellowWood => "yellowWoodTexture.jpg",
        }
    }
}

/// Per-object placement: scale, per-axis rotation angles and translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec3,
    /// Rotation angles in radians about the X, Y and Z axes.
    pub rotation: Vec3,
    pub translation: Vec3,
}

impl Transform {
    pub const fn new(scale: Vec3, rotation: Vec3, translation: Vec3) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    /// Composes the model matrix as `translation * (Rx * Ry * Rz) * scale`:
    /// scale innermost, translation applied last.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * (Mat4::from_rotation_x(self.rotation.x)
                * Mat4::from_rotation_y(self.rotation.y)
                * Mat4::from_rotation_z(self.rotation.z))
            * Mat4::from_scale(self.scale)
    }
}

/// One draw entry: which mesh, which texture, where.
pub struct SceneEntry {
    pub shape: ShapeKind,
    pub texture: TextureKind,
    pub transform: Transform,
}

/// The single point light.
pub struct Light {
    pub color: Vec3,
    pub position: Vec3,
}

/// The five draw entries, in draw order.
fn draw_entries() -> Vec<SceneEntry> {
    vec![
        // Left scissor blade
        SceneEntry {
            shape: ShapeKind::ScissorBlade,
            texture: TextureKind::Metal,
            transform: Transform::new(
                Vec3::new(1.2, 1.2, 1.2),
                Vec3::new(1.28, 0.0, -0.4),
                Vec3::new(2.2, -0.582, -1.4),
            ),
        },
        // Right scissor blade, mirrored across X
        SceneEntry {
            shape: ShapeKind::ScissorBlade,
            texture: TextureKind::Metal,
            transform: Transform::new(
                Vec3::new(-1.2, 1.2, 1.2),
                Vec3::new(1.18, 0.0, -0.8),
                Vec3::new(1.9, -0.5, -1.2),
            ),
        },
        // Floor
        SceneEntry {
            shape: ShapeKind::Floor,
            texture: TextureKind::Floor,
            transform: Transform::new(
                Vec3::splat(12.0),
                Vec3::ZERO,
                Vec3::new(0.0, -1.0, 0.0),
            ),
        },
        // Blocks resting on the floor
        SceneEntry {
            shape: ShapeKind::BlockA,
            texture: TextureKind::Wood,
            transform: Transform::new(
                Vec3::splat(2.0),
                Vec3::new(0.0, 0.3, 0.0),
                Vec3::new(0.8, -0.9999, -0.7),
            ),
        },
        SceneEntry {
            shape: ShapeKind::BlockB,
            texture: TextureKind::YellowWood,
            transform: Transform::new(
                Vec3::splat(2.0),
                Vec3::new(0.0, 0.3, 1.565),
                Vec3::new(2.6, -0.999, -0.2),
            ),
        },
    ]
}

/// Model transform of the lamp marker, centered on the light.
fn lamp_transform(light_position: Vec3) -> Transform {
    Transform::new(
        Vec3::splat(LAMP_SCALE),
        Vec3::new(LAMP_TILT, 0.0, 0.0),
        light_position,
    )
}

/// Owns the scene's GPU resources for the application lifetime.
pub struct Scene {
    blade_mesh: Mesh,
    floor_mesh: Mesh,
    block_a_mesh: Mesh,
    block_b_mesh: Mesh,
    lamp_mesh: Mesh,
    metal_texture: Texture,
    floor_texture: Texture,
    wood_texture: Texture,
    yellow_wood_texture: Texture,
    pub scene_program: ShaderProgram,
    pub lamp_program: ShaderProgram,
    pub entries: Vec<SceneEntry>,
    pub light: Light,
    pub lamp_transform: Transform,
    pub uv_scale: Vec2,
}

impl Scene {
    /// Builds every startup resource: the five meshes, the two shader
    /// programs (validated against their required uniform lists) and the
    /// four textures. Any failure here is fatal to startup.
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, String> {
        let blade_mesh = ShapeKind::ScissorBlade.build(gl);
        let floor_mesh = ShapeKind::Floor.build(gl);
        let block_a_mesh = ShapeKind::BlockA.build(gl);
        let block_b_mesh = ShapeKind::BlockB.build(gl);
        let lamp_mesh = ShapeKind::LampMarker.build(gl);

        let scene_program = shader_program!(scene, gl, ".");
        scene_program.require_uniforms(SCENE_UNIFORMS)?;
        // Linking leaves the program current, so the sampler unit can be
        // assigned right away.
        scene_program.set_uniform("uTexture", 0);

        let lamp_program = shader_program!(lamp, gl, ".");
        lamp_program.require_uniforms(LAMP_UNIFORMS)?;

        let metal_texture = Self::load_texture(gl, settings, TextureKind::Metal)?;
        let floor_texture = Self::load_texture(gl, settings, TextureKind::Floor)?;
        let wood_texture = Self::load_texture(gl, settings, TextureKind::Wood)?;
        let yellow_wood_texture = Self::load_texture(gl, settings, TextureKind::YellowWood)?;

        Ok(Self {
            blade_mesh,
            floor_mesh,
            block_a_mesh,
            block_b_mesh,
            lamp_mesh,
            metal_texture,
            floor_texture,
            wood_texture,
            yellow_wood_texture,
            scene_program,
            lamp_program,
            entries: draw_entries(),
            light: Light {
                color: Vec3::ONE,
                position: LIGHT_POSITION,
            },
            lamp_transform: lamp_transform(LIGHT_POSITION),
            uv_scale: Vec2::ONE,
        })
    }

    fn load_texture(
        gl: &Arc<glow::Context>,
        settings: &Settings,
        kind: TextureKind,
    ) -> Result<Texture, String> {
        let path = settings.texture_dir.join(kind.file_name());
        let pixels = PixelData::decode(&path)
            .map_err(|e| format!("failed to load texture {}: {e}", path.display()))?;
        Texture::from_pixels(gl, pixels)
            .map_err(|e| format!("failed to upload texture {}: {e}", path.display()))
    }

    /// The mesh backing the given shape.
    pub fn mesh(&self, shape: ShapeKind) -> &Mesh {
        match shape {
            ShapeKind::ScissorBlade => &self.blade_mesh,
            ShapeKind::Floor => &self.floor_mesh,
            ShapeKind::BlockA => &self.block_a_mesh,
            ShapeKind::BlockB => &self.block_b_mesh,
            ShapeKind::LampMarker => &self.lamp_mesh,
        }
    }

    /// The texture backing the given role.
    pub fn texture(&self, kind: TextureKind) -> &Texture {
        match kind {
            TextureKind::Metal => &self.metal_texture,
            TextureKind::Floor => &self.floor_texture,
            TextureKind::Wood => &self.wood_texture,
            TextureKind::YellowWood => &self.yellow_wood_texture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_composes_translate_rotate_scale() {
        for entry in draw_entries() {
            let t = entry.transform;
            let expected = Mat4::from_translation(t.translation)
                * (Mat4::from_rotation_x(t.rotation.x)
                    * Mat4::from_rotation_y(t.rotation.y)
                    * Mat4::from_rotation_z(t.rotation.z))
                * Mat4::from_scale(t.scale);
            assert!(t.matrix().abs_diff_eq(expected, 1e-6));
        }
    }

    #[test]
    fn rotation_is_applied_between_scale_and_translation() {
        // A unit point on +X under a Z rotation of 90 degrees must end up
        // on +Y before the translation moves it, not after.
        let transform = Transform::new(
            Vec3::splat(2.0),
            Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
            Vec3::new(10.0, 0.0, 0.0),
        );
        let moved = transform.matrix().transform_point3(Vec3::X);
        assert!(moved.abs_diff_eq(Vec3::new(10.0, 2.0, 0.0), 1e-5));
    }

    #[test]
    fn five_entries_in_draw_order() {
        let entries = draw_entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].shape, ShapeKind::ScissorBlade);
        assert_eq!(entries[1].shape, ShapeKind::ScissorBlade);
        assert_eq!(entries[0].texture, TextureKind::Metal);
        assert_eq!(entries[1].texture, TextureKind::Metal);
        assert_eq!(entries[2].shape, ShapeKind::Floor);
        assert_eq!(entries[3].shape, ShapeKind::BlockA);
        assert_eq!(entries[4].shape, ShapeKind::BlockB);
    }

    #[test]
    fn blades_share_a_mesh_with_distinct_transforms() {
        let entries = draw_entries();
        assert_eq!(entries[0].shape, entries[1].shape);
        assert_ne!(entries[0].transform, entries[1].transform);
        // The second blade is mirrored across X.
        assert!(entries[1].transform.scale.x < 0.0);
    }

    #[test]
    fn lamp_marker_sits_at_the_light() {
        let transform = lamp_transform(LIGHT_POSITION);
        assert_eq!(transform.translation, LIGHT_POSITION);
        assert_eq!(transform.scale, Vec3::splat(2.0));
    }
}
