//! Procedural geometry for the tabletop scene.
//!
//! All shapes are fixed vertex/index tables authored once and uploaded to
//! the GPU at startup. The scissor blade is a hand-modeled outline, the
//! blocks are rectangular prisms with per-face normals, and the floor is
//! a single quad. Triangle winding is consistent across all tables; the
//! renderer never enables face culling, so winding only matters for the
//! normal-based lighting.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::abs::{Mesh, VertexLayout};

/// A vertex as consumed by both shader programs: object-space position,
/// object-space normal and texture coordinate, tightly packed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct SceneVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl VertexLayout for SceneVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<SceneVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Normal attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);

            // Texture coordinate attribute
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(
                2,
                2,
                glow::FLOAT,
                false,
                stride,
                (2 * size_of::<Vec3>()) as i32,
            );
        }
    }
}

const fn v(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> SceneVertex {
    SceneVertex {
        position: Vec3::new(position[0], position[1], position[2]),
        normal: Vec3::new(normal[0], normal[1], normal[2]),
        uv: Vec2::new(uv[0], uv[1]),
    }
}

/// Identifies one of the five fixed shapes in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    ScissorBlade,
    Floor,
    BlockA,
    BlockB,
    /// Visual marker for the light source. Shares the [`ShapeKind::BlockA`]
    /// tables rather than carrying a dedicated shape.
    LampMarker,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::ScissorBlade,
        ShapeKind::Floor,
        ShapeKind::BlockA,
        ShapeKind::BlockB,
        ShapeKind::LampMarker,
    ];

    /// The shape's vertex table.
    pub fn vertices(self) -> &'static [SceneVertex] {
        match self {
            ShapeKind::ScissorBlade => BLADE_VERTICES,
            ShapeKind::Floor => FLOOR_VERTICES,
            ShapeKind::BlockA | ShapeKind::LampMarker => BLOCK_A_VERTICES,
            ShapeKind::BlockB => BLOCK_B_VERTICES,
        }
    }

    /// The shape's triangle index table.
    pub fn indices(self) -> &'static [u16] {
        match self {
            ShapeKind::ScissorBlade => BLADE_INDICES,
            ShapeKind::Floor => FLOOR_INDICES,
            ShapeKind::BlockA | ShapeKind::LampMarker => BLOCK_A_INDICES,
            ShapeKind::BlockB => BLOCK_B_INDICES,
        }
    }

    /// Uploads the shape's tables to a new GPU mesh.
    pub fn build(self, gl: &Arc<glow::Context>) -> Mesh {
        Mesh::new(gl, self.vertices(), self.indices(), glow::TRIANGLES)
    }
}

/// One scissor blade with its handle loop, modeled as a thin extrusion:
/// a front outline at z = 0.0 / 0.02, a back outline at z = -0.02 / -0.04
/// and connection strips between them.
const BLADE_VERTICES: &[SceneVertex] = &[
    // Blade outline, front
    v([-0.2, 0.9, 0.0], [0.0, 1.0, 0.0], [0.0, 0.9]),
    v([-0.05, 0.05, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.25, 0.01, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.2, -0.03, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.15, 0.01, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.05, -0.1, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-0.1, -0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.15, -0.04, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.12, -0.2, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.05, -0.2, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-0.15, -0.04, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.09, -0.23, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    // Blade outline, back
    v([-0.2, 0.9, -0.02], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-0.05, 0.05, -0.02], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-0.25, 0.01, -0.02], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.2, -0.03, -0.02], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.15, 0.01, -0.02], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.05, -0.1, -0.02], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.1, -0.1, -0.02], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-0.15, -0.04, -0.02], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.12, -0.2, -0.02], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.05, -0.2, -0.02], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-0.15, -0.04, -0.02], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-0.09, -0.23, -0.02], [0.0, -1.0, 0.0], [0.0, 1.0]),
    // Blade tip
    v([-0.18, 0.8, -0.02], [0.0, 1.0, 0.0], [1.0, 1.0]),
    // Handle loop, front
    v([0.04, -0.26, 0.02], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-0.12, -0.5, 0.02], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.045, -0.40, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.0, -0.37, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.1, -0.32, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.08, -0.4, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.17, -0.45, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.15, -0.6, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.2, -0.7, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.14, -0.9, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.2, -0.97, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.07, -1.1, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.13, -1.16, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.04, -1.15, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([0.04, -1.24, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.08, -1.3, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.08, -1.2, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.13, -1.25, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.082, -1.1, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.16, -0.97, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.072, -0.9, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.16, -0.83, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.06, -0.76, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.055, -0.6, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    v([-0.04, -1.2, 0.02], [0.0, 1.0, 0.0], [0.0, 0.3]),
    // Handle loop, back
    v([0.04, -0.26, -0.04], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-0.12, -0.5, -0.04], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.045, -0.40, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.0, -0.37, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.1, -0.32, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.08, -0.4, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.17, -0.45, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.15, -0.6, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.2, -0.7, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.14, -0.9, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.2, -0.97, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.07, -1.1, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.13, -1.16, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.04, -1.15, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([0.04, -1.24, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.08, -1.3, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.08, -1.2, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.13, -1.25, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.082, -1.1, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.16, -0.97, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.072, -0.9, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.16, -0.83, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.06, -0.76, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.055, -0.6, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
    v([-0.04, -1.2, -0.04], [0.0, -1.0, 0.0], [0.0, 0.3]),
];

const BLADE_INDICES: &[u16] = &[
    // Blade, front
    0, 1, 2, //
    1, 2, 3, //
    1, 4, 5, //
    5, 9, 6, //
    9, 6, 8, //
    3, 7, 4, //
    7, 4, 10, //
    10, 5, 6, //
    4, 10, 5, //
    9, 8, 11, //
    // Blade, back
    12, 13, 14, //
    13, 14, 15, //
    13, 16, 17, //
    17, 21, 18, //
    21, 18, 20, //
    15, 19, 16, //
    19, 16, 22, //
    22, 17, 18, //
    16, 22, 17, //
    21, 20, 23, //
    // Blade, connections
    0, 12, 2, //
    12, 2, 14, //
    2, 3, 15, //
    14, 2, 15, //
    15, 19, 7, //
    3, 7, 15, //
    7, 10, 22, //
    7, 19, 22, //
    6, 10, 22, //
    6, 18, 22, //
    6, 8, 20, //
    6, 18, 20, //
    8, 20, 11, //
    11, 23, 20, //
    1, 5, 13, //
    13, 17, 5, //
    5, 9, 17, //
    9, 17, 21, //
    9, 11, 23, //
    9, 21, 23, //
    0, 24, 13, //
    12, 24, 13, //
    0, 13, 1, //
    0, 12, 24, //
    // Handle, front
    11, 9, 25, //
    11, 25, 27, //
    11, 27, 26, //
    27, 25, 28, //
    28, 25, 29, //
    28, 29, 30, //
    30, 31, 29, //
    30, 31, 32, //
    31, 32, 33, //
    32, 33, 34, //
    33, 34, 35, //
    34, 35, 36, //
    35, 36, 37, //
    36, 37, 38, //
    37, 38, 39, //
    38, 39, 41, //
    41, 40, 39, //
    40, 41, 42, //
    41, 42, 43, //
    42, 43, 44, //
    43, 44, 45, //
    44, 45, 46, //
    45, 46, 47, //
    46, 47, 48, //
    46, 48, 26, //
    48, 26, 27, //
    38, 49, 41, //
    43, 41, 49, //
    // Handle, back
    23, 21, 50, //
    23, 50, 52, //
    23, 52, 51, //
    52, 50, 53, //
    53, 50, 54, //
    53, 54, 55, //
    55, 56, 54, //
    55, 56, 57, //
    56, 57, 58, //
    57, 58, 59, //
    58, 59, 60, //
    59, 60, 61, //
    60, 61, 62, //
    61, 62, 63, //
    62, 63, 64, //
    63, 64, 66, //
    66, 65, 64, //
    65, 66, 67, //
    66, 67, 68, //
    67, 68, 69, //
    68, 69, 70, //
    69, 70, 71, //
    70, 71, 72, //
    71, 72, 73, //
    71, 73, 51, //
    73, 51, 52, //
    63, 74, 66, //
    68, 66, 74, //
    // Handle, connections
    9, 25, 50, //
    21, 9, 50, //
    25, 29, 50, //
    29, 50, 54, //
    29, 31, 54, //
    31, 54, 56, //
    31, 33, 56, //
    33, 56, 58, //
    33, 35, 58, //
    35, 58, 60, //
    35, 37, 60, //
    37, 60, 62, //
    37, 39, 62, //
    39, 62, 64, //
    39, 40, 64, //
    40, 64, 65, //
    40, 42, 65, //
    42, 65, 67, //
    42, 44, 67, //
    44, 67, 69, //
    44, 46, 69, //
    46, 69, 71, //
    46, 26, 71, //
    26, 71, 51, //
    26, 11, 51, //
    11, 51, 23, //
    27, 28, 52, //
    28, 52, 53, //
    28, 30, 53, //
    30, 53, 55, //
    30, 32, 55, //
    32, 55, 57, //
    32, 34, 57, //
    34, 57, 59, //
    34, 36, 59, //
    36, 59, 61, //
    36, 38, 61, //
    38, 61, 63, //
    38, 49, 63, //
    49, 63, 74, //
    49, 43, 74, //
    43, 74, 68, //
    43, 45, 68, //
    45, 68, 70, //
    45, 47, 70, //
    47, 70, 72, //
    47, 48, 72, //
    48, 72, 73, //
    48, 27, 73, //
    27, 73, 52, //
];

/// A unit quad in the XZ plane facing up.
const FLOOR_VERTICES: &[SceneVertex] = &[
    v([-1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
];

const FLOOR_INDICES: &[u16] = &[
    0, 1, 2, //
    2, 3, 0, //
];

/// A 1 x 0.25 x 0.5 prism; four vertices per face so each face carries
/// its own normal.
const BLOCK_A_VERTICES: &[SceneVertex] = &[
    // -Z face
    v([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.0, 0.25, 0.0], [0.0, 0.0, -1.0], [0.25, 0.0]),
    v([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.25, 1.0]),
    v([1.0, 0.25, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0]),
    // +Z face
    v([0.0, 0.0, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.0, 0.25, 0.5], [0.0, 0.0, 1.0], [0.25, 0.0]),
    v([1.0, 0.0, 0.5], [0.0, 0.0, 1.0], [0.25, 1.0]),
    v([1.0, 0.25, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    // -X / +X faces
    v([0.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([0.0, 0.25, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.25, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.0, 0.0, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.0, 0.25, 0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.0, 0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.25, 0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    // -Y / +Y faces
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.25, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.25, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([0.0, 0.25, 0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.0, 0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.25, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
];

const BLOCK_A_INDICES: &[u16] = &[
    // -Z face
    0, 1, 2, //
    1, 2, 3, //
    // +Z face
    4, 5, 6, //
    5, 6, 7, //
    // -X face
    8, 9, 12, //
    9, 12, 13, //
    // +X face
    10, 11, 14, //
    11, 14, 15, //
    // -Y face
    16, 18, 20, //
    18, 20, 22, //
    // +Y face
    17, 19, 21, //
    19, 21, 23, //
];

/// A 1 x 0.25 x 0.25 prism with its own face UV layout.
const BLOCK_B_VERTICES: &[SceneVertex] = &[
    // -Z face
    v([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.0, 0.25, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0]),
    v([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0]),
    v([1.0, 0.25, 0.0], [0.0, 0.0, -1.0], [1.0, 1.0]),
    // +Z face
    v([0.0, 0.0, 0.25], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.0, 0.25, 0.25], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([1.0, 0.0, 0.25], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([1.0, 0.25, 0.25], [0.0, 0.0, 1.0], [1.0, 1.0]),
    // -Y / +Y faces
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.0, 0.25, 0.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.25, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.25], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.0, 0.25, 0.25], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.0, 0.25], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([1.0, 0.25, 0.25], [0.0, 1.0, 0.0], [1.0, 1.0]),
    // +X / -X faces
    v([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.25, 0.0]),
    v([0.0, 0.25, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.25, 0.0], [-1.0, 0.0, 0.0], [0.25, 1.0]),
    v([0.0, 0.0, 0.25], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.25, 0.25], [-1.0, 0.0, 0.0], [0.25, 0.0]),
    v([1.0, 0.0, 0.25], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([1.0, 0.25, 0.25], [-1.0, 0.0, 0.0], [1.0, 1.0]),
];

const BLOCK_B_INDICES: &[u16] = &[
    // -Z face
    0, 1, 2, //
    1, 2, 3, //
    // +Z face
    4, 5, 6, //
    5, 6, 7, //
    // -Y face
    8, 9, 12, //
    9, 12, 13, //
    // +Y face
    10, 11, 14, //
    11, 14, 15, //
    // +X face
    16, 18, 20, //
    18, 20, 22, //
    // -X face
    17, 19, 21, //
    19, 21, 23, //
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_in_vertex_bounds() {
        for shape in ShapeKind::ALL {
            let vertex_count = shape.vertices().len() as u16;
            for &index in shape.indices() {
                assert!(
                    index < vertex_count,
                    "{shape:?}: index {index} out of range"
                );
            }
        }
    }

    #[test]
    fn vertex_stride_is_eight_floats() {
        assert_eq!(
            std::mem::size_of::<SceneVertex>(),
            8 * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn index_counts_form_triangles() {
        for shape in ShapeKind::ALL {
            assert_eq!(shape.indices().len() % 3, 0, "{shape:?}");
        }
    }

    #[test]
    fn table_sizes_match_the_authored_shapes() {
        assert_eq!(ShapeKind::ScissorBlade.vertices().len(), 75);
        assert_eq!(ShapeKind::ScissorBlade.indices().len(), 450);
        assert_eq!(ShapeKind::Floor.vertices().len(), 4);
        assert_eq!(ShapeKind::Floor.indices().len(), 6);
        assert_eq!(ShapeKind::BlockA.vertices().len(), 24);
        assert_eq!(ShapeKind::BlockA.indices().len(), 36);
        assert_eq!(ShapeKind::BlockB.vertices().len(), 24);
        assert_eq!(ShapeKind::BlockB.indices().len(), 36);
    }

    #[test]
    fn lamp_marker_shares_the_block_a_tables() {
        assert_eq!(ShapeKind::LampMarker.vertices(), ShapeKind::BlockA.vertices());
        assert_eq!(ShapeKind::LampMarker.indices(), ShapeKind::BlockA.indices());
    }
}
