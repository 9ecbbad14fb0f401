//! This module contains the core building blocks for the viewer,
//! including application setup, shader management, and mesh handling and
//! textures.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
