//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct, a GPU texture created from
//! a decoded [`PixelData`] buffer, plus the vertical-flip utility the
//! upload path depends on.

use std::path::Path;
use std::sync::Arc;

use glow::HasContext;

/// A decoded image: raw pixel bytes plus dimensions and channel count.
pub struct PixelData {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl PixelData {
    /// Decodes an image file from disk.
    pub fn decode(path: &Path) -> Result<Self, String> {
        let image = image::open(path).map_err(|e| e.to_string())?;
        let width = image.width();
        let height = image.height();
        let channels = image.color().channel_count();
        Ok(Self {
            bytes: image.into_bytes(),
            width,
            height,
            channels,
        })
    }
}

/// Flips an image buffer vertically in place.
///
/// Decoded images are stored top-to-bottom while the GL texture origin is
/// bottom-left; uploading without this flip renders every texture
/// upside-down. Applying the flip twice restores the original buffer.
pub fn flip_vertically(bytes: &mut [u8], width: u32, height: u32, channels: u8) {
    let row = width as usize * channels as usize;
    for j in 0..height as usize / 2 {
        let top = j * row;
        let bottom = (height as usize - 1 - j) * row;
        for i in 0..row {
            bytes.swap(top + i, bottom + i);
        }
    }
}

/// GL internal format and pixel format for the given channel count.
/// Only 3-channel RGB and 4-channel RGBA data is supported.
fn texture_formats(channels: u8) -> Result<(u32, u32), String> {
    match channels {
        3 => Ok((glow::RGB8, glow::RGB)),
        4 => Ok((glow::RGBA8, glow::RGBA)),
        n => Err(format!("unsupported channel count: {n}")),
    }
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
}

impl Texture {
    /// Uploads decoded pixels to a new GPU texture.
    ///
    /// The buffer is flipped vertically before upload, the format is
    /// selected from the channel count, wrapping is set to repeat on both
    /// axes with linear filtering, and mipmaps are generated. An
    /// unsupported channel count fails before any GL object is created.
    pub fn from_pixels(gl: &Arc<glow::Context>, mut pixels: PixelData) -> Result<Self, String> {
        let (internal_format, format) = texture_formats(pixels.channels)?;

        flip_vertically(&mut pixels.bytes, pixels.width, pixels.height, pixels.channels);

        unsafe {
            let texture = gl.create_texture().map_err(|e| e.to_string())?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format as i32,
                pixels.width as i32,
                pixels.height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels.bytes.as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
            })
        }
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind_to_unit(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_twice_restores_the_buffer() {
        for &(width, height, channels) in
            &[(1u32, 1u32, 3u8), (4, 3, 3), (5, 4, 4), (7, 1, 4), (2, 6, 1)]
        {
            let len = (width * height * channels as u32) as usize;
            let original: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
            let mut bytes = original.clone();
            flip_vertically(&mut bytes, width, height, channels);
            flip_vertically(&mut bytes, width, height, channels);
            assert_eq!(bytes, original, "{width}x{height}x{channels}");
        }
    }

    #[test]
    fn flip_swaps_rows() {
        let mut bytes = vec![
            0, 1, 2, 3, 4, 5, // row 0
            6, 7, 8, 9, 10, 11, // row 1
        ];
        flip_vertically(&mut bytes, 2, 2, 3);
        assert_eq!(bytes, vec![6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn formats_follow_channel_count() {
        assert_eq!(texture_formats(3).unwrap(), (glow::RGB8, glow::RGB));
        assert_eq!(texture_formats(4).unwrap(), (glow::RGBA8, glow::RGBA));
        assert!(texture_formats(1).is_err());
        assert!(texture_formats(2).is_err());
        assert!(texture_formats(5).is_err());
    }
}
