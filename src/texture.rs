//! 2D RGBA8 textures decoded with the `image` crate.

use std::path::{Path, PathBuf};

use glow::{HasContext, PixelUnpackData};

use crate::error::TextureError;

pub struct Texture {
    texture: glow::Texture,
    path: Option<PathBuf>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decode the image at `path` and upload it. Rows are flipped so that
    /// the first row of the file ends up at `v = 1`.
    pub fn from_path(gl: &glow::Context, path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let img = image::imageops::flip_vertical(&img.to_rgba8());
        let mut texture = Self::from_image(gl, &img)?;
        texture.path = Some(path.to_path_buf());
        log::info!(
            "texture {} loaded ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    /// Upload `img` as is, first row at `v = 0`.
    pub fn from_image(gl: &glow::Context, img: &image::RgbaImage) -> Result<Self, TextureError> {
        let (width, height) = img.dimensions();
        let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(TextureError::Size(width, height)),
        };
        unsafe {
            let texture = gl.create_texture().map_err(TextureError::Create)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
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
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                w,
                h,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                PixelUnpackData::Slice(Some(img.as_raw().as_slice())),
            );
            gl.bind_texture(glow::TEXTURE_2D, None);
            Ok(Texture {
                texture,
                path: None,
                width,
                height,
            })
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Bind to texture unit `slot`.
    pub fn bind(&self, gl: &glow::Context, slot: u32) {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + slot);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }

    pub fn unbind(&self, gl: &glow::Context) {
        unsafe { gl.bind_texture(glow::TEXTURE_2D, None) };
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.texture) };
    }
}

/// A `size`x`size` image of `cell`-pixel squares alternating `a` and `b`.
pub fn checkerboard(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> image::RgbaImage {
    let cell = cell.max(1);
    image::RgbaImage::from_fn(size, size, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            image::Rgba(a)
        } else {
            image::Rgba(b)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates() {
        let white = [255, 255, 255, 255];
        let black = [0, 0, 0, 255];
        let img = checkerboard(8, 2, white, black);
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(0, 0).0, white);
        assert_eq!(img.get_pixel(1, 1).0, white);
        assert_eq!(img.get_pixel(2, 0).0, black);
        assert_eq!(img.get_pixel(2, 2).0, white);
        assert_eq!(img.get_pixel(7, 0).0, black);
    }

    #[test]
    fn zero_cell_does_not_divide_by_zero() {
        let img = checkerboard(2, 0, [1, 1, 1, 1], [2, 2, 2, 2]);
        assert_eq!(img.get_pixel(0, 0).0, [1, 1, 1, 1]);
        assert_eq!(img.get_pixel(1, 0).0, [2, 2, 2, 2]);
    }
}
