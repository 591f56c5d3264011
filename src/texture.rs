use std::path::Path;

use anyhow::{Context, Result, bail};
use image::{DynamicImage, GenericImageView};

use crate::color::Color;
use crate::point2d::Point2D;
use crate::point3d::Point3D;

/// Decoded image, row 0 at the bottom so that v = 0 addresses the bottom edge.
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Texture {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img: DynamicImage =
            image::open(path).with_context(|| format!("decoding texture {}", path.display()))?;
        let (width, height) = img.dimensions();
        let rgba_img = img.to_rgba8();
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in (0..height).rev() {
            let row_start = (y * width * 4) as usize;
            let row_end = row_start + (width * 4) as usize;
            pixels.extend(
                rgba_img.as_raw()[row_start..row_end]
                    .chunks_exact(4)
                    .map(|p| Color::new(p[0], p[1], p[2], p[3])),
            );
        }
        log::info!("loaded texture {} ({width}x{height})", path.display());
        Self::from_pixels(width, height, pixels)
    }

    /// Texture from bottom-up rows of colors.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("texture has no pixels ({width}x{height})");
        }
        if pixels.len() != (width * height) as usize {
            bail!("texture is {width}x{height} but has {} pixels", pixels.len());
        }
        Ok(Self { width, height, pixels })
    }

    /// Nearest texel at (u, v). Coordinates are clamped into the image.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let x = ((u.clamp(0.0, 1.0) * self.width as f32) as u32).min(self.width - 1);
        let y = ((v.clamp(0.0, 1.0) * self.height as f32) as u32).min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }
}

/// A texture together with the UVs of the triangle being drawn.
#[derive(Copy, Clone)]
pub struct TextureMap<'a> {
    pub texture: &'a Texture,
    pub uvs: [Point2D; 3],
}

impl<'a> TextureMap<'a> {
    pub fn new(texture: &'a Texture, uvs: [Point2D; 3]) -> Self {
        Self { texture, uvs }
    }

    /// Color at the given barycentric weights.
    #[inline(always)]
    pub fn sample(&self, bary: Point3D) -> Color {
        let [a, b, c] = self.uvs;
        let u = bary.x * a.x + bary.y * b.x + bary.z * c.x;
        let v = bary.x * a.y + bary.y * b.y + bary.z * c.y;
        self.texture.sample(u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, GREEN, RED, WHITE};

    // bottom row: RED GREEN, top row: BLUE WHITE
    fn checker() -> Texture {
        Texture::from_pixels(2, 2, vec![RED, GREEN, BLUE, WHITE]).unwrap()
    }

    #[test]
    fn test_sample_quadrants() {
        let t = checker();
        assert_eq!(t.sample(0.25, 0.25), RED);
        assert_eq!(t.sample(0.75, 0.25), GREEN);
        assert_eq!(t.sample(0.25, 0.75), BLUE);
        assert_eq!(t.sample(0.75, 0.75), WHITE);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let t = checker();
        assert_eq!(t.sample(1.0, 1.0), WHITE);
        assert_eq!(t.sample(7.5, -3.0), GREEN);
        assert_eq!(t.sample(-0.1, 2.0), BLUE);
    }

    #[test]
    fn test_map_interpolates_uvs() {
        let t = checker();
        let map = TextureMap::new(
            &t,
            [Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0), Point2D::new(0.0, 1.0)],
        );
        assert_eq!(map.sample(Point3D::new(1.0, 0.0, 0.0)), RED);
        assert_eq!(map.sample(Point3D::new(0.0, 1.0, 0.0)), GREEN);
        assert_eq!(map.sample(Point3D::new(0.0, 0.0, 1.0)), BLUE);
        assert_eq!(map.sample(Point3D::new(0.0, 0.6, 0.6)), WHITE);
    }

    #[test]
    fn test_bad_pixel_count() {
        assert!(Texture::from_pixels(2, 2, vec![RED; 3]).is_err());
        assert!(Texture::from_pixels(0, 2, Vec::new()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Texture::load("does/not/exist.tga").err().unwrap();
        assert!(format!("{err:#}").contains("does/not/exist.tga"));
    }
}
