use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bytemuck::cast_slice;

use crate::color::Color;

const BYTES_PER_PIXEL: usize = 4;

/// Pixel surface in the bottom-up DIB layout: row 0 is the bottom of the
/// image, every pixel a 32-bit 0xAARRGGBB word, rows `stride` bytes apart.
pub struct PixelSurface {
    width: usize,
    height: usize,
    stride: usize,
    pixels: Vec<u32>,
}

impl PixelSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: width * BYTES_PER_PIXEL,
            pixels: vec![0; width * height],
        }
    }

    /// Surface with padded rows. `stride` is in bytes and must hold a whole
    /// number of pixels.
    pub fn with_stride(width: usize, height: usize, stride: usize) -> Result<Self> {
        if stride < width * BYTES_PER_PIXEL {
            bail!("stride {stride} is smaller than a {width} pixel row");
        }
        if stride % BYTES_PER_PIXEL != 0 {
            bail!("stride {stride} is not a multiple of {BYTES_PER_PIXEL}");
        }
        Ok(Self {
            width,
            height,
            stride,
            pixels: vec![0; height * stride / BYTES_PER_PIXEL],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw bytes, `height * stride` long. Little-endian words, so each pixel
    /// reads B, G, R, A.
    pub fn memory(&self) -> &[u8] {
        cast_slice(&self.pixels)
    }

    #[inline(always)]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * (self.stride / BYTES_PER_PIXEL) + x
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_argb());
    }

    /// Writes one pixel. Coordinates outside the surface are ignored; every
    /// draw routine relies on this for clipping.
    #[inline(always)]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = self.offset(x as usize, y as usize);
        self.pixels[i] = color.to_argb();
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(Color::from_argb(self.pixels[self.offset(x as usize, y as usize)]))
    }

    /// RGBA bytes with the top row first, the layout most display APIs want.
    pub fn copy_rgba_top_down(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.width * self.height * BYTES_PER_PIXEL);
        for y in (0..self.height).rev() {
            let row_start = self.offset(0, y);
            for &word in &self.pixels[row_start..row_start + self.width] {
                let c = Color::from_argb(word);
                out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
    }

    pub fn write_bmp<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let width = self.width as u32;
        let height = self.height as u32;
        let row_stride = (3 * width + 3) & !3;
        let pixel_array_size = row_stride * height;
        let file_size = 54 + pixel_array_size;
        let mut file = BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        );
        file.write_all(b"BM")?;
        file.write_all(&file_size.to_le_bytes())?;
        file.write_all(&[0u8; 4])?;
        file.write_all(&54u32.to_le_bytes())?;
        file.write_all(&[40u8, 0, 0, 0])?;
        file.write_all(&(width as i32).to_le_bytes())?;
        file.write_all(&(height as i32).to_le_bytes())?;
        file.write_all(&[1, 0])?;
        file.write_all(&[24, 0])?;
        file.write_all(&[0u8; 4])?;
        file.write_all(&pixel_array_size.to_le_bytes())?;
        file.write_all(&[0u8; 16])?;
        let padding = vec![0u8; (row_stride - width * 3) as usize];
        // positive height: rows are stored bottom-up, same as the surface
        for y in 0..self.height {
            let row_start = self.offset(0, y);
            for &word in &self.pixels[row_start..row_start + self.width] {
                let [b, g, r, _] = word.to_le_bytes();
                file.write_all(&[b, g, r])?;
            }
            file.write_all(&padding)?;
        }
        file.flush()?;
        Ok(())
    }
}

/// Hands a finished frame to something that can show it.
pub trait Presenter {
    fn present(&mut self, surface: &PixelSurface) -> Result<()>;
}

/// Presents by writing the frame to a BMP file.
pub struct BmpSnapshot {
    pub path: PathBuf,
}

impl Presenter for BmpSnapshot {
    fn present(&mut self, surface: &PixelSurface) -> Result<()> {
        surface.write_bmp(&self.path)?;
        log::info!("wrote {}x{} frame to {}", surface.width(), surface.height(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, BLUE, RED};

    #[test]
    fn test_clear_then_read_back() {
        let mut s = PixelSurface::new(8, 4);
        s.clear(BLUE);
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(s.get(x, y), Some(BLUE));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_set_is_noop() {
        let mut s = PixelSurface::new(8, 4);
        s.clear(BLACK);
        let before = s.memory().to_vec();
        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 4), (100, 100), (i32::MIN, i32::MAX)] {
            s.set(x, y, RED);
        }
        assert_eq!(s.memory(), &before[..]);
        assert_eq!(s.get(8, 0), None);
    }

    #[test]
    fn test_pixel_byte_layout() {
        let mut s = PixelSurface::new(2, 2);
        s.set(1, 1, Color::rgb(0x11, 0x22, 0x33));
        let i = s.stride() + 4;
        assert_eq!(&s.memory()[i..i + 4], &[0x33, 0x22, 0x11, 0xFF]);
    }

    #[test]
    fn test_padded_stride() {
        let mut s = PixelSurface::with_stride(3, 2, 16).unwrap();
        assert_eq!(s.memory().len(), 32);
        s.clear(BLACK);
        s.set(2, 1, RED);
        assert_eq!(s.get(2, 1), Some(RED));
        assert_eq!(&s.memory()[16 + 8..16 + 12], &[0, 0, 0xFF, 0xFF]);

        assert!(PixelSurface::with_stride(3, 2, 8).is_err());
        assert!(PixelSurface::with_stride(3, 2, 14).is_err());
    }

    #[test]
    fn test_rgba_top_down_flips_rows() {
        let mut s = PixelSurface::new(1, 2);
        s.set(0, 0, RED);
        s.set(0, 1, BLUE);
        let mut out = Vec::new();
        s.copy_rgba_top_down(&mut out);
        assert_eq!(out, vec![0, 0, 255, 255, 255, 0, 0, 255]);
    }
}
