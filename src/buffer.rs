//! Framebuffer

use std::ops::Index;
use std::path::Path;

use crate::color::Rgb32;
use crate::error::Error;
use crate::math::cu8;
use crate::PixelData;
use crate::PixelSink;

/// In-memory RGB framebuffer
///
/// Data is stored as row-major order (C-format), 3 f32 components per pixel
#[derive(Debug,Default,Clone)]
pub struct PixelBuffer {
    /// Component level data of the image
    data: Vec<f32>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}

impl PixelBuffer {
    /// Create a new black buffer of width and height
    ///
    /// # Panics
    ///
    /// If width or height is 0
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "empty buffer {}x{}", width, height);
        PixelBuffer {
            width, height, data: vec![0.0; width * height * Rgb32::LEN]
        }
    }
    /// Number of components in the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0.0);
    }
    /// Color at (`x`,`y`), None outside the buffer
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let p = &self[(x,y)];
        Some(Rgb32::new(p[0], p[1], p[2]))
    }
    /// Components converted to u8 [0,255]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| cu8(v)).collect()
    }
    /// Write the buffer to an image file, format chosen from the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), Error> {
        crate::ppm::write_file(&self.to_rgb8(), self.width, self.height, filename)
    }
    fn offset(&self, x: usize, y: usize) -> usize {
        ((y * self.width) + x) * Rgb32::LEN
    }
}

impl Index<(usize,usize)> for PixelBuffer {
    type Output = [f32];
    fn index(&self, index: (usize, usize)) -> &[f32] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + Rgb32::LEN]
    }
}

impl PixelSink for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn set_pixel(&mut self, x: i64, y: i64, c: &Rgb32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = self.offset(x as usize, y as usize);
        self.data[i]   = c.r();
        self.data[i+1] = c.g();
        self.data[i+2] = c.b();
    }
}

impl PixelData for PixelBuffer {
    fn pixeldata(&self) -> &[f32] {
        &self.data
    }
}
