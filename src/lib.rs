//! Depth sorted alpha compositing of translucent triangles
//!
//! How does this work
//!    tri = Triangle::with_color(color, p1, p2, p3)
//!      sort_vertices()
//!      build_spans()      -- 'BUILD SPANS'
//!        split_point()    -- triangles without a horizontal edge
//!      rasterize()        -- (x, y, depth) samples at the current offset
//!    buf = DepthBuffer::new(config, PixelBuffer::new(w, h))
//!  Moving a triangle
//!    buf.move_triangle(tri, offset)
//!      mask()             -- remove samples at the old offset
//!      update_triangle()
//!        set_offset()
//!        update()
//!          PixelStack::insert()
//!            blend()      -- rebuild blended entries from raw entries
//!          set_pixel()    -- visible color into the sink
//!  Output
//!    buf.into_sink().to_file("out.png")

pub mod geom;
pub mod math;
pub mod color;
pub mod error;
pub mod config;
pub mod scan;
pub mod triangle;
pub mod depth;
pub mod buffer;
pub mod ppm;
pub mod scene;

pub use geom::*;
pub use math::*;
pub use color::*;
pub use error::*;
pub use config::*;
pub use scan::*;
pub use triangle::*;
pub use depth::*;
pub use buffer::*;
pub use scene::*;

/// Access to color components as f64 values in [0,1]
pub trait Color: std::fmt::Debug + Copy {
    fn red(&self) -> f64;
    fn green(&self) -> f64;
    fn blue(&self) -> f64;
    fn alpha(&self) -> f64;
    fn red8(&self)   -> u8 { cu8(self.red()   as f32) }
    fn green8(&self) -> u8 { cu8(self.green() as f32) }
    fn blue8(&self)  -> u8 { cu8(self.blue()  as f32) }
    fn alpha8(&self) -> u8 { cu8(self.alpha() as f32) }
}

/// Destination of visible pixel colors
///
/// Coordinates outside the sink are ignored
pub trait PixelSink {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set_pixel(&mut self, x: i64, y: i64, c: &Rgb32);
}

/// Raw components of an image, row-major
pub trait PixelData {
    fn pixeldata(&self) -> &[f32];
}

impl<'a, S: PixelSink> PixelSink for &'a mut S {
    fn width(&self) -> usize {
        (**self).width()
    }
    fn height(&self) -> usize {
        (**self).height()
    }
    fn set_pixel(&mut self, x: i64, y: i64, c: &Rgb32) {
        (**self).set_pixel(x, y, c)
    }
}
