//! Triangles
//!
//! A triangle's shape is fixed at construction: its vertices are sorted,
//!   its span table and face normal are computed once. Moving the triangle
//!   only changes its offset and the depth samples derived from it.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use log::debug;

use crate::color::Rgba32;
use crate::depth::Owner;
use crate::error::Error;
use crate::geom::Vector3F;
use crate::geom::Vector3I;
use crate::scan;
use crate::scan::Span;

/// Ids handed to new triangles, 0 is reserved for unowned samples
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug,Clone)]
pub struct Triangle {
    /// Owner of this triangle's fragments in a depth buffer, shared by clones
    id: Owner,
    /// Sorted ascending by y, then x
    vertices: [Vector3F;3],
    color: Rgba32,
    /// (v1 - v0) x (v2 - v0), not normalized
    normal: Vector3F,
    /// World translation applied at draw time
    offset: Vector3F,
    /// Point on the long edge at the middle vertex height, when there is no
    ///   horizontal edge
    split: Option<Vector3F>,
    /// One span per scanline, starting at floor(v0.y)
    spans: Vec<Span>,
    /// Absolute (x, y, depth) of every covered pixel at the current offset
    samples: Vec<Vector3I>,
}

impl Triangle {
    /// Create a new opaque white triangle
    ///
    /// Fails for non-finite vertices and for triangles seen edge-on, whose
    ///   depth plane cannot be solved.
    pub fn new(p1: Vector3F, p2: Vector3F, p3: Vector3F) -> Result<Self, Error> {
        Self::with_color(Rgba32::white(), p1, p2, p3)
    }
    /// Create a new triangle filled with `color`
    pub fn with_color(color: Rgba32, p1: Vector3F, p2: Vector3F, p3: Vector3F) -> Result<Self, Error> {
        if ! (p1.is_finite() && p2.is_finite() && p3.is_finite()) {
            return Err(Error::NonFiniteVertex);
        }
        let vertices = scan::sort_vertices([p1, p2, p3]);
        let normal = (vertices[1] - vertices[0]).cross(&(vertices[2] - vertices[0]));
        if normal.z == 0.0 {
            return Err(Error::EdgeOn);
        }
        let split = if scan::has_horizontal_edge(&vertices) {
            None
        } else {
            Some(scan::split_point(&vertices)?)
        };
        let spans = scan::build_spans(&vertices)?;
        let mut tri = Self { vertices, color, normal, split, spans,
                             id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
                             offset: Vector3F::default(),
                             samples: vec![] };
        tri.samples = tri.rasterize();
        debug!("TRIANGLE: {:?} spans {} pixels {}", tri.vertices, tri.spans.len(), tri.samples.len());
        Ok(tri)
    }

    /// Owner of the triangle's fragments in a depth buffer
    pub fn id(&self) -> Owner {
        self.id
    }
    pub fn vertices(&self) -> &[Vector3F;3] {
        &self.vertices
    }
    pub fn color(&self) -> Rgba32 {
        self.color
    }
    /// Change the fill color
    ///
    /// Samples already in a depth buffer keep the old color until the
    ///   triangle is masked and updated again.
    pub fn set_color(&mut self, color: Rgba32) {
        self.color = color;
    }
    pub fn normal(&self) -> Vector3F {
        self.normal
    }
    pub fn offset(&self) -> Vector3F {
        self.offset
    }
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
    /// Depth samples at the current offset
    pub fn samples(&self) -> &[Vector3I] {
        &self.samples
    }
    /// Number of pixels covered
    pub fn pixel_count(&self) -> usize {
        self.spans.iter().map(|s| s.len() as usize).sum()
    }
    /// Scanline of the lowest vertex, before translation
    pub fn top(&self) -> i64 {
        self.vertices[0].y.floor() as i64
    }

    /// x that anchors the span of scanline `y`, before translation
    pub fn base_x(&self, y: i64) -> i64 {
        let v = &self.vertices;
        match self.split {
            None => v[0].x.floor() as i64,
            Some(_) if y < v[1].y.floor() as i64 => v[0].x.floor() as i64,
            Some(split) => split.x.min(v[1].x).floor() as i64,
        }
    }

    /// Depth of the (translated) triangle plane at (`x`,`y`)
    ///
    /// z = p.z - (n.x * (x - p.x) + n.y * (y - p.y)) / n.z
    ///
    /// where p is the first vertex plus the offset, x and y of the offset
    ///   floored as for the samples, and n the face normal
    pub fn world_z(&self, x: i64, y: i64) -> i64 {
        let n = &self.normal;
        let p = self.vertices[0] + self.pixel_offset();
        let z = p.z - (n.x * (x as f64 - p.x) + n.y * (y as f64 - p.y)) / n.z;
        z as i64
    }

    /// Move the triangle to `offset` and recompute its depth samples
    ///
    /// This does not touch any depth buffer, see [DepthBuffer::update_triangle]
    ///
    /// [DepthBuffer::update_triangle]: ../depth/struct.DepthBuffer.html#method.update_triangle
    pub fn set_offset(&mut self, offset: Vector3F) -> &[Vector3I] {
        self.offset = offset;
        self.samples = self.rasterize();
        &self.samples
    }

    /// Offset with x and y snapped to whole pixels
    fn pixel_offset(&self) -> Vector3F {
        Vector3F::new(self.offset.x.floor(), self.offset.y.floor(), self.offset.z)
    }

    fn rasterize(&self) -> Vec<Vector3I> {
        let top = self.top();
        let off = self.pixel_offset();
        let (ox, oy) = (off.x as i64, off.y as i64);
        let mut samples = Vec::with_capacity(self.pixel_count());
        for (row, span) in self.spans.iter().enumerate() {
            let y = top + row as i64;
            let base = self.base_x(y);
            let wy = y + oy;
            for x in span.columns() {
                let wx = base + x + ox;
                samples.push(Vector3I::new(wx, wy, self.world_z(wx, wy)));
            }
        }
        samples
    }
}
