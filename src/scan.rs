//! Scanline spans
//!
//! A triangle is reduced to one span per integer scanline, starting at the
//!   scanline of its lowest vertex. Spans are stored relative to a per scanline
//!   base x so the table stays valid when the triangle is translated.

use std::cmp::Ordering;
use std::ops::Range;

use log::debug;

use crate::error::Error;
use crate::geom::Vector3F;

/// Half-open column range `[left, right)` relative to a scanline's base x
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub left: i64,
    pub right: i64,
}

impl Span {
    pub fn new(left: i64, right: i64) -> Self {
        Self { left, right }
    }
    /// Number of covered columns
    pub fn len(&self) -> i64 {
        (self.right - self.left).max(0)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Covered columns, relative to the base x
    pub fn columns(&self) -> Range<i64> {
        self.left .. self.right
    }
}

/// Sort vertices ascending by y, vertices sharing y ascending by x
pub fn sort_vertices(v: [Vector3F;3]) -> [Vector3F;3] {
    let mut v = v;
    v.sort_by(|a, b| {
        a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });
    v
}

/// Two of the sorted vertices share a y value
pub fn has_horizontal_edge(v: &[Vector3F;3]) -> bool {
    v[0].y == v[1].y || v[1].y == v[2].y
}

/// x where the edge from `a` to `b` crosses `y`
///
/// Interpolates along y, so vertical edges are exact. An edge with no
///   vertical extent has no single crossing and is an error.
pub fn edge_x(a: &Vector3F, b: &Vector3F, y: f64) -> Result<f64, Error> {
    let dy = b.y - a.y;
    if dy == 0.0 {
        return Err(Error::FlatEdge(a.y, b.y));
    }
    Ok(a.x + (y - a.y) * (b.x - a.x) / dy)
}

/// Point on the long edge (v0 to v2) at the height of the middle vertex
pub fn split_point(v: &[Vector3F;3]) -> Result<Vector3F, Error> {
    let x = edge_x(&v[0], &v[2], v[1].y)?;
    Ok(Vector3F::new(x, v[1].y, v[1].z))
}

/// Build the span table of sorted vertices `v`
///
/// Triangles without a horizontal edge are split at the middle vertex into
///   a bottom and a top triangle, each with a horizontal edge. The bottom
///   spans come first.
///
/// Spans of a triangle with a horizontal edge are relative to `floor(v0.x)`
pub fn build_spans(v: &[Vector3F;3]) -> Result<Vec<Span>, Error> {
    if ! has_horizontal_edge(v) {
        let split = split_point(v)?;
        let mut spans = build_spans(&sort_vertices([v[0], split, v[1]]))?;
        spans.extend(build_spans(&sort_vertices([split, v[1], v[2]]))?);
        return Ok(spans);
    }
    let (left, right) = if v[0].y == v[1].y {
        // Horizontal edge at the bottom, edges meet at v2
        ((v[0], v[2]), (v[1], v[2]))
    } else {
        // Horizontal edge at the top, edges meet at v0
        ((v[0], v[1]), (v[0], v[2]))
    };
    let base = v[0].x.floor();
    let (y0, y1) = (v[0].y.floor() as i64, v[2].y.floor() as i64);
    let mut spans = Vec::with_capacity((y1 - y0).max(0) as usize);
    for y in y0 .. y1 {
        let y = y as f64;
        let xl = edge_x(&left.0,  &left.1,  y)?.floor() - base;
        let xr = edge_x(&right.0, &right.1, y)?.floor() - base;
        spans.push(Span::new(xl as i64, xr as i64));
    }
    debug!("BUILD SPANS: y {} .. {} => {} spans", y0, y1, spans.len());
    Ok(spans)
}
