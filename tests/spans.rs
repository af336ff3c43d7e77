
extern crate abuffer;

use std::collections::BTreeMap;

use abuffer::Triangle;
use abuffer::Vector3F;

fn v(x: f64, y: f64) -> Vector3F {
    Vector3F::new(x, y, -1.0)
}

/// Columns covered on each scanline, intersecting the scanline with every
///   edge of the triangle
fn reference_fill(p: [Vector3F;3]) -> BTreeMap<i64, Vec<i64>> {
    let ymin = p.iter().map(|v| v.y).fold(std::f64::INFINITY, f64::min);
    let ymax = p.iter().map(|v| v.y).fold(std::f64::NEG_INFINITY, f64::max);
    let edges = [(p[0], p[1]), (p[1], p[2]), (p[2], p[0])];
    let mut rows = BTreeMap::new();
    for y in ymin.floor() as i64 .. ymax.floor() as i64 {
        let yf = y as f64;
        let xs: Vec<f64> = edges.iter()
            .filter(|(a,b)| a.y != b.y && a.y.min(b.y) <= yf && yf <= a.y.max(b.y))
            .map(|(a,b)| a.x + (yf - a.y) * (b.x - a.x) / (b.y - a.y))
            .collect();
        let x0 = xs.iter().cloned().fold(std::f64::INFINITY, f64::min).floor() as i64;
        let x1 = xs.iter().cloned().fold(std::f64::NEG_INFINITY, f64::max).floor() as i64;
        rows.insert(y, (x0 .. x1).collect());
    }
    rows
}

fn triangle_fill(t: &Triangle) -> BTreeMap<i64, Vec<i64>> {
    let mut rows = BTreeMap::new();
    for y in t.top() .. t.top() + t.spans().len() as i64 {
        rows.insert(y, vec![]);
    }
    for s in t.samples() {
        rows.entry(s.y).or_insert_with(Vec::new).push(s.x);
    }
    rows
}

/// Twice the signed area of (a, b, q), positive when q is left of a -> b
fn orient(a: &Vector3F, b: &Vector3F, qx: f64, qy: f64) -> f64 {
    (b.x - a.x) * (qy - a.y) - (b.y - a.y) * (qx - a.x)
}

/// Point inside the triangle or on its boundary
fn contains(p: &[Vector3F;3], qx: f64, qy: f64) -> bool {
    let d = [orient(&p[0], &p[1], qx, qy), orient(&p[1], &p[2], qx, qy), orient(&p[2], &p[0], qx, qy)];
    d.iter().all(|&v| v >= 0.0) || d.iter().all(|&v| v <= 0.0)
}

/// Pixel coverage from point-in-triangle tests alone
///
/// Spans run from floor(left) to floor(right), half-open, on the scanlines
///   floor(ymin) .. floor(ymax) sampled at integer y. Column x is therefore
///   covered when left < x + 1 <= right: the point (x + 1, y) is inside and
///   a point just left of it is still inside. Edge crossings of the shapes
///   below are multiples of 1/64, so a step of 1/4096 never jumps an edge.
fn covered(p: &[Vector3F;3], x: i64, y: i64) -> bool {
    let (qx, qy) = ((x + 1) as f64, y as f64);
    contains(p, qx, qy) && contains(p, qx - 1.0 / 4096.0, qy)
}

fn check_containment(p: [Vector3F;3]) {
    let t = Triangle::new(p[0], p[1], p[2]).unwrap();
    let fill = triangle_fill(&t);
    let xmin = p.iter().map(|v| v.x).fold(std::f64::INFINITY, f64::min).floor() as i64;
    let xmax = p.iter().map(|v| v.x).fold(std::f64::NEG_INFINITY, f64::max).ceil() as i64;
    let ymin = p.iter().map(|v| v.y).fold(std::f64::INFINITY, f64::min).floor() as i64;
    let ymax = p.iter().map(|v| v.y).fold(std::f64::NEG_INFINITY, f64::max).floor() as i64;
    for s in t.samples() {
        assert!(covered(&p, s.x, s.y), "sample ({},{}) outside {:?}", s.x, s.y, p);
    }
    for y in ymin - 1 .. ymax + 2 {
        for x in xmin - 2 .. xmax + 2 {
            let want = y >= ymin && y < ymax && covered(&p, x, y);
            let got = fill.get(&y).map(|r| r.contains(&x)).unwrap_or(false);
            assert_eq!(got, want, "pixel ({},{}) of {:?}", x, y, p);
        }
    }
}

fn check(p: [Vector3F;3]) {
    check_containment(p);
    let t = Triangle::new(p[0], p[1], p[2]).unwrap();
    let want = reference_fill(p);
    let got = triangle_fill(&t);
    assert_eq!(got, want);
    let n: usize = want.values().map(|r| r.len()).sum();
    assert_eq!(t.pixel_count(), n);
    assert_eq!(t.samples().len(), n);
}

#[test]
fn right_triangle() {
    check([v(0.0, 0.0), v(16.0, 0.0), v(0.0, 16.0)]);
    check([v(3.0, 5.0), v(3.0, 21.0), v(19.0, 21.0)]);
}

#[test]
fn obtuse_triangle() {
    check([v(0.0, 0.0), v(24.0, 8.0), v(8.0, 16.0)]);
    check([v(8.0, 16.0), v(0.0, 0.0), v(24.0, 8.0)]);
}

#[test]
fn thin_triangle() {
    check([v(0.0, 0.0), v(2.0, 32.0), v(1.0, 64.0)]);
}

#[test]
fn vertical_edge() {
    // Long edge is vertical, split point sits on it
    check([v(0.0, 0.0), v(12.0, 8.0), v(0.0, 16.0)]);
    check([v(10.0, 0.0), v(10.0, 16.0), v(2.0, 8.0)]);
}

#[test]
fn fractional_vertices() {
    check([v(0.5, 0.0), v(13.25, 8.0), v(5.75, 16.0)]);
    check([v(2.75, 4.0), v(18.5, 4.0), v(9.125, 12.0)]);
}

#[test]
fn vertex_order() {
    let p = [v(5.0, 8.0), v(1.0, 0.0), v(9.0, 0.0)];
    let perms = [[0,1,2], [0,2,1], [1,0,2], [1,2,0], [2,0,1], [2,1,0]];
    let first = Triangle::new(p[0], p[1], p[2]).unwrap();
    for q in perms.iter() {
        let t = Triangle::new(p[q[0]], p[q[1]], p[q[2]]).unwrap();
        let s = t.vertices();
        assert_eq!(s, &[v(1.0, 0.0), v(9.0, 0.0), v(5.0, 8.0)]);
        for w in s.windows(2) {
            assert!(w[0].y < w[1].y || (w[0].y == w[1].y && w[0].x <= w[1].x));
        }
        assert_eq!(t.samples(), first.samples());
    }
}

#[test]
fn degenerate_triangles() {
    let e = Triangle::new(v(0.0, 0.0), v(4.0, 4.0), v(8.0, 8.0)).unwrap_err();
    assert!(e.is_degenerate());
    let e = Triangle::new(v(0.0, std::f64::INFINITY), v(4.0, 4.0), v(8.0, 0.0)).unwrap_err();
    assert!(e.is_degenerate());
}
