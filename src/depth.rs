//! Depth sorted alpha compositing
//!
//! Each pixel keeps every fragment that covers it, ordered by depth, in two
//!   sequences of equal length:
//!
//! - raw:     source colors as inserted
//! - blended: colors composited back to front over everything behind them
//!
//! Index 0 of both is the background at the far plane. It is opaque and
//!   never removed. The last blended entry is the visible color.
//!
//! Pixels that only hold the background are not stored.
//!
//! Triangles writing the same pixel at the same depth share one entry. The
//!   entry remembers each owner's color: the most recent writer is shown,
//!   and masking a triangle falls back to whoever wrote before it.
//!
//! Moving a triangle is a mask (remove its old samples) followed by an
//!   update (insert its new samples). Masking after the update would remove
//!   entries the new position just inserted where the old and new positions
//!   overlap at the same depth.

use std::collections::HashMap;

use log::trace;

use crate::color::Rgb32;
use crate::color::Rgba32;
use crate::config::Config;
use crate::geom::Vector3F;
use crate::math::blend_average;
use crate::triangle::Triangle;
use crate::PixelSink;

/// Color at a depth
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct DepthEntry {
    pub depth: i64,
    pub color: Rgba32,
}

impl DepthEntry {
    pub fn new(depth: i64, color: Rgba32) -> Self {
        Self { depth, color }
    }
}

/// Writer of fragments, see [Triangle::id]
///
/// [Triangle::id]: ../triangle/struct.Triangle.html#method.id
pub type Owner = u64;

/// Owner of fragments written one sample at a time with [DepthBuffer::update]
///
/// [DepthBuffer::update]: struct.DepthBuffer.html#method.update
pub const UNOWNED: Owner = 0;

/// Fragments covering a single pixel
#[derive(Debug,Clone)]
pub struct PixelStack {
    raw: Vec<DepthEntry>,
    blended: Vec<DepthEntry>,
    /// Owners and colors written at each raw entry, most recent last
    writers: Vec<Vec<(Owner, Rgba32)>>,
}

impl PixelStack {
    /// Create a stack holding only `background`, which must be opaque
    pub fn new(background: DepthEntry) -> Self {
        assert!(background.color.is_opaque(), "background must be opaque: {:?}", background);
        Self { raw: vec![background], blended: vec![background], writers: vec![vec![]] }
    }
    /// Source colors, ascending by depth
    pub fn raw(&self) -> &[DepthEntry] {
        &self.raw
    }
    /// Composited colors, ascending by depth
    pub fn blended(&self) -> &[DepthEntry] {
        &self.blended
    }
    /// Owners that wrote the entry at `depth`, oldest first
    pub fn owners(&self, depth: i64) -> Vec<Owner> {
        match self.raw.binary_search_by_key(&depth, |e| e.depth) {
            Ok(i) => self.writers[i].iter().map(|w| w.0).collect(),
            Err(_) => vec![],
        }
    }
    /// Number of entries, including the background
    pub fn len(&self) -> usize {
        self.raw.len()
    }
    /// Only the background is left
    pub fn is_background(&self) -> bool {
        self.raw.len() == 1
    }
    /// Color of the nearest blended entry
    pub fn visible(&self) -> Rgb32 {
        self.blended[self.blended.len() - 1].color.to_rgb()
    }

    /// Write `color` at `depth` for `owner`
    ///
    /// An existing entry at `depth` takes the new color. Writing again for
    ///   the same owner replaces its earlier color, so repeated writes are
    ///   idempotent.
    ///
    /// # Panics
    ///
    /// If `depth` is not in front of the background
    pub fn insert(&mut self, depth: i64, color: Rgba32, owner: Owner) {
        assert!(depth > self.raw[0].depth,
                "depth {} is not in front of the background at {}", depth, self.raw[0].depth);
        match self.raw.binary_search_by_key(&depth, |e| e.depth) {
            Ok(i) => {
                let w = &mut self.writers[i];
                w.retain(|&(o, _)| o != owner);
                w.push((owner, color));
                if w.len() > 1 {
                    trace!("INSERT: depth {} shared by {} owners", depth, w.len());
                }
                self.raw[i].color = color;
            }
            Err(i) => {
                let e = DepthEntry::new(depth, color);
                self.raw.insert(i, e);
                self.blended.insert(i, e);
                self.writers.insert(i, vec![(owner, color)]);
            }
        }
        self.blend();
    }

    fn position(&self, depth: i64) -> usize {
        let i = match self.raw.binary_search_by_key(&depth, |e| e.depth) {
            Ok(i) => i,
            Err(_) => panic!("no entry at depth {} to remove", depth),
        };
        assert!(i > 0, "background entry at depth {} cannot be removed", depth);
        i
    }

    /// Remove the entry at `depth`, whoever wrote it
    ///
    /// # Panics
    ///
    /// If there is no entry at `depth`, or `depth` is the background
    pub fn remove(&mut self, depth: i64) {
        let i = self.position(depth);
        self.raw.remove(i);
        self.blended.remove(i);
        self.writers.remove(i);
        self.blend();
    }

    /// Remove what `owner` wrote at `depth`
    ///
    /// The entry falls back to the color of the most recent remaining
    ///   owner, or goes when none is left.
    ///
    /// # Panics
    ///
    /// If `owner` has nothing at `depth`, or `depth` is the background
    pub fn release(&mut self, depth: i64, owner: Owner) {
        let i = self.position(depth);
        let w = &mut self.writers[i];
        let k = match w.iter().position(|&(o, _)| o == owner) {
            Some(k) => k,
            None => panic!("no entry at depth {} to remove for owner {}", depth, owner),
        };
        w.remove(k);
        let last = w.last().map(|&(_, c)| c);
        match last {
            Some(color) => self.raw[i].color = color,
            None => {
                self.raw.remove(i);
                self.blended.remove(i);
                self.writers.remove(i);
            }
        }
        self.blend();
    }

    /// Recompute the blended sequence from the raw sequence
    ///
    /// Walking from the background forward, opaque entries are kept as is,
    ///   translucent entries are averaged with the color behind them (see
    ///   [blend_average]). Either way the result is the color behind the
    ///   next entry.
    ///
    /// [blend_average]: ../math/fn.blend_average.html
    pub fn blend(&mut self) {
        debug_assert_eq!(self.raw.len(), self.blended.len());
        let mut behind = self.raw[0].color.to_rgb();
        for (raw, blended) in self.raw.iter().zip(self.blended.iter_mut()).skip(1) {
            let color = if raw.color.is_opaque() {
                raw.color
            } else {
                blend_average(&raw.color, &behind)
            };
            *blended = DepthEntry::new(raw.depth, color);
            behind = color.to_rgb();
        }
    }
}

/// Per pixel depth and alpha buffer writing into a [PixelSink]
///
/// [PixelSink]: ../trait.PixelSink.html
#[derive(Debug)]
pub struct DepthBuffer<S> {
    width: usize,
    height: usize,
    background: [DepthEntry;1],
    stacks: HashMap<usize, PixelStack>,
    sink: S,
}

impl<S: PixelSink> DepthBuffer<S> {
    /// Create a depth buffer with extents and far plane from `config`
    pub fn new(config: &Config, sink: S) -> Self {
        Self::with_size(config.width, config.height, config.z_far, sink)
    }
    /// Create a depth buffer of `width` x `height` with a black background
    ///   at depth `z_far`
    pub fn with_size(width: usize, height: usize, z_far: i64, sink: S) -> Self {
        let background = DepthEntry::new(z_far, Rgba32::black());
        Self { width, height, sink,
               background: [background],
               stacks: HashMap::new() }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Depth of the background
    pub fn z_far(&self) -> i64 {
        self.background[0].depth
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
    pub fn into_sink(self) -> S {
        self.sink
    }
    /// Number of pixels holding more than the background
    pub fn active_pixels(&self) -> usize {
        self.stacks.len()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(x as usize + y as usize * self.width)
    }
    /// Index of a sample that can be stored, None if it is outside the
    ///   buffer or not in front of the far plane
    fn sample_index(&self, x: i64, y: i64, z: i64) -> Option<usize> {
        if z <= self.z_far() {
            trace!("CULL: ({},{}) depth {} behind far plane {}", x, y, z, self.z_far());
            return None;
        }
        self.index(x, y)
    }

    /// Source colors at (`x`,`y`), ascending by depth
    ///
    /// Outside the buffer this is the background only
    pub fn raw_entries(&self, x: i64, y: i64) -> &[DepthEntry] {
        match self.index(x, y).and_then(|i| self.stacks.get(&i)) {
            Some(stack) => stack.raw(),
            None => &self.background,
        }
    }
    /// Composited colors at (`x`,`y`), ascending by depth
    pub fn blended_entries(&self, x: i64, y: i64) -> &[DepthEntry] {
        match self.index(x, y).and_then(|i| self.stacks.get(&i)) {
            Some(stack) => stack.blended(),
            None => &self.background,
        }
    }
    /// Color shown at (`x`,`y`)
    pub fn visible_color(&self, x: i64, y: i64) -> Rgb32 {
        match self.index(x, y).and_then(|i| self.stacks.get(&i)) {
            Some(stack) => stack.visible(),
            None => self.background[0].color.to_rgb(),
        }
    }

    /// Insert or overwrite the fragment at (`x`,`y`,`z`) and redraw the pixel
    ///
    /// Samples outside the buffer, or at or behind the far plane, are ignored
    pub fn update(&mut self, x: i64, y: i64, z: i64, color: &Rgba32) {
        self.write(x, y, z, color, UNOWNED);
    }

    fn write(&mut self, x: i64, y: i64, z: i64, color: &Rgba32, owner: Owner) {
        let i = match self.sample_index(x, y, z) {
            Some(i) => i,
            None => return,
        };
        let background = self.background[0];
        let stack = self.stacks.entry(i).or_insert_with(|| PixelStack::new(background));
        stack.insert(z, *color, owner);
        let visible = stack.visible();
        self.sink.set_pixel(x, y, &visible);
    }

    /// Remove the fragment at (`x`,`y`,`z`) and redraw the pixel
    ///
    /// Samples outside the buffer, or at or behind the far plane, are ignored
    ///
    /// # Panics
    ///
    /// If no fragment was inserted at (`x`,`y`,`z`)
    pub fn remove(&mut self, x: i64, y: i64, z: i64) {
        self.erase(x, y, z, None);
    }

    fn erase(&mut self, x: i64, y: i64, z: i64, owner: Option<Owner>) {
        let i = match self.sample_index(x, y, z) {
            Some(i) => i,
            None => return,
        };
        let visible = match self.stacks.get_mut(&i) {
            Some(stack) => {
                match owner {
                    Some(owner) => stack.release(z, owner),
                    None => stack.remove(z),
                }
                stack.visible()
            }
            None => panic!("no entry at depth {} to remove at ({},{})", z, x, y),
        };
        if self.stacks.get(&i).map(|s| s.is_background()).unwrap_or(false) {
            self.stacks.remove(&i);
        }
        self.sink.set_pixel(x, y, &visible);
    }

    /// Remove every sample of `triangle` at its current offset
    ///
    /// Entries the triangle shares with others fall back to their colors.
    ///   Must be called before the triangle moves.
    pub fn mask(&mut self, triangle: &Triangle) {
        let owner = triangle.id();
        for s in triangle.samples() {
            self.erase(s.x, s.y, s.z, Some(owner));
        }
    }

    /// Move `triangle` to `offset` and insert its samples
    ///
    /// The triangle's previous samples are not removed, see [mask] and
    ///   [move_triangle]
    ///
    /// [mask]: #method.mask
    /// [move_triangle]: #method.move_triangle
    pub fn update_triangle(&mut self, triangle: &mut Triangle, offset: Vector3F) {
        triangle.set_offset(offset);
        let color = triangle.color();
        let owner = triangle.id();
        for s in triangle.samples() {
            self.write(s.x, s.y, s.z, &color, owner);
        }
    }

    /// Mask `triangle` at its current offset, then update it at `offset`
    pub fn move_triangle(&mut self, triangle: &mut Triangle, offset: Vector3F) {
        self.mask(triangle);
        self.update_triangle(triangle, offset);
    }

    /// Write the visible color of every pixel into the sink
    pub fn redraw(&mut self) {
        for y in 0 .. self.height as i64 {
            for x in 0 .. self.width as i64 {
                let c = self.visible_color(x, y);
                self.sink.set_pixel(x, y, &c);
            }
        }
    }
}
