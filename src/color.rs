//! Colors
//!
//! Components are f32 values in [0,1]. Every write goes through a clamp, so
//!   a color can never hold a component outside that range.

use std::ops::Index;

use crate::math::clamp01;
use crate::Color;

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgb32 {
    r: f32,
    g: f32,
    b: f32,
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Rgba32 {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Rgb32 {
    /// Number of components
    pub const LEN: usize = 3;

    /// Create new color, components are clamped to [0,1]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r: clamp01(r), g: clamp01(g), b: clamp01(b) }
    }
    /// White Color (1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
    pub fn r(&self) -> f32 { self.r }
    pub fn g(&self) -> f32 { self.g }
    pub fn b(&self) -> f32 { self.b }
    pub fn set_r(&mut self, v: f32) { self.r = clamp01(v); }
    pub fn set_g(&mut self, v: f32) { self.g = clamp01(v); }
    pub fn set_b(&mut self, v: f32) { self.b = clamp01(v); }
    /// Component at `i` (0: red, 1: green, 2: blue)
    pub fn get(&self, i: usize) -> Option<f32> {
        match i {
            0 => Some(self.r),
            1 => Some(self.g),
            2 => Some(self.b),
            _ => None,
        }
    }
}

impl Rgba32 {
    /// Number of components
    pub const LEN: usize = 4;

    /// Create new color, components are clamped to [0,1]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r: clamp01(r), g: clamp01(g), b: clamp01(b), a: clamp01(a) }
    }
    /// Opaque color
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
    /// White Color (1,1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0,1)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
    pub fn r(&self) -> f32 { self.r }
    pub fn g(&self) -> f32 { self.g }
    pub fn b(&self) -> f32 { self.b }
    pub fn a(&self) -> f32 { self.a }
    pub fn set_r(&mut self, v: f32) { self.r = clamp01(v); }
    pub fn set_g(&mut self, v: f32) { self.g = clamp01(v); }
    pub fn set_b(&mut self, v: f32) { self.b = clamp01(v); }
    pub fn set_a(&mut self, v: f32) { self.a = clamp01(v); }
    /// Alpha is exactly 1.0
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
    /// Component at `i` (0: red, 1: green, 2: blue, 3: alpha)
    pub fn get(&self, i: usize) -> Option<f32> {
        match i {
            0 => Some(self.r),
            1 => Some(self.g),
            2 => Some(self.b),
            3 => Some(self.a),
            _ => None,
        }
    }
    /// Red, Green, Blue without alpha
    pub fn to_rgb(&self) -> Rgb32 {
        Rgb32 { r: self.r, g: self.g, b: self.b }
    }
}

/// Opaque White
impl Default for Rgba32 {
    fn default() -> Self {
        Self::white()
    }
}

impl From<Rgba32> for Rgb32 {
    fn from(c: Rgba32) -> Rgb32 {
        c.to_rgb()
    }
}
impl From<Rgb32> for Rgba32 {
    fn from(c: Rgb32) -> Rgba32 {
        Rgba32 { r: c.r, g: c.g, b: c.b, a: 1.0 }
    }
}

impl Index<usize> for Rgb32 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("request {} >= {} :: index", i, Self::LEN),
        }
    }
}
impl Index<usize> for Rgba32 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("request {} >= {} :: index", i, Self::LEN),
        }
    }
}

impl Color for Rgb32 {
    fn   red(&self) -> f64 { f64::from(self.r) }
    fn green(&self) -> f64 { f64::from(self.g) }
    fn  blue(&self) -> f64 { f64::from(self.b) }
    fn alpha(&self) -> f64 { 1.0 }
}
impl Color for Rgba32 {
    fn   red(&self) -> f64 { f64::from(self.r) }
    fn green(&self) -> f64 { f64::from(self.g) }
    fn  blue(&self) -> f64 { f64::from(self.b) }
    fn alpha(&self) -> f64 { f64::from(self.a) }
}
