//! Fixed size vectors

use std::ops::Add;
use std::ops::Sub;
use std::ops::Index;
use std::ops::IndexMut;

/// Two component vector
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// Three component vector
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vector2I = Vector2<i64>;
pub type Vector2F = Vector2<f64>;
pub type Vector3I = Vector3<i64>;
pub type Vector3F = Vector3<f64>;

impl<T> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
    /// Component at `i`, None if `i` is outside 0..2
    pub fn get(&self, i: usize) -> Option<&T> {
        match i {
            0 => Some(&self.x),
            1 => Some(&self.y),
            _ => None,
        }
    }
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        match i {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            _ => None,
        }
    }
}

impl<T> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
    /// Component at `i`, None if `i` is outside 0..3
    pub fn get(&self, i: usize) -> Option<&T> {
        match i {
            0 => Some(&self.x),
            1 => Some(&self.y),
            2 => Some(&self.z),
            _ => None,
        }
    }
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        match i {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Some(v) => v,
            None => panic!("request {} >= 2 :: index", i),
        }
    }
}
impl<T> IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.get_mut(i) {
            Some(v) => v,
            None => panic!("request {} >= 2 :: index_mut", i),
        }
    }
}
impl<T> Index<usize> for Vector3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Some(v) => v,
            None => panic!("request {} >= 3 :: index", i),
        }
    }
}
impl<T> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.get_mut(i) {
            Some(v) => v,
            None => panic!("request {} >= 3 :: index_mut", i),
        }
    }
}

impl<T: Add<Output=T>> Add for Vector3<T> {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}
impl<T: Sub<Output=T>> Sub for Vector3<T> {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Vector3F {
    /// Cross product, not normalized
    pub fn cross(&self, o: &Self) -> Self {
        Self::new(self.y * o.z - self.z * o.y,
                  self.z * o.x - self.x * o.z,
                  self.x * o.y - self.y * o.x)
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
