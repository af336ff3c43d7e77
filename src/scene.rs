//! Solar system demo scene
//!
//! A translucent sun with six planets orbiting the center of the buffer,
//!   asteroids crossing from the left edge, and an opaque alien planet whose
//!   plane tilts through the other triangles.
//!
//! Larger depths are nearer: the sun (-1) is in front of the planets
//!   (-2 .. -7), which are in front of the asteroids (-10).

use std::f64::consts::PI;

use log::debug;
use log::warn;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::color::Rgba32;
use crate::config::Config;
use crate::config::SceneConfig;
use crate::depth::DepthBuffer;
use crate::error::Error;
use crate::geom::Vector3F;
use crate::triangle::Triangle;
use crate::PixelSink;

const SUN_DEPTH: f64 = -1.0;
const ASTEROID_DEPTH: f64 = -10.0;

/// Planet colors (r,g,b) and vertices relative to the buffer center
const PLANETS: [([f32;3], [(f64,f64);3]);6] = [
    ([1.0, 0.1, 0.3],                       [(-20.0,   0.0), (10.0, -20.0), (35.0, 30.0)]),
    ([139.0/255.0, 69.0/255.0, 16.0/255.0], [(-15.0, -10.0), ( 5.0,  -5.0), (25.0, 40.0)]),
    ([0.0, 1.0, 0.8],                       [(-20.0,   0.0), (10.0, -20.0), (35.0, 30.0)]),
    ([1.0, 0.0, 0.0],                       [(-10.0, -10.0), ( 5.0,  15.0), (15.0, 10.0)]),
    ([244.0/255.0, 164.0/255.0, 96.0/255.0],[(-35.0, -35.0), (35.0,   0.0), ( 0.0, 33.0)]),
    ([218.0/255.0, 165.0/255.0, 32.0/255.0],[(-30.0,   5.0), (25.0, -30.0), (10.0, 28.0)]),
];
const PLANET_ALPHA: f32 = 0.95;

#[derive(Debug)]
pub struct SolarSystem {
    config: SceneConfig,
    width: usize,
    height: usize,
    rng: StdRng,
    sun: Triangle,
    planets: Vec<Triangle>,
    asteroids: Vec<Triangle>,
    alien: Triangle,
    /// Orbit angle
    theta: f64,
    frame: usize,
    last_spawn: Option<usize>,
}

impl SolarSystem {
    /// Build the scene and insert its triangles into `buf`
    pub fn new<S: PixelSink>(config: &Config, buf: &mut DepthBuffer<S>) -> Result<Self, Error> {
        let (cx, cy) = ((config.width / 2) as f64, (config.height / 2) as f64);
        let at = |dx: f64, dy: f64, z: f64| Vector3F::new(cx + dx, cy + dy, z);

        let sun = Triangle::with_color(Rgba32::new(1.0, 1.0, 0.0, 0.95),
                                       at(-50.0, -50.0, SUN_DEPTH),
                                       at( 50.0, -30.0, SUN_DEPTH),
                                       at(  0.0,  20.0, SUN_DEPTH))?;
        let mut planets = Vec::with_capacity(PLANETS.len());
        for (i, (c, p)) in PLANETS.iter().enumerate() {
            let z = -2.0 - i as f64;
            let color = Rgba32::new(c[0], c[1], c[2], PLANET_ALPHA);
            planets.push(Triangle::with_color(color,
                                              at(p[0].0, p[0].1, z),
                                              at(p[1].0, p[1].1, z),
                                              at(p[2].0, p[2].1, z))?);
        }
        let alien = Triangle::with_color(Rgba32::rgb(120.0/255.0, 81.0/255.0, 169.0/255.0),
                                         Vector3F::new(50.0, 0.0, -30.0),
                                         Vector3F::new(100.0, 150.0, -30.0),
                                         Vector3F::new(75.0, config.height as f64 - 1.0, 0.0))?;

        let mut scene = Self {
            config: config.scene.clone(),
            width: config.width,
            height: config.height,
            rng: StdRng::seed_from_u64(config.scene.seed),
            sun, planets, alien,
            asteroids: vec![],
            theta: 0.0,
            frame: 0,
            last_spawn: None,
        };
        // Static triangles are inserted once
        let origin = Vector3F::default();
        buf.update_triangle(&mut scene.sun, origin);
        buf.update_triangle(&mut scene.alien, origin);
        for i in 0 .. scene.planets.len() {
            let offset = scene.orbit(i);
            buf.update_triangle(&mut scene.planets[i], offset);
        }
        Ok(scene)
    }

    pub fn sun(&self) -> &Triangle {
        &self.sun
    }
    pub fn alien(&self) -> &Triangle {
        &self.alien
    }
    pub fn planets(&self) -> &[Triangle] {
        &self.planets
    }
    pub fn asteroids(&self) -> &[Triangle] {
        &self.asteroids
    }
    /// Number of steps taken
    pub fn frame(&self) -> usize {
        self.frame
    }
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Offset of planet `i` at the current orbit angle
    fn orbit(&self, i: usize) -> Vector3F {
        let radius = 40.0 * (i + 1) as f64;
        let speed = (self.planets.len() - i) as f64 * PI / 2.0;
        let a = self.theta * speed;
        Vector3F::new(radius * a.cos(), radius * a.sin(), 0.0)
    }

    /// Advance the scene one frame
    pub fn step<S: PixelSink>(&mut self, buf: &mut DepthBuffer<S>) {
        self.theta += self.config.orbit_step;
        for i in 0 .. self.planets.len() {
            let offset = self.orbit(i);
            buf.move_triangle(&mut self.planets[i], offset);
        }
        self.update_asteroids(buf);
        self.frame += 1;
    }

    fn update_asteroids<S: PixelSink>(&mut self, buf: &mut DepthBuffer<S>) {
        let width = self.width as f64;
        let speed = self.config.asteroid_speed;
        let mut kept = Vec::with_capacity(self.asteroids.len());
        for mut a in self.asteroids.drain(..) {
            buf.mask(&a);
            // Drawn one last time while crossing the right edge
            let x = a.offset().x;
            if a.vertices().iter().any(|v| v.x + x >= width) {
                debug!("ASTEROID: off screen at {}", x);
                continue;
            }
            buf.update_triangle(&mut a, Vector3F::new(x + speed, 0.0, 0.0));
            kept.push(a);
        }
        self.asteroids = kept;

        let due = match self.last_spawn {
            None => true,
            Some(f) => self.frame - f >= self.config.asteroid_interval,
        };
        if due && self.asteroids.len() < self.config.max_asteroids {
            self.last_spawn = Some(self.frame);
            match self.new_asteroid() {
                Ok(mut a) => {
                    buf.update_triangle(&mut a, Vector3F::default());
                    self.asteroids.push(a);
                }
                Err(e) => warn!("skipping asteroid: {}", e),
            }
        }
    }

    /// Random translucent color, rgb in [0.5,1], alpha in [0.8,1]
    fn random_color(&mut self) -> Rgba32 {
        let r = 0.5 + self.rng.gen_range(0 ..= 500) as f32 / 1000.0;
        let g = 0.5 + self.rng.gen_range(0 ..= 500) as f32 / 1000.0;
        let b = 0.5 + self.rng.gen_range(0 ..= 500) as f32 / 1000.0;
        let a = 0.8 + self.rng.gen_range(0 ..= 200) as f32 / 1000.0;
        Rgba32::new(r, g, b, a)
    }

    fn new_asteroid(&mut self) -> Result<Triangle, Error> {
        let color = self.random_color();
        let rows = (self.height as i64 - 36).max(1);
        let y = 15.0 + self.rng.gen_range(0 .. rows) as f64;
        let v0 = Vector3F::new(0.0, y, ASTEROID_DEPTH);
        let v1 = Vector3F::new(self.rng.gen_range(0 .. 30) as f64,
                               y + 5.0 + self.rng.gen_range(0 .. 16) as f64,
                               ASTEROID_DEPTH);
        let v2 = Vector3F::new(20.0 + self.rng.gen_range(0 .. 70) as f64,
                               y - 15.0 + self.rng.gen_range(0 .. 16) as f64,
                               ASTEROID_DEPTH);
        Triangle::with_color(color, v0, v1, v2)
    }
}
