//! Configuration
//!
//! Buffer extents and the far plane are supplied here rather than fixed in
//!   the compositor. The scene section only drives the demo scene.
//!
//! Deserialized from JSON; every field falls back to its default when missing.

use std::path::Path;
use std::path::PathBuf;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Buffer width in pixels
    pub width: usize,
    /// Buffer height in pixels
    pub height: usize,
    /// Depth of the permanent background entry
    pub z_far: i64,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for asteroid shapes and colors
    pub seed: u64,
    /// Frames rendered by the solar-system binary
    pub frames: usize,
    /// Orbit angle increment per frame
    pub orbit_step: f64,
    pub max_asteroids: usize,
    /// Frames between asteroid spawns
    pub asteroid_interval: usize,
    /// Pixels moved to the right per frame
    pub asteroid_speed: f64,
    /// Where the binary writes the final frame
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            z_far: -1000,
            scene: SceneConfig::default(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            frames: 120,
            orbit_step: 0.01,
            max_asteroids: 10,
            asteroid_interval: 30,
            asteroid_speed: 40.0,
            output: PathBuf::from("solar_system.png"),
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration
    pub fn from_json(s: &str) -> Result<Self, Error> {
        let config: Config = serde_json::from_str(s)?;
        if config.width == 0 || config.height == 0 {
            let msg = format!("buffer extents must be positive, got {}x{}", config.width, config.height);
            return Err(Error::Config(serde_json::Error::custom(msg)));
        }
        Ok(config)
    }
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!((c.width, c.height, c.z_far), (800, 600, -1000));
        assert_eq!(c.scene.max_asteroids, 10);
    }

    #[test]
    fn partial_json() {
        let c = Config::from_json(r#"{"width": 64, "scene": {"seed": 7}}"#).unwrap();
        assert_eq!(c.width, 64);
        assert_eq!(c.height, 600);
        assert_eq!(c.scene.seed, 7);
        assert_eq!(c.scene.asteroid_speed, 40.0);
    }

    #[test]
    fn bad_json() {
        let e = Config::from_json("{width: }").unwrap_err();
        assert!(matches!(e, Error::Config(_)));
        assert!(! e.is_degenerate());
    }

    #[test]
    fn zero_extent() {
        let e = Config::from_json(r#"{"width": 0}"#).unwrap_err();
        assert!(matches!(e, Error::Config(_)));
        assert!(e.to_string().contains("0x600"));
        let e = Config::from_json(r#"{"height": 0}"#).unwrap_err();
        assert!(matches!(e, Error::Config(_)));
    }

    #[test]
    fn missing_file() {
        let e = Config::from_file("/nonexistent/abuffer.json").unwrap_err();
        assert!(matches!(e, Error::Io(_)));
    }
}
