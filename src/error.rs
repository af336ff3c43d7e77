//! Errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Edge interpolation on an edge without vertical extent
    #[error("degenerate edge: no vertical extent between y = {0} and y = {1}")]
    FlatEdge(f64, f64),
    /// Face normal has no z component, the plane cannot be solved for depth
    #[error("degenerate triangle: edge-on to the view axis (normal z is zero)")]
    EdgeOn,
    #[error("degenerate triangle: vertex coordinate is not finite")]
    NonFiniteVertex,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Geometry that cannot be rasterized; callers may skip the triangle
    pub fn is_degenerate(&self) -> bool {
        match self {
            Error::FlatEdge(..) | Error::EdgeOn | Error::NonFiniteVertex => true,
            _ => false,
        }
    }
}
