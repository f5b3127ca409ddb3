//! Error types for gridfill-core
//!
//! Provides a unified error type for grid construction and access.

use thiserror::Error;

/// Gridfill error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Backing data length does not match the grid dimensions
    #[error("data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Row stride shorter than the grid width
    #[error("stride too small: stride {stride} < width {width}")]
    StrideTooSmall { stride: usize, width: usize },

    /// Backing slice too short for the given dimensions and stride
    #[error("buffer too small: required {required}, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Cell coordinates out of bounds
    #[error("cell out of bounds: ({x}, {y})")]
    CellOutOfBounds { x: u32, y: u32 },

    /// Requested sub-rectangle extends past the parent grid
    #[error("region out of bounds: {width}x{height} at ({x}, {y})")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for gridfill operations
pub type Result<T> = std::result::Result<T, Error>;
