//! Gridfill Core - Basic raster data structures
//!
//! This crate provides the fundamental data structures used throughout the
//! gridfill library:
//!
//! - [`Grid`] - Owned, generic 2D raster container (row-major, unpadded)
//! - [`GridView`] / [`GridViewMut`] - Borrowed, stride-addressed windows
//!   supporting sub-rectangles without copying
//! - [`Error`] / [`Result`] - Unified error type for grid operations

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{Grid, GridView, GridViewMut};
