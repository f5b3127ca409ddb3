//! Gridfill - Morphological reconstruction for raster grids
//!
//! # Overview
//!
//! Gridfill computes grayscale morphological reconstruction: given a seed
//! grid and a mask grid of the same dimensions, it finds the fixpoint
//! reached by repeatedly spreading seed values to neighboring cells while
//! clamping against the mask. One generic engine serves reconstruction by
//! dilation, reconstruction by erosion, and arbitrary comparable cell
//! types, with 4- or 8-way connectivity.
//!
//! # Example
//!
//! ```
//! use gridfill::{Grid, morph};
//!
//! let mut seed: Grid<u8> = Grid::new(64, 64).unwrap();
//! seed.set(0, 0, 255).unwrap();
//! let mask = Grid::new_with_value(64, 64, 255).unwrap();
//!
//! let result = morph::seedfill_gray(&seed, &mask, morph::Connectivity::EightWay).unwrap();
//! assert_eq!(result.get(63, 63), Some(255));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use gridfill_core::*;

// Re-export the domain crate as a module
pub use gridfill_morph as morph;
