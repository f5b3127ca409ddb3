//! gridfill-morph - Morphological reconstruction for raster grids
//!
//! This crate provides morphological grayscale reconstruction:
//!
//! - A generic hybrid reconstruction engine (raster pre-pass + queue
//!   propagation), parameterized over the cell type, the spread/mask
//!   operator pair, and 4-/8-connectivity
//! - Grid- and view-level wrappers with dimension validation
//! - Concrete 8-bit operations: reconstruction by dilation and by erosion,
//!   and grayscale hole filling
//!
//! # Example
//!
//! ```
//! use gridfill_core::Grid;
//! use gridfill_morph::{Connectivity, seedfill_gray};
//!
//! // A single bright seed under a permissive mask floods the whole grid.
//! let mut seed: Grid<u8> = Grid::new(10, 10).unwrap();
//! seed.set(5, 5, 255).unwrap();
//! let mask = Grid::new_with_value(10, 10, 255).unwrap();
//!
//! let result = seedfill_gray(&seed, &mask, Connectivity::EightWay).unwrap();
//! assert_eq!(result.get(0, 0), Some(255));
//! ```

pub mod error;
pub mod gray;
pub mod seedfill;

pub use error::{MorphError, MorphResult};

// Re-export the reconstruction engine
pub use seedfill::{
    Connectivity, seedfill_grid_in_place, seedfill_in_place, seedfill_view_in_place, spread_max,
    spread_min,
};

// Re-export grayscale operations
pub use gray::{
    fill_gray_holes, seedfill_gray, seedfill_gray_in_place, seedfill_gray_inv,
    seedfill_gray_inv_in_place,
};
