//! Grayscale reconstruction operations
//!
//! Concrete 8-bit layer over the generic engine in [`crate::seedfill`]:
//! reconstruction by dilation ([`seedfill_gray`]), reconstruction by
//! erosion ([`seedfill_gray_inv`]), and hole filling expressed through the
//! latter ([`fill_gray_holes`]).
//!
//! The wrappers establish the engine's clamping precondition before
//! propagating: the working seed is initialized to `min(seed, mask)` for
//! dilation and to `max(seed, mask)` for erosion.

use crate::error::{MorphError, MorphResult};
use crate::seedfill::{Connectivity, seedfill_grid_in_place, spread_max, spread_min};
use gridfill_core::Grid;

fn check_same_size(seed: &Grid<u8>, mask: &Grid<u8>) -> MorphResult<()> {
    if seed.width() != mask.width() || seed.height() != mask.height() {
        return Err(MorphError::SizeMismatch {
            seed: (seed.width(), seed.height()),
            mask: (mask.width(), mask.height()),
        });
    }
    Ok(())
}

/// Grayscale reconstruction by dilation, in place
///
/// Clamps the seed under the mask, then spreads bright values to neighbors
/// as far as the mask permits. On return the seed holds the reconstruction
/// fixpoint.
///
/// # Errors
///
/// Returns [`MorphError::SizeMismatch`] if the grids differ in dimensions.
pub fn seedfill_gray_in_place(
    seed: &mut Grid<u8>,
    mask: &Grid<u8>,
    connectivity: Connectivity,
) -> MorphResult<()> {
    check_same_size(seed, mask)?;
    for (s, m) in seed.data_mut().iter_mut().zip(mask.data()) {
        *s = (*s).min(*m);
    }
    seedfill_grid_in_place(spread_max, spread_min, connectivity, seed, mask)
}

/// Grayscale reconstruction by dilation
///
/// Like [`seedfill_gray_in_place`], but leaves the input untouched and
/// returns the reconstruction as a new grid.
///
/// # Errors
///
/// Returns [`MorphError::SizeMismatch`] if the grids differ in dimensions.
pub fn seedfill_gray(
    seed: &Grid<u8>,
    mask: &Grid<u8>,
    connectivity: Connectivity,
) -> MorphResult<Grid<u8>> {
    let mut out = seed.clone();
    seedfill_gray_in_place(&mut out, mask, connectivity)?;
    Ok(out)
}

/// Grayscale reconstruction by erosion (basin filling), in place
///
/// The dual of [`seedfill_gray_in_place`]: the seed is clamped to lie above
/// the mask, and dark values spread to neighbors, bounded from below by the
/// mask.
///
/// # Errors
///
/// Returns [`MorphError::SizeMismatch`] if the grids differ in dimensions.
pub fn seedfill_gray_inv_in_place(
    seed: &mut Grid<u8>,
    mask: &Grid<u8>,
    connectivity: Connectivity,
) -> MorphResult<()> {
    check_same_size(seed, mask)?;
    for (s, m) in seed.data_mut().iter_mut().zip(mask.data()) {
        *s = (*s).max(*m);
    }
    seedfill_grid_in_place(spread_min, spread_max, connectivity, seed, mask)
}

/// Grayscale reconstruction by erosion (basin filling)
///
/// Like [`seedfill_gray_inv_in_place`], but leaves the input untouched and
/// returns the reconstruction as a new grid.
///
/// # Errors
///
/// Returns [`MorphError::SizeMismatch`] if the grids differ in dimensions.
pub fn seedfill_gray_inv(
    seed: &Grid<u8>,
    mask: &Grid<u8>,
    connectivity: Connectivity,
) -> MorphResult<Grid<u8>> {
    let mut out = seed.clone();
    seedfill_gray_inv_in_place(&mut out, mask, connectivity)?;
    Ok(out)
}

/// Fill dark holes in a grayscale image
///
/// A hole is a dark region with no path to the image border that stays
/// below the surrounding level. Each hole floods up to the lowest value on
/// its enclosing rim; regions connected to the border are unchanged.
///
/// Implemented as reconstruction by erosion from a border seed: the seed is
/// the maximum value everywhere except along the border, where it copies
/// the image.
pub fn fill_gray_holes(image: &Grid<u8>, connectivity: Connectivity) -> MorphResult<Grid<u8>> {
    let mut seed = Grid::new_with_value(image.width(), image.height(), u8::MAX)?;

    let w = image.width() as usize;
    let h = image.height() as usize;
    let src = image.data();
    let dst = seed.data_mut();

    dst[..w].copy_from_slice(&src[..w]);
    dst[(h - 1) * w..].copy_from_slice(&src[(h - 1) * w..]);
    for y in 1..h.saturating_sub(1) {
        dst[y * w] = src[y * w];
        dst[y * w + w - 1] = src[y * w + w - 1];
    }

    seedfill_gray_inv_in_place(&mut seed, image, connectivity)?;
    Ok(seed)
}
