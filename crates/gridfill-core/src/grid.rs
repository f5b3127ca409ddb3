//! Grid - generic 2D raster container
//!
//! `Grid<T>` is the fundamental raster type in gridfill: a dense, row-major
//! 2D array of copyable cell values. Unlike packed image containers, a grid
//! stores one `T` per cell, so it works equally well for 8-bit gray values,
//! wider numeric types, or labeled-region values.
//!
//! # Memory layout
//!
//! Owned grids store data in row-major order with no padding: the cell at
//! (x, y) is at index `y * width + x`. Borrowed [`GridView`] /
//! [`GridViewMut`] windows generalize this to an arbitrary row stride, so a
//! sub-rectangle of a larger grid can be addressed without copying.

use crate::error::{Error, Result};

/// Owned 2D raster grid
///
/// # Examples
///
/// ```
/// use gridfill_core::Grid;
///
/// let mut grid: Grid<u8> = Grid::new(640, 480).unwrap();
/// grid.set(10, 20, 128).unwrap();
/// assert_eq!(grid.get(10, 20), Some(128));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Width in cells
    width: u32,
    /// Height in cells
    height: u32,
    /// Cell data (row-major, no padding)
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new grid with all cells set to the default value
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self>
    where
        T: Clone + Default,
    {
        Self::new_with_value(width, height, T::default())
    }

    /// Create a new grid with all cells set to the specified value
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: T) -> Result<Self>
    where
        T: Clone,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = width as usize * height as usize;
        Ok(Grid {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a grid from existing row-major data
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::LengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(data: Vec<T>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Width in cells
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride of the backing data, in cells
    ///
    /// Owned grids have no row padding, so the stride equals the width.
    pub fn stride(&self) -> usize {
        self.width as usize
    }

    /// Get the cell value at (x, y)
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<T>
    where
        T: Copy,
    {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the cell value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::CellOutOfBounds { x, y });
        }
        let stride = self.width as usize;
        self.data[y as usize * stride + x as usize] = value;
        Ok(())
    }

    /// Set every cell to the given value
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Borrow the backing data (row-major, stride == width)
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the backing data (row-major, stride == width)
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Read-only view of the whole grid
    pub fn view(&self) -> GridView<'_, T> {
        GridView {
            data: &self.data,
            width: self.width as usize,
            height: self.height as usize,
            stride: self.width as usize,
        }
    }

    /// Mutable view of the whole grid
    pub fn view_mut(&mut self) -> GridViewMut<'_, T> {
        let width = self.width as usize;
        let height = self.height as usize;
        GridViewMut {
            data: &mut self.data,
            width,
            height,
            stride: width,
        }
    }

    /// Read-only view of a sub-rectangle, sharing this grid's storage
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the rectangle extends past
    /// the grid.
    pub fn sub_view(&self, x: u32, y: u32, width: u32, height: u32) -> Result<GridView<'_, T>> {
        self.check_region(x, y, width, height)?;
        let stride = self.width as usize;
        let start = y as usize * stride + x as usize;
        Ok(GridView {
            data: &self.data[start..],
            width: width as usize,
            height: height as usize,
            stride,
        })
    }

    /// Mutable view of a sub-rectangle, sharing this grid's storage
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the rectangle extends past
    /// the grid.
    pub fn sub_view_mut(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<GridViewMut<'_, T>> {
        self.check_region(x, y, width, height)?;
        let stride = self.width as usize;
        let start = y as usize * stride + x as usize;
        Ok(GridViewMut {
            data: &mut self.data[start..],
            width: width as usize,
            height: height as usize,
            stride,
        })
    }

    fn check_region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<()> {
        let x_end = x as u64 + width as u64;
        let y_end = y as u64 + height as u64;
        if width == 0 || height == 0 || x_end > self.width as u64 || y_end > self.height as u64 {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Read-only stride-addressed window into raster data
///
/// The cell at (x, y) is at index `y * stride + x` of the backing slice.
/// A view never owns its data and never outlives the grid it borrows from.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> GridView<'a, T> {
    /// Create a view over a raw slice
    ///
    /// # Errors
    ///
    /// Returns [`Error::StrideTooSmall`] if `stride < width`, or
    /// [`Error::BufferTooSmall`] if the slice cannot hold `height` rows of
    /// `stride` cells with a final row of `width` cells.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> Result<Self> {
        check_window(data.len(), width, height, stride)?;
        Ok(GridView {
            data,
            width,
            height,
            stride,
        })
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride of the backing slice, in cells
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Borrow the backing slice
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Get the cell value at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<T>
    where
        T: Copy,
    {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.stride + x])
    }

    /// Narrow this view to a sub-rectangle
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the rectangle extends past
    /// this view.
    pub fn sub_view(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || x + width > self.width || y + height > self.height {
            return Err(Error::RegionOutOfBounds {
                x: x as u32,
                y: y as u32,
                width: width as u32,
                height: height as u32,
            });
        }
        Ok(GridView {
            data: &self.data[y * self.stride + x..],
            width,
            height,
            stride: self.stride,
        })
    }
}

/// Mutable stride-addressed window into raster data
#[derive(Debug)]
pub struct GridViewMut<'a, T> {
    data: &'a mut [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> GridViewMut<'a, T> {
    /// Create a mutable view over a raw slice
    ///
    /// # Errors
    ///
    /// Returns [`Error::StrideTooSmall`] if `stride < width`, or
    /// [`Error::BufferTooSmall`] if the slice cannot hold `height` rows of
    /// `stride` cells with a final row of `width` cells.
    pub fn new(data: &'a mut [T], width: usize, height: usize, stride: usize) -> Result<Self> {
        check_window(data.len(), width, height, stride)?;
        Ok(GridViewMut {
            data,
            width,
            height,
            stride,
        })
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride of the backing slice, in cells
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Borrow the backing slice
    pub fn data(&self) -> &[T] {
        self.data
    }

    /// Mutably borrow the backing slice
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data
    }

    /// Read-only view of the same window
    pub fn as_view(&self) -> GridView<'_, T> {
        GridView {
            data: self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Get the cell value at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<T>
    where
        T: Copy,
    {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.stride + x])
    }

    /// Set the cell value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::CellOutOfBounds {
                x: x as u32,
                y: y as u32,
            });
        }
        self.data[y * self.stride + x] = value;
        Ok(())
    }
}

/// Validate that a slice of `len` cells can back a width x height window
/// with the given row stride. Empty windows are permitted.
fn check_window(len: usize, width: usize, height: usize, stride: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    if stride < width {
        return Err(Error::StrideTooSmall { stride, width });
    }
    let required = (height - 1) * stride + width;
    if len < required {
        return Err(Error::BufferTooSmall {
            required,
            actual: len,
        });
    }
    Ok(())
}
