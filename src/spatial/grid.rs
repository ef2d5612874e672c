//! Square toroidal occupancy grid backed by a packed bit vector
//!
//! Cells are addressed either by `[row, col]` or by their row-major linear
//! index `row * size + col`. The linear index is the total order used for
//! every deterministic tie-break in the crate.

use bitvec::prelude::*;
use ndarray::Array2;
use std::fmt;

/// Binary on/off pattern over an N×N torus
#[derive(Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    bits: BitVec,
    size: usize,
    on_count: usize,
}

impl OccupancyGrid {
    /// Create an all-off grid with the given side length
    pub fn new(size: usize) -> Self {
        Self {
            bits: bitvec![0; size * size],
            size,
            on_count: 0,
        }
    }

    /// Create a grid with the listed linear indices turned on
    ///
    /// Out-of-range indices are ignored and duplicates count once.
    pub fn from_indices(size: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut grid = Self::new(size);
        for index in indices {
            grid.set(index, true);
        }
        grid
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.size * self.size
    }

    /// Test for a zero-sized grid
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of cells currently on
    pub const fn on_count(&self) -> usize {
        self.on_count
    }

    /// Number of cells currently off
    pub const fn off_count(&self) -> usize {
        self.len() - self.on_count
    }

    /// Read a cell by linear index; out-of-range cells read as off
    pub fn is_on(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Read a cell by `[row, col]` with toroidal wrapping
    pub fn is_on_wrapped(&self, row: usize, col: usize) -> bool {
        if self.size == 0 {
            return false;
        }
        self.is_on((row % self.size) * self.size + col % self.size)
    }

    /// Set a cell by linear index
    ///
    /// Returns whether the cell changed. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, on: bool) -> bool {
        let Some(mut bit) = self.bits.get_mut(index) else {
            return false;
        };
        if *bit == on {
            return false;
        }
        bit.set(on);
        drop(bit);
        if on {
            self.on_count += 1;
        } else {
            self.on_count -= 1;
        }
        true
    }

    /// Linear index of `[row, col]`
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// `[row, col]` of a linear index
    pub const fn coordinate(&self, index: usize) -> [usize; 2] {
        if self.size == 0 {
            return [0, 0];
        }
        [index / self.size, index % self.size]
    }

    /// Linear indices of all cells that are on, in row-major order
    pub fn iter_on(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Render as an 8-bit image, on cells white and off cells black
    pub fn to_image(&self) -> Array2<u8> {
        let mut image = Array2::zeros((self.size, self.size));
        for index in self.iter_on() {
            if let Some(pixel) = image.get_mut(self.coordinate(index)) {
                *pixel = 255;
            }
        }
        image
    }
}

impl fmt::Debug for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupancyGrid")
            .field("size", &self.size)
            .field("on_count", &self.on_count)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = if self.is_on(self.index(row, col)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Shortest distance between two positions on a ring of `size` cells
pub const fn toroidal_delta(a: usize, b: usize, size: usize) -> usize {
    let direct = a.abs_diff(b);
    if size == 0 || direct * 2 <= size {
        direct
    } else {
        size - direct
    }
}
