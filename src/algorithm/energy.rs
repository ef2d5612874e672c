//! Toroidal Gaussian energy field with cluster and void queries
//!
//! The energy of a cell is the kernel-weighted count of "on" cells around
//! it, the cell itself included at weight 1. The tightest cluster is the
//! most crowded "on" cell, the largest void the least crowded "off" cell.
//! Energies are fixed-point integers, so equal energies are exactly equal
//! and the row-major tie-break is well defined.

use crate::algorithm::selection::{
    Candidate, map_cells, prefer_highest, prefer_lowest, select_extreme,
};
use crate::io::error::{NoiseError, Result, computation_error, invalid_parameter};
use crate::spatial::kernel::Energy;
use crate::spatial::{GaussianKernel, OccupancyGrid};
use ndarray::Array2;

/// Per-cell energy of an occupancy grid under a Gaussian kernel
///
/// Kept in sync with its grid through [`EnergyField::toggle`], which
/// updates only the cells inside the kernel footprint.
#[derive(Debug, Clone)]
pub struct EnergyField {
    kernel: GaussianKernel,
    energy: Array2<Energy>,
}

impl EnergyField {
    /// Compute the energy of every cell from scratch
    ///
    /// Each cell gathers the weights of the "on" cells within the kernel
    /// cutoff, visiting taps in a fixed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel was built for a different grid size
    pub fn compute(grid: &OccupancyGrid, kernel: GaussianKernel) -> Result<Self> {
        let size = grid.size();
        if kernel.size() != size {
            return Err(invalid_parameter(
                "kernel",
                &kernel.size(),
                &format!("kernel built for size {} used on size {size}", kernel.size()),
            ));
        }

        let values = map_cells(grid.len(), |index| {
            let [row, col] = grid.coordinate(index);
            kernel
                .taps()
                .iter()
                .filter(|tap| grid.is_on_wrapped(row + tap.row_offset, col + tap.col_offset))
                .map(|tap| tap.weight)
                .sum::<Energy>()
        });

        let energy = Array2::from_shape_vec((size, size), values)
            .map_err(|e| computation_error("energy field", &e))?;

        Ok(Self { kernel, energy })
    }

    /// Kernel the field was computed with
    pub const fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Fixed-point energies as an N×N array
    pub const fn energy(&self) -> &Array2<Energy> {
        &self.energy
    }

    /// Energy of one cell by linear index, zero when out of range
    pub fn energy_at(&self, index: usize) -> Energy {
        let size = self.kernel.size();
        self.energy
            .get([index / size, index % size])
            .copied()
            .unwrap_or(0)
    }

    /// Switch a cell and update the surrounding energies incrementally
    ///
    /// Does nothing if the cell already has the requested state.
    pub fn toggle(&mut self, grid: &mut OccupancyGrid, index: usize, on: bool) {
        if !grid.set(index, on) {
            return;
        }

        let size = self.kernel.size();
        let [row, col] = grid.coordinate(index);

        // Gathering at x reads x + offset, so a source at p reaches p - offset
        for tap in self.kernel.taps() {
            let target = [
                (row + size - tap.row_offset) % size,
                (col + size - tap.col_offset) % size,
            ];
            if let Some(value) = self.energy.get_mut(target) {
                *value = if on {
                    value.saturating_add(tap.weight)
                } else {
                    value.saturating_sub(tap.weight)
                };
            }
        }
    }

    /// Linear index of the "on" cell with the highest energy
    ///
    /// Ties resolve to the lowest row-major index.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPattern` if no cell is on
    pub fn tightest_cluster(&self, grid: &OccupancyGrid) -> Result<usize> {
        select_extreme(
            grid.len(),
            |index| grid.is_on(index).then(|| Candidate::new(index, self.energy_at(index))),
            prefer_highest,
        )
        .map(|candidate| candidate.key)
        .ok_or(NoiseError::EmptyPattern {
            query: "tightest cluster",
            grid_size: grid.size(),
        })
    }

    /// Linear index of the "off" cell with the lowest energy
    ///
    /// Ties resolve to the lowest row-major index.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPattern` if no cell is off
    pub fn largest_void(&self, grid: &OccupancyGrid) -> Result<usize> {
        select_extreme(
            grid.len(),
            |index| (!grid.is_on(index)).then(|| Candidate::new(index, self.energy_at(index))),
            prefer_lowest,
        )
        .map(|candidate| candidate.key)
        .ok_or(NoiseError::EmptyPattern {
            query: "largest void",
            grid_size: grid.size(),
        })
    }
}
