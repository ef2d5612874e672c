//! Rank assignment by cluster removal and void filling

use crate::algorithm::energy::EnergyField;
use crate::algorithm::executor::{GenerationObserver, Phase};
use crate::io::error::{Result, computation_error};
use crate::spatial::{GaussianKernel, OccupancyGrid};
use bitvec::prelude::*;
use ndarray::Array2;

const UNRANKED: usize = usize::MAX;

/// Unique rank per cell, a permutation of `[0, N²)` once complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGrid {
    ranks: Array2<usize>,
}

impl RankGrid {
    /// Wrap an existing rank array
    pub const fn from_array(ranks: Array2<usize>) -> Self {
        Self { ranks }
    }

    /// Ranks as an N×N array
    pub const fn ranks(&self) -> &Array2<usize> {
        &self.ranks
    }

    /// Rank of the cell at `[row, col]`
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.ranks.get([row, col]).copied()
    }

    /// Check that every value in `[0, len)` appears exactly once
    pub fn is_permutation(&self) -> bool {
        let len = self.ranks.len();
        let mut seen = bitvec![0; len];
        for &rank in &self.ranks {
            match seen.get_mut(rank) {
                Some(mut slot) if !*slot => slot.set(true),
                _ => return false,
            }
        }
        true
    }

    /// Quantize ranks into 8-bit intensities
    ///
    /// `intensity = floor(rank * 256 / len)`, clamped to 255.
    pub fn to_intensity(&self) -> Array2<u8> {
        let len = self.ranks.len();
        self.ranks.mapv(|rank| rank_to_intensity(rank, len))
    }
}

/// Quantize one rank out of `len` into an 8-bit intensity
pub fn rank_to_intensity(rank: usize, len: usize) -> u8 {
    if len == 0 {
        return 0;
    }
    let scaled = (rank as u128 * 256) / len as u128;
    scaled.min(255) as u8
}

/// Assign every cell a rank starting from a balanced pattern
///
/// Cells of the prototype pattern are ranked from `ones - 1` down to 0 by
/// repeatedly removing the tightest cluster. The remaining cells are ranked
/// from `ones` up to `N² - 1` by repeatedly filling the largest void,
/// starting again from the prototype pattern.
///
/// # Errors
///
/// Returns an error if:
/// - The kernel was built for a different grid size
/// - A rank is left unassigned (indicates an internal inconsistency)
pub fn rank_pattern(
    prototype: &OccupancyGrid,
    kernel: &GaussianKernel,
    observer: &mut dyn GenerationObserver,
) -> Result<RankGrid> {
    let size = prototype.size();
    let ones = prototype.on_count();
    let mut ranks = Array2::from_elem((size, size), UNRANKED);

    observer.phase_started(Phase::ClusterRemoval, ones);
    let mut removal_grid = prototype.clone();
    let mut removal_energy = EnergyField::compute(&removal_grid, kernel.clone())?;
    for rank in (0..ones).rev() {
        let cluster = removal_energy.tightest_cluster(&removal_grid)?;
        if let Some(slot) = ranks.get_mut(removal_grid.coordinate(cluster)) {
            *slot = rank;
        }
        removal_energy.toggle(&mut removal_grid, cluster, false);
        observer.step_completed(Phase::ClusterRemoval, ones - rank);
    }
    observer.phase_finished(Phase::ClusterRemoval);

    let remaining = prototype.off_count();
    observer.phase_started(Phase::VoidFilling, remaining);
    let mut filling_grid = prototype.clone();
    let mut filling_energy = EnergyField::compute(&filling_grid, kernel.clone())?;
    for rank in ones..prototype.len() {
        let void = filling_energy.largest_void(&filling_grid)?;
        if let Some(slot) = ranks.get_mut(filling_grid.coordinate(void)) {
            *slot = rank;
        }
        filling_energy.toggle(&mut filling_grid, void, true);
        observer.step_completed(Phase::VoidFilling, rank + 1 - ones);
    }
    observer.phase_finished(Phase::VoidFilling);

    let rank_grid = RankGrid::from_array(ranks);
    if !rank_grid.is_permutation() {
        return Err(computation_error(
            "rank assignment",
            &"ranks do not form a permutation of the grid cells",
        ));
    }
    Ok(rank_grid)
}
