//! Initial binary patterns for the void-and-cluster pipeline

use crate::algorithm::energy::EnergyField;
use crate::algorithm::selection::{Candidate, prefer_lowest, select_extreme};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::{GaussianKernel, OccupancyGrid};
use clap::ValueEnum;
use rand::Rng;
use rand::seq::index::sample;
use std::fmt;

/// How the initial "on" cells are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum SeedingStrategy {
    /// Uniformly random cells, left to the balancer to spread out
    #[default]
    RandomSwap,
    /// Mitchell's best candidate: grow the set keeping the least crowded sample
    BestCandidate,
}

impl fmt::Display for SeedingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RandomSwap => write!(f, "random swap"),
            Self::BestCandidate => write!(f, "best candidate"),
        }
    }
}

fn validate_target(size: usize, target_count: usize) -> Result<()> {
    let cells = size * size;
    if target_count > cells {
        return Err(invalid_parameter(
            "target_count",
            &target_count,
            &format!("exceeds the {cells} cells of a {size}x{size} grid"),
        ));
    }
    Ok(())
}

/// Place `target_count` cells uniformly at random
///
/// # Errors
///
/// Returns an error if `target_count` exceeds the number of cells
pub fn random_pattern<R: Rng>(
    size: usize,
    target_count: usize,
    rng: &mut R,
) -> Result<OccupancyGrid> {
    validate_target(size, target_count)?;
    let chosen = sample(rng, size * size, target_count);
    Ok(OccupancyGrid::from_indices(size, chosen))
}

/// Grow a pattern one cell at a time with Mitchell's best-candidate rule
///
/// Before placing the `k`-th cell, `k * candidate_multiplier + 1` vacant
/// cells are sampled (at most as many as remain vacant) and the one with
/// the lowest energy wins. Energy stands in for the distance to the
/// nearest placed cell: a candidate overlapping no kernel footprint is as
/// far from the placed set as the cutoff can tell. Equal energies keep the
/// earliest sample.
///
/// # Errors
///
/// Returns an error if:
/// - `target_count` exceeds the number of cells
/// - `candidate_multiplier` is zero
/// - The kernel was built for a different grid size
pub fn best_candidate_pattern<R: Rng>(
    kernel: &GaussianKernel,
    target_count: usize,
    candidate_multiplier: usize,
    rng: &mut R,
) -> Result<OccupancyGrid> {
    let size = kernel.size();
    validate_target(size, target_count)?;
    if candidate_multiplier == 0 {
        return Err(invalid_parameter(
            "candidate_multiplier",
            &candidate_multiplier,
            &"must be at least 1",
        ));
    }

    let mut grid = OccupancyGrid::new(size);
    let mut field = EnergyField::compute(&grid, kernel.clone())?;

    // Vacant cells, swap-removed on placement so sampling stays O(1)
    let mut vacant: Vec<usize> = (0..grid.len()).collect();
    let mut samples = Vec::new();

    for placed in 0..target_count {
        let candidates = placed
            .saturating_mul(candidate_multiplier)
            .saturating_add(1)
            .min(vacant.len());

        samples.clear();
        samples.extend((0..candidates).map(|_| rng.random_range(0..vacant.len())));

        let best = select_extreme(
            samples.len(),
            |order| {
                samples
                    .get(order)
                    .and_then(|&slot| vacant.get(slot))
                    .map(|&cell| Candidate::new(order, field.energy_at(cell)))
            },
            prefer_lowest,
        )
        .and_then(|winner| samples.get(winner.key).copied())
        .ok_or_else(|| computation_error("best candidate", &"no vacant cell to sample"))?;

        let cell = vacant.swap_remove(best);
        field.toggle(&mut grid, cell, true);
    }

    Ok(grid)
}

/// Build the initial pattern with the selected strategy
///
/// # Errors
///
/// Propagates the errors of [`random_pattern`] and [`best_candidate_pattern`]
pub fn initial_pattern<R: Rng>(
    strategy: SeedingStrategy,
    kernel: &GaussianKernel,
    target_count: usize,
    candidate_multiplier: usize,
    rng: &mut R,
) -> Result<OccupancyGrid> {
    match strategy {
        SeedingStrategy::RandomSwap => random_pattern(kernel.size(), target_count, rng),
        SeedingStrategy::BestCandidate => {
            best_candidate_pattern(kernel, target_count, candidate_multiplier, rng)
        }
    }
}
