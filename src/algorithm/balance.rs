//! Swap-based balancing of an initial pattern into a prototype binary pattern

use crate::algorithm::energy::EnergyField;
use crate::algorithm::executor::{GenerationObserver, Phase};
use crate::io::error::{NoiseError, Result};
use crate::spatial::{GaussianKernel, OccupancyGrid};

/// Balanced pattern and the work it took to get there
#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    /// The prototype binary pattern
    pub pattern: OccupancyGrid,
    /// Number of cluster-to-void swaps performed
    pub swaps: usize,
}

/// Move the tightest cluster into the largest void until nothing moves
///
/// Each round removes the tightest cluster and looks for the largest void
/// in the grid without it. When that void is the cell just removed, the
/// swap would be a no-op: the cell is restored and the pattern is returned.
/// The on-count never changes.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern has no "on" cells (`EmptyPattern`)
/// - `max_iterations` swaps happen without convergence
///   (`BalanceDidNotConverge`, carrying the pattern at that point)
/// - The kernel was built for a different grid size
pub fn balance_pattern(
    pattern: OccupancyGrid,
    kernel: &GaussianKernel,
    max_iterations: usize,
    observer: &mut dyn GenerationObserver,
) -> Result<BalanceOutcome> {
    let mut grid = pattern;
    let mut field = EnergyField::compute(&grid, kernel.clone())?;
    let mut swaps = 0;

    observer.phase_started(Phase::Balancing, max_iterations);

    loop {
        let cluster = field.tightest_cluster(&grid)?;
        field.toggle(&mut grid, cluster, false);

        let void = field.largest_void(&grid)?;
        if void == cluster {
            field.toggle(&mut grid, cluster, true);
            observer.phase_finished(Phase::Balancing);
            return Ok(BalanceOutcome {
                pattern: grid,
                swaps,
            });
        }

        if swaps == max_iterations {
            field.toggle(&mut grid, cluster, true);
            observer.phase_finished(Phase::Balancing);
            return Err(NoiseError::BalanceDidNotConverge {
                iterations: swaps,
                on_count: grid.on_count(),
                pattern: Box::new(grid),
            });
        }

        field.toggle(&mut grid, void, true);
        swaps += 1;

        observer.cell_toggled(Phase::Balancing, cluster, false);
        observer.cell_toggled(Phase::Balancing, void, true);
        observer.step_completed(Phase::Balancing, swaps);
    }
}

/// Check the balancing fixed point without modifying the pattern
///
/// # Errors
///
/// Returns an error if the pattern is empty or the kernel size differs
pub fn is_balanced(pattern: &OccupancyGrid, kernel: &GaussianKernel) -> Result<bool> {
    let mut grid = pattern.clone();
    let mut field = EnergyField::compute(&grid, kernel.clone())?;
    let cluster = field.tightest_cluster(&grid)?;
    field.toggle(&mut grid, cluster, false);
    Ok(field.largest_void(&grid)? == cluster)
}
