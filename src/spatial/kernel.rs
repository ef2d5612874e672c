//! Truncated Gaussian kernel expressed as toroidal offset taps

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::toroidal_delta;

/// Fixed-point energy value
///
/// Integer sums are exact, so an energy updated incrementally equals the
/// same energy recomputed from scratch whatever the summation order, and
/// weights far below `f64` precision of the self weight still separate
/// cells that would otherwise tie.
pub type Energy = u128;

/// Upper bound on the fraction bits of a kernel's fixed-point weights
pub const MAX_FRACTION_BITS: u32 = 120;

/// One non-zero kernel entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelTap {
    /// Row offset in `[0, size)`, applied modulo the grid size
    pub row_offset: usize,
    /// Column offset in `[0, size)`, applied modulo the grid size
    pub col_offset: usize,
    /// Gaussian weight of the offset in fixed point
    pub weight: Energy,
}

fn gaussian(distance_squared: f64, sigma: f64) -> f64 {
    (-distance_squared / (2.0 * sigma * sigma)).exp()
}

// Largest shift that keeps the sum of every tap below 2^127
fn fraction_bits_for(total_weight: f64) -> u32 {
    let integer_bits = total_weight.max(1.0).log2().ceil() as u32;
    MAX_FRACTION_BITS.min(127_u32.saturating_sub(integer_bits))
}

/// Gaussian energy kernel for one grid size
///
/// Offsets are enumerated once per grid in `[0, size)²` so every tap is
/// unique modulo the grid, even when the cutoff radius exceeds half the
/// grid. Any cell's energy is therefore bounded by the sum of all taps.
#[derive(Debug, Clone)]
pub struct GaussianKernel {
    size: usize,
    sigma: f64,
    cutoff_radius: f64,
    fraction_bits: u32,
    taps: Vec<KernelTap>,
}

impl GaussianKernel {
    /// Build the tap table for a grid of side `size`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero
    /// - `sigma` is not a positive finite number
    /// - `cutoff_radius` is negative or not finite
    pub fn new(size: usize, sigma: f64, cutoff_radius: f64) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter("size", &size, &"must be positive"));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(invalid_parameter(
                "sigma",
                &sigma,
                &"must be a positive finite number",
            ));
        }
        if !cutoff_radius.is_finite() || cutoff_radius < 0.0 {
            return Err(invalid_parameter(
                "cutoff_radius",
                &cutoff_radius,
                &"must be a non-negative finite number",
            ));
        }

        let cutoff_squared = cutoff_radius * cutoff_radius;
        let mut offsets = Vec::new();
        for row_offset in 0..size {
            let dy = toroidal_delta(0, row_offset, size);
            for col_offset in 0..size {
                let dx = toroidal_delta(0, col_offset, size);
                let distance_squared = (dy * dy + dx * dx) as f64;
                if distance_squared <= cutoff_squared {
                    offsets.push((row_offset, col_offset, gaussian(distance_squared, sigma)));
                }
            }
        }

        let fraction_bits = fraction_bits_for(offsets.iter().map(|&(_, _, w)| w).sum());
        let scale = 2.0_f64.powi(fraction_bits as i32);
        let taps = offsets
            .into_iter()
            .map(|(row_offset, col_offset, weight)| KernelTap {
                row_offset,
                col_offset,
                weight: (weight * scale).round() as Energy,
            })
            .filter(|tap| tap.weight > 0)
            .collect();

        Ok(Self {
            size,
            sigma,
            cutoff_radius,
            fraction_bits,
            taps,
        })
    }

    /// Grid side length the taps were built for
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Standard deviation in cells
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Distance beyond which contributions are dropped
    pub const fn cutoff_radius(&self) -> f64 {
        self.cutoff_radius
    }

    /// Binary digits after the point in every fixed-point weight
    pub const fn fraction_bits(&self) -> u32 {
        self.fraction_bits
    }

    /// All non-zero taps in row-major offset order
    pub fn taps(&self) -> &[KernelTap] {
        &self.taps
    }

    /// Direct fixed-point weight between two cells, zero beyond the cutoff
    pub fn weight(&self, from: [usize; 2], to: [usize; 2]) -> Energy {
        let size = self.size;
        let row_offset = (to[0] % size + size - from[0] % size) % size;
        let col_offset = (to[1] % size + size - from[1] % size) % size;
        self.taps
            .iter()
            .find(|tap| tap.row_offset == row_offset && tap.col_offset == col_offset)
            .map_or(0, |tap| tap.weight)
    }
}
