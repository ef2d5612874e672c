//! Frequency-domain view of a grid for blue-noise validation

use crate::io::error::{Result, invalid_parameter};
use crate::math::dft::{dft_2d, shift_to_center};
use crate::math::quantize::from_unit;
use ndarray::Array2;

/// Centered DFT magnitudes of a grid with its mean removed
///
/// Zero frequency sits at `[rows / 2, cols / 2]` and holds 0, so a
/// constant grid has an all-zero spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    magnitudes: Array2<f64>,
}

impl Spectrum {
    /// Transform a grid of 8-bit samples
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no cells
    pub fn analyze(grid: &Array2<u8>) -> Result<Self> {
        if grid.is_empty() {
            return Err(invalid_parameter(
                "grid",
                &format!("{:?}", grid.dim()),
                &"spectrum of an empty grid",
            ));
        }

        let samples = grid.mapv(f64::from);
        let mean = samples.sum() / samples.len() as f64;
        let centered = samples.mapv(|value| value - mean);
        let magnitudes = shift_to_center(&dft_2d(&centered).mapv(|bin| bin.norm()));

        Ok(Self { magnitudes })
    }

    /// Raw magnitudes, zero frequency at the center
    pub const fn magnitudes(&self) -> &Array2<f64> {
        &self.magnitudes
    }

    /// Spectrum grid for display and validation
    ///
    /// `|F|` divided by its maximum, then quantized like ranks:
    /// `floor(v * 256)` clamped to 255.
    pub fn display(&self) -> Array2<u8> {
        let peak = self.magnitudes.iter().copied().fold(0.0, f64::max);
        if peak <= 0.0 {
            return Array2::zeros(self.magnitudes.raw_dim());
        }
        self.magnitudes.mapv(|value| from_unit::<u8>(value / peak))
    }

    /// Mean spectrum-grid value inside `radius` over the mean in the ring out to `2 * radius`
    ///
    /// Distances are measured from the zero-frequency bin, which is left out
    /// of the disk. Blue noise keeps this below one half. Returns `None`
    /// when either region has no bins or the ring is entirely zero.
    pub fn low_frequency_ratio(&self, radius: f64) -> Option<f64> {
        let grid = self.display();
        let (rows, cols) = grid.dim();
        let center = [(rows / 2) as f64, (cols / 2) as f64];

        let mut disk = (0.0, 0_usize);
        let mut ring = (0.0, 0_usize);
        for ((row, col), &level) in grid.indexed_iter() {
            let distance = (row as f64 - center[0]).hypot(col as f64 - center[1]);
            let value = f64::from(level);
            if distance > 0.0 && distance <= radius {
                disk = (disk.0 + value, disk.1 + 1);
            } else if distance > radius && distance <= 2.0 * radius {
                ring = (ring.0 + value, ring.1 + 1);
            }
        }

        if disk.1 == 0 || ring.1 == 0 || ring.0 <= 0.0 {
            return None;
        }
        Some((disk.0 / disk.1 as f64) / (ring.0 / ring.1 as f64))
    }

    /// Low-frequency ratio at the default radius, a sixteenth of the smaller side
    pub fn default_low_frequency_ratio(&self) -> Option<f64> {
        let (rows, cols) = self.magnitudes.dim();
        self.low_frequency_ratio(default_radius(rows, cols))
    }
}

/// A sixteenth of the smaller side, at least one bin
pub fn default_radius(rows: usize, cols: usize) -> f64 {
    (rows.min(cols) / 16).max(1) as f64
}

/// Display spectrum of a grid in one call
///
/// # Errors
///
/// Returns an error if the grid has no cells
pub fn transform(grid: &Array2<u8>) -> Result<Array2<u8>> {
    Spectrum::analyze(grid).map(|spectrum| spectrum.display())
}
