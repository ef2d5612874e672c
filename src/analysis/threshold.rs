//! Binary masks of an intensity grid at evenly spaced thresholds

use crate::analysis::spectrum::Spectrum;
use crate::io::error::{Result, invalid_parameter};
use crate::math::quantize::rounded_from_unit;
use ndarray::Array2;

/// Mask value of cells above the cut
pub const MASK_ON: u8 = 255;

/// One thresholded view of an intensity grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdMask {
    /// Cells with intensity strictly above this value are on
    pub cut: u8,
    /// `MASK_ON` for on cells, 0 otherwise
    pub mask: Array2<u8>,
}

impl ThresholdMask {
    /// Threshold an intensity grid at `cut`
    pub fn new(intensity: &Array2<u8>, cut: u8) -> Self {
        let mask = intensity.mapv(|value| if value > cut { MASK_ON } else { 0 });
        Self { cut, mask }
    }

    /// Number of on cells
    pub fn on_count(&self) -> usize {
        self.mask.iter().filter(|&&value| value == MASK_ON).count()
    }

    /// Spectrum of the mask
    ///
    /// # Errors
    ///
    /// Returns an error if the mask has no cells
    pub fn spectrum(&self) -> Result<Spectrum> {
        Spectrum::analyze(&self.mask)
    }
}

/// 8-bit cut for threshold `index` of `sample_count`
///
/// `round(255 * index / (sample_count - 1))`, with 0 raised to 1 and 255
/// lowered to 254 so neither end yields an all-on or all-off mask.
pub fn threshold_cut(index: usize, sample_count: usize) -> u8 {
    let steps = sample_count.saturating_sub(1).max(1);
    let cut = rounded_from_unit::<u8>(index as f64 / steps as f64);
    cut.clamp(1, 254)
}

/// Threshold masks at `sample_count` evenly spaced cuts
///
/// # Errors
///
/// Returns an error if `sample_count` is less than 2
pub fn generate_masks(intensity: &Array2<u8>, sample_count: usize) -> Result<Vec<ThresholdMask>> {
    if sample_count < 2 {
        return Err(invalid_parameter(
            "sample_count",
            &sample_count,
            &"at least two thresholds are needed to span the range",
        ));
    }

    Ok((0..sample_count)
        .map(|index| ThresholdMask::new(intensity, threshold_cut(index, sample_count)))
        .collect())
}
