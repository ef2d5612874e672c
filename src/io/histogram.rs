//! Intensity histogram as a two-column CSV table

use crate::io::configuration::HISTOGRAM_BINS;
use crate::io::error::{Result, WithContext};
use crate::io::image::ensure_parent_dir;
use ndarray::Array2;
use std::path::Path;

/// Count how many cells hold each 8-bit value
pub fn histogram(grid: &Array2<u8>) -> [usize; HISTOGRAM_BINS] {
    let mut counts = [0; HISTOGRAM_BINS];
    for &value in grid {
        if let Some(count) = counts.get_mut(usize::from(value)) {
            *count += 1;
        }
    }
    counts
}

/// `Value,Count` header followed by one row per bin, all bins present
pub fn render_histogram_csv(counts: &[usize; HISTOGRAM_BINS]) -> String {
    let rows: String = counts
        .iter()
        .enumerate()
        .map(|(value, count)| format!("{value},{count}\n"))
        .collect();
    format!("Value,Count\n{rows}")
}

/// Write the histogram of a grid as CSV
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_histogram(path: &Path, grid: &Array2<u8>) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, render_histogram_csv(&histogram(grid)))
        .with_path(path)
        .with_operation("write histogram")
}
