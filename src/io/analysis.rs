//! Noise analysis report: histogram, spectrum images and threshold masks
//!
//! For an output prefix `p` the report writes
//! - `p.histogram.csv` with the intensity histogram
//! - `p.png` with the noise on the left and its spectrum on the right
//! - `p_<cut>.png` per threshold mask, laid out the same way

use crate::analysis::spectrum::Spectrum;
use crate::analysis::threshold::generate_masks;
use crate::io::configuration::HISTOGRAM_SUFFIX;
use crate::io::error::Result;
use crate::io::histogram::write_histogram;
use crate::io::image::{append_horizontal, save_grayscale};
use ndarray::Array2;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Spectral summary of one threshold mask
#[derive(Debug, Clone, PartialEq)]
pub struct MaskSummary {
    /// Cut value the mask was taken at
    pub cut: u8,
    /// Cells above the cut
    pub on_count: usize,
    /// Low-frequency power ratio of the mask, `None` if undefined
    pub low_frequency_ratio: Option<f64>,
    /// Image written for the mask
    pub path: PathBuf,
}

/// What an analysis run wrote and measured
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
    /// Low-frequency power ratio of the full noise
    pub low_frequency_ratio: Option<f64>,
    /// One entry per threshold mask
    pub masks: Vec<MaskSummary>,
}

/// Append `suffix` to the final component of `prefix`
///
/// `out/blueVC` with `.png` gives `out/blueVC.png`; no extension handling.
pub fn prefixed_path(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Write the full analysis report for an intensity grid
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty or `sample_count` is less than 2
/// - Any output file cannot be written
pub fn export_noise_analysis(
    intensity: &Array2<u8>,
    prefix: &Path,
    sample_count: usize,
) -> Result<AnalysisReport> {
    let mut report = AnalysisReport::default();
    let masks = generate_masks(intensity, sample_count)?;

    let histogram_path = prefixed_path(prefix, HISTOGRAM_SUFFIX);
    write_histogram(&histogram_path, intensity)?;
    report.written.push(histogram_path);

    let spectrum = Spectrum::analyze(intensity)?;
    report.low_frequency_ratio = spectrum.default_low_frequency_ratio();
    let noise_path = prefixed_path(prefix, ".png");
    save_grayscale(&noise_path, &append_horizontal(intensity, &spectrum.display())?)?;
    report.written.push(noise_path);

    for mask in masks {
        let mask_spectrum = mask.spectrum()?;
        let path = prefixed_path(prefix, &format!("_{}.png", mask.cut));
        save_grayscale(&path, &append_horizontal(&mask.mask, &mask_spectrum.display())?)?;

        report.written.push(path.clone());
        report.masks.push(MaskSummary {
            cut: mask.cut,
            on_count: mask.on_count(),
            low_frequency_ratio: mask_spectrum.default_low_frequency_ratio(),
            path,
        });
    }

    Ok(report)
}
