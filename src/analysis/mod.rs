//! Spectral validation of generated noise

/// Centered DFT magnitudes, display scaling and low-frequency ratio
pub mod spectrum;
/// Binary masks of an intensity grid at evenly spaced cuts
pub mod threshold;
