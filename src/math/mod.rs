//! Mathematical utilities for spectral analysis and quantization

/// Row-column 2D FFT and frequency centering
pub mod dft;
/// Float to integer sample conversions
pub mod quantize;
