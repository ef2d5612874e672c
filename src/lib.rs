//! Blue-noise dither masks by the void-and-cluster method, with spectral validation
//!
//! A balanced binary pattern is grown from a seed, every cell is ranked by
//! repeatedly removing the tightest cluster and filling the largest void
//! under a toroidal Gaussian energy, and the ranks become an 8-bit texture.
//! The texture and its threshold masks are then checked in the frequency
//! domain and exported as images, a histogram and a C header.

#![forbid(unsafe_code)]

/// Energy field, seeding, balancing, ranking and the generation pipeline
pub mod algorithm;
/// Spectrum and threshold-mask analysis of generated noise
pub mod analysis;
/// Input/output operations, CLI and error handling
pub mod io;
/// Discrete Fourier transform and quantization helpers
pub mod math;
/// Toroidal occupancy grids and energy kernels
pub mod spatial;

pub use io::error::{NoiseError, Result};
