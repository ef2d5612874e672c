//! File formats, command-line driver and error handling

/// Noise analysis report export
pub mod analysis;
/// Command-line interface and mode driver
pub mod cli;
/// Named constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// C header export and parsing
pub mod header;
/// Intensity histogram export
pub mod histogram;
/// Texture decoding and grayscale image export
pub mod image;
/// Phase progress bars and timings
pub mod progress;
/// Balancing animation capture
pub mod visualization;
