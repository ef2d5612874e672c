//! Spatial data structures on the torus
//!
//! This module contains spatial-related functionality including:
//! - The bit-packed occupancy grid and wrap-around distance helpers
//! - The truncated Gaussian kernel used by the energy field

/// Occupancy grid and toroidal distance utilities
pub mod grid;
/// Gaussian kernel tap tables
pub mod kernel;

pub use grid::OccupancyGrid;
pub use kernel::GaussianKernel;
