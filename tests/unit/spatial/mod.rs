//! Unit tests for spatial structures

pub mod grid;
