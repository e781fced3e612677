//! Test fixtures for route-polyline.
//!
//! Provides a real Las Vegas driving tour (coordinates from OpenStreetMap)
//! for realistic round-trip and distance tests.

pub mod strip_tour;

pub use strip_tour::*;
