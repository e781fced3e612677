//! route-polyline
//!
//! Encoded polyline codec for route geometries: coordinates, levels, and an
//! immutable [`Polyline`] pairing the encoded and decoded views.

pub mod batch;
pub mod chunk;
pub mod coordinates;
pub mod error;
pub mod format;
pub mod geometry;
pub mod levels;
pub mod polyline;
pub mod traits;

pub use coordinates::{decode_polyline, encode_coordinates, encode_locations};
pub use error::{DecodeError, Result};
pub use format::{DEFAULT_PRECISION, POLYLINE6_PRECISION, ShapeFormat};
pub use levels::{decode_levels, encode_levels};
pub use polyline::Polyline;
pub use traits::Locatable;
