//! Polyline representation for route geometries.
//!
//! A [`Polyline`] pairs an encoded shape string with its decoded coordinates,
//! and optionally an encoded level string with its decoded levels. Either
//! side can be the input: building from coordinates encodes them, building
//! from a string decodes it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coordinates::{decode_polyline, encode_coordinates, encode_locations};
use crate::format::{DEFAULT_PRECISION, ShapeFormat};
use crate::geometry::line_length_meters;
use crate::levels::{decode_levels, encode_levels};
use crate::traits::Locatable;

/// An encoded route geometry and its decoded coordinates.
///
/// Immutable once built. `coordinates` is `None` when the encoded string
/// could not be decoded; `levels` is `None` when no levels were supplied or
/// they could not be decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    encoded: String,
    coordinates: Option<Vec<(f64, f64)>>,
    encoded_levels: Option<String>,
    levels: Option<Vec<u32>>,
}

impl Polyline {
    /// Encodes coordinates (and optional levels) at the given precision.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn encode(coordinates: Vec<(f64, f64)>, levels: Option<Vec<u32>>, precision: f64) -> Self {
        let encoded = encode_coordinates(&coordinates, precision);
        let encoded_levels = levels.as_deref().map(encode_levels);

        Self {
            encoded,
            coordinates: Some(coordinates),
            encoded_levels,
            levels,
        }
    }

    /// Encodes coordinates at the default 1e5 precision, without levels.
    pub fn from_coordinates(coordinates: Vec<(f64, f64)>) -> Self {
        Self::encode(coordinates, None, DEFAULT_PRECISION)
    }

    /// Encodes any [`Locatable`] values at the given precision.
    pub fn from_locations<L: Locatable>(locations: &[L], levels: Option<Vec<u32>>, precision: f64) -> Self {
        let encoded = encode_locations(locations, precision);
        let coordinates = locations.iter().map(|location| location.location()).collect();
        let encoded_levels = levels.as_deref().map(encode_levels);

        Self {
            encoded,
            coordinates: Some(coordinates),
            encoded_levels,
            levels,
        }
    }

    /// Decodes an encoded shape (and optional levels) at the given precision.
    ///
    /// The strings are kept as given even when they fail to decode.
    pub fn decode(encoded: impl Into<String>, encoded_levels: Option<String>, precision: f64) -> Self {
        let encoded = encoded.into();

        let coordinates = match decode_polyline(&encoded, precision) {
            Ok(coordinates) => Some(coordinates),
            Err(err) => {
                debug!(error = %err, bytes = encoded.len(), "polyline coordinates unavailable");
                None
            }
        };

        let levels = encoded_levels.as_deref().and_then(|raw| match decode_levels(raw) {
            Ok(levels) => Some(levels),
            Err(err) => {
                debug!(error = %err, bytes = raw.len(), "polyline levels unavailable");
                None
            }
        });

        Self {
            encoded,
            coordinates,
            encoded_levels,
            levels,
        }
    }

    /// Decodes a shape delivered in the given [`ShapeFormat`].
    pub fn from_shape(encoded: impl Into<String>, format: ShapeFormat) -> Self {
        Self::decode(encoded, None, format.precision())
    }

    /// The encoded shape string.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Decoded coordinates, or `None` if the shape was malformed.
    pub fn coordinates(&self) -> Option<&[(f64, f64)]> {
        self.coordinates.as_deref()
    }

    pub fn encoded_levels(&self) -> Option<&str> {
        self.encoded_levels.as_deref()
    }

    pub fn levels(&self) -> Option<&[u32]> {
        self.levels.as_deref()
    }

    /// Whether the coordinates are available.
    pub fn is_decoded(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_coordinates(self) -> Option<Vec<(f64, f64)>> {
        self.coordinates
    }

    /// Haversine length of the shape in meters.
    pub fn distance_meters(&self) -> Option<f64> {
        self.coordinates.as_deref().map(line_length_meters)
    }
}
