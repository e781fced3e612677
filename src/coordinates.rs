//! Coordinate encoding and decoding.
//!
//! Each coordinate is scaled by the precision factor, rounded to an integer,
//! and written as the per-axis delta from the previous coordinate (latitude
//! first). The first coordinate is a delta from (0, 0).

use tracing::trace;

use crate::chunk;
use crate::error::Result;
use crate::traits::Locatable;

/// Encodes (lat, lng) pairs at the given precision.
///
/// An empty slice encodes to an empty string. Values are not range checked;
/// a scaled delta wider than 30 bits produces a run that decoders reject.
pub fn encode_coordinates(coordinates: &[(f64, f64)], precision: f64) -> String {
    encode_locations(coordinates, precision)
}

/// Encodes any [`Locatable`] values at the given precision.
pub fn encode_locations<L: Locatable>(locations: &[L], precision: f64) -> String {
    let mut encoded = String::with_capacity(locations.len() * 8);
    let mut previous: (i64, i64) = (0, 0);

    for location in locations {
        let (lat, lng) = location.location();
        let scaled = (scale(lat, precision), scale(lng, precision));

        chunk::encode_signed(scaled.0 - previous.0, &mut encoded);
        chunk::encode_signed(scaled.1 - previous.1, &mut encoded);

        previous = scaled;
    }

    trace!(points = locations.len(), bytes = encoded.len(), "encoded polyline");
    encoded
}

/// Decodes a polyline string into (lat, lng) pairs.
///
/// All or nothing: any malformed value fails the whole call, since every
/// later coordinate depends on the running totals. An empty string decodes
/// to an empty list.
pub fn decode_polyline(encoded: &str, precision: f64) -> Result<Vec<(f64, f64)>> {
    let bytes = encoded.as_bytes();
    let mut position = 0;
    let mut coordinates = Vec::new();

    let mut lat = 0.0;
    let mut lng = 0.0;

    while position < bytes.len() {
        lat += chunk::decode_signed(bytes, &mut position)? as f64 / precision;
        lng += chunk::decode_signed(bytes, &mut position)? as f64 / precision;
        coordinates.push((lat, lng));
    }

    Ok(coordinates)
}

fn scale(value: f64, precision: f64) -> i64 {
    (value * precision).round() as i64
}
