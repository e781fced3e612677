//! Haversine distance over decoded coordinates.
//!
//! Great-circle distance on a spherical earth. Good enough for measuring a
//! route shape; not a geodesic on the ellipsoid.

/// Mean earth radius in meters, as used for route-shape measurements.
pub const METERS_PER_RADIAN: f64 = 6_373_000.0;

/// Haversine distance between two (lat, lng) points in meters.
pub fn haversine_meters(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    METERS_PER_RADIAN * c
}

/// Total length of a line through `coordinates`, in meters.
///
/// Zero for fewer than two points.
pub fn line_length_meters(coordinates: &[(f64, f64)]) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| haversine_meters(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_meters((36.1, -115.1), (36.1, -115.1));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Las Vegas (36.17, -115.14) to Los Angeles (34.05, -118.24)
        // Actual distance ~370 km
        let dist = haversine_meters((36.17, -115.14), (34.05, -118.24));
        assert!(
            dist > 350_000.0 && dist < 400_000.0,
            "LV to LA should be ~370km, got {}",
            dist
        );
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = (36.1, -115.1);
        let b = (36.2, -115.2);
        assert!((haversine_meters(a, b) - haversine_meters(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_line_length_sums_segments() {
        let points = [(36.1, -115.1), (36.2, -115.2), (36.3, -115.3)];
        let expected = haversine_meters(points[0], points[1]) + haversine_meters(points[1], points[2]);
        assert!((line_length_meters(&points) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_line_length_degenerate() {
        assert_eq!(line_length_meters(&[]), 0.0);
        assert_eq!(line_length_meters(&[(36.1, -115.1)]), 0.0);
    }
}
