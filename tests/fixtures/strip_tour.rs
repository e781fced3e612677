//! An ordered tour down the Las Vegas Strip and out to Henderson.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API, seven decimal
//! digits, so both 1e5 and 1e6 precision lose information.

use route_polyline::Locatable;

/// A named stop on the tour.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Stop {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

impl Locatable for Stop {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

pub const STRIP_TOUR: &[Stop] = &[
    Stop::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Stop::new("Encore at Wynn", 36.1289345, -115.1653620),
    Stop::new("Grand Lux Cafe", 36.1216416, -115.1685024),
    Stop::new("Oyster Bar", 36.1194951, -115.1715059),
    Stop::new("Bacchanal Buffet", 36.1159581, -115.1762929),
    Stop::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Stop::new("mon ami Gabi", 36.1128554, -115.1724137),
    Stop::new("PBR Grill", 36.1090017, -115.1724402),
    Stop::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Stop::new("MGM Grand", 36.1023654, -115.1688720),
    Stop::new("Pyramid Cafe", 36.0956586, -115.1761902),
    Stop::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Stop::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Stop::new("Islander's Grill", 36.0335058, -114.9856162),
];

/// The tour as (lat, lng) tuples.
pub fn tour_coordinates() -> Vec<(f64, f64)> {
    STRIP_TOUR.iter().map(Stop::location).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_vegas_area() {
        for stop in STRIP_TOUR {
            assert!(stop.lat > 35.9 && stop.lat < 36.3, "{} lat out of range: {}", stop.name, stop.lat);
            assert!(stop.lng > -115.4 && stop.lng < -114.8, "{} lng out of range: {}", stop.name, stop.lng);
        }
    }
}
