use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Great-circle distance between two points on a spherical earth.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * a.sqrt().asin() * EARTH_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRENOBLE: GeoPoint = GeoPoint::new(45.1885, 5.7245);
    const ABUJA: GeoPoint = GeoPoint::new(9.0765, 7.3986);

    #[test]
    fn grenoble_to_abuja_is_about_4000_km() {
        let distance = GRENOBLE.distance_km(&ABUJA);
        assert!((distance - 4019.0).abs() < 50.0, "got {distance:.1} km");
    }

    #[test]
    fn same_point_is_zero() {
        assert!(GRENOBLE.distance_km(&GRENOBLE).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = GRENOBLE.distance_km(&ABUJA);
        let back = ABUJA.distance_km(&GRENOBLE);
        assert!((there - back).abs() < 1e-9);
    }
}
