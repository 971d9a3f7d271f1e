//! Punjab district registry: static codes, display names and coordinates.

use crate::types::Location;
use sinchai_core::LocationError;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct District {
    pub code: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub static DISTRICTS: [District; 12] = [
    district("amritsar", "Amritsar", 31.6340, 74.8711),
    district("gurdaspur", "Gurdaspur", 32.1790, 75.9064),
    district("pathankot", "Pathankot", 32.2573, 75.6343),
    district("bhatinda", "Bhatinda", 29.1893, 74.9463),
    district("faridkot", "Faridkot", 30.7159, 74.7823),
    district("ferozepur", "Ferozepur", 30.9544, 74.5535),
    district("sangrur", "Sangrur", 30.2668, 75.8383),
    district("patiala", "Patiala", 30.3398, 76.3869),
    district("ludhiana", "Ludhiana", 30.9010, 75.8573),
    district("mansa", "Mansa", 29.5834, 75.4034),
    district("chandigarh", "Chandigarh", 30.7333, 76.8277),
    district("mohali", "Mohali", 30.6436, 76.8122),
];

const fn district(code: &'static str, name: &'static str, latitude: f64, longitude: f64) -> District {
    District {
        code,
        name,
        latitude,
        longitude,
    }
}

impl District {
    pub fn all() -> &'static [District] {
        &DISTRICTS
    }

    /// Look up a district by code, ignoring case and surrounding whitespace
    pub fn lookup(code: &str) -> Result<&'static District, LocationError> {
        let wanted = code.trim();
        DISTRICTS
            .iter()
            .find(|d| d.code.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LocationError::UnknownDistrict(wanted.to_string()))
    }

    /// The registered district closest to `location` (great-circle distance)
    pub fn nearest(location: &Location) -> &'static District {
        let mut best = &DISTRICTS[0];
        let mut best_km = f64::INFINITY;
        for d in &DISTRICTS {
            let km = haversine_km(location.latitude, location.longitude, d.latitude, d.longitude);
            if km < best_km {
                best = d;
                best_km = km;
            }
        }
        best
    }

    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy_meters: None,
            name: Some(self.name.to_string()),
        }
    }
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let d = District::lookup("  Ludhiana ").unwrap();
        assert_eq!(d.name, "Ludhiana");
        assert_eq!(d.latitude, 30.9010);
    }

    #[test]
    fn test_unknown_district() {
        let err = District::lookup("lahore").unwrap_err();
        assert_eq!(err, LocationError::UnknownDistrict("lahore".to_string()));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = District::all().iter().map(|d| d.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 12);
    }

    #[test]
    fn test_location_carries_name() {
        let loc = District::lookup("mohali").unwrap().location();
        assert_eq!(loc.name.as_deref(), Some("Mohali"));
        assert_eq!(loc.longitude, 76.8122);
    }

    #[test]
    fn test_nearest_district() {
        // Jagraon, about 37 km west of Ludhiana
        let jagraon = Location::new(30.787, 75.473);
        assert_eq!(District::nearest(&jagraon).code, "ludhiana");

        let exact = District::lookup("bhatinda").unwrap().location();
        assert_eq!(District::nearest(&exact).code, "bhatinda");
    }

    #[test]
    fn test_haversine_zero_distance() {
        assert!(haversine_km(30.0, 75.0, 30.0, 75.0).abs() < 1e-9);
    }
}
