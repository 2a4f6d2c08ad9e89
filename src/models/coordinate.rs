//! Geographic coordinate type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::distance::haversine;

/// Mapping from point identifier to its coordinate.
pub type CoordinateMap<K> = HashMap<K, Coordinate>;

/// A latitude/longitude pair in degrees.
///
/// The distance functions perform no validation; use [`Coordinate::new`] to
/// reject non-finite or out-of-range input before it reaches them.
///
/// # Examples
///
/// ```
/// use city_tour::models::Coordinate;
///
/// let mumbai = Coordinate::new(19.076, 72.8777).unwrap();
/// assert_eq!(mumbai.latitude(), 19.076);
/// assert!(Coordinate::new(91.0, 0.0).is_none());
/// assert!(Coordinate::new(0.0, f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    ///
    /// Returns `None` if either value is non-finite, latitude is outside
    /// [-90, 90] or longitude is outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a coordinate without range checks.
    pub fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another coordinate, in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine(self, other)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.latitude, c.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_valid() {
        let c = Coordinate::new(-33.8688, 151.2093).expect("valid");
        assert_eq!(c.latitude(), -33.8688);
        assert_eq!(c.longitude(), 151.2093);
    }

    #[test]
    fn test_coordinate_bounds_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_some());
        assert!(Coordinate::new(-90.0, -180.0).is_some());
    }

    #[test]
    fn test_coordinate_invalid() {
        assert!(Coordinate::new(90.1, 0.0).is_none());
        assert!(Coordinate::new(0.0, -180.5).is_none());
        assert!(Coordinate::new(f64::NAN, 0.0).is_none());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_coordinate_distance_symmetric() {
        let a = Coordinate::new_unchecked(28.7041, 77.1025);
        let b = Coordinate::new_unchecked(12.9716, 77.5946);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_coordinate_into_tuple() {
        let t: (f64, f64) = Coordinate::new_unchecked(1.5, -2.5).into();
        assert_eq!(t, (1.5, -2.5));
    }
}
