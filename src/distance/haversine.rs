//! Great-circle distance on a spherical earth.

use crate::models::Coordinate;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers (haversine).
///
/// Performs no validation: out-of-range or non-finite input is the caller's
/// responsibility. The result is non-negative, exactly zero for identical
/// coordinates, and symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use city_tour::models::Coordinate;
/// use city_tour::distance::haversine;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// assert!((haversine(&a, &b) - 111.19).abs() < 0.01);
/// assert_eq!(haversine(&a, &a), 0.0);
/// ```
pub fn haversine(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlon = to.longitude().to_radians() - from.longitude().to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
