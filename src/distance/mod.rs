//! Distance computation.
//!
//! Provides the haversine great-circle distance and a dense distance matrix
//! built from it.

mod haversine;
mod matrix;

pub use haversine::{haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
