//! Domain model types for city tours.
//!
//! Coordinates keyed by point identifier, and the closed tour produced over
//! their matrix indices.

mod coordinate;
mod tour;

pub use coordinate::{Coordinate, CoordinateMap};
pub use tour::Tour;
