//! # city-tour
//!
//! Closed tours over geographic points: great-circle distances, a dense
//! distance matrix, and a deterministic nearest-neighbor tour.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, CoordinateMap, Tour)
//! - [`distance`] — Haversine distance and distance matrix
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`evaluation`] — Route length and itinerary reporting
//! - [`planner`] — Point resolution and the end-to-end pipeline
//! - [`config`] — Planning options
//! - [`error`] — Error type

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod planner;

pub use error::{Error, Result};
