//! Tour evaluation and reporting.
//!
//! - [`route_length`] — Recomputes the length of an index route against a matrix
//! - [`Itinerary`] — Named legs with per-leg distances, printable via `Display`

mod itinerary;

pub use itinerary::{route_length, Itinerary, Leg};
