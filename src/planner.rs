//! End-to-end tour planning.
//!
//! Chains the stages by value: identifiers are resolved against the
//! coordinate map, the matrix is built over the resolved set only, the
//! nearest-neighbor tour is run on that matrix, and the result is rendered
//! as an itinerary. Nothing is shared between runs.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use log::{debug, warn};

use crate::config::TourConfig;
use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::Itinerary;
use crate::models::{Coordinate, CoordinateMap, Tour};

/// Identifiers split into those with a coordinate and those without.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPoints<K> {
    points: Vec<(K, Coordinate)>,
    missing: Vec<K>,
}

impl<K> ResolvedPoints<K> {
    /// Resolved identifiers in input order.
    pub fn ids(&self) -> Vec<&K> {
        self.points.iter().map(|(id, _)| id).collect()
    }

    /// Coordinates aligned with [`ids`](Self::ids).
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.points.iter().map(|&(_, c)| c).collect()
    }

    /// Resolved `(identifier, coordinate)` pairs in input order.
    pub fn points(&self) -> &[(K, Coordinate)] {
        &self.points
    }

    /// Identifiers that had no coordinate, in input order.
    pub fn missing(&self) -> &[K] {
        &self.missing
    }

    /// Number of resolved points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if nothing resolved.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Validates identifiers against the coordinate map.
///
/// Keeps the first occurrence of each identifier, preserves order, and moves
/// identifiers without a coordinate to [`ResolvedPoints::missing`]. Never
/// fails; the caller decides what to do about missing points.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use city_tour::models::Coordinate;
/// use city_tour::planner::resolve_points;
///
/// let coords = HashMap::from([
///     ("Pune", Coordinate::new(18.5204, 73.8567).unwrap()),
///     ("Goa", Coordinate::new(15.2993, 74.124).unwrap()),
/// ]);
/// let resolved = resolve_points(&["Goa", "Atlantis", "Pune", "Goa"], &coords);
/// assert_eq!(resolved.ids(), vec![&"Goa", &"Pune"]);
/// assert_eq!(resolved.missing(), &["Atlantis"]);
/// ```
pub fn resolve_points<K>(ids: &[K], coords: &CoordinateMap<K>) -> ResolvedPoints<K>
where
    K: Eq + Hash + Clone + Display,
{
    let mut seen = HashSet::with_capacity(ids.len());
    let mut points = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();

    for id in ids {
        if !seen.insert(id) {
            continue;
        }
        match coords.get(id) {
            Some(&c) => points.push((id.clone(), c)),
            None => {
                warn!("no coordinate for point `{id}`, leaving it out of the tour");
                missing.push(id.clone());
            }
        }
    }

    debug!(
        "resolved {} of {} unique points",
        points.len(),
        points.len() + missing.len()
    );
    ResolvedPoints { points, missing }
}

/// The outcome of [`plan_tour`].
#[derive(Debug, Clone)]
pub struct PlannedTour<K> {
    resolved: ResolvedPoints<K>,
    matrix: DistanceMatrix,
    tour: Tour,
    itinerary: Itinerary,
}

impl<K> PlannedTour<K> {
    /// Identifiers the tour was built over; matrix index `i` is `ids()[i]`.
    pub fn ids(&self) -> Vec<&K> {
        self.resolved.ids()
    }

    /// Identifiers left out because they had no coordinate.
    pub fn missing(&self) -> &[K] {
        self.resolved.missing()
    }

    /// Distance matrix over the resolved points.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// The nearest-neighbor tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Named legs of the tour.
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Identifiers in visiting order, closing repeat included.
    pub fn ordered_ids(&self) -> Vec<&K> {
        let points = self.resolved.points();
        self.tour.route().iter().map(|&i| &points[i].0).collect()
    }

    /// Coordinates in visiting order, closing repeat included.
    pub fn ordered_coordinates(&self) -> Vec<Coordinate> {
        let points = self.resolved.points();
        self.tour.route().iter().map(|&i| points[i].1).collect()
    }
}

/// Resolves points, builds the distance matrix and the nearest-neighbor tour.
///
/// Identifiers without a coordinate are reported in
/// [`PlannedTour::missing`] and excluded; the configured start index refers to
/// the resolved list.
///
/// # Errors
///
/// * [`Error::MissingCoordinate`] naming the first unresolved identifier if
///   identifiers were given but none of them has a coordinate.
/// * [`Error::EmptyInput`] if no identifiers were given.
/// * [`Error::InvalidStartIndex`] if the start index is out of range of the
///   resolved points.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use city_tour::config::TourConfig;
/// use city_tour::models::Coordinate;
/// use city_tour::planner::plan_tour;
///
/// let coords = HashMap::from([
///     ("A".to_string(), Coordinate::new(0.0, 0.0).unwrap()),
///     ("B".to_string(), Coordinate::new(0.0, 1.0).unwrap()),
///     ("C".to_string(), Coordinate::new(0.0, 3.0).unwrap()),
/// ]);
/// let ids = vec!["C".to_string(), "A".to_string(), "B".to_string()];
/// let planned = plan_tour(&ids, &coords, &TourConfig::default()).unwrap();
/// assert_eq!(planned.tour().route(), &[0, 2, 1, 0]);
/// assert_eq!(planned.ordered_ids(), vec!["C", "B", "A", "C"]);
/// ```
pub fn plan_tour<K>(
    ids: &[K],
    coords: &CoordinateMap<K>,
    config: &TourConfig,
) -> Result<PlannedTour<K>>
where
    K: Eq + Hash + Clone + Display,
{
    let resolved = resolve_points(ids, coords);
    if resolved.is_empty() {
        return Err(match resolved.missing().first() {
            Some(id) => Error::missing_coordinate(id),
            None => Error::EmptyInput,
        });
    }

    let matrix = DistanceMatrix::from_coordinates(&resolved.coordinates());
    let tour = nearest_neighbor(&matrix, config.start_index())?;
    let itinerary = Itinerary::new(&tour, &matrix, &resolved.ids())?;

    Ok(PlannedTour {
        resolved,
        matrix,
        tour,
        itinerary,
    })
}
