//! Route length evaluation and itinerary reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Sums `distances[route[k]][route[k + 1]]` over consecutive pairs.
///
/// Routes with fewer than two entries have length zero.
///
/// # Errors
///
/// [`Error::InvalidRoute`] if any index is outside the matrix.
///
/// # Examples
///
/// ```
/// use city_tour::distance::DistanceMatrix;
/// use city_tour::evaluation::route_length;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
/// assert_eq!(route_length(&dm, &[0, 1, 0]).unwrap(), 10.0);
/// assert!(route_length(&dm, &[0, 2]).is_err());
/// ```
pub fn route_length(distances: &DistanceMatrix, route: &[usize]) -> Result<f64> {
    let n = distances.size();
    if let Some(&bad) = route.iter().find(|&&i| i >= n) {
        return Err(Error::invalid_route(format!(
            "index {bad} is out of range for {n} points"
        )));
    }
    Ok(route.windows(2).map(|w| distances.get(w[0], w[1])).sum())
}

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    from: String,
    to: String,
    distance: f64,
}

impl Leg {
    /// Point the leg departs from.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Point the leg arrives at.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Great-circle length of the leg in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// A tour rendered with point names and per-leg distances.
///
/// # Examples
///
/// ```
/// use city_tour::distance::DistanceMatrix;
/// use city_tour::constructive::nearest_neighbor;
/// use city_tour::evaluation::Itinerary;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// let itinerary = Itinerary::new(&tour, &dm, &["Pune", "Goa"]).unwrap();
/// assert_eq!(itinerary.legs().len(), 2);
/// assert_eq!(itinerary.legs()[0].to(), "Goa");
/// assert!(itinerary.to_string().contains("Total tour distance: 10.00 km"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    legs: Vec<Leg>,
    total_distance: f64,
    num_points: usize,
}

impl Itinerary {
    /// Builds the itinerary of `tour`, naming matrix index `i` as `ids[i]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRoute`] if `ids` does not match the matrix size or the
    /// tour refers to indices outside it.
    pub fn new<K: fmt::Display>(
        tour: &Tour,
        distances: &DistanceMatrix,
        ids: &[K],
    ) -> Result<Self> {
        if ids.len() != distances.size() {
            return Err(Error::invalid_route(format!(
                "{} names for a matrix of {} points",
                ids.len(),
                distances.size()
            )));
        }
        if tour.route().iter().any(|&i| i >= ids.len()) {
            return Err(Error::invalid_route("tour does not fit the matrix"));
        }

        let legs = tour
            .legs()
            .map(|(from, to)| Leg {
                from: ids[from].to_string(),
                to: ids[to].to_string(),
                distance: distances.get(from, to),
            })
            .collect();

        Ok(Self {
            legs,
            total_distance: tour.total_length(),
            num_points: tour.num_points(),
        })
    }

    /// Legs in visiting order, ending with the return to the start.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Total tour distance in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of distinct points visited.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Name of the start/end point.
    pub fn start(&self) -> Option<&str> {
        self.legs.first().map(Leg::from)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start() {
            writeln!(f, "Starting from: {start}")?;
        }
        for (i, leg) in self.legs.iter().enumerate() {
            writeln!(
                f,
                "{}. {} → {} ({:.2} km)",
                i + 1,
                leg.from(),
                leg.to(),
                leg.distance()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total tour distance: {:.2} km", self.total_distance)?;
        write!(f, "Number of points visited: {}", self.num_points)
    }
}
