//! Closed tour type.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A closed visiting sequence over matrix indices.
///
/// The route starts and ends at the same index and contains every other
/// index exactly once. Built by the constructive heuristics and never
/// mutated afterwards.
///
/// # Examples
///
/// ```
/// use city_tour::distance::DistanceMatrix;
/// use city_tour::constructive::nearest_neighbor;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(tour.route(), &[0, 1, 0]);
/// assert_eq!(tour.start(), 0);
/// assert_eq!(tour.num_points(), 2);
/// assert!((tour.total_length() - 10.0).abs() < 1e-10);
/// ```
///
/// Deserialization checks the same shape: a closed route of at least two
/// entries visiting each index once, with a finite non-negative length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTour")]
pub struct Tour {
    route: Vec<usize>,
    total_length: f64,
}

#[derive(Deserialize)]
struct RawTour {
    route: Vec<usize>,
    total_length: f64,
}

impl TryFrom<RawTour> for Tour {
    type Error = Error;

    fn try_from(raw: RawTour) -> Result<Self, Self::Error> {
        let RawTour {
            route,
            total_length,
        } = raw;
        if route.len() < 2 {
            return Err(Error::invalid_route("a tour needs at least two entries"));
        }
        if route.first() != route.last() {
            return Err(Error::invalid_route("tour does not return to its start"));
        }
        let n = route.len() - 1;
        let mut seen = vec![false; n];
        for &i in &route[..n] {
            if i >= n || seen[i] {
                return Err(Error::invalid_route(format!(
                    "index {i} is out of range or repeated in a tour of {n} points"
                )));
            }
            seen[i] = true;
        }
        if !total_length.is_finite() || total_length < 0.0 {
            return Err(Error::invalid_route(format!(
                "tour length {total_length} is not a finite non-negative number"
            )));
        }
        Ok(Self::new(route, total_length))
    }
}

impl Tour {
    pub(crate) fn new(route: Vec<usize>, total_length: f64) -> Self {
        Self {
            route,
            total_length,
        }
    }

    /// Visiting order, including the closing return to the start.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Total length of the closed loop, in the matrix's unit (km).
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Index the tour starts and ends at.
    pub fn start(&self) -> usize {
        self.route[0]
    }

    /// Number of distinct points visited.
    pub fn num_points(&self) -> usize {
        self.route.len() - 1
    }

    /// Consecutive `(from, to)` index pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.route.windows(2).map(|w| (w[0], w[1]))
    }
}
