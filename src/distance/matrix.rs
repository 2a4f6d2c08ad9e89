//! Dense great-circle distance matrix.

use std::fmt::Display;
use std::hash::Hash;

use log::debug;

use super::haversine;
use crate::error::{Error, Result};
use crate::models::{Coordinate, CoordinateMap};

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per run from coordinates; zero on the diagonal and symmetric by
/// construction. There is no public setter, so a matrix never changes after
/// it is built.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use city_tour::models::Coordinate;
/// use city_tour::distance::DistanceMatrix;
///
/// let ids = vec!["A", "B", "C"];
/// let coords = HashMap::from([
///     ("A", Coordinate::new(0.0, 0.0).unwrap()),
///     ("B", Coordinate::new(0.0, 1.0).unwrap()),
///     ("C", Coordinate::new(1.0, 1.0).unwrap()),
/// ]);
/// let dm = DistanceMatrix::from_points(&ids, &coords).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert_eq!(dm.get(0, 2), dm.get(2, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn zeroed(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the matrix for an ordered list of point identifiers.
    ///
    /// Every identifier is looked up before any distance is computed; the
    /// first one without a coordinate fails the whole call with
    /// [`Error::MissingCoordinate`]. Row/column `i` corresponds to `ids[i]`.
    /// Zero or one identifier yields an empty or 1×1 zero matrix.
    pub fn from_points<K>(ids: &[K], coords: &CoordinateMap<K>) -> Result<Self>
    where
        K: Eq + Hash + Display,
    {
        let resolved = ids
            .iter()
            .map(|id| {
                coords
                    .get(id)
                    .copied()
                    .ok_or_else(|| Error::missing_coordinate(id))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_coordinates(&resolved))
    }

    /// Computes the matrix for an already resolved list of coordinates.
    pub fn from_coordinates(coords: &[Coordinate]) -> Self {
        let n = coords.len();
        let mut dm = Self::zeroed(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine(&coords[i], &coords[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        debug!(
            "distance matrix built: {n} points, {} distance evaluations",
            n * n.saturating_sub(1) / 2
        );
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`, or the
    /// grid is not a distance matrix: a non-zero diagonal, an asymmetric
    /// pair, or a negative or non-finite entry.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size.checked_mul(size)? {
            return None;
        }
        if data.iter().any(|&d| !d.is_finite() || d < 0.0) {
            return None;
        }
        let dm = Self { data, size };
        if (0..size).any(|i| dm.get(i, i) != 0.0) || !dm.is_symmetric(0.0) {
            return None;
        }
        Some(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Distances from location `from` to every location.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
