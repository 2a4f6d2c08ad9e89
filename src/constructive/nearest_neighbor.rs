//! Nearest-neighbor constructive heuristic.
//!
//! Builds a closed tour greedily: starting from the given index, always move
//! to the nearest unvisited point, then return to the start.
//!
//! # Complexity
//!
//! O(n²) time, O(n) auxiliary space.
//!
//! # Tie-breaking
//!
//! Candidates are scanned in ascending index order and only a strictly
//! shorter distance replaces the current best, so among equally distant
//! candidates the lowest index wins. Identical input always yields an
//! identical tour.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// The heuristic never backtracks and makes no optimality claim.
///
/// # Errors
///
/// * [`Error::EmptyInput`] if the matrix has no points.
/// * [`Error::InvalidStartIndex`] if `start >= distances.size()`.
///
/// # Examples
///
/// ```
/// use city_tour::distance::DistanceMatrix;
/// use city_tour::constructive::nearest_neighbor;
///
/// // Four points on a line: 0 - 1 - 2 - 3, unit spacing.
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 2.0, 3.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 1.0,
///     3.0, 2.0, 1.0, 0.0,
/// ]).unwrap();
///
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(tour.route(), &[0, 1, 2, 3, 0]);
/// assert!((tour.total_length() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = distances.size();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if start >= n {
        return Err(Error::InvalidStartIndex { index: start, size: n });
    }

    let mut visited = vec![false; n];
    visited[start] = true;

    let mut route = Vec::with_capacity(n + 1);
    route.push(start);
    let mut total = 0.0;
    let mut current = start;

    for _ in 1..n {
        let row = distances.row(current);
        let mut best: Option<(usize, f64)> = None;
        for (i, &d) in row.iter().enumerate() {
            if visited[i] {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        // n - 1 iterations over n - 1 unvisited points: a candidate always exists.
        let Some((next, d)) = best else { break };
        visited[next] = true;
        route.push(next);
        total += d;
        current = next;
    }

    total += distances.get(current, start);
    route.push(start);

    debug!("nearest-neighbor tour from {start}: {n} points, length {total:.2}");
    Ok(Tour::new(route, total))
}
