//! Error type shared by matrix construction, tour construction and planning.

use thiserror::Error as ThisError;

/// Precondition violations surfaced by the tour pipeline.
///
/// None of these are retried or recovered from inside the crate; the caller
/// decides whether to drop points or abort.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A point identifier has no entry in the coordinate map.
    #[error("no coordinate for point `{0}`")]
    MissingCoordinate(String),
    /// Tour construction was asked to route zero points.
    #[error("no points to route")]
    EmptyInput,
    /// The requested start index is outside `[0, size)`.
    #[error("start index {index} is out of range for {size} points")]
    InvalidStartIndex {
        /// Requested start index.
        index: usize,
        /// Number of points in the matrix.
        size: usize,
    },
    /// A route handed to evaluation does not fit the matrix.
    #[error("invalid route: {0}")]
    InvalidRoute(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn missing_coordinate(id: impl ToString) -> Self {
        Self::MissingCoordinate(id.to_string())
    }

    pub fn invalid_route(message: impl Into<String>) -> Self {
        Self::InvalidRoute(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::missing_coordinate("Goa").to_string(),
            "no coordinate for point `Goa`"
        );
        assert_eq!(Error::EmptyInput.to_string(), "no points to route");
        assert_eq!(
            Error::InvalidStartIndex { index: 4, size: 4 }.to_string(),
            "start index 4 is out of range for 4 points"
        );
        assert_eq!(
            Error::invalid_route("not closed").to_string(),
            "invalid route: not closed"
        );
    }
}
