//! Tour planning configuration.

use serde::{Deserialize, Serialize};

/// Options for [`plan_tour`](crate::planner::plan_tour).
///
/// Missing fields take their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use city_tour::config::TourConfig;
///
/// assert_eq!(TourConfig::default().start_index(), 0);
/// assert_eq!(TourConfig::default().with_start_index(3).start_index(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    start_index: usize,
}

impl TourConfig {
    /// Sets the position, in the resolved point list, the tour starts from.
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Position the tour starts from.
    pub fn start_index(&self) -> usize {
        self.start_index
    }
}
