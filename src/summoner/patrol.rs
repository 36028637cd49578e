//! Cyclic waypoint paths walked by a patrolling summoner.
use glam::Vec2;

use crate::constants::{DEFAULT_SPEED, DEFAULT_WAYPOINT_DWELL_TIME, DEFAULT_WAYPOINT_TOLERANCE};

/// Non-empty, cyclic list of waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolPath {
    waypoints: Vec<Vec2>,
}

impl PatrolPath {
    /// Builds a path, or `None` when `waypoints` is empty.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec2;
    /// use summoner::summoner::PatrolPath;
    /// assert!(PatrolPath::new(Vec::new()).is_none());
    /// let path = PatrolPath::new(vec![Vec2::ZERO, Vec2::X]).expect("two waypoints");
    /// assert_eq!(path.next_index(1), 0);
    /// ```
    #[must_use]
    pub fn new(waypoints: Vec<Vec2>) -> Option<Self> {
        (!waypoints.is_empty()).then_some(Self { waypoints })
    }

    /// Waypoint at `index`, if it exists.
    #[must_use]
    pub fn waypoint(&self, index: usize) -> Option<Vec2> {
        self.waypoints.get(index).copied()
    }

    /// Index following `index`, wrapping back to the first waypoint.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    /// Number of waypoints; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// The waypoints in walking order.
    #[must_use]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }
}

/// How a summoner walks its path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolSettings {
    /// Seconds to wait after reaching a waypoint.
    pub dwell_time: f32,
    /// Distance under which a waypoint counts as reached.
    pub tolerance: f32,
    /// Walking speed before the patrol factor is applied.
    pub speed: f32,
}

impl Default for PatrolSettings {
    fn default() -> Self {
        Self {
            dwell_time: DEFAULT_WAYPOINT_DWELL_TIME,
            tolerance: DEFAULT_WAYPOINT_TOLERANCE,
            speed: DEFAULT_SPEED,
        }
    }
}
