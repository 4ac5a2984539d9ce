use serde::{Deserialize, Serialize};

use crate::graphs::{intersection::Intersection, Coordinate, Distance};

/// Represents a request for finding a shortest path between two
/// intersections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub source: Intersection,
    pub target: Intersection,
}

impl NavigationRequest {
    pub fn new(
        x1: Coordinate,
        y1: Coordinate,
        x2: Coordinate,
        y2: Coordinate,
    ) -> NavigationRequest {
        NavigationRequest {
            source: Intersection::new(x1, y1),
            target: Intersection::new(x2, y2),
        }
    }
}

/// Represents a path on the map.
///
/// The intersections run from the source to the target, and `distance` is
/// the sum of the road weights along them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub intersections: Vec<Intersection>,
    pub distance: Distance,
}
