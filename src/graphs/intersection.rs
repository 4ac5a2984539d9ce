use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinate, Weight};

/// A point on the map. Two intersections are the same iff both coordinates
/// match.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intersection {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Intersection {
    pub fn new(x: Coordinate, y: Coordinate) -> Intersection {
        Intersection { x, y }
    }
}

impl From<(Coordinate, Coordinate)> for Intersection {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Intersection { x, y }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.x, self.y)
    }
}

/// Euclidean distance between two intersections, rounded to the nearest
/// integer.
///
/// The computation runs in `f64`, so coordinate differences never overflow.
/// The float to int conversion saturates, which keeps the result inside
/// `0..=Weight::MAX` even for the widest possible coordinate spans.
pub fn road_length(from: &Intersection, to: &Intersection) -> Weight {
    let dx = to.x as f64 - from.x as f64;
    let dy = to.y as f64 - from.y as f64;
    let length = (dx * dx + dy * dy).sqrt().round();

    length as Weight
}
