use thiserror::Error;

use crate::graphs::intersection::Intersection;

/// Reasons a navigation request produced no path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("intersection ({}, {}) is not on the map", .0.x, .0.y)]
    UnknownIntersection(Intersection),

    #[error("no road leads from ({}, {}) to ({}, {})", .from.x, .from.y, .to.x, .to.y)]
    Unreachable { from: Intersection, to: Intersection },

    #[error("search from ({}, {}) ran past its deadline", .0.x, .0.y)]
    DeadlineExceeded(Intersection),
}
