use error::NavigationError;
use path::{NavigationRequest, Path};

use crate::graphs::Distance;

pub mod collections;
pub mod dijkstra;
pub mod error;
pub mod path;
pub mod pathfinding;

pub trait PathFinding: Send + Sync {
    /// Shortest path for `request`, or the reason there is none.
    fn route(&self, request: &NavigationRequest) -> Result<Path, NavigationError>;

    /// Like [`PathFinding::route`], but without telling apart an unknown
    /// endpoint from an unreachable one.
    fn shortest_path(&self, request: &NavigationRequest) -> Option<Path> {
        self.route(request).ok()
    }

    fn shortest_path_distance(&self, request: &NavigationRequest) -> Option<Distance> {
        self.shortest_path(request).map(|path| path.distance)
    }
}
