use std::time::{Duration, Instant};

use log::debug;

use super::{
    collections::dijkstra_data::DijkstraData,
    dijkstra::{single_source, single_source_until, SearchOutcome},
    error::NavigationError,
    path::{NavigationRequest, Path},
    PathFinding,
};
use crate::graphs::{road_map::RoadMap, Coordinate, Distance};

impl PathFinding for RoadMap {
    fn route(&self, request: &NavigationRequest) -> Result<Path, NavigationError> {
        self.route_until(request, None)
    }
}

impl RoadMap {
    /// Shortest path from `(x1, y1)` to `(x2, y2)`, `None` meaning "no path".
    ///
    /// Navigating from an intersection to itself yields the intersection
    /// twice with a distance of zero.
    pub fn navigate(
        &self,
        x1: Coordinate,
        y1: Coordinate,
        x2: Coordinate,
        y2: Coordinate,
    ) -> Option<Path> {
        self.shortest_path(&NavigationRequest::new(x1, y1, x2, y2))
    }

    /// Gives up with [`NavigationError::DeadlineExceeded`] once `budget` is
    /// spent.
    pub fn navigate_within(
        &self,
        request: &NavigationRequest,
        budget: Duration,
    ) -> Result<Path, NavigationError> {
        self.route_until(request, Instant::now().checked_add(budget))
    }

    pub fn route_until(
        &self,
        request: &NavigationRequest,
        deadline: Option<Instant>,
    ) -> Result<Path, NavigationError> {
        let NavigationRequest { source, target } = *request;

        let source_vertex = self
            .lookup(source.x, source.y)
            .ok_or(NavigationError::UnknownIntersection(source))?;
        let target_vertex = self
            .lookup(target.x, target.y)
            .ok_or(NavigationError::UnknownIntersection(target))?;

        if source_vertex == target_vertex {
            return Ok(Path {
                intersections: vec![source, target],
                distance: 0,
            });
        }

        let (data, outcome) = single_source_until(self, source_vertex, deadline);
        if outcome == SearchOutcome::DeadlineExceeded {
            return Err(NavigationError::DeadlineExceeded(source));
        }

        let unreachable = NavigationError::Unreachable {
            from: source,
            to: target,
        };
        let vertex_path = data
            .get_path(source_vertex, target_vertex)
            .ok_or(unreachable)?;
        let intersections = vertex_path
            .vertices
            .iter()
            .map(|&vertex| self.intersection(vertex))
            .collect::<Option<Vec<_>>>()
            .ok_or(unreachable)?;

        debug!(
            "({}, {}) -> ({}, {}): {} intersections, distance {}",
            source.x,
            source.y,
            target.x,
            target.y,
            intersections.len(),
            vertex_path.distance
        );

        Ok(Path {
            intersections,
            distance: vertex_path.distance,
        })
    }

    /// Distance of every intersection from `(x, y)`, one line each, or `None`
    /// if `(x, y)` is not on the map.
    ///
    /// Distances are printed as integers (`7`, not `7.0`); unreached
    /// intersections show `Infinity`.
    pub fn weight_report(&self, x: Coordinate, y: Coordinate) -> Option<Vec<String>> {
        let source = self.lookup(x, y)?;
        let data = single_source(self, source);

        let lines = self
            .intersections()
            .map(|(vertex, intersection)| {
                let distance = data.get_distance(vertex);
                let weight = if distance == Distance::MAX {
                    String::from("Infinity")
                } else {
                    distance.to_string()
                };
                format!(
                    "x coordinate is : {}; y coordinate is : {}; weight is : {}",
                    intersection.x, intersection.y, weight
                )
            })
            .collect();

        Some(lines)
    }
}
