use std::collections::hash_map::Entry::{Occupied, Vacant};

use ahash::{HashMap, HashMapExt};
use log::{debug, warn};

use super::{
    edge::{DirectedEdge, DirectedTaillessWeightedEdge, DirectedWeightedEdge},
    intersection::{road_length, Intersection},
    Coordinate, Graph, VertexId, Weight,
};

/// Undirected road network. Intersections are numbered in insertion order,
/// every road is stored once in the adjacency list of each endpoint.
#[derive(Clone)]
pub struct RoadMap {
    intersections: Vec<Intersection>,
    index: HashMap<Intersection, VertexId>,
    out_edges: Vec<Vec<DirectedTaillessWeightedEdge>>,
}

impl Default for RoadMap {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadMap {
    pub fn new() -> RoadMap {
        RoadMap {
            intersections: Vec::new(),
            index: HashMap::new(),
            out_edges: Vec::new(),
        }
    }

    /// Adds the intersection `(x, y)`. Returns `false` if it already exists.
    pub fn add_intersection(&mut self, x: Coordinate, y: Coordinate) -> bool {
        let intersection = Intersection::new(x, y);
        let next_id = self.intersections.len();

        match self.index.entry(intersection) {
            Occupied(_) => {
                debug!("intersection ({}, {}) already exists", x, y);
                false
            }
            Vacant(entry) => {
                // VertexId::MAX marks "no predecessor" in search data
                let vertex = match VertexId::try_from(next_id) {
                    Ok(vertex) if vertex != VertexId::MAX => vertex,
                    _ => {
                        warn!("no vertex id left for intersection ({}, {})", x, y);
                        return false;
                    }
                };
                entry.insert(vertex);
                self.intersections.push(intersection);
                self.out_edges.push(Vec::new());
                true
            }
        }
    }

    /// Adds a road between two existing intersections with its rounded
    /// Euclidean length as weight.
    ///
    /// Returns `false` if an endpoint is unknown or the two intersections are
    /// already connected. A road either lands in both adjacency lists or in
    /// neither.
    pub fn add_road(
        &mut self,
        x1: Coordinate,
        y1: Coordinate,
        x2: Coordinate,
        y2: Coordinate,
    ) -> bool {
        let (Some(tail), Some(head)) = (self.lookup(x1, y1), self.lookup(x2, y2)) else {
            debug!(
                "road ({}, {}) -> ({}, {}) references an unknown intersection",
                x1, y1, x2, y2
            );
            return false;
        };

        let edge = DirectedEdge::new(tail, head);
        if self.get_edge_weight(&edge).is_some()
            || self.get_edge_weight(&edge.reversed()).is_some()
        {
            debug!("road ({}, {}) -> ({}, {}) already exists", x1, y1, x2, y2);
            return false;
        }

        let weight = road_length(
            &self.intersections[tail as usize],
            &self.intersections[head as usize],
        );
        let edge = DirectedWeightedEdge::new(tail, head, weight);

        self.out_edges[tail as usize].push(edge.tailless());
        // a loop's reverse is the same half-edge, so it is stored only once
        if !edge.is_loop() {
            self.out_edges[head as usize].push(edge.reversed().tailless());
        }

        true
    }

    pub fn lookup(&self, x: Coordinate, y: Coordinate) -> Option<VertexId> {
        self.index.get(&Intersection::new(x, y)).copied()
    }

    pub fn intersection(&self, vertex: VertexId) -> Option<Intersection> {
        self.intersections.get(vertex as usize).copied()
    }

    /// All intersections in insertion order, paired with their vertex id.
    pub fn intersections(&self) -> impl ExactSizeIterator<Item = (VertexId, Intersection)> + '_ {
        self.intersections
            .iter()
            .enumerate()
            .map(|(vertex, intersection)| (vertex as VertexId, *intersection))
    }

    /// Human readable dump of every adjacency list, used to inspect how the
    /// map was constructed.
    pub fn adjacency_report(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (vertex, source) in self.intersections() {
            lines.push(format!("source X : {} source Y : {}", source.x, source.y));
            for edge in self.out_edges(vertex) {
                let destination = self.intersections[edge.head() as usize];
                lines.push(format!(
                    "\tdestination.X : {}; destination.Y : {}; distance is : {}",
                    destination.x,
                    destination.y,
                    edge.weight()
                ));
            }
        }
        lines
    }
}

impl Graph for RoadMap {
    fn number_of_vertices(&self) -> u32 {
        self.intersections.len() as u32
    }

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge> + Send + '_> {
        // Define a struct for iterating over edges with the same tail. Struct is needed
        // as tail would otherwise not live enough.
        struct OutEdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, DirectedTaillessWeightedEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = DirectedWeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edges = self
            .out_edges
            .get(source as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        Box::new(OutEdgeIterator {
            edge_iter: edges.iter(),
            tail: source,
        })
    }

    fn get_edge_weight(&self, edge: &DirectedEdge) -> Option<Weight> {
        self.out_edges
            .get(edge.tail() as usize)?
            .iter()
            .find(|tailless_edge| tailless_edge.head() == edge.head())
            .map(DirectedTaillessWeightedEdge::weight)
    }
}
