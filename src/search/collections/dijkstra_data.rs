use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, VertexId};

/// Shortest path found by a search, expressed in vertex ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexPath {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}

/// Search scoped distances and predecessors.
///
/// A fresh instance (or a cleared one) belongs to exactly one search, which
/// keeps the graph itself untouched while it is queried.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId);

    /// Retrieves the distance to a given vertex. `Distance::MAX` means the
    /// vertex has not been reached.
    fn get_distance(&self, vertex: VertexId) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: VertexId, distance: Distance);

    /// Walks the predecessor links back from `target` until `source` is
    /// reached and returns the vertices in forward order.
    ///
    /// Returns `None` if `target` was not reached or the chain breaks before
    /// arriving at `source`.
    fn get_path(&self, source: VertexId, target: VertexId) -> Option<VertexPath> {
        let distance = self.get_distance(target);
        if distance == Distance::MAX {
            return None;
        }

        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            current = self.get_predecessor(current)?;
            vertices.push(current);
        }

        vertices.reverse();

        Some(VertexPath { vertices, distance })
    }
}

pub struct DijkstraDataVec {
    predecessors: Vec<VertexId>,
    distances: Vec<Distance>,
}

impl DijkstraDataVec {
    pub fn new(number_of_vertices: u32) -> Self {
        DijkstraDataVec {
            predecessors: vec![VertexId::MAX; number_of_vertices as usize],
            distances: vec![Distance::MAX; number_of_vertices as usize],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.predecessors.fill(VertexId::MAX);
        self.distances.fill(Distance::MAX);
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        let predecessor = *self.predecessors.get(vertex as usize)?;

        if predecessor == VertexId::MAX {
            return None;
        }

        Some(predecessor)
    }

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.predecessors[vertex as usize] = predecessor;
    }

    fn get_distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(vertex as usize)
            .copied()
            .unwrap_or(Distance::MAX)
    }

    fn set_distance(&mut self, vertex: VertexId, distance: Distance) {
        self.distances[vertex as usize] = distance;
    }
}

/// Sparse variant, only touches the vertices the search reaches.
pub struct DijkstraDataHashMap {
    predecessors: HashMap<VertexId, VertexId>,
    distances: HashMap<VertexId, Distance>,
}

impl Default for DijkstraDataHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl DijkstraDataHashMap {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }
}

impl DijkstraData for DijkstraDataHashMap {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: VertexId) -> Distance {
        *self.distances.get(&vertex).unwrap_or(&Distance::MAX)
    }

    fn set_distance(&mut self, vertex: VertexId, distance: Distance) {
        self.distances.insert(vertex, distance);
    }
}
