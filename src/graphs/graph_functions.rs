use itertools::Itertools;
use rand::Rng;

use super::{
    edge::{DirectedEdge, DirectedWeightedEdge},
    road_map::RoadMap,
    Coordinate, Distance, Graph, VertexId,
};

pub fn all_edges(graph: &dyn Graph) -> Vec<DirectedWeightedEdge> {
    (0..graph.number_of_vertices())
        .flat_map(|vertex| graph.out_edges(vertex))
        .collect()
}

/// Checks that every edge has a reverse twin carrying the same weight.
pub fn is_bidirectional(graph: &dyn Graph) -> bool {
    all_edges(graph).iter().all(|edge| {
        graph.get_edge_weight(&edge.reversed().unweighted()) == Some(edge.weight())
    })
}

/// Sum of the edge weights along `vertices`, or `None` if two consecutive
/// vertices are not connected.
pub fn path_distance(graph: &dyn Graph, vertices: &[VertexId]) -> Option<Distance> {
    vertices
        .iter()
        .tuple_windows()
        .map(|(&tail, &head)| {
            graph
                .get_edge_weight(&DirectedEdge::new(tail, head))
                .map(Distance::from)
        })
        .sum()
}

/// Shortest distance by enumerating every simple path from `source`.
/// Exponential, only meant to cross check the real search on tiny graphs.
pub fn brute_force_shortest_distance(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Option<Distance> {
    fn visit(
        graph: &dyn Graph,
        vertex: VertexId,
        target: VertexId,
        distance: Distance,
        on_path: &mut Vec<bool>,
        best: &mut Option<Distance>,
    ) {
        if vertex == target {
            if best.map_or(true, |best| distance < best) {
                *best = Some(distance);
            }
            return;
        }

        on_path[vertex as usize] = true;
        for edge in graph.out_edges(vertex) {
            if !on_path[edge.head() as usize] {
                let distance = distance + Distance::from(edge.weight());
                visit(graph, edge.head(), target, distance, on_path, best);
            }
        }
        on_path[vertex as usize] = false;
    }

    let mut on_path = vec![false; graph.number_of_vertices() as usize];
    let mut best = None;
    visit(graph, source, target, 0, &mut on_path, &mut best);
    best
}

/// Builds a map with `number_of_intersections` distinct intersections drawn
/// from `[-extent, extent]²` and up to `number_of_roads` random roads.
///
/// Fewer intersections are created if the square is too small to hold them.
pub fn random_road_map<R: Rng>(
    rng: &mut R,
    number_of_intersections: u32,
    number_of_roads: u32,
    extent: Coordinate,
) -> RoadMap {
    let mut map = RoadMap::new();
    let extent = extent.checked_abs().unwrap_or(Coordinate::MAX);

    let mut intersections = Vec::new();
    let mut attempts = 0;
    while intersections.len() < number_of_intersections as usize
        && attempts < number_of_intersections.saturating_mul(16)
    {
        attempts += 1;
        let x = rng.gen_range(-extent..=extent);
        let y = rng.gen_range(-extent..=extent);
        if map.add_intersection(x, y) {
            intersections.push((x, y));
        }
    }

    if intersections.len() < 2 {
        return map;
    }

    let mut roads = 0;
    let mut attempts = 0;
    while roads < number_of_roads && attempts < number_of_roads.saturating_mul(16) {
        attempts += 1;
        let (x1, y1) = intersections[rng.gen_range(0..intersections.len())];
        let (x2, y2) = intersections[rng.gen_range(0..intersections.len())];
        if (x1, y1) != (x2, y2) && map.add_road(x1, y1, x2, y2) {
            roads += 1;
        }
    }

    map
}
