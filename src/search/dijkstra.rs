use std::time::Instant;

use log::{debug, trace};

use super::collections::{
    dijkstra_data::{DijkstraData, DijkstraDataVec},
    vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
    vertex_expanded_data::{VertexExpandedData, VertexExpandedDataBitSet},
};
use crate::graphs::{Distance, Graph, VertexId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Completed,
    DeadlineExceeded,
}

/// Settles every vertex reachable from `source`.
///
/// Relaxation is non-strict: a tail that reaches a head with a distance equal
/// to the current one becomes its new predecessor. Edges leading back into
/// `source` and edges into already settled vertices are never relaxed.
///
/// If `deadline` passes before the queue runs dry the search stops and the
/// data holds a partial result.
pub fn dijkstra_single_source(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: VertexId,
    deadline: Option<Instant>,
) -> SearchOutcome {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    let mut settled = 0u32;
    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        settled += 1;

        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            debug!("search from {} aborted after {} settled vertices", source, settled);
            return SearchOutcome::DeadlineExceeded;
        }

        let distance_tail = data.get_distance(tail);

        for edge in graph.out_edges(tail) {
            if edge.head() == source || expanded.is_expanded(edge.head()) {
                continue;
            }

            let current_distance_head = data.get_distance(edge.head());
            let alternative_distance_head = distance_tail + Distance::from(edge.weight());
            if alternative_distance_head <= current_distance_head {
                trace!(
                    "relaxed {} -> {} to {}",
                    tail,
                    edge.head(),
                    alternative_distance_head
                );
                data.set_distance(edge.head(), alternative_distance_head);
                data.set_predecessor(edge.head(), tail);
                queue.insert(edge.head(), alternative_distance_head);
            }
        }
    }

    debug!("search from {} settled {} vertices", source, settled);
    SearchOutcome::Completed
}

/// Runs a complete search from `source` on freshly allocated collections.
pub fn single_source(graph: &dyn Graph, source: VertexId) -> DijkstraDataVec {
    let (data, _) = single_source_until(graph, source, None);
    data
}

pub fn single_source_until(
    graph: &dyn Graph,
    source: VertexId,
    deadline: Option<Instant>,
) -> (DijkstraDataVec, SearchOutcome) {
    let number_of_vertices = graph.number_of_vertices();
    let mut data = DijkstraDataVec::new(number_of_vertices);
    let mut expanded = VertexExpandedDataBitSet::new(number_of_vertices);
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    let outcome = dijkstra_single_source(
        graph,
        &mut data,
        &mut expanded,
        &mut queue,
        source,
        deadline,
    );

    (data, outcome)
}
