use crate::graph::DirectedGraph;
use crate::result::SearchResult;
use super::best_first::best_first;

use std::time::Instant;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start node, expand the cheapest known node until the goal is closed.
/// Optimal as long as every edge weight is non-negative.
pub fn dijkstra<G>(graph: &G, start: G::Vertex, goal: G::Vertex) -> SearchResult<G::Vertex, G::Cost>
where
    G: DirectedGraph,
{
    let started = Instant::now();

    // frontier ordered purely by cost from the start
    let exploration = best_first(graph, &start, &goal, |_, cost| cost);
    let result = exploration.into_result(start, started);

    tracing::debug!(
        visited_nodes = result.visited_nodes(),
        success = result.success(),
        "dijkstra search finished"
    );
    result
}
