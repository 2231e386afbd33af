use crate::config::SearchConfig;
use crate::graph::DirectedGraph;
use crate::result::SearchResult;

use std::time::Instant;
use num_traits::Zero;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};


/// Random walk baseline
/// Follows a uniformly chosen outgoing edge of the current node until the goal
/// or a dead end is hit. Paths are neither optimal nor guaranteed to exist on
/// cyclic graphs, so a step limit can be set.
pub struct RandomWalk {
    rng: StdRng,
    max_steps: Option<usize>, // max number of edges taken before giving up
}

impl RandomWalk {

    /// seed: fixed seed for reproducible walks, None seeds from the OS
    pub fn new(seed: Option<u64>, max_steps: Option<usize>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, max_steps }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.seed, config.max_walk_steps)
    }

    /// Walk from start until the goal is reached
    /// Every node stepped on counts as visited, revisits included
    pub fn walk<G>(&mut self, graph: &G, start: G::Vertex, goal: G::Vertex) -> SearchResult<G::Vertex, G::Cost>
    where
        G: DirectedGraph,
    {
        let started = Instant::now();

        let mut visited_nodes = 0;
        let mut cost: G::Cost = Zero::zero();
        let mut path = vec![start.clone()];
        let mut current = start.clone();

        loop {
            visited_nodes += 1;

            if current == goal {
                tracing::debug!(visited_nodes, success = true, "random walk finished");
                return SearchResult::found(start, current, cost, path, visited_nodes, started);
            }

            let steps = path.len() - 1;
            if self.max_steps.is_some_and(|max_steps| steps >= max_steps) {
                tracing::trace!(steps, "random walk hit step limit");
                break;
            }

            let edges = graph.outgoing_edges(&current);
            let Some(edge) = edges.choose(&mut self.rng) else {
                tracing::trace!(node = ?current, "random walk hit dead end");
                break;
            };

            cost = cost + edge.weight;
            current = edge.to.clone();
            path.push(current.clone());
        }

        tracing::debug!(visited_nodes, success = false, "random walk finished");
        SearchResult::not_found(start, visited_nodes, started)
    }
}
