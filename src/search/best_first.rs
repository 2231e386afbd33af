use crate::collections::FxHashSet;
use crate::graph::{DirectedEdge, DirectedGraph};
use crate::result::SearchResult;
use super::{shortest_path, SearchNodeMap};

use std::{collections::BinaryHeap, cmp::Ordering, time::Instant};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Entry on the frontier
/// - for ordering we only need the priority and a way to identify the node
/// - priority is the cost from start for Dijkstra, cost + h(n) for A*
#[derive(Debug)]
struct FrontierEntry<C> {
    index: usize, // index in the node map
    priority: C,
}

impl<C: PartialOrd> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the biggest entry, flip so the cheapest comes first
        // NaN priorities compare equal rather than panicking
        other.priority.partial_cmp(&self.priority).unwrap_or(Ordering::Equal)
    }
}
impl<C: PartialOrd> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}
impl<C: PartialEq> Eq for FrontierEntry<C> {}


/// State left behind by a best-first traversal
pub(crate) struct Exploration<N, C> {
    pub node_map: SearchNodeMap<N, C>,
    pub goal_index: Option<usize>,
    pub visited_nodes: usize,
}

impl<N: Clone, C: Copy> Exploration<N, C> {

    /// Turn the traversal into a search result, rebuilding the path if the goal was reached
    pub fn into_result(self, start: N, started: Instant) -> SearchResult<N, C> {
        let goal = self.goal_index.and_then(|index| {
            self.node_map
                .get_index(index)
                .map(|(goal, &(_, cost))| (index, goal.clone(), cost))
        });

        match goal {
            Some((goal_index, goal, cost)) => {
                let path = shortest_path(&self.node_map, goal_index);
                SearchResult::found(start, goal, cost, path, self.visited_nodes, started)
            }
            None => SearchResult::not_found(start, self.visited_nodes, started),
        }
    }
}


/// Traverses the graph cheapest-priority first until the goal is closed or the frontier runs dry
/// priority_fn: (node, cost from start) -> priority on the frontier
///
/// Stale frontier entries are skipped by checking the closed set after each pop,
/// only the first pop of a node counts as a visit.
pub(crate) fn best_first<G, P>(graph: &G, start: &G::Vertex, goal: &G::Vertex, priority_fn: P) -> Exploration<G::Vertex, G::Cost>
where
    G: DirectedGraph,
    P: Fn(&G::Vertex, G::Cost) -> G::Cost,
{
    let mut frontier: BinaryHeap<FrontierEntry<G::Cost>> = BinaryHeap::new();

    // Discovered nodes with their (parent_index, best cost)
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut node_map: SearchNodeMap<G::Vertex, G::Cost> = SearchNodeMap::default();

    // Indices of nodes whose cost is final
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut visited_nodes = 0;

    let start_index = node_map.insert_full(start.clone(), (usize::MAX, Zero::zero())).0;
    frontier.push(FrontierEntry {
        index: start_index,
        priority: priority_fn(start, Zero::zero()),
    });

    while let Some(FrontierEntry { index, .. }) = frontier.pop() {

        // already expanded through a cheaper entry
        if !closed.insert(index) {
            continue;
        }
        visited_nodes += 1;

        let Some((node, &(_, cost))) = node_map.get_index(index) else {
            continue;
        };

        if node == goal {
            return Exploration { node_map, goal_index: Some(index), visited_nodes };
        }

        for DirectedEdge { to, weight, .. } in graph.outgoing_edges(node) {

            // new cost to reach the neighbor = edge cost + node cost
            let new_cost = cost + weight;

            let neighbor_index;
            let priority;

            match node_map.entry(to) {
                Vacant(e) => {
                    // first time we're seeing this neighbor
                    neighbor_index = e.index();
                    priority = priority_fn(e.key(), new_cost);
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    // closed nodes are final, even if a negative weight claims otherwise
                    if closed.contains(&e.index()) || new_cost.partial_cmp(&e.get().1) != Some(Ordering::Less) {
                        continue;
                    }
                    neighbor_index = e.index();
                    priority = priority_fn(e.key(), new_cost);
                    e.insert((index, new_cost));
                }
            }

            // duplicates are fine, the closed set filters them on pop
            frontier.push(FrontierEntry {
                index: neighbor_index,
                priority,
            });
        }
    }

    Exploration { node_map, goal_index: None, visited_nodes }
}
