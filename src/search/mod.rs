pub mod a_star;
pub mod dijkstra;
pub mod random_walk;
mod best_first;
mod shortest_path;

pub use a_star::a_star;
pub use dijkstra::dijkstra;
pub use random_walk::RandomWalk;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::PathFinderError;

use std::{fmt, str::FromStr};

/// Type alias for the node map used by the best-first searches
/// N: Node - vertex of the graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the best known cost to reach this node from the start
pub(crate) type SearchNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Search strategies selectable by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    RandomWalk, // "random"
    Dijkstra,   // "dijkstra"
    AStar,      // "astar"
}

impl Algorithm {

    pub const ALL: [Algorithm; 3] = [Algorithm::RandomWalk, Algorithm::Dijkstra, Algorithm::AStar];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::RandomWalk => "random",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl FromStr for Algorithm {
    type Err = PathFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Algorithm::RandomWalk),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" => Ok(Algorithm::AStar),
            other => Err(PathFinderError::InvalidArgument(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
