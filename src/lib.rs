//! Shortest path search over caller supplied directed graphs
//!
//! The graph is only ever queried through [`DirectedGraph`], one vertex at a time.
//! [`PathFinder::search`] picks the algorithm by name: `"random"`, `"dijkstra"` or `"astar"`.

mod collections;
mod path_finder;

pub mod config;
pub mod errors;
pub mod graph;
pub mod result;
pub mod search;

pub use config::SearchConfig;
pub use errors::PathFinderError;
pub use graph::{DirectedEdge, DirectedGraph, FnGraph};
pub use path_finder::PathFinder;
pub use result::SearchResult;
pub use search::Algorithm;
