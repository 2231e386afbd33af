use crate::config::SearchConfig;
use crate::errors::PathFinderError;
use crate::graph::DirectedGraph;
use crate::result::SearchResult;
use crate::search::{self, Algorithm, RandomWalk};


/// Entry point for searches over one graph
/// Holds no state between calls, every search builds and drops its own frontier
pub struct PathFinder<G> {
    graph: G,
    config: SearchConfig,
}

impl<G: DirectedGraph> PathFinder<G> {

    pub fn new(graph: G) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: G, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from start to goal with the algorithm named "random", "dijkstra" or "astar"
    /// An unknown name fails before any search work is done.
    /// Not reaching the goal is reported through `SearchResult::success`, not as an error.
    pub fn search(&self, algorithm: &str, start: G::Vertex, goal: G::Vertex) -> Result<SearchResult<G::Vertex, G::Cost>, PathFinderError> {
        let algorithm: Algorithm = algorithm.parse()?;
        Ok(self.run(algorithm, start, goal))
    }

    /// Search with an already selected algorithm
    #[tracing::instrument(level = "debug", skip_all, fields(algorithm = %algorithm))]
    pub fn run(&self, algorithm: Algorithm, start: G::Vertex, goal: G::Vertex) -> SearchResult<G::Vertex, G::Cost> {
        match algorithm {
            Algorithm::RandomWalk => self.random_walk(start, goal),
            Algorithm::Dijkstra => self.dijkstra(start, goal),
            Algorithm::AStar => self.a_star(start, goal),
        }
    }

    /// Non-optimal baseline, see `RandomWalk`
    pub fn random_walk(&self, start: G::Vertex, goal: G::Vertex) -> SearchResult<G::Vertex, G::Cost> {
        RandomWalk::from_config(&self.config).walk(&self.graph, start, goal)
    }

    pub fn dijkstra(&self, start: G::Vertex, goal: G::Vertex) -> SearchResult<G::Vertex, G::Cost> {
        search::dijkstra(&self.graph, start, goal)
    }

    pub fn a_star(&self, start: G::Vertex, goal: G::Vertex) -> SearchResult<G::Vertex, G::Cost> {
        search::a_star(&self.graph, start, goal)
    }
}
