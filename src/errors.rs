use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathFinderError {
    /// Search algorithm name is not one of "random", "dijkstra", "astar"
    #[error("Unknown search algorithm: {0}")]
    InvalidArgument(String),
}
