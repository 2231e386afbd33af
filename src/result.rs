use std::{fmt, time::{Duration, Instant}};


/// Outcome of one search call
/// A failed search has no goal, cost or path, only the visit count and timing
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<V, C> {
    success: bool,
    start: V,
    goal: Option<V>,
    cost: Option<C>,
    path: Option<Vec<V>>,
    visited_nodes: usize,
    elapsed: Duration,
}

impl<V, C: Copy> SearchResult<V, C> {

    /// Successful search, elapsed time runs from `started` until now
    pub(crate) fn found(start: V, goal: V, cost: C, path: Vec<V>, visited_nodes: usize, started: Instant) -> Self {
        Self {
            success: true,
            start,
            goal: Some(goal),
            cost: Some(cost),
            path: Some(path),
            visited_nodes,
            elapsed: started.elapsed(),
        }
    }

    /// Goal was not reached
    pub(crate) fn not_found(start: V, visited_nodes: usize, started: Instant) -> Self {
        Self {
            success: false,
            start,
            goal: None,
            cost: None,
            path: None,
            visited_nodes,
            elapsed: started.elapsed(),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    pub fn goal(&self) -> Option<&V> {
        self.goal.as_ref()
    }

    /// Total path cost, `None` when no path was found
    pub fn cost(&self) -> Option<C> {
        self.cost
    }

    /// Vertices from start to goal, both included
    pub fn path(&self) -> Option<&[V]> {
        self.path.as_deref()
    }

    pub fn into_path(self) -> Option<Vec<V>> {
        self.path
    }

    /// Number of vertices expanded (or steps taken by the random walk)
    pub fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl<V: fmt::Display, C: fmt::Display> fmt::Display for SearchResult<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visited nodes: {}", self.visited_nodes)?;
        writeln!(f, "Elapsed time: {:.1} seconds", self.elapsed.as_secs_f64())?;

        match (&self.goal, &self.cost, &self.path) {
            (Some(goal), Some(cost), Some(path)) if self.success => {
                writeln!(f, "Total cost from {} -> {}: {}", self.start, goal, cost)?;
                write!(f, "Path: ")?;
                for (i, v) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
            _ => write!(f, "No path found from {}", self.start),
        }
    }
}
