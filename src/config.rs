
/// Tuning parameters for a `PathFinder`
/// Only the random walk has knobs, Dijkstra and A* are parameter free
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Seed for the random walk, `None` seeds from the OS on every call
    pub seed: Option<u64>,
    /// Max number of edges the random walk may take before giving up
    /// `None` walks until the goal or a dead end is reached
    pub max_walk_steps: Option<usize>,
}

impl SearchConfig {

    pub fn new() -> Self {
        Self::default()
    }

    /// Make random walks reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Bound the random walk, needed on cyclic graphs where the goal may never be hit
    pub fn with_max_walk_steps(mut self, max_walk_steps: usize) -> Self {
        self.max_walk_steps = Some(max_walk_steps);
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded_and_unseeded() {
        let config = SearchConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_walk_steps, None);
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new().with_seed(7).with_max_walk_steps(100);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_walk_steps, Some(100));
    }
}
