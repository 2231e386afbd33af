use crate::graph::DirectedGraph;
use crate::result::SearchResult;
use super::best_first::best_first;

use std::time::Instant;


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Same expansion as Dijkstra, but the frontier is sorted by f_cost = cost + h(n)
/// where h(n) is `DirectedGraph::guess_cost` towards the goal.
/// The returned path is optimal when the heuristic is admissible (never overestimates
/// the true cost to reach the goal) and consistent.
pub fn a_star<G>(graph: &G, start: G::Vertex, goal: G::Vertex) -> SearchResult<G::Vertex, G::Cost>
where
    G: DirectedGraph,
{
    let started = Instant::now();

    let exploration = best_first(graph, &start, &goal, |node, cost| {
        cost + graph.guess_cost(node, &goal)
    });
    let result = exploration.into_result(start, started);

    tracing::debug!(
        visited_nodes = result.visited_nodes(),
        success = result.success(),
        "a* search finished"
    );
    result
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FnGraph;
    use crate::search::dijkstra;
    use std::collections::HashMap;

    // Helper function to create a neighbor function from a graph
    // Assumes data stored as: HashMap<String, Vec<(String, u32)>>
    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| {
            graph.get(node).cloned().unwrap_or_default()
        }
    }

    fn path_of(nodes: &[&str]) -> Vec<String> {
        nodes.iter().map(|n| n.to_string()).collect()
    }

    /// A* algorithm test
    #[test]
    fn test_a_star() {
        // Diamond-shaped graph: A -> B -> D and A -> C -> D
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1), ("C".to_string(), 3)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 5)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);

        // Default zero heuristic makes A* behave like Dijkstra
        let fn_graph = FnGraph::new(create_neighbor_fn(&graph));

        let result = a_star(&fn_graph, "A".to_string(), "D".to_string());

        // The expected path is A -> C -> D (the cheapest path)
        assert_eq!(result.path(), Some(&path_of(&["A", "C", "D"])[..]));
        assert_eq!(result.cost(), Some(4));
    }

    #[test]
    fn test_a_star_handles_unreachable_goal() {
        // Create a graph with no path to the goal
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![]);
        graph.insert("D".to_string(), vec![]); // D is not connected

        let fn_graph = FnGraph::new(create_neighbor_fn(&graph));

        // Try to find a path from A to D (which doesn't exist)
        let result = a_star(&fn_graph, "A".to_string(), "D".to_string());

        assert!(!result.success());
        assert_eq!(result.path(), None);
        assert_eq!(result.visited_nodes(), 3);
    }

    #[test]
    fn test_a_star_with_cycle() {
        // Create a graph with a cycle: A -> B -> C -> A
        let mut graph = HashMap::new();

        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("A".to_string(), 1), ("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        let fn_graph = FnGraph::new(create_neighbor_fn(&graph));
        let result = a_star(&fn_graph, "A".to_string(), "D".to_string());

        assert_eq!(result.cost(), Some(4));
        assert_eq!(result.path(), Some(&path_of(&["A", "B", "C", "D"])[..]));
    }

    #[test]
    fn test_a_star_with_heuristic() {
        // Create a simple grid-like graph where nodes are represented as (x, y) coordinates
        // A(0,0) -> B(1,0) -> D(2,0)
        //   |
        //   v
        // C(0,1) ------> D(2,0)
        //
        // Both routes cost 2, the heuristic pulls the search along A -> B -> D

        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1), ("C".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        // Coordinates for each node
        let coords = HashMap::from([
            ("A".to_string(), (0i32, 0i32)),
            ("B".to_string(), (1i32, 0i32)),
            ("C".to_string(), (0i32, 1i32)),
            ("D".to_string(), (2i32, 0i32)),
        ]);

        // Manhattan distance heuristic
        let fn_graph = FnGraph::new(create_neighbor_fn(&graph))
            .with_heuristic(|node: &String, goal: &String| {
                let (nx, ny) = coords[node];
                let (gx, gy) = coords[goal];
                ((nx - gx).abs() + (ny - gy).abs()) as u32
            });

        let result = a_star(&fn_graph, "A".to_string(), "D".to_string());

        // The expected path is A -> B -> D (the path guided by heuristic)
        assert_eq!(result.path(), Some(&path_of(&["A", "B", "D"])[..]));
        assert_eq!(result.cost(), Some(2));
        // C is never expanded: its f_cost of 3 exceeds the goal's 2
        assert_eq!(result.visited_nodes(), 3);
    }

    #[test]
    fn test_a_star_matches_dijkstra_with_zero_heuristic() {
        // A -> B (1), B -> C (2), A -> C (5)
        let graph: HashMap<&str, Vec<(&str, f64)>> = HashMap::from([
            ("A", vec![("B", 1.0), ("C", 5.0)]),
            ("B", vec![("C", 2.0)]),
            ("C", vec![]),
        ]);
        let fn_graph = FnGraph::new(|node: &&str| graph.get(node).cloned().unwrap_or_default());

        let a_star_result = a_star(&fn_graph, "A", "C");
        let dijkstra_result = dijkstra(&fn_graph, "A", "C");

        assert_eq!(a_star_result.cost(), Some(3.0));
        assert_eq!(a_star_result.cost(), dijkstra_result.cost());
        assert_eq!(a_star_result.path(), dijkstra_result.path());
    }
}
