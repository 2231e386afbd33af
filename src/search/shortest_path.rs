use super::SearchNodeMap;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: SearchNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &SearchNodeMap<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start, the start node has parent usize::MAX
    while let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
        path.push(node.clone());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
