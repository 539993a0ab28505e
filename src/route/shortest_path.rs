use super::NodeMap;

/// Construct the ordered path by walking parent links backward from the
/// goal node, then reversing
/// Only called with the index of a settled goal node, so the walk always
/// terminates at the start node's usize::MAX parent sentinel
pub(crate) fn shortest_path<N, C>(nodes: &NodeMap<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        match nodes.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => break,
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::FxIndexMap;

    #[test]
    fn walks_parent_links_back_to_start() {
        let mut nodes: NodeMap<&str, u64> = FxIndexMap::default();

        let a = nodes.insert_full("a", (usize::MAX, 0)).0;
        let b = nodes.insert_full("b", (a, 1)).0;
        let c = nodes.insert_full("c", (a, 3)).0;
        let d = nodes.insert_full("d", (c, 4)).0;

        assert_eq!(shortest_path(&nodes, d), vec!["a", "c", "d"]);
        assert_eq!(shortest_path(&nodes, b), vec!["a", "b"]);
    }

    #[test]
    fn start_node_alone_is_a_single_element_path() {
        let mut nodes: NodeMap<&str, u64> = FxIndexMap::default();
        let a = nodes.insert_full("a", (usize::MAX, 0)).0;

        assert_eq!(shortest_path(&nodes, a), vec!["a"]);
    }
}
