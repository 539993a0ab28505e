use crate::collections::FxIndexMap;
use super::NodeMap;

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Priority-ordered relaxation search (Dijkstra's algorithm)
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From the start node, expand the cheapest frontier node until `goal_fn`
/// fires or the frontier is exhausted
/// Returns the node map along with the index of the goal node if it was
/// settled - a `None` goal index is proof the goal is unreachable
pub(crate) fn search<N, C, IT, NN, G>(
    start: N,
    neighbors: NN,
    goal_fn: G,
) -> (NodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
{

    // Frontier of nodes to visit - reversed Ord on QueueEntry turns the
    // max-heap into a min-heap, so the cheapest node pops first
    let mut frontier: BinaryHeap<QueueEntry<C>> = BinaryHeap::new();

    // visited nodes - (parent_index, cost) per node, where parent_index is
    // the index of the parent node in the map and cost is the total from
    // the start; the start node's parent is usize::MAX
    let mut nodes: NodeMap<N, C> = FxIndexMap::default();

    let start_index = nodes.insert_full(start, (usize::MAX, Zero::zero())).0;
    frontier.push(QueueEntry {
        index: start_index,
        cost: Zero::zero(),
    });

    while let Some(QueueEntry { cost, index }) = frontier.pop() {

        // fetch current best cost for the node
        let (node, &(_, best)) = nodes.get_index(index).unwrap();

        // A cheaper route was recorded after this entry was pushed - the
        // entry is stale, skip it (this replaces a decrease-key operation)
        if cost > best {
            continue;
        }

        // Once popped a node's cost is final, so the goal can stop the
        // search early
        if goal_fn(node) {
            tracing::trace!(?node, ?cost, "goal settled");
            return (nodes, Some(index));
        }

        for (neighbor, edge_cost) in neighbors(node).into_iter() {

            let new_cost = edge_cost + best;

            // Relax: keep the neighbor only if this route improves on the
            // best known one. Ties keep the earlier route, which makes the
            // outcome deterministic under fixed neighbor iteration order
            let neighbor_index;
            match nodes.entry(neighbor) {
                Vacant(e) => {
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            frontier.push(QueueEntry {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    (nodes, None)
}


/// Frontier entry
/// - for ordering we only need the cost and a way to identify the node
#[derive(Debug)]
struct QueueEntry<T> {
    index: usize,
    cost: T,
}

impl<T: Ord> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for QueueEntry<T> {}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Diamond-shaped graph: a -> b -> d and a -> c -> d
    fn diamond() -> HashMap<&'static str, Vec<(&'static str, u64)>> {
        let mut graph = HashMap::new();
        graph.insert("a", vec![("b", 1), ("c", 3)]);
        graph.insert("b", vec![("d", 5)]);
        graph.insert("c", vec![("d", 1)]);
        graph.insert("d", vec![]);
        graph
    }

    fn neighbor_fn<'a>(
        graph: &'a HashMap<&'static str, Vec<(&'static str, u64)>>,
    ) -> impl Fn(&&'static str) -> Vec<(&'static str, u64)> + 'a {
        move |node| graph.get(node).cloned().unwrap_or_default()
    }

    #[test]
    fn settles_cheapest_costs() {
        let graph = diamond();
        let (nodes, goal_index) = search("a", neighbor_fn(&graph), |node| *node == "d");

        assert!(goal_index.is_some());

        let costs: HashMap<_, _> = nodes.iter().map(|(n, &(_, c))| (*n, c)).collect();
        assert_eq!(costs["a"], 0);
        assert_eq!(costs["b"], 1);
        assert_eq!(costs["c"], 3);
        assert_eq!(costs["d"], 4); // via a -> c -> d
    }

    #[test]
    fn handles_cycles() {
        let mut graph = HashMap::new();
        graph.insert("a", vec![("b", 1)]);
        graph.insert("b", vec![("c", 1)]);
        graph.insert("c", vec![("a", 1), ("d", 2)]);
        graph.insert("d", vec![]);

        let (nodes, goal_index) = search("a", neighbor_fn(&graph), |node| *node == "d");

        assert!(goal_index.is_some());
        let costs: HashMap<_, _> = nodes.iter().map(|(n, &(_, c))| (*n, c)).collect();
        assert_eq!(costs["d"], 4);
    }

    #[test]
    fn unreachable_goal_returns_none() {
        let mut graph = HashMap::new();
        graph.insert("a", vec![("b", 1)]);
        graph.insert("b", vec![]);
        graph.insert("d", vec![]); // d is not connected

        let (_, goal_index) = search("a", neighbor_fn(&graph), |node| *node == "d");
        assert_eq!(goal_index, None);
    }

    #[test]
    fn goal_stops_expansion() {
        // b -> d (cost 2) settles the goal before the expensive branch
        // through c is ever expanded
        let mut graph = HashMap::new();
        graph.insert("a", vec![("b", 1), ("c", 10)]);
        graph.insert("b", vec![("d", 1)]);
        graph.insert("c", vec![("e", 5)]);
        graph.insert("d", vec![]);
        graph.insert("e", vec![]);

        let (nodes, goal_index) = search("a", neighbor_fn(&graph), |node| *node == "d");

        assert!(goal_index.is_some());
        assert!(nodes.contains_key("c")); // relaxed from a
        assert!(!nodes.contains_key("e")); // behind c, never expanded
    }

    #[test]
    fn parent_links_trace_the_cheapest_route() {
        let graph = diamond();
        let (nodes, goal_index) = search("a", neighbor_fn(&graph), |node| *node == "d");

        // d's parent chain must run d -> c -> a
        let mut index = goal_index.unwrap();
        let mut chain = Vec::new();
        while index != usize::MAX {
            let (node, &(parent, _)) = nodes.get_index(index).unwrap();
            chain.push(*node);
            index = parent;
        }
        assert_eq!(chain, vec!["d", "c", "a"]);
    }
}
