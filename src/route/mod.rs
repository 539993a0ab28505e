//! Shortest-path engine over a [`Graph`]

mod dijkstra;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::graph::Graph;


/// Type alias for the node map built during a search
/// N: Node label
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub(crate) type NodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Result of a single path query
/// The no-path cases collapse to the same empty sequence at the boundary,
/// but stay distinguishable for callers that want the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Ordered labels from start to end inclusive
    Found(Vec<String>),
    /// One or both endpoints are not nodes of the graph
    UnknownNode,
    /// Both endpoints exist but no chain of edges connects them
    Unreachable,
}

impl RouteOutcome {
    /// Collapse to the boundary contract: the path, or an empty sequence
    /// for any no-path outcome
    pub fn into_labels(self) -> Vec<String> {
        match self {
            RouteOutcome::Found(path) => path,
            RouteOutcome::UnknownNode | RouteOutcome::Unreachable => Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}


/// Shortest-path queries against an immutable graph
///
/// Holds a shared reference only; every query allocates its own frontier
/// and node map, so one graph can serve any number of concurrent routers
pub struct Router<'g> {
    graph: &'g Graph,
}

impl<'g> Router<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Router { graph }
    }

    /// Minimum-total-weight path between two station labels
    ///
    /// Both endpoints are validated against the graph first. A start equal
    /// to the end is the zero-length path `[start]`. Unreachability is
    /// decided by the search itself: if the end node was never settled its
    /// distance stayed at infinity, and no path is reconstructed
    pub fn find_path(&self, start: &str, end: &str) -> RouteOutcome {
        if !self.graph.has_node(start) || !self.graph.has_node(end) {
            tracing::debug!(start, end, "unknown endpoint");
            return RouteOutcome::UnknownNode;
        }

        if start == end {
            return RouteOutcome::Found(vec![start.to_string()]);
        }

        let (nodes, goal_index) = dijkstra::search(
            start,
            |node: &&str| self.graph.neighbors(node),
            |node: &&str| *node == end,
        );

        match goal_index {
            Some(goal_index) => {
                let path = shortest_path(&nodes, goal_index)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                tracing::debug!(start, end, "path found");
                RouteOutcome::Found(path)
            }
            None => {
                tracing::debug!(start, end, "unreachable");
                RouteOutcome::Unreachable
            }
        }
    }

    /// Total weight of the best path, if one exists
    pub fn distance(&self, start: &str, end: &str) -> Option<u64> {
        if !self.graph.has_node(start) || !self.graph.has_node(end) {
            return None;
        }

        if start == end {
            return Some(0);
        }

        let (nodes, goal_index) = dijkstra::search(
            start,
            |node: &&str| self.graph.neighbors(node),
            |node: &&str| *node == end,
        );

        goal_index
            .and_then(|index| nodes.get_index(index))
            .map(|(_, &(_, cost))| cost)
    }
}
