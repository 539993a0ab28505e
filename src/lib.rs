//! Shortest-path routing between the stations of a service workshop
//!
//! A [`Graph`] is an immutable weighted adjacency structure over string
//! labels, built once through [`GraphBuilder`] (or from adjacency JSON)
//! and shared read-only by any number of queries. A [`Router`] answers
//! minimum-total-weight path queries over it with a priority-ordered
//! relaxation search and reports the result as a [`RouteOutcome`].
//!
//! The crate-level helpers expose the boundary contract: an ordered
//! sequence of labels from start to end, or an empty sequence when either
//! label is unknown or no path exists.
//!
//! ```
//! use workpath::{Graph, compute_optimal_path};
//!
//! let graph = Graph::workshop();
//! let path = compute_optimal_path(&graph, "recepcion", "terminado");
//! assert_eq!(path.first().map(String::as_str), Some("recepcion"));
//!
//! // unknown labels and unreachable pairs are the empty sequence
//! assert!(compute_optimal_path(&graph, "recepcion", "nonexistent").is_empty());
//! ```

mod collections;

pub mod errors;
pub mod graph;
pub mod route;

pub use errors::GraphError;
pub use graph::{Graph, GraphBuilder, MAX_NODES};
pub use route::{RouteOutcome, Router};


/// Shortest path between two station labels, as an owned sequence
/// Empty when either label is unknown or the end is unreachable; use
/// [`Router::find_path`] directly to tell those cases apart
pub fn compute_optimal_path(graph: &Graph, start: &str, end: &str) -> Vec<String> {
    Router::new(graph).find_path(start, end).into_labels()
}

/// JSON form of [`compute_optimal_path`]: an array of labels such as
/// `["recepcion","diagnostico"]`, or `[]` for any no-path outcome
pub fn compute_optimal_path_json(graph: &Graph, start: &str, end: &str) -> String {
    let labels = compute_optimal_path(graph, start, end);
    serde_json::to_string(&labels).expect("label array serializes")
}
