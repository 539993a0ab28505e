use thiserror::Error;


/// Graph construction failures
/// All validation happens at build time - a graph that builds successfully
/// cannot fail during a query
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: i64,
    },

    #[error("duplicate edge {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("graph has {nodes} nodes, limit is {limit}")]
    TooLarge { nodes: usize, limit: usize },

    #[error("invalid adjacency JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
