use crate::collections::FxIndexMap;
use crate::errors::GraphError;


/// Upper bound on node count accepted at build time
/// Queries are expected to complete in bounded, small time; oversized
/// inputs are rejected up front instead of degrading silently
pub const MAX_NODES: usize = 4096;

type AdjacencyMap = FxIndexMap<String, FxIndexMap<String, u64>>;


/// Immutable weighted adjacency structure
/// Maps a station label to its neighbors and edge weights. Built once via
/// [`GraphBuilder`], read-only afterwards, so a `&Graph` can be shared by
/// concurrent queries without locking.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: AdjacencyMap,
    edge_count: usize,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// True iff the label is a node of the graph
    pub fn has_node(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Neighbors of a node with their edge weights, in insertion order
    /// An absent label yields an empty iterator, indistinguishable from a
    /// zero-degree node - callers that care must check [`Graph::has_node`]
    pub fn neighbors<'a>(&'a self, label: &str) -> impl Iterator<Item = (&'a str, u64)> + 'a {
        self.adjacency
            .get(label)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, &weight)| (to.as_str(), weight)))
    }

    /// Weight of the directed edge from -> to, if present
    pub fn weight(&self, from: &str, to: &str) -> Option<u64> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Build a graph from an adjacency JSON document of the form
    /// `{"a": {"b": 5}, "b": {"a": 5}}`
    /// Key order in the document becomes node and neighbor insertion order.
    /// Runs through the same validation as [`GraphBuilder::build`]
    pub fn from_adjacency_json(json: &str) -> Result<Graph, GraphError> {
        let raw: FxIndexMap<String, FxIndexMap<String, i64>> = serde_json::from_str(json)?;

        let mut builder = Graph::builder();
        for (from, edges) in raw {
            builder = builder.node(from.clone());
            for (to, weight) in edges {
                builder = builder.edge(from.clone(), to, weight);
            }
        }
        builder.build()
    }

    /// Serialize the adjacency structure back to JSON, preserving order
    pub fn to_adjacency_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(&self.adjacency)?)
    }

    /// The fixed 9-station workshop topology
    ///
    /// The data is mostly symmetric but not entirely: `terminado` is a
    /// sink with no outgoing edges, `espera_repuestos` reaches
    /// `reparacion_compleja` at weight 1 while the reverse edge costs 15,
    /// and `pruebas -> diagnostico` (weight 5) has no reverse edge.
    /// Those asymmetries are part of the layout and are kept as-is.
    pub fn workshop() -> Graph {
        Graph::builder()
            .edge("recepcion", "diagnostico", 5)
            .edge("recepcion", "almacen", 10)
            .edge("recepcion", "espera", 2)
            .edge("diagnostico", "recepcion", 5)
            .edge("diagnostico", "reparacion_simple", 3)
            .edge("diagnostico", "reparacion_compleja", 7)
            .edge("diagnostico", "espera", 1)
            .edge("reparacion_simple", "diagnostico", 3)
            .edge("reparacion_simple", "pruebas", 4)
            .edge("reparacion_simple", "almacen", 8)
            .edge("reparacion_compleja", "diagnostico", 7)
            .edge("reparacion_compleja", "pruebas", 6)
            .edge("reparacion_compleja", "espera_repuestos", 15)
            .edge("pruebas", "reparacion_simple", 4)
            .edge("pruebas", "reparacion_compleja", 6)
            .edge("pruebas", "terminado", 3)
            .edge("pruebas", "diagnostico", 5)
            .edge("almacen", "recepcion", 10)
            .edge("almacen", "reparacion_simple", 8)
            .edge("espera_repuestos", "reparacion_compleja", 1)
            .edge("espera", "recepcion", 2)
            .edge("espera", "diagnostico", 1)
            .build()
            .expect("workshop topology is valid")
    }
}


/// One-time bulk load for [`Graph`]
/// Edges are collected as given and validated together in [`GraphBuilder::build`]:
/// weights must be non-negative, a directed edge may appear only once, and
/// the node count must stay under [`MAX_NODES`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<(String, String, i64)>,
}

impl GraphBuilder {
    /// Register a node with no edges
    /// Nodes named by [`GraphBuilder::edge`] are registered implicitly;
    /// this is only needed for isolated nodes
    pub fn node(mut self, label: impl Into<String>) -> Self {
        self.nodes.push(label.into());
        self
    }

    /// Add a directed edge
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    /// Add an edge in both directions with the same weight
    pub fn link(self, a: impl Into<String>, b: impl Into<String>, weight: i64) -> Self {
        let a = a.into();
        let b = b.into();
        self.edge(a.clone(), b.clone(), weight).edge(b, a, weight)
    }

    pub fn build(self) -> Result<Graph, GraphError> {
        let mut adjacency: AdjacencyMap = FxIndexMap::default();

        for label in self.nodes {
            adjacency.entry(label).or_default();
        }

        let mut edge_count = 0;
        for (from, to, weight) in self.edges {
            if weight < 0 {
                return Err(GraphError::NegativeWeight { from, to, weight });
            }

            // Both endpoints become nodes, from first so that a node's
            // position reflects where it first appears as a source
            adjacency.entry(from.clone()).or_default();
            adjacency.entry(to.clone()).or_default();

            let out = adjacency.get_mut(&from).unwrap();
            if out.insert(to.clone(), weight as u64).is_some() {
                return Err(GraphError::DuplicateEdge { from, to });
            }
            edge_count += 1;
        }

        if adjacency.len() > MAX_NODES {
            return Err(GraphError::TooLarge {
                nodes: adjacency.len(),
                limit: MAX_NODES,
            });
        }

        tracing::debug!(nodes = adjacency.len(), edges = edge_count, "graph built");

        Ok(Graph {
            adjacency,
            edge_count,
        })
    }
}
