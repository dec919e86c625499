//! Input payload: a batch of graph descriptors with 1-based vertex labels.
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphError, VertexId, Weight};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub u: i64,
    pub v: i64,
    pub w: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    pub id: i64,
    pub n: usize,
    #[serde(default)]
    pub edges: Vec<EdgeDescriptor>,
}

/// Top-level input record. `graphs` may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphBatch {
    #[serde(default)]
    pub graphs: Option<Vec<GraphDescriptor>>,
}

impl GraphBatch {
    /// The only descriptor that gets processed.
    pub fn first(&self) -> Option<&GraphDescriptor> {
        self.graphs.as_deref().and_then(<[_]>::first)
    }
}

impl GraphDescriptor {
    /// Converts to an internal [`Graph`], checking `n` against the id range and
    /// every endpoint against `1..=n`.
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        if self.n > u32::MAX as usize {
            return Err(GraphError::TooManyVertices { vertices: self.n });
        }
        let mut graph = Graph::new(self.n);
        for (position, edge) in self.edges.iter().enumerate() {
            let endpoint = |label: i64| {
                VertexId::from_label(label, self.n).ok_or(GraphError::VertexOutOfRange {
                    edge: position,
                    label,
                    vertices: self.n,
                })
            };
            let source = endpoint(edge.u)?;
            let target = endpoint(edge.v)?;
            graph.add_edge(source, target, edge.w);
        }
        Ok(graph)
    }
}
