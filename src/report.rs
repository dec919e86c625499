use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::{Edge, EdgeId, Graph, VertexId, Weight};

/// An edge as written to the output payload, with 1-based endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: usize,
    pub v: usize,
    pub w: Weight,
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        EdgeRecord {
            u: edge.source.label(),
            v: edge.target.label(),
            w: edge.weight,
        }
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.u, self.v, self.w)
    }
}

/// Result of one repair run: the original tree, what was cut, and what replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairReport {
    pub graph_id: i64,
    pub initial_mst_edges: Vec<EdgeRecord>,
    pub initial_mst_weight: Weight,
    pub removed_edge: EdgeRecord,
    pub components: Vec<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_edge: Option<EdgeRecord>,
    pub new_mst_edges: Vec<EdgeRecord>,
    pub new_mst_weight: Weight,
}

pub(crate) fn edge_records(graph: &Graph, edges: &[EdgeId]) -> Vec<EdgeRecord> {
    edges.iter().map(|&id| graph.edge(id).into()).collect()
}

pub(crate) fn component_labels(members: Vec<Vec<VertexId>>) -> Vec<Vec<usize>> {
    members
        .into_iter()
        .map(|component| component.into_iter().map(VertexId::label).collect())
        .collect()
}

impl fmt::Display for RepairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph {}:", self.graph_id)?;
        writeln!(
            f,
            "  initial MST (weight {}): {}",
            self.initial_mst_weight,
            self.initial_mst_edges.iter().join(" ")
        )?;
        writeln!(f, "  removed: {}", self.removed_edge)?;
        let components = self
            .components
            .iter()
            .map(|c| format!("{{{}}}", c.iter().join(", ")))
            .join(" | ");
        writeln!(f, "  components: {}", components)?;
        match &self.replacement_edge {
            Some(edge) => writeln!(f, "  replacement: {}", edge)?,
            None => writeln!(f, "  replacement: none")?,
        }
        write!(
            f,
            "  new MST (weight {}): {}",
            self.new_mst_weight,
            self.new_mst_edges.iter().join(" ")
        )
    }
}
