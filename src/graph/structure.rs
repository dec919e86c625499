//! 图的静态结构：顶点、带权无向边与只读图。
use std::fmt;

use crate::graph::ids::{EdgeId, VertexId};
use crate::graph::index_vec::{Idx, IndexVec};

pub type Weight = i64;

/// An undirected weighted edge. Endpoint order carries no meaning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.weight)
    }
}

/// A fixed vertex set plus the edge list in input order.
///
/// `EdgeId`s are positions in that list, so two parallel edges with the same
/// weight stay distinguishable everywhere downstream.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: IndexVec<EdgeId, Edge>,
}

impl Graph {
    /// Vertex ids are `u32`, so `vertex_count` must not exceed `u32::MAX`.
    pub fn new(vertex_count: usize) -> Self {
        assert!(
            vertex_count <= u32::MAX as usize,
            "{vertex_count} vertices do not fit in a vertex id"
        );
        Self {
            vertex_count,
            edges: IndexVec::new(),
        }
    }

    /// Appends an edge. Endpoints must be below `vertex_count`.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: Weight) -> EdgeId {
        assert!(
            source.index() < self.vertex_count && target.index() < self.vertex_count,
            "edge ({source:?}, {target:?}) outside of {} vertices",
            self.vertex_count
        );
        self.edges.push(Edge::new(source, target, weight))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.vertex_count).map(VertexId::from_usize)
    }

    pub fn edges(&self) -> &IndexVec<EdgeId, Edge> {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// Sums the weights of the given edges, `None` on overflow.
    pub fn total_weight(&self, edges: &[EdgeId]) -> Option<Weight> {
        edges
            .iter()
            .try_fold(0 as Weight, |acc, &id| acc.checked_add(self.edges[id].weight))
    }

    /// Builds adjacency lists over a subset of the edges.
    pub fn adjacency(&self, edges: &[EdgeId]) -> IndexVec<VertexId, Vec<VertexId>> {
        let mut adj = IndexVec::from_elem_n(Vec::new(), self.vertex_count);
        for &id in edges {
            let (u, v) = self.edges[id].endpoints();
            adj[u].push(v);
            adj[v].push(u);
        }
        adj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(idx: u32) -> VertexId {
        VertexId::new(idx)
    }

    #[test]
    fn add_edge_assigns_positions() {
        let mut graph = Graph::new(3);
        let a = graph.add_edge(v(0), v(1), 4);
        let b = graph.add_edge(v(0), v(1), 4);
        assert_ne!(a, b);
        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.edge(b).weight, 4);
        assert_eq!(graph.total_weight(&[a, b]), Some(8));
        let c = graph.add_edge(v(1), v(2), Weight::MAX);
        assert_eq!(graph.total_weight(&[a, c]), None);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let mut graph = Graph::new(3);
        let a = graph.add_edge(v(0), v(1), 1);
        let _ = graph.add_edge(v(1), v(2), 1);
        let adj = graph.adjacency(&[a]);
        assert_eq!(adj[v(0)], vec![v(1)]);
        assert_eq!(adj[v(1)], vec![v(0)]);
        assert!(adj[v(2)].is_empty());
    }

    #[test]
    #[should_panic]
    fn add_edge_rejects_unknown_vertex() {
        let mut graph = Graph::new(2);
        graph.add_edge(v(0), v(2), 1);
    }

    #[test]
    fn edge_displays_labels() {
        let edge = Edge::new(v(0), v(3), 7);
        assert_eq!(edge.to_string(), "(1, 4, 7)");
    }
}
