//! Kruskal 最小生成树构造。
use itertools::Itertools;
use log::{debug, info};

use crate::graph::GraphError;
use crate::graph::ids::EdgeId;
use crate::graph::structure::{Graph, Weight};
use crate::graph::union_find::UnionFind;

/// A set of tree edges (by id, in acceptance order) and their total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<EdgeId>,
    weight: Weight,
}

impl SpanningTree {
    /// Wraps `edges`, re-summing their weight from `graph`.
    pub fn from_edges(graph: &Graph, edges: Vec<EdgeId>) -> Result<Self, GraphError> {
        let weight = graph
            .total_weight(&edges)
            .ok_or(GraphError::WeightOverflow)?;
        Ok(Self { edges, weight })
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Position and id of the heaviest tree edge; the first one wins on ties.
    pub fn heaviest_edge(&self, graph: &Graph) -> Option<(usize, EdgeId)> {
        self.edges
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, id)| std::cmp::Reverse(graph.edge(id).weight))
    }
}

/// Builds a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are visited by ascending weight; equal weights keep input order.
/// Fails with [`GraphError::Disconnected`] when fewer than `n - 1` edges can
/// be accepted.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree, GraphError> {
    let required = graph.vertex_count().saturating_sub(1);
    let mut sets = UnionFind::new(graph.vertex_count());
    let mut accepted = Vec::with_capacity(required);
    let mut weight: Weight = 0;

    let order = graph
        .edges()
        .indices()
        .sorted_by_key(|&id| graph.edge(id).weight);

    for id in order {
        if accepted.len() == required {
            break;
        }
        let edge = graph.edge(id);
        if sets.union(edge.source, edge.target) {
            debug!("accept {:?} {}", id, edge);
            accepted.push(id);
            weight = weight
                .checked_add(edge.weight)
                .ok_or(GraphError::WeightOverflow)?;
        } else {
            debug!("reject {:?} {}: closes a cycle", id, edge);
        }
    }

    if accepted.len() < required {
        return Err(GraphError::Disconnected {
            accepted: accepted.len(),
            required,
        });
    }

    info!(
        "minimum spanning tree: {} edges, weight {}",
        accepted.len(),
        weight
    );
    Ok(SpanningTree {
        edges: accepted,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ids::VertexId;

    fn graph(n: usize, edges: &[(u32, u32, Weight)]) -> Graph {
        let mut graph = Graph::new(n);
        for &(u, v, w) in edges {
            graph.add_edge(VertexId::new(u), VertexId::new(v), w);
        }
        graph
    }

    #[test]
    fn picks_cheapest_edges() {
        let g = graph(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10), (0, 2, 5)]);
        let tree = minimum_spanning_tree(&g).unwrap();
        assert_eq!(tree.edges(), &[EdgeId::new(0), EdgeId::new(1), EdgeId::new(2)]);
        assert_eq!(tree.weight(), 6);
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let g = graph(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        let tree = minimum_spanning_tree(&g).unwrap();
        assert_eq!(tree.edges(), &[EdgeId::new(0), EdgeId::new(1)]);
    }

    #[test]
    fn parallel_edges_and_self_loops() {
        let g = graph(2, &[(0, 0, 0), (0, 1, 7), (1, 0, 3)]);
        let tree = minimum_spanning_tree(&g).unwrap();
        assert_eq!(tree.edges(), &[EdgeId::new(2)]);
        assert_eq!(tree.weight(), 3);
    }

    #[test]
    fn disconnected_graph_is_reported() {
        let g = graph(2, &[]);
        let err = minimum_spanning_tree(&g).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Disconnected {
                accepted: 0,
                required: 1
            }
        ));

        let g = graph(4, &[(0, 1, 1), (2, 3, 1)]);
        assert!(matches!(
            minimum_spanning_tree(&g),
            Err(GraphError::Disconnected {
                accepted: 2,
                required: 3
            })
        ));
    }

    #[test]
    fn single_vertex_has_empty_tree() {
        let tree = minimum_spanning_tree(&graph(1, &[])).unwrap();
        assert!(tree.edges().is_empty());
        assert_eq!(tree.weight(), 0);
    }

    #[test]
    fn heaviest_edge_prefers_first_occurrence() {
        let g = graph(4, &[(0, 1, 5), (1, 2, 5), (2, 3, 1)]);
        let tree = minimum_spanning_tree(&g).unwrap();
        // acceptance order: 2, 0, 1
        assert_eq!(tree.heaviest_edge(&g), Some((1, EdgeId::new(0))));
    }

    #[test]
    fn from_edges_resums_weight() {
        let g = graph(3, &[(0, 1, 4), (1, 2, 6)]);
        let tree = SpanningTree::from_edges(&g, vec![EdgeId::new(1), EdgeId::new(0)]).unwrap();
        assert_eq!(tree.weight(), 10);
        assert_eq!(tree.edges().len(), 2);
    }

    #[test]
    fn tree_weight_overflow_is_an_error() {
        let big = 1 << 62;
        let g = graph(3, &[(0, 1, big), (1, 2, big)]);
        assert_eq!(
            minimum_spanning_tree(&g).unwrap_err(),
            GraphError::WeightOverflow
        );
        assert_eq!(
            SpanningTree::from_edges(&g, vec![EdgeId::new(0), EdgeId::new(1)]).unwrap_err(),
            GraphError::WeightOverflow
        );
    }

    #[test]
    fn large_weights_that_fit_are_summed() {
        let g = graph(3, &[(0, 1, Weight::MAX - 1), (1, 2, 1)]);
        let tree = minimum_spanning_tree(&g).unwrap();
        assert_eq!(tree.weight(), Weight::MAX);
    }
}
