//! 计算流程：Kruskal → 删除最重边 → 跨割替换 → 结果汇总。
use log::{info, warn};
use thiserror::Error;

use crate::graph::{
    EdgeId, Graph, GraphError, SpanningTree, TreeCut, cheapest_crossing_edge, cut_heaviest_edge,
    minimum_spanning_tree,
};
use crate::input::GraphBatch;
use crate::report::{RepairReport, component_labels, edge_records};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepairError {
    #[error("No graphs in input")]
    EmptyInput,
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairOptions {
    /// Keep the removed edge out of the replacement search.
    pub exclude_removed_edge: bool,
}

/// Every intermediate of one run, in terms of edge ids of the source graph.
#[derive(Debug, Clone)]
pub struct TreeRepair {
    pub initial: SpanningTree,
    pub cut: TreeCut,
    pub replacement: Option<EdgeId>,
    pub repaired: SpanningTree,
}

impl TreeRepair {
    pub fn compute(graph: &Graph, options: RepairOptions) -> Result<Self, GraphError> {
        let initial = minimum_spanning_tree(graph)?;
        let cut = cut_heaviest_edge(graph, &initial)?;

        let skip = options.exclude_removed_edge.then_some(cut.removed);
        let replacement = cheapest_crossing_edge(graph, &cut.partition, skip);
        if replacement.is_none() {
            warn!(
                "no edge reconnects the tree after removing {}",
                graph.edge(cut.removed)
            );
        } else if replacement == Some(cut.removed) {
            info!("removed edge is its own cheapest replacement");
        }

        let mut edges = cut.remaining.clone();
        edges.extend(replacement);
        let repaired = SpanningTree::from_edges(graph, edges)?;
        debug_assert_eq!(
            i128::from(repaired.weight()),
            i128::from(initial.weight()) - i128::from(graph.edge(cut.removed).weight)
                + replacement.map_or(0, |id| i128::from(graph.edge(id).weight))
        );
        info!("repaired tree weight {}", repaired.weight());

        Ok(TreeRepair {
            initial,
            cut,
            replacement,
            repaired,
        })
    }

    pub fn report(&self, graph: &Graph, graph_id: i64) -> RepairReport {
        RepairReport {
            graph_id,
            initial_mst_edges: edge_records(graph, self.initial.edges()),
            initial_mst_weight: self.initial.weight(),
            removed_edge: graph.edge(self.cut.removed).into(),
            components: component_labels(self.cut.partition.members()),
            replacement_edge: self.replacement.map(|id| graph.edge(id).into()),
            new_mst_edges: edge_records(graph, self.repaired.edges()),
            new_mst_weight: self.repaired.weight(),
        }
    }
}

/// A completed run over the first graph of a batch.
#[derive(Debug, Clone)]
pub struct RepairRun {
    pub graph_id: i64,
    pub graph: Graph,
    pub repair: TreeRepair,
}

impl RepairRun {
    pub fn report(&self) -> RepairReport {
        self.repair.report(&self.graph, self.graph_id)
    }
}

/// Runs the whole computation on the first graph of `batch`; the rest are ignored.
pub fn repair_first(batch: &GraphBatch, options: RepairOptions) -> Result<RepairRun, RepairError> {
    let descriptor = batch.first().ok_or(RepairError::EmptyInput)?;
    let extra = batch.graphs.as_ref().map_or(0, |g| g.len() - 1);
    if extra > 0 {
        info!("ignoring {} graph(s) after the first", extra);
    }
    info!(
        "graph {}: {} vertices, {} edges",
        descriptor.id,
        descriptor.n,
        descriptor.edges.len()
    );

    let graph = descriptor.to_graph()?;
    let repair = TreeRepair::compute(&graph, options)?;
    Ok(RepairRun {
        graph_id: descriptor.id,
        graph,
        repair,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{EdgeDescriptor, GraphDescriptor};
    use crate::report::EdgeRecord;

    fn batch(n: usize, edges: &[(i64, i64, i64)]) -> GraphBatch {
        GraphBatch {
            graphs: Some(vec![GraphDescriptor {
                id: 42,
                n,
                edges: edges
                    .iter()
                    .map(|&(u, v, w)| EdgeDescriptor { u, v, w })
                    .collect(),
            }]),
        }
    }

    fn rec(u: usize, v: usize, w: i64) -> EdgeRecord {
        EdgeRecord { u, v, w }
    }

    #[test]
    fn removed_edge_comes_back_as_its_own_replacement() {
        let input = batch(4, &[(1, 2, 1), (2, 3, 2), (3, 4, 3), (1, 4, 10), (1, 3, 5)]);
        let report = repair_first(&input, RepairOptions::default())
            .unwrap()
            .report();
        assert_eq!(report.graph_id, 42);
        assert_eq!(
            report.initial_mst_edges,
            vec![rec(1, 2, 1), rec(2, 3, 2), rec(3, 4, 3)]
        );
        assert_eq!(report.initial_mst_weight, 6);
        assert_eq!(report.removed_edge, rec(3, 4, 3));
        assert_eq!(report.components, vec![vec![1, 2, 3], vec![4]]);
        assert_eq!(report.replacement_edge, Some(rec(3, 4, 3)));
        assert_eq!(
            report.new_mst_edges,
            vec![rec(1, 2, 1), rec(2, 3, 2), rec(3, 4, 3)]
        );
        assert_eq!(report.new_mst_weight, 6);
    }

    #[test]
    fn excluding_removed_edge_picks_next_cheapest() {
        let input = batch(4, &[(1, 2, 1), (2, 3, 2), (3, 4, 3), (1, 4, 10), (1, 3, 5)]);
        let options = RepairOptions {
            exclude_removed_edge: true,
        };
        let report = repair_first(&input, options).unwrap().report();
        assert_eq!(report.replacement_edge, Some(rec(1, 4, 10)));
        assert_eq!(report.new_mst_weight, 13);
    }

    #[test]
    fn missing_replacement_leaves_a_forest() {
        let input = batch(2, &[(1, 2, 3)]);
        let options = RepairOptions {
            exclude_removed_edge: true,
        };
        let report = repair_first(&input, options).unwrap().report();
        assert_eq!(report.replacement_edge, None);
        assert!(report.new_mst_edges.is_empty());
        assert_eq!(report.new_mst_weight, 0);
    }

    #[test]
    fn empty_batch_is_reported() {
        let err = repair_first(&GraphBatch::default(), RepairOptions::default()).unwrap_err();
        assert_eq!(err, RepairError::EmptyInput);
        let empty = GraphBatch {
            graphs: Some(Vec::new()),
        };
        assert_eq!(
            repair_first(&empty, RepairOptions::default()).unwrap_err(),
            RepairError::EmptyInput
        );
    }

    #[test]
    fn two_vertices_without_edges_are_disconnected() {
        let err = repair_first(&batch(2, &[]), RepairOptions::default()).unwrap_err();
        assert_eq!(
            err,
            RepairError::Graph(GraphError::Disconnected {
                accepted: 0,
                required: 1
            })
        );
        assert!(err.to_string().starts_with("Graph is not connected"));
    }

    #[test]
    fn heavy_tree_reports_weight_overflow() {
        let big = 1 << 62;
        let err = repair_first(&batch(3, &[(1, 2, big), (2, 3, big)]), RepairOptions::default())
            .unwrap_err();
        assert_eq!(err, RepairError::Graph(GraphError::WeightOverflow));
    }

    #[test]
    fn trivial_graphs_have_no_edge_to_remove() {
        // n = 0 and n = 1 both build an empty tree, then fail at the cut step
        for n in [0, 1] {
            let err = repair_first(&batch(n, &[]), RepairOptions::default()).unwrap_err();
            assert_eq!(
                err,
                RepairError::Graph(GraphError::NoTreeEdge { vertices: n })
            );
        }
    }

    #[test]
    fn only_the_first_graph_is_processed() {
        let mut input = batch(2, &[(1, 2, 3)]);
        if let Some(graphs) = input.graphs.as_mut() {
            graphs.push(GraphDescriptor {
                id: 99,
                n: 5,
                edges: Vec::new(),
            });
        }
        let run = repair_first(&input, RepairOptions::default()).unwrap();
        assert_eq!(run.graph_id, 42);
    }
}
