//! 删除生成树最重边并用 BFS 重新划分连通分量。
use std::collections::VecDeque;

use log::{debug, info};

use crate::graph::GraphError;
use crate::graph::ids::{ComponentId, EdgeId, VertexId};
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::kruskal::SpanningTree;
use crate::graph::structure::{Edge, Graph};

/// Vertex → component labelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    labels: IndexVec<VertexId, ComponentId>,
    count: usize,
}

impl Partition {
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the endpoints of `edge` lie in different components.
    pub fn crosses(&self, edge: &Edge) -> bool {
        self.labels[edge.source] != self.labels[edge.target]
    }

    /// Vertices of each component, both levels in increasing order.
    pub fn members(&self) -> Vec<Vec<VertexId>> {
        let mut members = vec![Vec::new(); self.count];
        for (vertex, component) in self.labels.iter_enumerated() {
            members[component.index()].push(vertex);
        }
        members
    }
}

/// Labels connected components over `edges` by breadth-first search.
///
/// Components are numbered in order of their smallest vertex.
pub fn components(graph: &Graph, edges: &[EdgeId]) -> Partition {
    let adj = graph.adjacency(edges);
    let mut labels: IndexVec<VertexId, Option<ComponentId>> =
        IndexVec::from_elem_n(None, graph.vertex_count());
    let mut count = 0;
    let mut queue = VecDeque::new();

    for start in graph.vertices() {
        if labels[start].is_some() {
            continue;
        }
        let component = ComponentId::from_usize(count);
        count += 1;
        labels[start] = Some(component);
        queue.push_back(start);
        let mut size = 0;
        while let Some(vertex) = queue.pop_front() {
            size += 1;
            for &next in &adj[vertex] {
                if labels[next].is_none() {
                    labels[next] = Some(component);
                    queue.push_back(next);
                }
            }
        }
        debug!("component {:?} from {}: {} vertices", component, start, size);
    }

    Partition {
        labels: labels.into_iter().flatten().collect(),
        count,
    }
}

/// A spanning tree with its heaviest edge taken out.
#[derive(Debug, Clone)]
pub struct TreeCut {
    pub removed: EdgeId,
    /// Tree edges other than `removed`, in tree order.
    pub remaining: Vec<EdgeId>,
    pub partition: Partition,
}

/// Removes the heaviest edge of `tree` and re-discovers the two halves.
pub fn cut_heaviest_edge(graph: &Graph, tree: &SpanningTree) -> Result<TreeCut, GraphError> {
    let (position, removed) = tree
        .heaviest_edge(graph)
        .ok_or(GraphError::NoTreeEdge {
            vertices: graph.vertex_count(),
        })?;
    info!("removing heaviest tree edge {}", graph.edge(removed));

    let remaining: Vec<EdgeId> = tree
        .edges()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != position)
        .map(|(_, &id)| id)
        .collect();
    let partition = components(graph, &remaining);
    debug_assert_eq!(partition.count(), 2);

    Ok(TreeCut {
        removed,
        remaining,
        partition,
    })
}
