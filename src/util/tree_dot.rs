use petgraph::dot::Dot;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::graph::{EdgeId, Graph, Idx, Weight};
use crate::repair::TreeRepair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeRole {
    Other,
    Tree,
    Removed,
    Replacement,
}

impl EdgeRole {
    fn attributes(self) -> &'static str {
        match self {
            EdgeRole::Other => "color=gray",
            EdgeRole::Tree => "penwidth=2",
            EdgeRole::Removed => "color=red, style=dashed",
            EdgeRole::Replacement => "color=blue, penwidth=2",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DotEdge {
    weight: Weight,
    role: EdgeRole,
}

impl fmt::Display for DotEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weight)
    }
}

fn role_of(repair: &TreeRepair, tree: &HashSet<EdgeId>, id: EdgeId) -> EdgeRole {
    if repair.replacement == Some(id) {
        EdgeRole::Replacement
    } else if repair.cut.removed == id {
        EdgeRole::Removed
    } else if tree.contains(&id) {
        EdgeRole::Tree
    } else {
        EdgeRole::Other
    }
}

fn to_petgraph(graph: &Graph, repair: &TreeRepair) -> UnGraph<usize, DotEdge> {
    let tree: HashSet<EdgeId> = repair.initial.edges().iter().copied().collect();
    let mut pg = UnGraph::with_capacity(graph.vertex_count(), graph.edges().len());
    for vertex in graph.vertices() {
        pg.add_node(vertex.label());
    }
    for (id, edge) in graph.edges().iter_enumerated() {
        pg.add_edge(
            NodeIndex::new(edge.source.index()),
            NodeIndex::new(edge.target.index()),
            DotEdge {
                weight: edge.weight,
                role: role_of(repair, &tree, id),
            },
        );
    }
    pg
}

/// 生成图与生成树的 DOT 表示
pub fn render_tree_dot(graph: &Graph, repair: &TreeRepair) -> String {
    let pg = to_petgraph(graph, repair);
    let dot = Dot::with_attr_getters(
        &pg,
        &[],
        &|_, edge| edge.weight().role.attributes().to_string(),
        &|_, _| String::new(),
    );
    format!("{}", dot)
}

pub fn write_tree_dot<P: AsRef<Path>>(
    path: P,
    graph: &Graph,
    repair: &TreeRepair,
) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_tree_dot(graph, repair))
}
