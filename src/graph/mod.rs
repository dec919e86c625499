//! # 最小生成树与最重边替换
//!
//! 设无向带权图 `G = (V, E, w)`，`|V| = n`。流程：
//!
//! * Kruskal：按权升序扫描 `E`，借助并查集接受不成环的边，得到生成树 `T`，
//!   `|T| = n - 1`，否则图不连通；
//! * 删除 `T` 中权值最大的边 `e*`（同权取树中首次出现者），`T \ {e*}` 恰好把 `V`
//!   划分为两个连通分量，BFS 重新标号；
//! * 在原始边集 `E` 中寻找跨越该划分的最小权边 `r`（同权取输入顺序首个），
//!   `T' = (T \ {e*}) ∪ {r}`，按割性质 `T'` 仍为最小生成树。
//!
//! `e*` 本身也跨越该划分，因此当它是唯一最小跨割边时会被重新选中。
//!
//! ## 示例
//!
//! ```rust
//! use mst_repair::graph::*;
//!
//! let mut graph = Graph::new(3);
//! let a = graph.add_edge(VertexId::new(0), VertexId::new(1), 1);
//! let b = graph.add_edge(VertexId::new(1), VertexId::new(2), 4);
//! let c = graph.add_edge(VertexId::new(0), VertexId::new(2), 6);
//!
//! let tree = minimum_spanning_tree(&graph).unwrap();
//! assert_eq!(tree.edges(), &[a, b]);
//!
//! let cut = cut_heaviest_edge(&graph, &tree).unwrap();
//! assert_eq!(cut.removed, b);
//! assert_eq!(cheapest_crossing_edge(&graph, &cut.partition, Some(b)), Some(c));
//! ```

pub mod cut;
pub mod ids;
pub mod index_vec;
pub mod kruskal;
pub mod replacement;
pub mod structure;
pub mod union_find;

pub use cut::{Partition, TreeCut, components, cut_heaviest_edge};
pub use ids::{ComponentId, EdgeId, VertexId};
pub use index_vec::{Idx, IndexVec};
pub use kruskal::{SpanningTree, minimum_spanning_tree};
pub use replacement::cheapest_crossing_edge;
pub use structure::{Edge, Graph, Weight};
pub use union_find::UnionFind;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Graph is not connected, MST does not exist ({accepted} of {required} tree edges found)")]
    Disconnected { accepted: usize, required: usize },
    #[error("spanning tree over {vertices} vertices has no edge to remove")]
    NoTreeEdge { vertices: usize },
    #[error("total tree weight does not fit in a 64-bit integer")]
    WeightOverflow,
    #[error("{vertices} vertices do not fit in 32-bit vertex ids")]
    TooManyVertices { vertices: usize },
    #[error("edge #{edge} has endpoint {label} outside of 1..={vertices}")]
    VertexOutOfRange {
        edge: usize,
        label: i64,
        vertices: usize,
    },
}
