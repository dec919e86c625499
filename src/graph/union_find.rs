//! 并查集：路径压缩 + 按秩合并。
use crate::graph::ids::VertexId;
use crate::graph::index_vec::IndexVec;

/// Disjoint sets over the vertices of one graph.
///
/// Built fresh for every spanning tree computation and dropped afterwards.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: IndexVec<VertexId, VertexId>,
    rank: IndexVec<VertexId, u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).map(VertexId::new).collect(),
            rank: IndexVec::from_elem_n(0, n),
        }
    }

    /// Returns the root of `x`, re-pointing every node on the way directly at it.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already joined.
    ///
    /// The lower-rank root goes under the higher-rank one; on equal ranks the
    /// root of `a` wins and its rank grows.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] += 1;
        }
        true
    }
}
