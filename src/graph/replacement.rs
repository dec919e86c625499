//! 跨割最小边搜索。
use log::{debug, info};

use crate::graph::cut::Partition;
use crate::graph::ids::EdgeId;
use crate::graph::structure::Graph;

/// Finds the lightest edge of `graph` whose endpoints sit in different
/// components of `partition`.
///
/// Edges are scanned in input order and the first minimum wins. `skip`
/// excludes one edge id from the scan; with `None` an edge that was just cut
/// out of a tree may come back as its own replacement.
pub fn cheapest_crossing_edge(
    graph: &Graph,
    partition: &Partition,
    skip: Option<EdgeId>,
) -> Option<EdgeId> {
    let best = graph
        .edges()
        .iter_enumerated()
        .filter(|&(id, _)| Some(id) != skip)
        .filter(|(_, edge)| partition.crosses(edge))
        .inspect(|(id, edge)| debug!("crossing {:?} {}", id, edge))
        .min_by_key(|(_, edge)| edge.weight)
        .map(|(id, _)| id);

    if let Some(id) = best {
        info!("replacement edge {}", graph.edge(id));
    }
    best
}
