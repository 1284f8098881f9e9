/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Topology;
use crate::side::Id;

/// Invokes `cb` for every node with no incoming edges at all (total
/// indegree, not per-side).
pub fn for_each_start_node<G: Topology>(graph: &G, mut cb: impl FnMut(usize, Id) -> bool) -> bool {
    graph.for_each_node(|rank, id| if graph.indegree(id) == 0 { cb(rank, id) } else { true })
}

/// Invokes `cb` for every node with no outgoing edges at all.
pub fn for_each_end_node<G: Topology>(graph: &G, mut cb: impl FnMut(usize, Id) -> bool) -> bool {
    graph.for_each_node(|rank, id| if graph.outdegree(id) == 0 { cb(rank, id) } else { true })
}

/// Invokes `cb` for every node whose `start` side has no incoming edges.
/// An incoming edge lands on the start side when its link type's low bit
/// (the `to_tag`) is `0`; for a directed graph every link type is `0`, so
/// this degenerates to [`for_each_start_node`].
pub fn for_each_start_side<G: Topology>(graph: &G, mut cb: impl FnMut(usize, Id) -> bool) -> bool {
    graph.for_each_node(|rank, id| {
        let mut indeg = 0usize;
        graph.for_each_edges_in(id, |_neighbor, link_type| {
            if link_type & 1 == 0 {
                indeg += 1;
            }
            true
        });
        if indeg == 0 {
            cb(rank, id)
        } else {
            true
        }
    })
}

/// Invokes `cb` for every node whose `end` side has no outgoing edges. An
/// outgoing edge leaves the end side when its link type's high bit (the
/// `from_tag`) is `1`.
pub fn for_each_end_side<G: Topology>(graph: &G, mut cb: impl FnMut(usize, Id) -> bool) -> bool {
    graph.for_each_node(|rank, id| {
        let mut outdeg = 0usize;
        graph.for_each_edges_out(id, |_neighbor, link_type| {
            if (link_type >> 1) & 1 == 1 {
                outdeg += 1;
            }
            true
        });
        if outdeg == 0 {
            cb(rank, id)
        } else {
            true
        }
    })
}

/// Total number of loci (sequence characters) across node ranks
/// `[lower, upper)`. `upper == 0` means "to the end".
pub fn total_nof_loci_range<G: Topology>(graph: &G, lower: usize, upper: usize) -> usize {
    let mut total = 0usize;
    graph.for_each_node(|rank, id| {
        if rank < lower {
            return true;
        }
        total += graph.node_length(id);
        if upper != 0 && rank + 1 == upper {
            return false;
        }
        true
    });
    total
}

/// Total number of loci across the whole graph.
pub fn total_nof_loci<G: Topology>(graph: &G) -> usize {
    total_nof_loci_range(graph, 1, 0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seqgraph::DynamicSeqGraph;
    use crate::side::Link;

    fn chain() -> DynamicSeqGraph {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_node(0, "TTT", "").unwrap();
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        g.add_edge(Link::dovetail(2, 3), 0, false).unwrap();
        g
    }

    #[test]
    fn start_and_end_nodes_are_chain_endpoints() {
        let g = chain();
        let mut starts = Vec::new();
        for_each_start_node(&g, |_, id| {
            starts.push(id);
            true
        });
        assert_eq!(starts, vec![1]);

        let mut ends = Vec::new();
        for_each_end_node(&g, |_, id| {
            ends.push(id);
            true
        });
        assert_eq!(ends, vec![3]);
    }

    #[test]
    fn total_nof_loci_sums_all_sequences() {
        let g = chain();
        assert_eq!(total_nof_loci(&g), 2 + 2 + 3);
    }

    #[test]
    fn empty_graph_has_no_loci_and_every_for_each_returns_true() {
        let g = DynamicSeqGraph::new();
        assert_eq!(total_nof_loci(&g), 0);
        assert!(for_each_start_node(&g, |_, _| true));
        assert!(for_each_end_node(&g, |_, _| true));
    }
}
