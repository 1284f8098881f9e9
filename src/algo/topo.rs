/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::dfs::dfs_traverse;
use super::Topology;
use crate::seqgraph::DynamicSeqGraph;
use crate::side::{Direction, Id};

/// `true` if every edge's raw endpoint ids increase, `from_id < to_id`.
pub fn ids_in_topological_order<G: Topology>(graph: &G) -> bool {
    let mut sorted = true;
    graph.for_each_node(|_rank, from| {
        graph.for_each_edges_out(from, |to, _link_type| {
            if from < to {
                true
            } else {
                sorted = false;
                false
            }
        });
        sorted
    });
    sorted
}

/// `true` if every edge's rank increases, `rank(from) < rank(to)`.
pub fn ranks_in_topological_order<G: Topology>(graph: &G) -> bool {
    let mut sorted = true;
    graph.for_each_node(|from_rank, from| {
        graph.for_each_edges_out(from, |to, _link_type| {
            if from_rank < graph.id_to_rank(to) {
                true
            } else {
                sorted = false;
                false
            }
        });
        sorted
    });
    sorted
}

/// Runs a depth-first traversal and collects nodes in finishing order,
/// which (reversed) is a valid topological order whenever the graph is a
/// DAG. `dag` is `false` as soon as a back edge (an edge into an already
/// discovered but not-yet-finished node) is seen. `reverse` skips the
/// final reversal, returning raw finishing order instead.
pub fn topological_sort_order<G: Topology>(graph: &G, reverse: bool) -> (Vec<(usize, Id)>, bool) {
    let mut finished = Vec::with_capacity(graph.node_count());
    let mut dag = true;
    dfs_traverse(
        graph,
        |rank, id| {
            finished.push((rank, id));
            true
        },
        |_rank, _id| true,
        |_rank, _id, is_finished| {
            if !is_finished {
                dag = false;
            }
            true
        },
    );
    if !reverse {
        finished.reverse();
    }
    (finished, dag)
}

/// Renumbers a Dynamic graph's ranks to match a topological order. No-op
/// (beyond computing the order) unless the graph is a DAG or `force` is
/// set. Returns whether the graph was found to be a DAG.
pub fn topological_sort<D: Direction>(graph: &mut DynamicSeqGraph<D>, force: bool, reverse: bool) -> bool {
    let (order, dag) = topological_sort_order(graph, reverse);
    if dag || force {
        let perm: Vec<usize> = order.iter().map(|&(rank, _id)| rank - 1).collect();
        graph.sort_nodes(&perm).expect("topological order is a permutation of every rank");
    }
    dag
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::side::Link;

    #[test]
    fn chain_is_already_topologically_sorted() {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_node(0, "TTT", "").unwrap();
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        g.add_edge(Link::dovetail(2, 3), 0, false).unwrap();

        assert!(ids_in_topological_order(&g));
        assert!(ranks_in_topological_order(&g));
        let (_order, dag) = topological_sort_order(&g, false);
        assert!(dag);
    }

    #[test]
    fn cycle_is_detected_as_non_dag() {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        g.add_edge(Link::dovetail(2, 1), 0, true).unwrap();

        let (_order, dag) = topological_sort_order(&g, false);
        assert!(!dag);
    }

    #[test]
    fn topological_sort_handles_a_diamond_without_duplicate_finishes() {
        // 1 -> 3, 1 -> 2, 2 -> 3: node 3 is reachable from two still-open
        // parents, so a naive DFS can push it onto the stack twice before
        // it is first discovered.
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_node(0, "TTT", "").unwrap();
        g.add_edge(Link::dovetail(1, 3), 0, false).unwrap();
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        g.add_edge(Link::dovetail(2, 3), 0, false).unwrap();

        let (order, dag) = topological_sort_order(&g, false);
        assert!(dag);
        assert_eq!(order.len(), g.node_count());

        let dag = topological_sort(&mut g, false, false);
        assert!(dag);
        assert!(ranks_in_topological_order(&g));
    }

    #[test]
    fn topological_sort_renumbers_a_reversed_chain() {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_node(0, "TTT", "").unwrap();
        // Node 3 -> 2 -> 1, so ranks start out in reverse topological order.
        g.add_edge(Link::dovetail(3, 2), 0, false).unwrap();
        g.add_edge(Link::dovetail(2, 1), 0, false).unwrap();

        let dag = topological_sort(&mut g, false, false);
        assert!(dag);
        assert!(ranks_in_topological_order(&g));
    }
}
