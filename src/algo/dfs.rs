/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{iteration::for_each_start_node, Topology};
use crate::side::Id;

/// Iterative depth-first traversal, ported from the original `gum`
/// `dfs_traverse`: a stack of `(rank, id)` pairs and a `2n+1`-sized
/// discovered/finished table, indexed `visited[rank*2]` (discovered) and
/// `visited[rank*2-1]` (finished) — index `0` is an unused dummy slot so
/// rank `1` can use indices `1` and `2`.
///
/// Seeded from [`for_each_start_node`]; once every reachable node from the
/// seeded start nodes has been discovered and finished, the table is
/// scanned for the first undiscovered rank so disconnected components are
/// still visited.
///
/// Each callback returns whether the traversal should continue; any of the
/// three returning `false` stops the whole walk and this function returns
/// `false`.
pub fn dfs_traverse<G: Topology>(
    graph: &G,
    mut on_finishing: impl FnMut(usize, Id) -> bool,
    mut on_discovery: impl FnMut(usize, Id) -> bool,
    mut on_visited: impl FnMut(usize, Id, bool) -> bool,
) -> bool {
    let n = graph.node_count();
    if n == 0 {
        return true;
    }
    let mut visited = vec![false; 2 * n + 1];
    visited[0] = true;
    let mut stack: Vec<(usize, Id)> = Vec::new();
    for_each_start_node(graph, |rank, id| {
        stack.push((rank, id));
        true
    });

    let mut last_visited = 0usize;
    loop {
        while let Some(&(rank, id)) = stack.last() {
            if visited[rank * 2] {
                // A node can be pushed onto the stack more than once before
                // it is first discovered (two still-undiscovered parents
                // both see it as an unvisited neighbor and each push a
                // copy). Only the first time this entry is popped after
                // discovery does it actually finish; later copies are
                // stale and must be dropped without re-finishing.
                if !visited[rank * 2 - 1] {
                    visited[rank * 2 - 1] = true;
                    if !on_finishing(rank, id) {
                        return false;
                    }
                }
                stack.pop();
                continue;
            }
            visited[rank * 2] = true;
            if !on_discovery(rank, id) {
                return false;
            }
            let mut keep_going = true;
            graph.for_each_edges_out(id, |to, _link_type| {
                let to_rank = graph.id_to_rank(to);
                if !visited[to_rank * 2] {
                    stack.push((to_rank, to));
                } else if !on_visited(to_rank, to, visited[to_rank * 2 - 1]) {
                    keep_going = false;
                    return false;
                }
                true
            });
            if !keep_going {
                return false;
            }
        }
        while last_visited < visited.len() && visited[last_visited] {
            last_visited += 1;
        }
        if last_visited >= visited.len() {
            break;
        }
        let last_rank = (last_visited + 1) / 2;
        stack.push((last_rank, graph.rank_to_id(last_rank)));
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seqgraph::DynamicSeqGraph;
    use crate::side::Link;

    fn chain_with_isolated_node() -> DynamicSeqGraph {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_node(0, "TTT", "").unwrap();
        g.add_node(0, "A", "").unwrap(); // disconnected
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        g.add_edge(Link::dovetail(2, 3), 0, false).unwrap();
        g
    }

    #[test]
    fn visits_every_node_including_disconnected_components() {
        let g = chain_with_isolated_node();
        let mut discovered = Vec::new();
        dfs_traverse(
            &g,
            |_, _| true,
            |_, id| {
                discovered.push(id);
                true
            },
            |_, _, _| true,
        );
        discovered.sort();
        assert_eq!(discovered, vec![1, 2, 3, 4]);
    }

    #[test]
    fn finishes_nodes_after_their_successors() {
        let g = chain_with_isolated_node();
        let mut finished = Vec::new();
        dfs_traverse(
            &g,
            |_, id| {
                finished.push(id);
                true
            },
            |_, _| true,
            |_, _, _| true,
        );
        let pos = |id: u64| finished.iter().position(|&x| x == id).unwrap();
        assert!(pos(3) < pos(2));
        assert!(pos(2) < pos(1));
    }

    #[test]
    fn on_visited_reports_back_edges() {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        g.add_edge(Link::dovetail(2, 1), 0, true).unwrap();

        let mut saw_back_edge = false;
        dfs_traverse(
            &g,
            |_, _| true,
            |_, _| true,
            |_, _, finished| {
                if !finished {
                    saw_back_edge = true;
                }
                true
            },
        );
        assert!(saw_back_edge);
    }
}
