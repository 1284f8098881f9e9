/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Topology;
use std::collections::HashSet;

fn find(parent: &mut [usize], x: usize) -> usize {
    let mut root = x;
    while parent[root] != root {
        root = parent[root];
    }
    let mut cur = x;
    while parent[cur] != root {
        let next = parent[cur];
        parent[cur] = root;
        cur = next;
    }
    root
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        parent[ra] = rb;
    }
}

/// Number of weakly-connected components: edge direction is ignored, and
/// an isolated node counts as its own component. Ranks are indexed from
/// `1`, with slot `0` of the union-find array unused.
pub fn connected_components<G: Topology>(graph: &G) -> usize {
    let n = graph.node_count();
    if n == 0 {
        return 0;
    }
    let mut parent: Vec<usize> = (0..=n).collect();

    graph.for_each_node(|rank, id| {
        graph.for_each_edges_out(id, |to, _link_type| {
            let to_rank = graph.id_to_rank(to);
            union(&mut parent, rank, to_rank);
            true
        });
        true
    });

    let roots: HashSet<usize> = (1..=n).map(|rank| find(&mut parent, rank)).collect();
    roots.len()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seqgraph::DynamicSeqGraph;
    use crate::side::Link;

    #[test]
    fn single_chain_is_one_component() {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        assert_eq!(connected_components(&g), 1);
    }

    #[test]
    fn disconnected_nodes_are_separate_components() {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "").unwrap();
        g.add_node(0, "GT", "").unwrap();
        g.add_node(0, "TT", "").unwrap();
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        assert_eq!(connected_components(&g), 2);
    }

    #[test]
    fn empty_graph_has_zero_components() {
        let g = DynamicSeqGraph::new();
        assert_eq!(connected_components(&g), 0);
    }
}
