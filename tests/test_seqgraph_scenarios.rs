/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use seqgraph::algo;
use seqgraph::collab;
use seqgraph::error::GraphError;
use seqgraph::seqgraph::{DynamicSeqGraph, SuccinctSeqGraph};
use seqgraph::side::{make_link, Link};

const SEQUENCES: [&str; 15] = [
    "CAAATAAG",
    "A",
    "G",
    "T",
    "C",
    "TTG",
    "A",
    "G",
    "AAATTTTCTGGAGTTCTAT",
    "A",
    "T",
    "ATAT",
    "A",
    "T",
    "CCAACTCTCTG",
];

/// The 15-node linear-with-bubbles pangenome used across this file's
/// scenarios, with a reference path through the non-bubble nodes.
fn tiny_graph() -> DynamicSeqGraph {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut g = DynamicSeqGraph::new();
    for (i, seq) in SEQUENCES.iter().enumerate() {
        g.add_node(0, *seq, format!("n{}", i + 1)).unwrap();
    }

    let edges: [(u64, u64); 20] = [
        (1, 3),
        (3, 5),
        (5, 6),
        (6, 8),
        (8, 9),
        (9, 11),
        (11, 12),
        (12, 14),
        (14, 15),
        (1, 2),
        (2, 5),
        (3, 4),
        (4, 6),
        (6, 7),
        (7, 9),
        (9, 10),
        (10, 12),
        (12, 13),
        (13, 15),
        (11, 13),
    ];
    for (from, to) in edges {
        g.add_edge(Link::dovetail(from, to), 0, false).unwrap();
    }

    g.add_path_with_steps(
        "x",
        [1u64, 3, 5, 6, 8, 9, 11, 12, 14, 15],
        std::iter::repeat(false).take(10),
        false,
    )
    .unwrap();

    g
}

#[test]
fn scenario_1_tiny_bidirected_graph() {
    let g = tiny_graph();

    assert_eq!(g.node_count(), 15);
    assert_eq!(g.edge_count(), 20);
    assert_eq!(g.node_sequence(1), "CAAATAAG");
    assert_eq!(g.node_sequence(9), "AAATTTTCTGGAGTTCTAT");

    let path = g.path(0).unwrap();
    assert_eq!(path.len(), 10);

    let mut edge_count = 0;
    g.for_each_node(|_, id| {
        g.for_each_edges_out(id, |_to, link_type| {
            assert_eq!(link_type, seqgraph::side::DEFAULT_LINK_TYPE);
            edge_count += 1;
            true
        });
        true
    });
    assert_eq!(edge_count, 20);

    g.for_each_node(|_, id| {
        g.for_each_edges_out(id, |to, link_type| {
            let link = make_link(id, to.id, link_type);
            assert_eq!(g.edge_overlap(link), Some(0));
            true
        });
        true
    });
}

#[test]
fn scenario_2_dynamic_succinct_equivalence() {
    let g = tiny_graph();
    let sg = SuccinctSeqGraph::build(&g);

    assert_eq!(sg.node_count(), g.node_count());
    assert_eq!(sg.edge_count(), g.edge_count());

    g.for_each_node(|_, from| {
        g.for_each_edges_out(from, |to, link_type| {
            let link = make_link(from, to.id, link_type);
            assert!(g.has_edge(link));
            assert!(sg.has_edge(from, to.id, link_type));
            assert_eq!(g.edge_overlap(link), sg.edge_overlap(from, to.id, link_type));
            true
        });
        true
    });
}

#[test]
fn scenario_3_overlap_dovetail_guard() {
    // GFA record `L 1 + 2 + 3M` against a node of length 8: the overlap's
    // source_end (5) does not reach the full node length (8).
    let node_1_length = 8;
    let source_begin = 2;
    let source_end = 5;
    let sink_begin = 0;
    let sink_end = 3;

    let err = collab::check_gfa_dovetail(1, sink_begin, source_begin, source_end, node_1_length, sink_end).unwrap_err();
    assert!(matches!(
        err,
        GraphError::NonDovetailBoundary {
            sink_begin: 0,
            source_end: 5,
            source_length: 8,
        }
    ));
}

#[test]
fn scenario_4_topological_sort() {
    let mut dag = DynamicSeqGraph::new();
    for seq in ["AC", "GT", "TTT"] {
        dag.add_node(0, seq, "").unwrap();
    }
    // Ids are in non-topological order: 3 -> 2 -> 1.
    dag.add_edge(Link::dovetail(3, 2), 0, false).unwrap();
    dag.add_edge(Link::dovetail(2, 1), 0, false).unwrap();

    let is_dag = algo::topological_sort(&mut dag, false, false);
    assert!(is_dag);
    assert!(algo::ranks_in_topological_order(&dag));

    let mut cyclic = DynamicSeqGraph::new();
    for seq in ["AC", "GT"] {
        cyclic.add_node(0, seq, "").unwrap();
    }
    cyclic.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
    cyclic.add_edge(Link::dovetail(2, 1), 0, true).unwrap();

    let (_, dag_before_force) = algo::topological_sort_order(&cyclic, false);
    assert!(!dag_before_force);

    let is_dag = algo::topological_sort(&mut cyclic, true, false);
    assert!(!is_dag);
}

#[test]
fn scenario_6_path_orientation_roundtrip() {
    let mut g = DynamicSeqGraph::new();
    for seq in ["AC", "GT", "TTT", "A", "GG", "C"] {
        g.add_node(0, seq, "").unwrap();
    }
    g.add_edge(Link::dovetail(3, 5), 0, false).unwrap();
    g.add_edge(Link::dovetail(5, 6), 0, false).unwrap();
    g.add_path_with_steps("p", [3u64, 5, 6], [false, true, false], false).unwrap();

    let path = g.path(0).unwrap();
    assert_eq!(path.id_of(0), 3);
    assert_eq!(path.id_of(1), 5);
    assert_eq!(path.id_of(2), 6);
    assert!(!path.is_reverse(0));
    assert!(path.is_reverse(1));
    assert!(!path.is_reverse(2));
}
