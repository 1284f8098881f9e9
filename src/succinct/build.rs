/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The Dynamic → Succinct conversion.
//!
//! Two passes over the dynamic graph, as the layout calls for:
//!
//! 1. **Layout**: walk nodes in rank order, computing every node's record
//!    length (from its out/in-degree alone — no neighbor lookup needed) and
//!    its final position in the packed vector, i.e. its succinct id. This
//!    also finds the largest value that will need storing (ids, offsets,
//!    overlaps, degrees), fixing the one global bit width
//!    [`crate::support::PackedIntVec`] needs up front.
//! 2. **Identity rewrite**: walk nodes again, this time writing full
//!    records, translating every neighbor's dynamic id to its succinct id
//!    through the map built in the layout pass (`dynamic rank → position`,
//!    composed with the graph's own `id → rank`). This is the pass that
//!    turns a neighbor reference from "the dynamic id of some node" into
//!    "walk to this absolute position".

use crate::dynamic;
use crate::path::encode_step;
use crate::side::{make_link, Direction, Id};
use crate::stringset::StringSet;
use crate::support::{PackedIntVec, RankSelectBitVec};

use super::graph::{DirectedGraph, EDGE_PROP_PADDING, HEADER_LEN};
use super::properties::{GraphProperty, NodeProperty, PATH_HEADER_LEN};

/// Builds the succinct node vector and its paired sequence/name properties
/// from a dynamic graph.
pub fn build<D: Direction>(
    g: &dynamic::DirectedGraph<D>,
    np: &dynamic::NodeProperty,
    ep: &dynamic::EdgeProperty,
) -> (DirectedGraph<D>, NodeProperty) {
    let node_count = g.node_count();
    let edge_width = D::EDGE_CORE + EDGE_PROP_PADDING;

    // Sequence and name StringSets are built first so node records can
    // reference known offsets into them.
    let seqset = StringSet::<crate::alphabet::Dna5>::from_iter(np.sequences());
    let nameset = StringSet::<crate::alphabet::Char>::from_iter(np.names());

    // Pass 1 (layout): assign every node's succinct id (its position in the
    // packed vector) and find the widest value any field will hold.
    let mut rank_to_pos = vec![0usize; node_count + 1];
    let mut pos = 1usize; // position 0 is the dummy slot
    let mut max_value = 0usize;
    g.for_each_node(|rank, id| {
        rank_to_pos[rank] = pos;
        let outd = g.outdegree(id);
        let ind = g.indegree(id);
        max_value = max_value.max(id as usize).max(outd).max(ind);
        pos += HEADER_LEN + (outd + ind) * edge_width;
        true
    });
    for i in 0..node_count {
        max_value = max_value.max(seqset.start_position(i)).max(seqset.length(i));
    }
    let total_len = pos;
    max_value = max_value.max(total_len);
    for link_overlap in overlaps_upper_bound(g, ep) {
        max_value = max_value.max(link_overlap);
    }

    let succinct_id = |id: Id| -> Id { rank_to_pos[g.id_to_rank(id)] as Id };

    let bit_width = PackedIntVec::bit_width_for(max_value);
    let mut nodes = PackedIntVec::with_capacity(bit_width, total_len);
    nodes.push(0); // dummy slot at position 0

    let mut ones = Vec::with_capacity(node_count);

    // Pass 2 (identity rewrite): write full records, resolving every
    // neighbor reference to its succinct id via `succinct_id`.
    g.for_each_node(|rank, id| {
        let this_pos = rank_to_pos[rank];
        ones.push(this_pos - 1);
        nodes.push(id as usize);
        nodes.push(g.outdegree(id));
        nodes.push(g.indegree(id));
        nodes.push(seqset.start_position(rank - 1));
        nodes.push(seqset.length(rank - 1));
        g.for_each_edges_out(id, |to, lt| {
            nodes.push(succinct_id(to.id) as usize);
            if D::EDGE_CORE == 2 {
                nodes.push(lt as usize);
            }
            let overlap = ep.at(make_link(id, to.id, lt)).unwrap_or(0);
            nodes.push(overlap);
            true
        });
        g.for_each_edges_in(id, |from, lt| {
            nodes.push(succinct_id(from.id) as usize);
            if D::EDGE_CORE == 2 {
                nodes.push(lt as usize);
            }
            let overlap = ep.at(make_link(from.id, id, lt)).unwrap_or(0);
            nodes.push(overlap);
            true
        });
        true
    });

    let ids_bv = RankSelectBitVec::from_sorted_ones(total_len.saturating_sub(1), ones);
    let sg = DirectedGraph {
        nodes,
        ids_bv,
        node_count,
        edge_count: g.edge_count(),
        _direction: core::marker::PhantomData,
    };
    let np_out = NodeProperty::from_sets(seqset, nameset);
    (sg, np_out)
}

/// Collects every edge's overlap so the sizing pre-pass can include it in
/// the global max-value computation.
fn overlaps_upper_bound<D: Direction>(g: &dynamic::DirectedGraph<D>, ep: &dynamic::EdgeProperty) -> Vec<usize> {
    let mut overlaps = Vec::new();
    g.for_each_node(|_rank, id| {
        g.for_each_edges_out(id, |to, lt| {
            if let Some(ov) = ep.at(make_link(id, to.id, lt)) {
                overlaps.push(ov);
            }
            true
        });
        true
    });
    overlaps
}

/// Builds the succinct path list from a dynamic one, translating every
/// step's dynamic id to its succinct id by composing the dynamic graph's
/// `id_to_rank` with the succinct graph's `rank_to_id` (the two graphs
/// share rank order, since nodes are never reordered during this build).
pub fn build_paths<D: Direction>(
    gp: &dynamic::GraphProperty,
    dyn_g: &dynamic::DirectedGraph<D>,
    sg: &DirectedGraph<D>,
) -> GraphProperty {
    let path_count = gp.len();
    if path_count == 0 {
        return GraphProperty::default();
    }

    let translate = |id: Id| -> Id { sg.rank_to_id(dyn_g.id_to_rank(id)) };

    // Sizing pass: header fields, name positions/lengths, and the succinct
    // id range (for the orientation flag bit).
    let mut max_header = 0usize;
    let mut max_succ_id = 0usize;
    let mut name_len_total = 0usize;
    let mut total_len = 0usize;
    for (pid, name, steps) in gp.iter_raw() {
        max_header = max_header.max(pid as usize).max(steps.len()).max(name_len_total).max(name.len());
        name_len_total += name.len();
        total_len += PATH_HEADER_LEN + steps.len();
        for &s in steps {
            let id = crate::path::step_id(s, crate::path::DYNAMIC_STEP_WIDTH);
            max_succ_id = max_succ_id.max(translate(id) as usize);
        }
    }
    max_header = max_header.max(name_len_total);
    let min_step_width = PackedIntVec::bit_width_for(max_succ_id) + 1;
    let bit_width = PackedIntVec::bit_width_for(max_header)
        .max(min_step_width)
        .max(PackedIntVec::bit_width_for(total_len));
    let step_width = bit_width as u32;

    let mut paths = PackedIntVec::with_capacity(bit_width, total_len);
    let mut ones = Vec::with_capacity(path_count.saturating_sub(1));
    let mut names = String::with_capacity(name_len_total);
    let mut pos = 0usize;

    for (pid, name, steps) in gp.iter_raw() {
        if pos != 0 {
            ones.push(pos - 1);
        }
        let name_pos = names.len();
        names.push_str(name);
        paths.push(pid as usize);
        paths.push(steps.len());
        paths.push(name_pos);
        paths.push(name.len());
        for &s in steps {
            let id = crate::path::step_id(s, crate::path::DYNAMIC_STEP_WIDTH);
            let rev = crate::path::step_reversed(s, crate::path::DYNAMIC_STEP_WIDTH);
            let succ_id = translate(id);
            paths.push(encode_step(succ_id, rev, step_width) as usize);
        }
        pos += PATH_HEADER_LEN + steps.len();
    }

    GraphProperty {
        paths,
        ids_bv: RankSelectBitVec::from_sorted_ones(total_len.saturating_sub(1), ones),
        names,
        step_width,
        path_count,
    }
}
