/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph algorithms shared between the Dynamic and Succinct `SeqGraph`
//! facades: depth-first traversal, topological-sort order and DAG
//! detection, the Dynamic-only renumbering that applies a topological
//! order, weakly-connected-component counting, and the Succinct-only
//! position/id/offset translations used to map a concatenated-sequence
//! coordinate back to the node it falls in.
//!
//! Everything except the position/id/offset translations and the Dynamic
//! renumbering is generic over [`Topology`], implemented for both
//! [`crate::seqgraph::DynamicSeqGraph`] and
//! [`crate::seqgraph::SuccinctSeqGraph`] so the same traversal code drives
//! either representation.

mod components;
mod dfs;
mod iteration;
mod position;
mod topo;

pub use components::connected_components;
pub use dfs::dfs_traverse;
pub use iteration::{for_each_end_node, for_each_end_side, for_each_start_node, for_each_start_side, total_nof_loci};
pub use position::{id_to_charorder, id_to_position, position_to_id, position_to_offset};
pub use topo::{ids_in_topological_order, ranks_in_topological_order, topological_sort, topological_sort_order};

use crate::seqgraph::{DynamicSeqGraph, SuccinctSeqGraph};
use crate::side::{Direction, Id};

/// The read-only surface the traversal and ordering algorithms need from a
/// `SeqGraph` facade, independent of whether it is backed by a Dynamic or a
/// Succinct graph. Edge callbacks report `(neighbor_id, link_type)` only —
/// algorithms that care about overlap go through the facade directly.
pub trait Topology {
    fn node_count(&self) -> usize;
    fn for_each_node(&self, cb: impl FnMut(usize, Id) -> bool) -> bool;
    fn indegree(&self, id: Id) -> usize;
    fn outdegree(&self, id: Id) -> usize;
    fn id_to_rank(&self, id: Id) -> usize;
    fn rank_to_id(&self, rank: usize) -> Id;
    fn for_each_edges_out(&self, id: Id, cb: impl FnMut(Id, u8) -> bool) -> bool;
    fn for_each_edges_in(&self, id: Id, cb: impl FnMut(Id, u8) -> bool) -> bool;
    fn node_length(&self, id: Id) -> usize;
}

impl<D: Direction> Topology for DynamicSeqGraph<D> {
    #[inline]
    fn node_count(&self) -> usize {
        DynamicSeqGraph::node_count(self)
    }

    #[inline]
    fn for_each_node(&self, cb: impl FnMut(usize, Id) -> bool) -> bool {
        DynamicSeqGraph::for_each_node(self, cb)
    }

    #[inline]
    fn indegree(&self, id: Id) -> usize {
        DynamicSeqGraph::indegree(self, id)
    }

    #[inline]
    fn outdegree(&self, id: Id) -> usize {
        DynamicSeqGraph::outdegree(self, id)
    }

    #[inline]
    fn id_to_rank(&self, id: Id) -> usize {
        DynamicSeqGraph::id_to_rank(self, id)
    }

    #[inline]
    fn rank_to_id(&self, rank: usize) -> Id {
        DynamicSeqGraph::rank_to_id(self, rank)
    }

    fn for_each_edges_out(&self, id: Id, mut cb: impl FnMut(Id, u8) -> bool) -> bool {
        DynamicSeqGraph::for_each_edges_out(self, id, |side, lt| cb(side.id, lt))
    }

    fn for_each_edges_in(&self, id: Id, mut cb: impl FnMut(Id, u8) -> bool) -> bool {
        DynamicSeqGraph::for_each_edges_in(self, id, |side, lt| cb(side.id, lt))
    }

    #[inline]
    fn node_length(&self, id: Id) -> usize {
        DynamicSeqGraph::node_length(self, id)
    }
}

impl<D: Direction> Topology for SuccinctSeqGraph<D> {
    #[inline]
    fn node_count(&self) -> usize {
        SuccinctSeqGraph::node_count(self)
    }

    #[inline]
    fn for_each_node(&self, cb: impl FnMut(usize, Id) -> bool) -> bool {
        SuccinctSeqGraph::for_each_node(self, cb)
    }

    #[inline]
    fn indegree(&self, id: Id) -> usize {
        SuccinctSeqGraph::indegree(self, id)
    }

    #[inline]
    fn outdegree(&self, id: Id) -> usize {
        SuccinctSeqGraph::outdegree(self, id)
    }

    #[inline]
    fn id_to_rank(&self, id: Id) -> usize {
        SuccinctSeqGraph::id_to_rank(self, id)
    }

    #[inline]
    fn rank_to_id(&self, rank: usize) -> Id {
        SuccinctSeqGraph::rank_to_id(self, rank)
    }

    fn for_each_edges_out(&self, id: Id, mut cb: impl FnMut(Id, u8) -> bool) -> bool {
        SuccinctSeqGraph::for_each_edges_out(self, id, |adj, lt, _ov| cb(adj, lt))
    }

    fn for_each_edges_in(&self, id: Id, mut cb: impl FnMut(Id, u8) -> bool) -> bool {
        SuccinctSeqGraph::for_each_edges_in(self, id, |adj, lt, _ov| cb(adj, lt))
    }

    #[inline]
    fn node_length(&self, id: Id) -> usize {
        SuccinctSeqGraph::node_length(self, id)
    }
}
