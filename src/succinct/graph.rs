/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::side::{Bidirected, Direction, Id};
use crate::support::{PackedIntVec, RankSelectBitVec};
use epserde::Epserde;
use std::marker::PhantomData;

/// Number of header-core slots at the start of every node record:
/// coordinate id, outdegree, indegree.
pub(crate) const HEADER_CORE: usize = 3;

/// Number of node-property padding slots: sequence start offset, sequence
/// length. Fixed at 2 since this crate's succinct graph is always built
/// for a [`crate::seqgraph::SeqGraph`].
pub(crate) const NODE_PROP_PADDING: usize = 2;

/// Number of property slots per edge: the overlap. Fixed at 1.
pub(crate) const EDGE_PROP_PADDING: usize = 1;

pub(crate) const HEADER_LEN: usize = HEADER_CORE + NODE_PROP_PADDING;

/// The immutable bidirected (or directed) graph: one packed integer vector
/// holding every node record back to back, plus a bit-vector marking
/// record starts.
///
/// A node record begins at the absolute position equal to its own id
/// (position 0 is a dummy slot, so the first real id is 1). This makes an
/// id a direct offset into `nodes` — traversal is a pointer chase with no
/// indirection through rank/select, which is needed only for rank↔id
/// translation. See [`super::build`] for how a record is laid out.
///
/// Serializable with [ε-serde](https://crates.io/crates/epserde), matching
/// the persisted state layout of §6: `node_count`, `edge_count`, `nodes`,
/// `ids_bv`, in that order, with rank/select support rebuilt on load rather
/// than persisted. With the `serde` feature, also serializable with
/// [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Epserde, Debug, Clone)]
pub struct DirectedGraph<D: Direction = Bidirected> {
    pub(crate) nodes: PackedIntVec,
    pub(crate) ids_bv: RankSelectBitVec,
    pub(crate) node_count: usize,
    pub(crate) edge_count: usize,
    pub(crate) _direction: PhantomData<D>,
}

impl<D: Direction> DirectedGraph<D> {
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    fn edge_width() -> usize {
        D::EDGE_CORE + EDGE_PROP_PADDING
    }

    #[inline]
    pub fn has_node(&self, id: Id) -> bool {
        id >= 1 && (id as usize) < self.nodes.len() && self.ids_bv.get(id as usize - 1)
    }

    /// `rank_1(id)`: the 1-based rank of `id` in iteration order.
    /// Precondition: `has_node(id)`.
    #[inline]
    pub fn id_to_rank(&self, id: Id) -> usize {
        if !self.has_node(id) {
            return 0;
        }
        self.ids_bv.rank_1(id as usize)
    }

    /// `select_1(rank) + 1`: the id of the node with the given rank.
    #[inline]
    pub fn rank_to_id(&self, rank: usize) -> Id {
        if rank == 0 || rank > self.node_count {
            return 0;
        }
        self.ids_bv.select_1(rank) as Id + 1
    }

    /// The externally-provided (Dynamic) id this record was built from.
    #[inline]
    pub fn coordinate_id(&self, id: Id) -> Id {
        self.nodes.get(id as usize) as Id
    }

    #[inline]
    pub fn outdegree(&self, id: Id) -> usize {
        self.nodes.get(id as usize + 1)
    }

    #[inline]
    pub fn indegree(&self, id: Id) -> usize {
        self.nodes.get(id as usize + 2)
    }

    /// The node's sequence start offset within the sequence `StringSet`.
    #[inline]
    pub fn seq_start(&self, id: Id) -> usize {
        self.nodes.get(id as usize + 3)
    }

    /// The node's sequence length.
    #[inline]
    pub fn seq_length(&self, id: Id) -> usize {
        self.nodes.get(id as usize + 4)
    }

    fn record_length(&self, id: Id) -> usize {
        HEADER_LEN + (self.outdegree(id) + self.indegree(id)) * Self::edge_width()
    }

    /// The id of the next record, or `0` past the end of the vector.
    pub fn successor_id(&self, id: Id) -> Id {
        let next = id + self.record_length(id) as Id;
        if next as usize >= self.nodes.len() {
            0
        } else {
            next
        }
    }

    fn edges_out_pos(&self, id: Id) -> usize {
        id as usize + HEADER_LEN
    }

    fn edges_in_pos(&self, id: Id) -> usize {
        self.edges_out_pos(id) + self.outdegree(id) * Self::edge_width()
    }

    #[inline]
    fn read_edge(&self, pos: usize) -> (Id, u8, usize) {
        let adj = self.nodes.get(pos) as Id;
        let link_type = if D::EDGE_CORE == 2 { self.nodes.get(pos + 1) as u8 } else { 0 };
        let overlap = self.nodes.get(pos + D::EDGE_CORE);
        (adj, link_type, overlap)
    }

    /// Walks the out-edge block of `id`, handing `cb` `(neighbor_id,
    /// link_type, overlap)`.
    pub fn for_each_edges_out(&self, id: Id, mut cb: impl FnMut(Id, u8, usize) -> bool) -> bool {
        let width = Self::edge_width();
        let start = self.edges_out_pos(id);
        for i in 0..self.outdegree(id) {
            let (adj, lt, ov) = self.read_edge(start + i * width);
            if !cb(adj, lt, ov) {
                return false;
            }
        }
        true
    }

    /// Walks the in-edge block of `id`, handing `cb` `(neighbor_id,
    /// link_type, overlap)` (`link_type` as stored on the original
    /// `from -> id` edge).
    pub fn for_each_edges_in(&self, id: Id, mut cb: impl FnMut(Id, u8, usize) -> bool) -> bool {
        let width = Self::edge_width();
        let start = self.edges_in_pos(id);
        for i in 0..self.indegree(id) {
            let (adj, lt, ov) = self.read_edge(start + i * width);
            if !cb(adj, lt, ov) {
                return false;
            }
        }
        true
    }

    /// Whether a link `(from, to, link_type)` exists, scanning whichever
    /// side has fewer candidates.
    pub fn has_edge(&self, from: Id, to: Id, link_type: u8) -> bool {
        self.edge_overlap(from, to, link_type).is_some()
    }

    /// The overlap of link `(from, to, link_type)`, resolved by scanning
    /// the smaller of `from`'s out-edges and `to`'s in-edges.
    pub fn edge_overlap(&self, from: Id, to: Id, link_type: u8) -> Option<usize> {
        let mut found = None;
        if self.outdegree(from) <= self.indegree(to) {
            self.for_each_edges_out(from, |adj, lt, ov| {
                if adj == to && lt == link_type {
                    found = Some(ov);
                    return false;
                }
                true
            });
        } else {
            self.for_each_edges_in(to, |adj, lt, ov| {
                if adj == from && lt == link_type {
                    found = Some(ov);
                    return false;
                }
                true
            });
        }
        found
    }

    /// Iterates every node id in rank order.
    pub fn for_each_node(&self, mut cb: impl FnMut(usize, Id) -> bool) -> bool {
        let mut id = self.rank_to_id(1);
        let mut rank = 1;
        while id != 0 {
            if !cb(rank, id) {
                return false;
            }
            id = self.successor_id(id);
            rank += 1;
        }
        true
    }
}
