/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::alphabet::{Char, Dna5};
use crate::path::{step_id, step_reversed};
use crate::side::Id;
use crate::stringset::StringSet;
use crate::support::{PackedIntVec, RankSelectBitVec};
use epserde::Epserde;

/// Per-node sequence and name, as two `StringSet`s indexed by rank − 1.
/// Sequences are stored `Dna5`-packed; names are stored `Char`-packed since
/// a node name is arbitrary text, not a restricted alphabet.
///
/// Serializable with [ε-serde](https://crates.io/crates/epserde); with the
/// `serde` feature, also with [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Epserde, Debug, Clone, Default)]
pub struct NodeProperty {
    seqset: StringSet<Dna5>,
    nameset: StringSet<Char>,
}

impl NodeProperty {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_sets(seqset: StringSet<Dna5>, nameset: StringSet<Char>) -> Self {
        NodeProperty { seqset, nameset }
    }

    #[inline]
    pub fn sequence(&self, rank: usize) -> String {
        self.seqset.get(rank - 1)
    }

    /// Extracts `len` characters of sequence starting at absolute
    /// `seqset` position `start`, as stored in a node record's np padding
    /// (`seq_start`/`seq_length`). Equivalent to, but cheaper than,
    /// `sequence(rank)` when the caller already has those offsets —
    /// the facade's `node_sequence` query uses this path.
    #[inline]
    pub fn sequence_at(&self, start: usize, len: usize) -> String {
        self.seqset.extract(start, len)
    }

    /// The underlying sequence `StringSet`, used by the position/id/offset
    /// translations in [`crate::algo`].
    pub(crate) fn seqset(&self) -> &StringSet<Dna5> {
        &self.seqset
    }

    #[inline]
    pub fn name(&self, rank: usize) -> String {
        self.nameset.get(rank - 1)
    }

    #[inline]
    pub fn seq_length_sum(&self) -> usize {
        self.seqset.length_sum()
    }

    #[inline]
    pub fn name_length_sum(&self) -> usize {
        self.nameset.length_sum()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seqset.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seqset.is_empty()
    }
}

/// Number of header fields before a path's steps: id, length, name
/// position, name length.
pub(crate) const PATH_HEADER_LEN: usize = 4;

/// One path's record, read out of the packed `paths` vector into an owned
/// buffer (the vector has no contiguous-slice view to borrow).
/// Layout: `[path_id, path_length, name_position, name_length, step_0, ...]`.
#[derive(Debug, Clone)]
pub struct PathView<'a> {
    record: Vec<usize>,
    step_width: u32,
    names: &'a str,
}

impl<'a> PathView<'a> {
    #[inline]
    pub fn id(&self) -> u64 {
        self.record[0] as u64
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.record[1]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn name(&self) -> &'a str {
        let pos = self.record[2];
        let len = self.record[3];
        &self.names[pos..pos + len]
    }

    #[inline]
    fn steps(&self) -> &[usize] {
        &self.record[PATH_HEADER_LEN..PATH_HEADER_LEN + self.len()]
    }

    #[inline]
    pub fn id_of(&self, i: usize) -> Id {
        step_id(self.steps()[i] as u64, self.step_width)
    }

    #[inline]
    pub fn is_reverse(&self, i: usize) -> bool {
        step_reversed(self.steps()[i] as u64, self.step_width)
    }

    pub fn front(&self) -> (Id, bool) {
        (self.id_of(0), self.is_reverse(0))
    }

    pub fn back(&self) -> (Id, bool) {
        let last = self.len() - 1;
        (self.id_of(last), self.is_reverse(last))
    }

    /// Walks every step in order, handing `cb` `(id, reversed)`.
    pub fn for_each_node(&self, mut cb: impl FnMut(Id, bool) -> bool) -> bool {
        for i in 0..self.len() {
            if !cb(self.id_of(i), self.is_reverse(i)) {
                return false;
            }
        }
        true
    }
}

/// The immutable path list: one packed integer vector holding every path's
/// record back to back (mirroring [`super::DirectedGraph`]'s node-record
/// vector), a bit-vector marking every record's start past the first, and
/// one concatenated `names` string every path's name is a substring of.
///
/// Path ids are assigned sequentially by [`crate::dynamic::GraphProperty`]
/// (`0, 1, 2, ...`, never reused), so a path's id doubles as its rank minus
/// one — no separate id→rank index is needed.
///
/// Serializable with [ε-serde](https://crates.io/crates/epserde); with the
/// `serde` feature, also with [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Epserde, Debug, Clone, Default)]
pub struct GraphProperty {
    pub(crate) paths: PackedIntVec,
    pub(crate) ids_bv: RankSelectBitVec,
    pub(crate) names: String,
    pub(crate) step_width: u32,
    pub(crate) path_count: usize,
}

impl GraphProperty {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.path_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path_count == 0
    }

    fn record_start(&self, rank: usize) -> Option<usize> {
        if rank == 0 || rank > self.path_count {
            return None;
        }
        Some(if rank == 1 { 0 } else { self.ids_bv.select_1(rank - 1) + 1 })
    }

    #[inline]
    fn path_rank(&self, pid: u64) -> Option<usize> {
        let rank = pid as usize + 1;
        (rank <= self.path_count).then_some(rank)
    }

    pub fn path(&self, pid: u64) -> Option<PathView<'_>> {
        let rank = self.path_rank(pid)?;
        let start = self.record_start(rank)?;
        let len = self.paths.get(start + 1);
        let record_len = PATH_HEADER_LEN + len;
        let record: Vec<usize> = (start..start + record_len).map(|i| self.paths.get(i)).collect();
        Some(PathView {
            record,
            step_width: self.step_width,
            names: &self.names,
        })
    }

    pub fn path_length(&self, pid: u64) -> usize {
        self.path(pid).map(|p| p.len()).unwrap_or(0)
    }

    pub fn path_name(&self, pid: u64) -> &str {
        self.path_rank(pid)
            .and_then(|rank| self.record_start(rank))
            .map(|start| {
                let pos = self.paths.get(start + 2);
                let len = self.paths.get(start + 3);
                &self.names[pos..pos + len]
            })
            .unwrap_or("")
    }

    /// Iterates over every path's id and name, in storage (rank) order.
    pub fn for_each_path(&self, mut cb: impl FnMut(u64, &str) -> bool) -> bool {
        for rank in 1..=self.path_count {
            let start = self.record_start(rank).unwrap();
            let pid = self.paths.get(start) as u64;
            let pos = self.paths.get(start + 2);
            let len = self.paths.get(start + 3);
            if !cb(pid, &self.names[pos..pos + len]) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dynamic;
    use crate::side::{Bidirected, Link};
    use crate::succinct::build;

    #[test]
    fn succinct_path_roundtrips_through_build() {
        let mut g = dynamic::DirectedGraph::<Bidirected>::new();
        let mut np = dynamic::NodeProperty::new();
        let mut ep = dynamic::EdgeProperty::new();
        for seq in ["AC", "GT", "TTT"] {
            g.add_node(0).unwrap();
            np.push(seq, "");
        }
        g.add_edge(Link::dovetail(1, 2), false).unwrap();
        ep.insert(Link::dovetail(1, 2), 0);
        g.add_edge(Link::dovetail(2, 3), false).unwrap();
        ep.insert(Link::dovetail(2, 3), 0);

        let mut gp = dynamic::GraphProperty::new();
        gp.add_path_with_steps("x", [1u64, 2, 3], [false, false, true], false, |id| g.has_node(id))
            .unwrap();

        let (sg, _node_props) = build::build(&g, &np, &ep);
        let spaths = build::build_paths(&gp, &g, &sg);
        assert_eq!(spaths.len(), 1);
        let view = spaths.path(0).unwrap();
        assert_eq!(view.name(), "x");
        assert_eq!(view.len(), 3);
        assert!(view.is_reverse(2));
        assert!(!view.is_reverse(0));
    }
}
