/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Interface stubs for the file-format collaborators this crate is meant
//! to be driven by. No parsing, no file I/O: every type here is a plain
//! in-memory record shape and every trait method's doc comment names the
//! exact [`crate::seqgraph::DynamicSeqGraph`] call sequence a collaborator
//! crate must make to honor this core's invariants. Gated by the `collab`
//! feature, default-on.

use crate::coordinate::{CoordinateSystem, Stoid};
use crate::error::Result;
use crate::side::Id;

/// One GFA segment: a named sequence. The core maps `name` through
/// `coord.resolve(name)` to obtain the internal id passed to
/// [`DynamicSeqGraph::add_node`](crate::seqgraph::DynamicSeqGraph::add_node),
/// then stores `sequence` and `name` on that node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfaSegment {
    pub name: String,
    pub sequence: String,
}

/// One GFA link. `overlap` is a CIGAR-style length, already reduced to a
/// single integer by the parser (the core does not parse CIGAR strings).
///
/// Before calling `add_edge`, a collaborator must check
/// `elem_type ∈ {1, 2} ∧ sink_begin == 0 ∧ source_end == source_length ∧
/// source_end − source_begin == sink_end` (a simple dovetail overlap) and
/// raise [`crate::error::GraphError::UnsupportedOverlap`] or
/// [`crate::error::GraphError::NonDovetailBoundary`] itself otherwise —
/// `add_edge` only records the overlap length, it does not re-derive this
/// check from GFA's alignment fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfaLink {
    pub from_name: String,
    pub from_forward: bool,
    pub to_name: String,
    pub to_forward: bool,
    pub overlap: usize,
}

/// One GFA path: an ordered list of (segment name, forward?) steps. Maps
/// to `add_path(name, force)` followed by one `extend_path` call per step,
/// with each step's `reversed` flag set to `!forward`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfaPath {
    pub name: String,
    pub steps: Vec<(String, bool)>,
}

/// Marker for a GFA-family collaborator's node-id coordinate system: names
/// are decimal strings parsed into [`Id`], matching spec §6's "default
/// coordinate system: `Stoid`".
pub type GfaCoordinateSystem = Stoid;

/// Returns a fresh default coordinate system for a GFA collaborator.
pub fn gfa_default_coordinate_system() -> impl CoordinateSystem<String> {
    Stoid
}

/// One VG `Node`: `id`, `sequence`, `name`. Maps directly to
/// `add_node(id, sequence, name)` under the `Identity` coordinate system
/// (VG node ids are already the internal id space).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VgNode {
    pub id: Id,
    pub sequence: String,
    pub name: String,
}

/// One VG `Edge`. The side on the source is `!from_start`; the side on the
/// sink is `to_end`. Maps to `add_edge` with those two flags as the
/// `from`/`to` side tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VgEdge {
    pub from: Id,
    pub from_start: bool,
    pub to: Id,
    pub to_end: bool,
    pub overlap: usize,
}

/// One VG path `Mapping`: a step's node id, orientation, and rank within
/// the path. Ranks must be strictly increasing by one within a path, or
/// the core's `extend_path` raises
/// [`crate::error::GraphError::PathOrderMismatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VgMapping {
    pub node_id: Id,
    pub is_reverse: bool,
    pub rank: u64,
}

/// Callback-driven traversal surface a VG HashGraph collaborator presents
/// instead of owning its own in-memory node/edge/path lists. Semantics
/// match [`VgNode`]/[`VgEdge`]/[`VgMapping`] exactly — a HashGraph's
/// overlap is always `0`, since handle graphs do not record alignment
/// overlap between adjacent nodes.
pub trait HashGraphSource {
    /// Calls `cb` once per node, as `(id, sequence, name)`.
    fn for_each_handle(&self, cb: impl FnMut(Id, &str, &str) -> bool) -> bool;

    /// Calls `cb` once per edge, as `(from, from_start, to, to_end)`;
    /// overlap is implicitly `0`.
    fn for_each_edge(&self, cb: impl FnMut(Id, bool, Id, bool) -> bool) -> bool;

    /// Calls `cb` once per path name.
    fn for_each_path_handle(&self, cb: impl FnMut(&str) -> bool) -> bool;

    /// Calls `cb` once per step of path `name`, in rank order, as
    /// `(node_id, is_reverse)`.
    fn scan_path(&self, name: &str, cb: impl FnMut(Id, bool) -> bool) -> bool;
}

/// The VG family's default coordinate system: node ids are used verbatim,
/// per spec §6 ("Default coordinate system: `Identity` over `int64`").
pub fn vg_default_coordinate_system() -> impl CoordinateSystem<Id> {
    crate::coordinate::Identity
}

/// File-extension routing a collaborator dispatches on before picking a
/// parser: `.vg` selects the VG family (Protobuf if compiled in,
/// otherwise HashGraph), `.gfa` selects the GFA family. Parsing either
/// family is out of scope here; this only names the contract.
pub fn route_by_extension(path: &str) -> Option<FormatFamily> {
    if path.ends_with(".gfa") {
        Some(FormatFamily::Gfa)
    } else if path.ends_with(".vg") {
        Some(FormatFamily::Vg)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    Gfa,
    Vg,
}

/// Validates a GFA link's overlap fields against the simple-dovetail rule
/// from spec §6, without touching a graph. A real GFA parser calls this
/// before `add_edge`; `add_edge` itself does not repeat this check, since
/// it has no access to `source_begin`/`source_length` once reduced to a
/// single overlap length.
pub fn check_gfa_dovetail(
    elem_type: u8,
    sink_begin: usize,
    source_begin: usize,
    source_end: usize,
    source_length: usize,
    sink_end: usize,
) -> Result<()> {
    use crate::error::GraphError;
    if elem_type != 1 && elem_type != 2 {
        return Err(GraphError::UnsupportedOverlap(crate::side::Link::dovetail(0, 0)));
    }
    if sink_begin != 0 || source_end != source_length || source_end - source_begin != sink_end {
        return Err(GraphError::NonDovetailBoundary {
            sink_begin,
            source_end,
            source_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn routes_by_file_extension() {
        assert_eq!(route_by_extension("pangenome.gfa"), Some(FormatFamily::Gfa));
        assert_eq!(route_by_extension("pangenome.vg"), Some(FormatFamily::Vg));
        assert_eq!(route_by_extension("pangenome.fa"), None);
    }

    #[test]
    fn dovetail_check_accepts_a_simple_overlap() {
        assert!(check_gfa_dovetail(1, 0, 0, 4, 4, 4).is_ok());
    }

    #[test]
    fn dovetail_check_rejects_a_nonzero_sink_begin() {
        assert!(check_gfa_dovetail(1, 2, 0, 4, 4, 4).is_err());
    }
}
