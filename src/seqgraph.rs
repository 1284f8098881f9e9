/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The [`DynamicSeqGraph`]/[`SuccinctSeqGraph`] facades: each composes a
//! graph topology ([`dynamic::DirectedGraph`] or [`succinct::DirectedGraph`])
//! with its matching properties ([`dynamic::NodeProperty`]/
//! [`dynamic::EdgeProperty`]/[`dynamic::GraphProperty`], or
//! [`succinct::NodeProperty`]/[`succinct::GraphProperty`]) behind one
//! uniform query surface, plus sequence and overlap accessors. This is the
//! type most callers reach for directly; the bare `dynamic`/`succinct`
//! module types exist mostly to compose it.

use crate::dynamic;
use crate::error::{GraphError, Result};
use crate::side::{Bidirected, Direction, Id, Link};
use crate::succinct;
use epserde::Epserde;

/// The mutable, build-time sequence graph: topology plus node/edge/path
/// properties, grown one `add_*` call at a time.
#[derive(Debug, Clone)]
pub struct DynamicSeqGraph<D: Direction = Bidirected> {
    graph: dynamic::DirectedGraph<D>,
    node_prop: dynamic::NodeProperty,
    edge_prop: dynamic::EdgeProperty,
    graph_prop: dynamic::GraphProperty,
}

impl<D: Direction> Default for DynamicSeqGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Direction> DynamicSeqGraph<D> {
    pub fn new() -> Self {
        DynamicSeqGraph {
            graph: dynamic::DirectedGraph::new(),
            node_prop: dynamic::NodeProperty::new(),
            edge_prop: dynamic::EdgeProperty::new(),
            graph_prop: dynamic::GraphProperty::new(),
        }
    }

    #[inline]
    pub fn topology(&self) -> &dynamic::DirectedGraph<D> {
        &self.graph
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn has_node(&self, id: Id) -> bool {
        self.graph.has_node(id)
    }

    #[inline]
    pub fn has_edge(&self, link: Link) -> bool {
        self.graph.has_edge(link)
    }

    #[inline]
    pub fn has_path(&self, pid: u64) -> bool {
        self.graph_prop.path(pid).is_some()
    }

    /// Adds a node with sequence `sequence` and name `name`. `ext_id == 0`
    /// allocates the next free id; a non-zero `ext_id` that already exists
    /// fails with [`GraphError::DuplicateId`].
    pub fn add_node(&mut self, ext_id: Id, sequence: impl Into<String>, name: impl Into<String>) -> Result<Id> {
        let id = self.graph.add_node(ext_id)?;
        self.node_prop.push(sequence, name);
        log::debug!("added node {id}");
        Ok(id)
    }

    /// Appends `count` nodes with empty sequence/name, invoking `cb(id)`
    /// for each freshly allocated id.
    pub fn add_nodes(&mut self, count: usize, mut cb: impl FnMut(Id)) -> Result<()> {
        for _ in 0..count {
            let id = self.add_node(0, "", "")?;
            cb(id);
        }
        Ok(())
    }

    /// Overwrites the sequence/name of an existing node. Fails with
    /// [`GraphError::UnknownId`] if `id` does not exist.
    pub fn update_node(&mut self, id: Id, sequence: impl Into<String>, name: impl Into<String>) -> Result<()> {
        if !self.graph.has_node(id) {
            return Err(GraphError::UnknownId(id));
        }
        self.node_prop.update(self.graph.id_to_rank(id), sequence, name)
    }

    /// Adds a link with the given overlap between two existing nodes.
    pub fn add_edge(&mut self, link: Link, overlap: usize, force: bool) -> Result<()> {
        self.graph.add_edge(link, force)?;
        self.edge_prop.insert(link, overlap);
        log::debug!("added edge {link:?} overlap={overlap}");
        Ok(())
    }

    pub fn for_each_edges_out(&self, id: Id, cb: impl FnMut(crate::side::Side, u8) -> bool) -> bool {
        self.graph.for_each_edges_out(id, cb)
    }

    pub fn for_each_edges_in(&self, id: Id, cb: impl FnMut(crate::side::Side, u8) -> bool) -> bool {
        self.graph.for_each_edges_in(id, cb)
    }

    pub fn for_each_node(&self, cb: impl FnMut(usize, Id) -> bool) -> bool {
        self.graph.for_each_node(cb)
    }

    #[inline]
    pub fn for_each_side(&self, id: Id, cb: impl FnMut(crate::side::Side) -> bool) -> bool {
        crate::side::for_each_side::<D>(id, cb)
    }

    #[inline]
    pub fn start_side(&self, id: Id) -> crate::side::Side {
        crate::side::Side::start(id)
    }

    #[inline]
    pub fn end_side(&self, id: Id) -> crate::side::Side {
        crate::side::Side::end(id)
    }

    #[inline]
    pub fn outdegree(&self, id: Id) -> usize {
        self.graph.outdegree(id)
    }

    #[inline]
    pub fn indegree(&self, id: Id) -> usize {
        self.graph.indegree(id)
    }

    #[inline]
    pub fn node_sequence(&self, id: Id) -> &str {
        self.node_prop.sequence(self.graph.id_to_rank(id))
    }

    #[inline]
    pub fn node_name(&self, id: Id) -> &str {
        self.node_prop.name(self.graph.id_to_rank(id))
    }

    #[inline]
    pub fn node_length(&self, id: Id) -> usize {
        self.node_sequence(id).len()
    }

    #[inline]
    pub fn edge_overlap(&self, link: Link) -> Option<usize> {
        self.edge_prop.at(link)
    }

    /// Creates an empty path named `name`.
    pub fn add_path(&mut self, name: impl Into<String>, force: bool) -> Result<u64> {
        self.graph_prop.add_path(name, force)
    }

    /// Creates a path named `name` with the given oriented steps in one
    /// call.
    pub fn add_path_with_steps(
        &mut self,
        name: impl Into<String>,
        ids: impl IntoIterator<Item = Id>,
        reversed: impl IntoIterator<Item = bool>,
        force: bool,
    ) -> Result<u64> {
        let graph = &self.graph;
        self.graph_prop
            .add_path_with_steps(name, ids, reversed, force, |id| graph.has_node(id))
    }

    /// Appends steps to an existing path.
    pub fn extend_path(
        &mut self,
        pid: u64,
        ids: impl IntoIterator<Item = Id>,
        reversed: impl IntoIterator<Item = bool>,
        force: bool,
    ) -> Result<()> {
        let graph = &self.graph;
        self.graph_prop.extend_path(pid, ids, reversed, force, &mut |id| graph.has_node(id))
    }

    #[inline]
    pub fn path_length(&self, pid: u64) -> usize {
        self.graph_prop.path_length(pid)
    }

    #[inline]
    pub fn path_name(&self, pid: u64) -> &str {
        self.graph_prop.path_name(pid)
    }

    #[inline]
    pub fn path(&self, pid: u64) -> Option<dynamic::PathView<'_>> {
        self.graph_prop.path(pid)
    }

    pub fn for_each_path(&self, cb: impl FnMut(u64, &str) -> bool) -> bool {
        self.graph_prop.for_each_path(cb)
    }

    #[inline]
    pub fn id_to_rank(&self, id: Id) -> usize {
        self.graph.id_to_rank(id)
    }

    #[inline]
    pub fn rank_to_id(&self, rank: usize) -> Id {
        self.graph.rank_to_id(rank)
    }

    /// Permutes nodes: `perm[new_rank - 1] = old_rank - 1`.
    pub fn sort_nodes(&mut self, perm: &[usize]) -> Result<()> {
        self.graph.sort_nodes(perm)
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_prop.clear();
        self.edge_prop.clear();
        self.graph_prop.clear();
        log::info!("cleared dynamic seq graph");
    }
}

/// The immutable, query-time sequence graph: one packed node-record
/// vector, its sequence/name `StringSet`s, and its path vector, built in
/// one pass from a [`DynamicSeqGraph`] by [`SuccinctSeqGraph::build`].
///
/// Serializable with [ε-serde](https://crates.io/crates/epserde), per §6's
/// persisted state layout (`node_count`, `edge_count`, `nodes`, `ids_bv`,
/// the two `StringSet`s, then the path container): rank/select supports are
/// not persisted, only rebuilt on load. With the `serde` feature, also
/// serializable with [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Epserde, Debug, Clone)]
pub struct SuccinctSeqGraph<D: Direction = Bidirected> {
    graph: succinct::DirectedGraph<D>,
    node_prop: succinct::NodeProperty,
    graph_prop: succinct::GraphProperty,
}

impl<D: Direction> SuccinctSeqGraph<D> {
    /// Builds a succinct graph from a dynamic one. The destination is
    /// always populated fresh (there is no partial/incremental succinct
    /// build), matching the "clear, then populate" atomicity the spec
    /// requires of assignment.
    pub fn build(src: &DynamicSeqGraph<D>) -> Self {
        log::info!(
            "building succinct graph from {} nodes, {} edges",
            src.node_count(),
            src.edge_count()
        );
        let (graph, node_prop) = succinct::build(&src.graph, &src.node_prop, &src.edge_prop);
        let graph_prop = succinct::build_paths(&src.graph_prop, &src.graph, &graph);
        SuccinctSeqGraph { graph, node_prop, graph_prop }
    }

    #[inline]
    pub fn topology(&self) -> &succinct::DirectedGraph<D> {
        &self.graph
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn has_node(&self, id: Id) -> bool {
        self.graph.has_node(id)
    }

    #[inline]
    pub fn has_edge(&self, from: Id, to: Id, link_type: u8) -> bool {
        self.graph.has_edge(from, to, link_type)
    }

    #[inline]
    pub fn has_path(&self, pid: u64) -> bool {
        self.graph_prop.path(pid).is_some()
    }

    pub fn for_each_edges_out(&self, id: Id, cb: impl FnMut(Id, u8, usize) -> bool) -> bool {
        self.graph.for_each_edges_out(id, cb)
    }

    pub fn for_each_edges_in(&self, id: Id, cb: impl FnMut(Id, u8, usize) -> bool) -> bool {
        self.graph.for_each_edges_in(id, cb)
    }

    pub fn for_each_node(&self, cb: impl FnMut(usize, Id) -> bool) -> bool {
        self.graph.for_each_node(cb)
    }

    #[inline]
    pub fn for_each_side(&self, id: Id, cb: impl FnMut(crate::side::Side) -> bool) -> bool {
        crate::side::for_each_side::<D>(id, cb)
    }

    #[inline]
    pub fn start_side(&self, id: Id) -> crate::side::Side {
        crate::side::Side::start(id)
    }

    #[inline]
    pub fn end_side(&self, id: Id) -> crate::side::Side {
        crate::side::Side::end(id)
    }

    #[inline]
    pub fn outdegree(&self, id: Id) -> usize {
        self.graph.outdegree(id)
    }

    #[inline]
    pub fn indegree(&self, id: Id) -> usize {
        self.graph.indegree(id)
    }

    #[inline]
    pub fn node_sequence(&self, id: Id) -> String {
        self.node_prop.sequence_at(self.graph.seq_start(id), self.graph.seq_length(id))
    }

    #[inline]
    pub fn node_length(&self, id: Id) -> usize {
        self.graph.seq_length(id)
    }

    #[inline]
    pub fn edge_overlap(&self, from: Id, to: Id, link_type: u8) -> Option<usize> {
        self.graph.edge_overlap(from, to, link_type)
    }

    #[inline]
    pub fn path_length(&self, pid: u64) -> usize {
        self.graph_prop.path_length(pid)
    }

    #[inline]
    pub fn path_name(&self, pid: u64) -> &str {
        self.graph_prop.path_name(pid)
    }

    #[inline]
    pub fn path(&self, pid: u64) -> Option<succinct::PathView<'_>> {
        self.graph_prop.path(pid)
    }

    pub fn for_each_path(&self, cb: impl FnMut(u64, &str) -> bool) -> bool {
        self.graph_prop.for_each_path(cb)
    }

    #[inline]
    pub fn id_to_rank(&self, id: Id) -> usize {
        self.graph.id_to_rank(id)
    }

    #[inline]
    pub fn rank_to_id(&self, rank: usize) -> Id {
        self.graph.rank_to_id(rank)
    }

    #[inline]
    pub fn successor_id(&self, id: Id) -> Id {
        self.graph.successor_id(id)
    }

    #[inline]
    pub fn coordinate_id(&self, id: Id) -> Id {
        self.graph.coordinate_id(id)
    }

    /// The node properties' sequence `StringSet`, used directly by the
    /// position/id/offset translations of [`crate::algo`].
    pub(crate) fn sequences(&self) -> &crate::stringset::StringSet<crate::alphabet::Dna5> {
        self.node_prop.seqset()
    }
}

impl<D: Direction> From<&DynamicSeqGraph<D>> for SuccinctSeqGraph<D> {
    fn from(src: &DynamicSeqGraph<D>) -> Self {
        SuccinctSeqGraph::build(src)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::side::Link;

    fn tiny() -> DynamicSeqGraph {
        let mut g = DynamicSeqGraph::new();
        let n1 = g.add_node(0, "CAAATAAG", "n1").unwrap();
        let n2 = g.add_node(0, "AC", "n2").unwrap();
        g.add_edge(Link::dovetail(n1, n2), 0, false).unwrap();
        g
    }

    #[test]
    fn dynamic_facade_roundtrips_sequence_and_edges() {
        let g = tiny();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.node_sequence(1), "CAAATAAG");
        assert!(g.has_edge(Link::dovetail(1, 2)));
        assert_eq!(g.edge_overlap(Link::dovetail(1, 2)), Some(0));
    }

    #[test]
    fn dynamic_to_succinct_preserves_topology_and_sequence() {
        let dyn_g = tiny();
        let sg = SuccinctSeqGraph::build(&dyn_g);
        assert_eq!(sg.node_count(), 2);
        assert_eq!(sg.edge_count(), 1);
        let id1 = sg.rank_to_id(1);
        let id2 = sg.rank_to_id(2);
        assert_eq!(sg.node_sequence(id1), "CAAATAAG");
        assert!(sg.has_edge(id1, id2, 2));
        assert_eq!(sg.edge_overlap(id1, id2, 2), Some(0));
    }

    #[test]
    fn update_node_rejects_unknown_id() {
        let mut g = DynamicSeqGraph::<Bidirected>::new();
        assert!(matches!(
            g.update_node(5, "ACGT", "x"),
            Err(GraphError::UnknownId(5))
        ));
    }

    #[test]
    fn path_roundtrips_through_dynamic_facade() {
        let mut g = tiny();
        let pid = g.add_path_with_steps("x", [1u64, 2], [false, true], false).unwrap();
        assert_eq!(g.path_length(pid), 2);
        let view = g.path(pid).unwrap();
        assert!(view.is_reverse(1));
    }

    #[test]
    fn clear_empties_dynamic_facade() {
        let mut g = tiny();
        g.clear();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_node(1));
    }
}
