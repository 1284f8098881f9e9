/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{GraphError, Result};
use crate::side::{for_each_side, opposite_side, Bidirected, Direction, Id, Link, Side};
use std::collections::HashMap;
use std::marker::PhantomData;

/// A mutable bidirected (or, under [`crate::side::Directed`], plain
/// directed) graph: an ordered node list, a rank map, and per-side
/// adjacency lists.
///
/// Generic over a [`Direction`] marker rather than a runtime flag, so a
/// plain directed graph is a compile-time specialization of the same code
/// rather than a branch taken at every traversal step.
#[derive(Debug, Clone)]
pub struct DirectedGraph<D: Direction = Bidirected> {
    nodes: Vec<Id>,
    rank_map: HashMap<Id, usize>,
    adj_out: HashMap<Side, Vec<Side>>,
    adj_in: HashMap<Side, Vec<Side>>,
    edge_count: usize,
    _direction: PhantomData<D>,
}

impl<D: Direction> Default for DirectedGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Direction> DirectedGraph<D> {
    /// An empty graph.
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            rank_map: HashMap::new(),
            adj_out: HashMap::new(),
            adj_in: HashMap::new(),
            edge_count: 0,
            _direction: PhantomData,
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn has_node(&self, id: Id) -> bool {
        self.rank_map.contains_key(&id)
    }

    #[inline]
    pub fn id_to_rank(&self, id: Id) -> usize {
        self.rank_map.get(&id).copied().unwrap_or(0)
    }

    #[inline]
    pub fn rank_to_id(&self, rank: usize) -> Id {
        if rank == 0 || rank > self.nodes.len() {
            0
        } else {
            self.nodes[rank - 1]
        }
    }

    /// Iterates over node ids in rank order.
    pub fn for_each_node(&self, mut cb: impl FnMut(usize, Id) -> bool) -> bool {
        for (i, &id) in self.nodes.iter().enumerate() {
            if !cb(i + 1, id) {
                return false;
            }
        }
        true
    }

    fn next_id(&self) -> Id {
        let candidate = self.nodes.last().copied().unwrap_or(0) + 1;
        if self.rank_map.contains_key(&candidate) {
            self.nodes.iter().copied().max().unwrap_or(0) + 1
        } else {
            candidate
        }
    }

    /// Adds a node, choosing `id = last_id + 1` when `ext_id == 0`. Fails
    /// with [`GraphError::DuplicateId`] if `ext_id` is already present.
    pub fn add_node(&mut self, ext_id: Id) -> Result<Id> {
        let id = if ext_id == 0 { self.next_id() } else { ext_id };
        if self.rank_map.contains_key(&id) {
            return Err(GraphError::DuplicateId(id));
        }
        self.nodes.push(id);
        self.rank_map.insert(id, self.nodes.len());
        Ok(id)
    }

    /// Appends `count` nodes with freshly allocated ids, invoking `cb(id)`
    /// for each.
    pub fn add_nodes(&mut self, count: usize, mut cb: impl FnMut(Id)) -> Result<()> {
        for _ in 0..count {
            let id = self.add_node(0)?;
            cb(id);
        }
        Ok(())
    }

    /// Adds a link between two existing nodes. Rejects a link identical to
    /// one already present unless `force` is set; distinct link types
    /// between the same pair of nodes are never considered duplicates.
    pub fn add_edge(&mut self, link: Link, force: bool) -> Result<()> {
        if !self.has_node(link.from.id) {
            return Err(GraphError::UnknownId(link.from.id));
        }
        if !self.has_node(link.to.id) {
            return Err(GraphError::UnknownId(link.to.id));
        }
        if !force && self.has_edge(link) {
            return Err(GraphError::DuplicateId(link.from.id));
        }
        self.adj_out.entry(link.from).or_default().push(link.to);
        self.adj_in.entry(link.to).or_default().push(link.from);
        self.edge_count += 1;
        Ok(())
    }

    /// Whether `link` is present, scanning whichever of `adj_out[from]` /
    /// `adj_in[to]` is shorter (both lists are expected to stay small).
    pub fn has_edge(&self, link: Link) -> bool {
        let out = self.adj_out.get(&link.from).map_or(0, Vec::len);
        let inn = self.adj_in.get(&link.to).map_or(0, Vec::len);
        if out <= inn {
            self.adj_out
                .get(&link.from)
                .is_some_and(|v| v.contains(&link.to))
        } else {
            self.adj_in.get(&link.to).is_some_and(|v| v.contains(&link.from))
        }
    }

    /// Walks every outgoing edge of `id` (both sides, for a bidirected
    /// graph), handing `cb` the neighbor side and the link type.
    pub fn for_each_edges_out(&self, id: Id, mut cb: impl FnMut(Side, u8) -> bool) -> bool {
        for_each_side::<D>(id, |side| {
            if let Some(neighbors) = self.adj_out.get(&side) {
                for &to in neighbors {
                    let link = Link::new(side, to);
                    if !cb(to, link.link_type()) {
                        return false;
                    }
                }
            }
            true
        })
    }

    /// Walks every incoming edge of `id`, handing `cb` the neighbor side
    /// and the link type of the edge as stored (`from -> id`).
    pub fn for_each_edges_in(&self, id: Id, mut cb: impl FnMut(Side, u8) -> bool) -> bool {
        for_each_side::<D>(id, |side| {
            if let Some(neighbors) = self.adj_in.get(&side) {
                for &from in neighbors {
                    let link = Link::new(from, side);
                    if !cb(from, link.link_type()) {
                        return false;
                    }
                }
            }
            true
        })
    }

    pub fn outdegree(&self, id: Id) -> usize {
        let mut total = 0;
        for_each_side::<D>(id, |side| {
            total += self.adj_out.get(&side).map_or(0, Vec::len);
            true
        });
        total
    }

    pub fn indegree(&self, id: Id) -> usize {
        let mut total = 0;
        for_each_side::<D>(id, |side| {
            total += self.adj_in.get(&side).map_or(0, Vec::len);
            true
        });
        total
    }

    /// The side of `id` opposite `side`, under this graph's [`Direction`].
    #[inline]
    pub fn opposite_side(&self, side: Side) -> Side {
        opposite_side::<D>(side)
    }

    /// Permutes the node list: `perm[new_rank - 1] = old_rank - 1`. Rebuilds
    /// the rank map; adjacency and edge counts are untouched since they are
    /// keyed by id, not rank.
    pub fn sort_nodes(&mut self, perm: &[usize]) -> Result<()> {
        if perm.len() != self.nodes.len() {
            return Err(GraphError::IndexOutOfRange {
                index: perm.len(),
                len: self.nodes.len(),
            });
        }
        let old_nodes = self.nodes.clone();
        for (new_rank_m1, &old_rank_m1) in perm.iter().enumerate() {
            self.nodes[new_rank_m1] = old_nodes[old_rank_m1];
        }
        self.rank_map.clear();
        for (i, &id) in self.nodes.iter().enumerate() {
            self.rank_map.insert(id, i + 1);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.rank_map.clear();
        self.adj_out.clear();
        self.adj_in.clear();
        self.edge_count = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::side::{Directed, Link};

    #[test]
    fn add_node_allocates_sequential_ids() {
        let mut g = DirectedGraph::<Bidirected>::new();
        assert_eq!(g.add_node(0).unwrap(), 1);
        assert_eq!(g.add_node(0).unwrap(), 2);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn add_node_rejects_duplicate_external_id() {
        let mut g = DirectedGraph::<Bidirected>::new();
        g.add_node(5).unwrap();
        assert!(matches!(g.add_node(5), Err(GraphError::DuplicateId(5))));
    }

    #[test]
    fn add_edge_requires_existing_endpoints() {
        let mut g = DirectedGraph::<Bidirected>::new();
        g.add_node(1).unwrap();
        let link = Link::dovetail(1, 2);
        assert!(matches!(g.add_edge(link, false), Err(GraphError::UnknownId(2))));
    }

    #[test]
    fn has_edge_true_only_for_added_direction() {
        let mut g = DirectedGraph::<Bidirected>::new();
        g.add_node(1).unwrap();
        g.add_node(2).unwrap();
        let link = Link::dovetail(1, 2);
        g.add_edge(link, false).unwrap();
        assert!(g.has_edge(link));
        assert!(!g.has_edge(link.reverse()));
    }

    #[test]
    fn self_loop_increments_both_degrees() {
        let mut g = DirectedGraph::<Bidirected>::new();
        g.add_node(1).unwrap();
        g.add_edge(Link::dovetail(1, 1), false).unwrap();
        assert_eq!(g.outdegree(1), 1);
        assert_eq!(g.indegree(1), 1);
    }

    #[test]
    fn sort_nodes_rebuilds_rank_map() {
        let mut g = DirectedGraph::<Bidirected>::new();
        g.add_node(0).unwrap(); // id 1, rank 1
        g.add_node(0).unwrap(); // id 2, rank 2
        g.add_node(0).unwrap(); // id 3, rank 3
        g.sort_nodes(&[2, 0, 1]).unwrap();
        assert_eq!(g.rank_to_id(1), 3);
        assert_eq!(g.rank_to_id(2), 1);
        assert_eq!(g.rank_to_id(3), 2);
        assert_eq!(g.id_to_rank(3), 1);
    }

    #[test]
    fn directed_graph_has_single_link_type() {
        let mut g = DirectedGraph::<Directed>::new();
        g.add_node(1).unwrap();
        g.add_node(2).unwrap();
        g.add_edge(Link::from_ids(1, false, 2, false), false).unwrap();
        let mut seen = Vec::new();
        g.for_each_edges_out(1, |side, lt| {
            seen.push((side, lt));
            true
        });
        assert_eq!(seen, vec![(Side::start(2), 0)]);
    }

    #[test]
    fn duplicate_edge_rejected_without_force() {
        let mut g = DirectedGraph::<Bidirected>::new();
        g.add_node(1).unwrap();
        g.add_node(2).unwrap();
        let link = Link::dovetail(1, 2);
        g.add_edge(link, false).unwrap();
        assert!(g.add_edge(link, false).is_err());
        assert!(g.add_edge(link, true).is_ok());
        assert_eq!(g.edge_count(), 2);
    }
}
