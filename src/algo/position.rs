/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::seqgraph::SuccinctSeqGraph;
use crate::side::{Direction, Id};

/// The node whose sequence the concatenated-sequence position `pos` falls
/// in. `pos` is an absolute offset into the Succinct graph's packed
/// sequence `StringSet`, not a per-node offset.
pub fn position_to_id<D: Direction>(graph: &SuccinctSeqGraph<D>, pos: usize) -> Id {
    let rank = graph.sequences().idx(pos) + 1;
    graph.rank_to_id(rank)
}

/// The offset of `pos` within its owning node's sequence.
pub fn position_to_offset<D: Direction>(graph: &SuccinctSeqGraph<D>, pos: usize) -> usize {
    let idx = graph.sequences().idx(pos);
    pos - graph.sequences().start_position(idx)
}

/// The concatenated-sequence position at which `id`'s sequence begins.
pub fn id_to_position<D: Direction>(graph: &SuccinctSeqGraph<D>, id: Id) -> usize {
    let rank = graph.id_to_rank(id);
    graph.sequences().start_position(rank - 1)
}

/// `id`'s sequence start position minus every delimiter before it — i.e.
/// the position `id`'s sequence would start at if the packed sequence
/// vector had no delimiter codes at all.
pub fn id_to_charorder<D: Direction>(graph: &SuccinctSeqGraph<D>, id: Id) -> usize {
    let idx = graph.id_to_rank(id) - 1;
    graph.sequences().start_position(idx) - idx
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seqgraph::DynamicSeqGraph;
    use crate::side::Link;

    fn built() -> SuccinctSeqGraph {
        let mut g = DynamicSeqGraph::new();
        g.add_node(0, "AC", "n1").unwrap();
        g.add_node(0, "GTT", "n2").unwrap();
        g.add_edge(Link::dovetail(1, 2), 0, false).unwrap();
        SuccinctSeqGraph::build(&g)
    }

    #[test]
    fn position_to_id_and_offset_locate_the_owning_node() {
        let sg = built();
        // "AC" occupies positions 0-1, then a delimiter slot at position 2,
        // then "GTT" occupies positions 3-5.
        assert_eq!(position_to_id(&sg, 0), 1);
        assert_eq!(position_to_offset(&sg, 0), 0);
        assert_eq!(position_to_id(&sg, 1), 1);
        assert_eq!(position_to_offset(&sg, 1), 1);
        assert_eq!(position_to_id(&sg, 3), 2);
        assert_eq!(position_to_offset(&sg, 3), 0);
        assert_eq!(position_to_id(&sg, 4), 2);
        assert_eq!(position_to_offset(&sg, 4), 1);
        assert_eq!(position_to_id(&sg, 5), 2);
        assert_eq!(position_to_offset(&sg, 5), 2);
    }

    #[test]
    fn id_to_position_is_the_inverse_of_position_to_id() {
        let sg = built();
        assert_eq!(id_to_position(&sg, 1), 0);
        assert_eq!(id_to_position(&sg, 2), 3);
    }

    #[test]
    fn id_to_charorder_excludes_delimiters() {
        let sg = built();
        assert_eq!(id_to_charorder(&sg, 1), 0);
        assert_eq!(id_to_charorder(&sg, 2), 2);
    }
}
