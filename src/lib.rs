/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A library for representing, building, and querying bidirected sequence
//! graphs — pangenome and variation graphs — in two interoperable forms.
//!
//! A [`dynamic`] graph supports incremental construction: nodes, edges and
//! paths are added one at a time, in any order, and the graph can be
//! queried while it grows. A [`succinct`] graph is derived from a dynamic
//! graph by [`succinct::build`] and stores the same information in
//! bit-packed arrays backed by rank/select indices, so that neighborhood
//! and path queries run in constant or logarithmic time without ever
//! decompressing the graph.
//!
//! The [`seqgraph`] module ties a graph topology ([`dynamic::DirectedGraph`]
//! or [`succinct::DirectedGraph`]) together with its node sequences, names
//! and paths behind the [`seqgraph::DynamicSeqGraph`] and
//! [`seqgraph::SuccinctSeqGraph`] facades, which are the types most callers
//! should use directly. [`algo`] holds the traversal and ordering
//! algorithms that work over either facade.
//!
//! Parsers for on-disk formats (GFA, VG Protobuf, VG HashGraph), CLI
//! tooling and benchmarking are deliberately out of scope for this crate;
//! see the [`collab`] module for the interface such collaborators are
//! expected to call.

#![deny(unreachable_patterns)]
#![allow(clippy::type_complexity)]

pub mod algo;
pub mod alphabet;
#[cfg(feature = "collab")]
pub mod collab;
pub mod coordinate;
pub mod dynamic;
pub mod error;
pub mod path;
pub mod seqgraph;
pub mod side;
pub mod stringset;
pub mod succinct;
pub mod support;

pub mod prelude {
    pub use crate::algo::*;
    pub use crate::alphabet::*;
    pub use crate::coordinate::*;
    pub use crate::error::*;
    pub use crate::path::*;
    pub use crate::seqgraph::*;
    pub use crate::side::*;
    pub use crate::stringset::StringSet;
}
