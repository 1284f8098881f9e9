/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error kinds raised at the mutating boundary of a graph.
//!
//! Read-only queries never raise: missing ranks, ids and lengths are
//! reported as the sentinel `0`, and `has_*` predicates always give a
//! non-throwing check path. Mutators (`add_node`, `add_edge`, `add_path`,
//! `extend_path`, `update_node`) raise one of the variants below.

use crate::side::Link;

/// The set of errors a mutating graph operation can raise.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// `add_node` tried to create a node whose id already exists, or
    /// `add_edge` tried to add a link that already exists, without `force`.
    #[error("id {0} already exists")]
    DuplicateId(u64),

    /// `update_node`, `extend_path`, or a neighborhood query targeted an id
    /// that does not exist in the graph.
    #[error("id {0} does not exist")]
    UnknownId(u64),

    /// A GFA edge record was not a simple dovetail overlap.
    #[error("unsupported overlap on link {0:?}: only simple dovetail overlaps are supported")]
    UnsupportedOverlap(Link),

    /// A GFA edge record's alignment does not describe a dovetail boundary:
    /// `sink_begin != 0` or `source_end != source_length`.
    #[error(
        "non-dovetail boundary: sink_begin={sink_begin}, source_end={source_end}, source_length={source_length}"
    )]
    NonDovetailBoundary {
        sink_begin: usize,
        source_end: usize,
        source_length: usize,
    },

    /// `add_path` for an existing path name without `force`.
    #[error("path {0:?} already exists")]
    DuplicatePath(String),

    /// VG mapping ranks within a path were not strictly increasing by 1.
    #[error("path rank mismatch: expected {expected}, found {found}")]
    PathOrderMismatch { expected: u64, found: u64 },

    /// A StringSet or packed-vector access went past the end of the
    /// container.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A collaborator (parser) could not open its backing file or stream.
    /// The core never raises this itself.
    #[error("I/O unavailable: {0}")]
    IoUnavailable(String),
}

/// Convenience alias used throughout the crate's mutating operations.
pub type Result<T> = core::result::Result<T, GraphError>;
