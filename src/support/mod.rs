/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Thin wrappers around [`sux`]'s packed-integer-vector and bit-vector
//! primitives, giving the rest of the crate exactly the two operations the
//! specification calls "external dep; interface only": a variable-width
//! packed integer array, and a bit-vector with `rank_1`/`select_1`
//! support. Everything above this module talks to [`PackedIntVec`] and
//! [`RankSelectBitVec`]/[`BitVecBuilder`] only, never to `sux` directly, so
//! that a future swap of the underlying succinct-data-structure crate stays
//! local to this file.

mod packed;
mod rank_select;

pub use packed::PackedIntVec;
pub use rank_select::{BitVecBuilder, RankSelectBitVec};
