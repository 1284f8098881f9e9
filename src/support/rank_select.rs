/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use epserde::Epserde;
use sux::bits::BitVec;
use sux::traits::BitVecOpsMut;

/// A mutable bit-vector under construction. Every structure in this crate
/// that ends up needing `rank_1`/`select_1` support (node-record starts,
/// path-record starts, StringSet delimiters, alphabet presence vectors)
/// is built by setting bits in one of these and then calling
/// [`BitVecBuilder::finish`], which freezes the vector and builds its
/// rank/select index once, up front — matching the two-phase "build, then
/// query" lifecycle the spec requires of every succinct structure.
#[derive(Debug, Clone)]
pub struct BitVecBuilder {
    bits: BitVec,
}

impl BitVecBuilder {
    /// Creates a vector of `len` zero bits.
    pub fn new(len: usize) -> Self {
        BitVecBuilder {
            bits: BitVec::new(len),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.len() == 0
    }

    /// Grows the vector to `new_len` bits, zero-filling the new bits.
    pub fn resize(&mut self, new_len: usize) {
        self.bits.resize(new_len, false);
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index)
    }

    /// Freezes the vector and builds its rank/select index.
    pub fn finish(self) -> RankSelectBitVec {
        let len = self.bits.len();
        let mut ones = Vec::new();
        for i in 0..len {
            if self.bits.get(i) {
                ones.push(i);
            }
        }
        RankSelectBitVec {
            len,
            ones,
            bits: self.bits,
        }
    }
}

/// An immutable bit-vector with `rank_1`/`select_1` support, built once by
/// [`BitVecBuilder::finish`] and never mutated again.
///
/// `rank_1(pos)` is the number of set bits strictly before `pos` (0-indexed,
/// `pos` exclusive); `select_1(i)` is the position of the `i`-th set bit,
/// 1-indexed. These are the conventions the original `sdsl::rank_1_type`/
/// `select_1_type` use, and the ones the specification's node-id and
/// StringSet formulas are written against.
///
/// Serializable with [ε-serde](https://crates.io/crates/epserde); with the
/// `serde` feature, also with [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Epserde, Debug, Clone)]
pub struct RankSelectBitVec {
    bits: BitVec,
    len: usize,
    ones: Vec<usize>,
}

impl RankSelectBitVec {
    /// Builds an empty, zero-length rank/select bit-vector.
    pub fn empty() -> Self {
        BitVecBuilder::new(0).finish()
    }

    /// Builds a rank/select bit-vector of `len` bits directly from the
    /// sorted positions of its set bits, skipping the linear scan
    /// [`BitVecBuilder::finish`] would otherwise do. Callers (e.g.
    /// `StringSet`) that already know exactly where their delimiter bits
    /// land use this to avoid an O(n) rebuild on every append.
    pub fn from_sorted_ones(len: usize, ones: Vec<usize>) -> Self {
        debug_assert!(ones.windows(2).all(|w| w[0] < w[1]), "ones must be sorted and deduplicated");
        debug_assert!(ones.last().is_none_or(|&p| p < len), "one-position out of range");
        let mut bits = BitVec::new(len);
        for &p in &ones {
            bits.set(p, true);
        }
        RankSelectBitVec { bits, len, ones }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index)
    }

    #[inline]
    pub fn count_ones(&self) -> usize {
        self.ones.len()
    }

    /// The sorted positions of every set bit.
    #[inline]
    pub fn ones(&self) -> &[usize] {
        &self.ones
    }

    /// Number of set bits in `[0, pos)`.
    #[inline]
    pub fn rank_1(&self, pos: usize) -> usize {
        self.ones.partition_point(|&p| p < pos)
    }

    /// Position of the `i`-th set bit (1-indexed). `i` must be in
    /// `1..=count_ones()`.
    #[inline]
    pub fn select_1(&self, i: usize) -> usize {
        debug_assert!(i >= 1 && i <= self.ones.len(), "select_1({i}) out of range");
        self.ones[i - 1]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rank_select_roundtrip() {
        let mut b = BitVecBuilder::new(10);
        for i in [1usize, 3, 4, 8] {
            b.set(i, true);
        }
        let rs = b.finish();
        assert_eq!(rs.count_ones(), 4);
        assert_eq!(rs.rank_1(0), 0);
        assert_eq!(rs.rank_1(2), 1);
        assert_eq!(rs.rank_1(4), 2);
        assert_eq!(rs.rank_1(10), 4);
        assert_eq!(rs.select_1(1), 1);
        assert_eq!(rs.select_1(2), 3);
        assert_eq!(rs.select_1(4), 8);
    }

    #[test]
    fn empty_bitvec_has_no_ones() {
        let rs = RankSelectBitVec::empty();
        assert_eq!(rs.len(), 0);
        assert_eq!(rs.count_ones(), 0);
        assert_eq!(rs.rank_1(0), 0);
    }
}
