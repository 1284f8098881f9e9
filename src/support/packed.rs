/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use epserde::Epserde;
use sux::bits::BitFieldVec;

/// A variable-width packed array of non-negative integers, backed by
/// [`sux::bits::BitFieldVec`]. Every element occupies `bit_width` bits,
/// fixed up front from the largest value the caller expects to store (every
/// builder in this crate runs a sizing pass before writing, so `bit_width`
/// is never revised after construction).
///
/// This is the "packed integer vector" half of the spec's C2 component: the
/// node record array, the path record array, and every `StringSet`'s code
/// vector are all one of these.
///
/// Serializable with [ε-serde](https://crates.io/crates/epserde); with the
/// `serde` feature, also with [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Epserde, Debug, Clone)]
pub struct PackedIntVec {
    inner: BitFieldVec<usize>,
}

impl PackedIntVec {
    /// Creates an empty vector whose elements are `bit_width` bits wide.
    pub fn new(bit_width: usize) -> Self {
        PackedIntVec {
            inner: BitFieldVec::with_capacity(bit_width.max(1), 0),
        }
    }

    /// Creates an empty vector with `bit_width` bits per element and room
    /// reserved for `capacity` elements.
    pub fn with_capacity(bit_width: usize, capacity: usize) -> Self {
        PackedIntVec {
            inner: BitFieldVec::with_capacity(bit_width.max(1), capacity),
        }
    }

    /// The number of bits needed to represent `value` (at least 1).
    #[inline]
    pub fn bit_width_for(value: usize) -> usize {
        (usize::BITS - value.leading_zeros()).max(1) as usize
    }

    #[inline]
    pub fn bit_width(&self) -> usize {
        self.inner.bit_width()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Appends `value` at the end. Panics (in debug builds) if `value`
    /// does not fit in `bit_width` bits.
    #[inline]
    pub fn push(&mut self, value: usize) {
        debug_assert!(
            Self::bit_width_for(value) <= self.bit_width() || value == 0,
            "value {value} does not fit in {} bits",
            self.bit_width()
        );
        self.inner.push(value);
    }

    /// Appends every value of `iter`.
    pub fn extend(&mut self, iter: impl IntoIterator<Item = usize>) {
        for v in iter {
            self.push(v);
        }
    }

    /// Reads the element at absolute position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.inner.get(index)
    }

    /// Overwrites the element at absolute position `index`. Used by the
    /// succinct identity-rewrite pass (§4.6) to replace a dynamic rank
    /// stored during layout with the neighbor's succinct id.
    #[inline]
    pub fn set(&mut self, index: usize, value: usize) {
        self.inner.set(index, value);
    }
}
