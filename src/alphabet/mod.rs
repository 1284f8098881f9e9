/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fixed, compressed character sets: 2-bit `Dna`, 3-bit `Dna5`, 8-bit `Char`.
//!
//! Each alphabet maps ASCII characters to dense codes and back through a
//! 256-bit presence vector indexed by `rank_1`/`select_1`, and, for the two
//! nucleotide alphabets, a `complement` table. The tables are process-wide
//! constant data built once behind a [`OnceLock`](std::sync::OnceLock) —
//! there is no mutable global state, only lazily-initialized read-only
//! state, matching the original library's `inline static const` tables.

use std::sync::OnceLock;

use crate::support::{BitVecBuilder, RankSelectBitVec};

fn presence_of(chars: &[u8]) -> RankSelectBitVec {
    let mut b = BitVecBuilder::new(256);
    for &c in chars {
        b.set(c as usize, true);
    }
    b.finish()
}

/// A fixed, compressed character set. `WIDTH` is the number of bits needed
/// to store one code (2 for `Dna`, 3 for `Dna5`, 8 for `Char`).
pub trait Alphabet: Clone + Copy + Default + core::fmt::Debug + 'static {
    const WIDTH: u8;

    /// Whether `c` is a character of this alphabet.
    fn is_valid(c: u8) -> bool;

    /// Maps an ASCII character to its 0-indexed code within the alphabet.
    /// Only meaningful when [`Alphabet::is_valid`] holds; callers that
    /// cannot guarantee this should check first.
    fn char2comp(c: u8) -> u8;

    /// Maps a code back to its ASCII character. The inverse of
    /// [`Alphabet::char2comp`].
    fn comp2char(v: u8) -> u8;
}

/// An alphabet over which `complement` (reverse-strand pairing) is defined:
/// the two nucleotide alphabets, `Dna` and `Dna5`.
pub trait Nucleotide: Alphabet {
    /// The complement of code `v`: `A<->T`, `C<->G`, and, for `Dna5`, `N`
    /// paired with itself.
    fn complement(v: u8) -> u8;
}

/// A compile-time "is a superset of" relation between alphabets, used to
/// check e.g. that a `Dna` sequence can be stored in a `Dna5`-typed
/// [`StringSet`](crate::stringset::StringSet) without recoding.
pub trait IsSupersetOf<B> {}

/// The 2-bit nucleotide alphabet: `A`, `C`, `G`, `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dna;

const DNA_CHARS: &[u8] = b"ACGT";

fn dna_presence() -> &'static RankSelectBitVec {
    static TABLE: OnceLock<RankSelectBitVec> = OnceLock::new();
    TABLE.get_or_init(|| presence_of(DNA_CHARS))
}

impl Alphabet for Dna {
    const WIDTH: u8 = 2;

    #[inline]
    fn is_valid(c: u8) -> bool {
        dna_presence().get(c as usize)
    }

    #[inline]
    fn char2comp(c: u8) -> u8 {
        dna_presence().rank_1(c as usize) as u8
    }

    #[inline]
    fn comp2char(v: u8) -> u8 {
        dna_presence().select_1(v as usize + 1) as u8
    }
}

impl Nucleotide for Dna {
    #[inline]
    fn complement(v: u8) -> u8 {
        match v {
            0 => 3, // A <-> T
            1 => 2, // C <-> G
            2 => 1,
            3 => 0,
            _ => unreachable!("invalid DNA code {v}"),
        }
    }
}

/// The 3-bit nucleotide alphabet: `A`, `C`, `G`, `T`, `N`.
///
/// Codes `0..=3` coincide with [`Dna`]'s (`A=0,C=1,G=2,T=3`), so every `Dna`
/// sequence reads as a `Dna5` sequence without recoding; `N` is the fifth
/// code, `4`, self-paired under `complement`. `N`'s ASCII value (`0x4e`)
/// sorts before `T`'s (`0x54`), so it cannot be folded into the same
/// presence-vector rank as the other four without disturbing their order —
/// it is handled as an explicit fifth case layered on top of [`Dna`]'s
/// table instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dna5;

impl Alphabet for Dna5 {
    const WIDTH: u8 = 3;

    #[inline]
    fn is_valid(c: u8) -> bool {
        c == b'N' || Dna::is_valid(c)
    }

    #[inline]
    fn char2comp(c: u8) -> u8 {
        if c == b'N' {
            4
        } else {
            Dna::char2comp(c)
        }
    }

    #[inline]
    fn comp2char(v: u8) -> u8 {
        if v == 4 {
            b'N'
        } else {
            Dna::comp2char(v)
        }
    }
}

impl Nucleotide for Dna5 {
    #[inline]
    fn complement(v: u8) -> u8 {
        match v {
            4 => 4, // N -> N
            _ => Dna::complement(v),
        }
    }
}

/// The pass-through 8-bit identity alphabet: every byte is a valid
/// character and is its own code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Char;

impl Alphabet for Char {
    const WIDTH: u8 = 8;

    #[inline]
    fn is_valid(_c: u8) -> bool {
        true
    }

    #[inline]
    fn char2comp(c: u8) -> u8 {
        c
    }

    #[inline]
    fn comp2char(v: u8) -> u8 {
        v
    }
}

impl Nucleotide for Char {
    /// Complements the five nucleotide characters as ASCII bytes; every
    /// other byte passes through unchanged (read-only queries never throw,
    /// per the crate-wide convention — unlike the original, which asserts).
    #[inline]
    fn complement(v: u8) -> u8 {
        match v {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            b'N' => b'N',
            other => other,
        }
    }
}

impl IsSupersetOf<Dna> for Dna {}
impl IsSupersetOf<Dna5> for Dna5 {}
impl IsSupersetOf<Char> for Char {}
impl IsSupersetOf<Dna> for Dna5 {}
impl IsSupersetOf<Dna> for Char {}
impl IsSupersetOf<Dna5> for Char {}
