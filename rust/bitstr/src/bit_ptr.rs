//! Absolute bit addresses and signed bit distances.
//!
//! A machine pointer cannot express "`n` bits past this word" without losing
//! the sub-word offset, and plain 64-bit arithmetic on a bit index cannot
//! represent distances between two arbitrary word arrays in the address
//! space. [`BitPtr`] and [`BitPtrDiff`] widen the representation by six bits
//! of sub-word resolution so that the mover engine can order two bit
//! locations and decide which traversal direction is alias-safe. They are
//! transient computed values, built fresh for each overlap check, and are
//! never used for addressing.

use std::ops::{Neg, Sub};

use bitstr_words::BITS_PER_WORD;

/// The absolute address of a single bit: a word address plus an in-word
/// position normalized to `[0, 64)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BitPtr {
    /// Word-granular part of the address (`byte_address / 8` plus whole words
    /// of the bit index).
    high: usize,
    /// In-word bit position, always in `[0, 64)`.
    low: usize,
}

impl BitPtr {
    /// Forms the address of bit `index` of the array at `words`.
    ///
    /// The array must be aligned to the word size; unaligned storage would
    /// make word-granular address arithmetic meaningless.
    pub(crate) fn new(words: *const u64, index: usize) -> BitPtr {
        let addr = words as usize;
        debug_assert_eq!(addr % size_of::<u64>(), 0, "word array must be aligned");
        BitPtr {
            high: addr / size_of::<u64>() + index / BITS_PER_WORD,
            low: index % BITS_PER_WORD,
        }
    }
}

impl Sub for BitPtr {
    type Output = BitPtrDiff;

    fn sub(self, rhs: BitPtr) -> BitPtrDiff {
        let mut high = self.high.wrapping_sub(rhs.high) as isize;
        let low = if self.low >= rhs.low {
            self.low - rhs.low
        } else {
            // Borrow one word.
            high -= 1;
            self.low + BITS_PER_WORD - rhs.low
        };
        BitPtrDiff {
            high,
            low: low as u64,
        }
    }
}

/// A signed distance between two [`BitPtr`]s, with logical value
/// `high * 64 + low`.
///
/// Only ordering is meaningful; the mover compares a difference against zero
/// and against a bit count to classify the overlap of two ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct BitPtrDiff {
    high: isize,
    /// Always in `[0, 64)`, including for negative distances.
    low: u64,
}

impl BitPtrDiff {
    pub(crate) const ZERO: BitPtrDiff = BitPtrDiff { high: 0, low: 0 };

    /// The distance spanning exactly `num_bits` bits.
    pub(crate) fn from_num_bits(num_bits: usize) -> BitPtrDiff {
        BitPtrDiff {
            high: (num_bits / BITS_PER_WORD) as isize,
            low: (num_bits % BITS_PER_WORD) as u64,
        }
    }
}

impl Neg for BitPtrDiff {
    type Output = BitPtrDiff;

    fn neg(self) -> BitPtrDiff {
        if self.low == 0 {
            BitPtrDiff {
                high: -self.high,
                low: 0,
            }
        } else {
            // Negating carries a borrow out of the low part.
            BitPtrDiff {
                high: -self.high - 1,
                low: BITS_PER_WORD as u64 - self.low,
            }
        }
    }
}
