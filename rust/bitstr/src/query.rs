//! Read-only bit-string operations: comparison, extraction, search, count.

use std::ops::Range;

use bitstr_words as words;
use bitstr_words::BITS_PER_WORD;

#[inline]
fn capacity_bits(bits: &[u64]) -> usize {
    bits.len() * BITS_PER_WORD
}

/// Returns true if the single bit at `index` is set.
#[inline]
pub fn bit(bits: &[u64], index: usize) -> bool {
    debug_assert!(index < capacity_bits(bits));
    bits[index / BITS_PER_WORD] & (1u64 << (index % BITS_PER_WORD)) != 0
}

/// Extracts the `num_bits` bits starting at `index` as the low bits of the
/// returned word; the remaining high bits are 0. `num_bits` must be at most
/// 64; the read range may span two words.
pub fn bits(bits: &[u64], index: usize, num_bits: usize) -> u64 {
    debug_assert!(num_bits <= BITS_PER_WORD);
    if num_bits == 0 {
        return 0;
    }
    debug_assert!(index + num_bits <= capacity_bits(bits));

    let word = index / BITS_PER_WORD;
    let pos = index % BITS_PER_WORD;
    let room = BITS_PER_WORD - pos;
    let mut value = bits[word] >> pos;
    if num_bits > room {
        value |= bits[word + 1] << room;
    }
    value & words::lt_mask(num_bits)
}

/// Returns true if the first `num_bits` bits of `lhs` and `rhs` are equal.
///
/// Stops at the first differing word.
pub fn are_equal(lhs: &[u64], rhs: &[u64], num_bits: usize) -> bool {
    debug_assert!(num_bits <= capacity_bits(lhs));
    debug_assert!(num_bits <= capacity_bits(rhs));

    let full = num_bits / BITS_PER_WORD;
    let partial = num_bits % BITS_PER_WORD;
    if lhs[..full] != rhs[..full] {
        return false;
    }
    partial == 0 || (lhs[full] ^ rhs[full]) & words::lt_mask(partial) == 0
}

/// Returns true if `num_bits` bits of `lhs` starting at `lhs_index` equal
/// `num_bits` bits of `rhs` starting at `rhs_index`.
///
/// The ranges may sit at different in-word offsets; the comparison aligns on
/// `lhs` words and stops at the first difference.
pub fn are_equal_at(
    lhs: &[u64],
    lhs_index: usize,
    rhs: &[u64],
    rhs_index: usize,
    num_bits: usize,
) -> bool {
    debug_assert!(lhs_index + num_bits <= capacity_bits(lhs));
    debug_assert!(rhs_index + num_bits <= capacity_bits(rhs));

    let mut li = lhs_index;
    let mut ri = rhs_index;
    let mut remaining = num_bits;

    let pos = li % BITS_PER_WORD;
    if pos != 0 {
        let chunk = (BITS_PER_WORD - pos).min(remaining);
        if bits(lhs, li, chunk) != bits(rhs, ri, chunk) {
            return false;
        }
        li += chunk;
        ri += chunk;
        remaining -= chunk;
    }

    while remaining >= BITS_PER_WORD {
        if lhs[li / BITS_PER_WORD] != bits(rhs, ri, BITS_PER_WORD) {
            return false;
        }
        li += BITS_PER_WORD;
        ri += BITS_PER_WORD;
        remaining -= BITS_PER_WORD;
    }

    remaining == 0 || bits(lhs, li, remaining) == bits(rhs, ri, remaining)
}

/// Word-at-a-time ascending scan for the lowest qualifying bit in
/// `[begin, end)`. The in-word locate primitive runs only once a word known
/// to contain a candidate has been found.
fn find_at_min(bits: &[u64], begin: usize, end: usize, target: bool) -> Option<usize> {
    debug_assert!(begin <= end);
    debug_assert!(end <= capacity_bits(bits));
    if begin == end {
        return None;
    }

    let first = begin / BITS_PER_WORD;
    let last = (end - 1) / BITS_PER_WORD;
    for word_index in first..=last {
        let mut word = bits[word_index];
        if !target {
            word = !word;
        }
        if word_index == first {
            word &= words::ge_mask(begin % BITS_PER_WORD);
        }
        if word_index == last {
            word &= words::lt_mask((end - 1) % BITS_PER_WORD + 1);
        }
        if word != 0 {
            return Some(word_index * BITS_PER_WORD + words::find_bit_at_min_index(word));
        }
    }
    None
}

/// Descending mirror of [`find_at_min`].
fn find_at_max(bits: &[u64], begin: usize, end: usize, target: bool) -> Option<usize> {
    debug_assert!(begin <= end);
    debug_assert!(end <= capacity_bits(bits));
    if begin == end {
        return None;
    }

    let first = begin / BITS_PER_WORD;
    let last = (end - 1) / BITS_PER_WORD;
    for word_index in (first..=last).rev() {
        let mut word = bits[word_index];
        if !target {
            word = !word;
        }
        if word_index == first {
            word &= words::ge_mask(begin % BITS_PER_WORD);
        }
        if word_index == last {
            word &= words::lt_mask((end - 1) % BITS_PER_WORD + 1);
        }
        if word != 0 {
            return Some(word_index * BITS_PER_WORD + words::find_bit_at_max_index(word));
        }
    }
    None
}

/// Returns the highest index of a 0 bit in the first `length` bits, or
/// `None` if they are all 1.
pub fn find0_at_max_index(bits: &[u64], length: usize) -> Option<usize> {
    find_at_max(bits, 0, length, false)
}

/// Returns the highest index of a 0 bit in `range`, or `None`.
pub fn find0_at_max_index_within(bits: &[u64], range: Range<usize>) -> Option<usize> {
    find_at_max(bits, range.start, range.end, false)
}

/// Returns the lowest index of a 0 bit in the first `length` bits, or
/// `None` if they are all 1.
pub fn find0_at_min_index(bits: &[u64], length: usize) -> Option<usize> {
    find_at_min(bits, 0, length, false)
}

/// Returns the lowest index of a 0 bit in `range`, or `None`.
pub fn find0_at_min_index_within(bits: &[u64], range: Range<usize>) -> Option<usize> {
    find_at_min(bits, range.start, range.end, false)
}

/// Returns the highest index of a 1 bit in the first `length` bits, or
/// `None` if they are all 0.
pub fn find1_at_max_index(bits: &[u64], length: usize) -> Option<usize> {
    find_at_max(bits, 0, length, true)
}

/// Returns the highest index of a 1 bit in `range`, or `None`.
pub fn find1_at_max_index_within(bits: &[u64], range: Range<usize>) -> Option<usize> {
    find_at_max(bits, range.start, range.end, true)
}

/// Returns the lowest index of a 1 bit in the first `length` bits, or
/// `None` if they are all 0.
pub fn find1_at_min_index(bits: &[u64], length: usize) -> Option<usize> {
    find_at_min(bits, 0, length, true)
}

/// Returns the lowest index of a 1 bit in `range`, or `None`.
pub fn find1_at_min_index_within(bits: &[u64], range: Range<usize>) -> Option<usize> {
    find_at_min(bits, range.start, range.end, true)
}

/// Returns true if any of the `num_bits` bits starting at `index` is 0.
pub fn is_any0(bits: &[u64], index: usize, num_bits: usize) -> bool {
    find_at_min(bits, index, index + num_bits, false).is_some()
}

/// Returns true if any of the `num_bits` bits starting at `index` is 1.
pub fn is_any1(bits: &[u64], index: usize, num_bits: usize) -> bool {
    find_at_min(bits, index, index + num_bits, true).is_some()
}

/// Returns the number of 1 bits among the `num_bits` bits starting at
/// `index`.
///
/// The first and last partial words are masked; interior words are counted
/// whole.
pub fn num1(bits: &[u64], index: usize, num_bits: usize) -> usize {
    if num_bits == 0 {
        return 0;
    }
    debug_assert!(index + num_bits <= capacity_bits(bits));

    let end = index + num_bits;
    let first = index / BITS_PER_WORD;
    let last = (end - 1) / BITS_PER_WORD;
    if first == last {
        return words::num_bits_set(bits[first] & words::one_mask(index % BITS_PER_WORD, num_bits));
    }

    let mut total = words::num_bits_set(bits[first] & words::ge_mask(index % BITS_PER_WORD));
    for &word in &bits[first + 1..last] {
        total += words::num_bits_set(word);
    }
    total + words::num_bits_set(bits[last] & words::lt_mask((end - 1) % BITS_PER_WORD + 1))
}

/// Returns the number of 0 bits among the `num_bits` bits starting at
/// `index`.
#[inline]
pub fn num0(bits: &[u64], index: usize, num_bits: usize) -> usize {
    num_bits - num1(bits, index, num_bits)
}
