//! Mutating bit-string operations.
//!
//! All functions address bits as described in the crate docs: zero-based
//! absolute bit index, LSB-first within each `u64` word. `num_bits == 0` is
//! always a no-op. Bounds are the caller's responsibility and are checked
//! with `debug_assert!` (or by slice indexing) only.
//!
//! Operations that combine two ranges come in two spellings: a cross-buffer
//! form taking distinct `dst`/`src` slices, and a `_within` form taking one
//! slice and two indexes for ranges that may overlap inside the same buffer.
//! Both are alias-safe; the `_raw` copy variants trade that safety for speed
//! by asserting the overlap direction instead of detecting it.

use bitstr_words as words;
use bitstr_words::BITS_PER_WORD;

use crate::mover::{self, And, AndNot, Assign, Or, Xor};

#[inline]
fn capacity_bits(bits: &[u64]) -> usize {
    bits.len() * BITS_PER_WORD
}

/// Sets the `num_bits` bits of `bits` starting at `index` to `value`.
///
/// Handled as a leading partial word, a run of whole-word fills, and a
/// trailing partial word.
pub fn assign(bits: &mut [u64], index: usize, value: bool, num_bits: usize) {
    if num_bits == 0 {
        return;
    }
    debug_assert!(index + num_bits <= capacity_bits(bits));

    let mut word = index / BITS_PER_WORD;
    let pos = index % BITS_PER_WORD;
    let mut remaining = num_bits;

    if pos != 0 {
        let chunk = (BITS_PER_WORD - pos).min(remaining);
        if value {
            bits[word] |= words::one_mask(pos, chunk);
        } else {
            bits[word] &= words::zero_mask(pos, chunk);
        }
        remaining -= chunk;
        if remaining == 0 {
            return;
        }
        word += 1;
    }

    let fill = if value { u64::MAX } else { 0 };
    while remaining >= BITS_PER_WORD {
        bits[word] = fill;
        word += 1;
        remaining -= BITS_PER_WORD;
    }

    if remaining > 0 {
        if value {
            bits[word] |= words::lt_mask(remaining);
        } else {
            bits[word] &= words::ge_mask(remaining);
        }
    }
}

/// Sets the single bit at `index` to `value`.
#[inline]
pub fn assign_bit(bits: &mut [u64], index: usize, value: bool) {
    debug_assert!(index < capacity_bits(bits));
    let mask = 1u64 << (index % BITS_PER_WORD);
    let word = &mut bits[index / BITS_PER_WORD];
    if value {
        *word |= mask;
    } else {
        *word &= !mask;
    }
}

/// Clears the `num_bits` bits starting at `index`.
#[inline]
pub fn assign0(bits: &mut [u64], index: usize, num_bits: usize) {
    assign(bits, index, false, num_bits);
}

/// Sets the `num_bits` bits starting at `index`.
#[inline]
pub fn assign1(bits: &mut [u64], index: usize, num_bits: usize) {
    assign(bits, index, true, num_bits);
}

/// Copies the low `num_bits` bits of `src_value` into `bits` at `index`.
///
/// `num_bits` must be at most 64; the written range may span two words.
pub fn assign_bits(bits: &mut [u64], index: usize, src_value: u64, num_bits: usize) {
    debug_assert!(num_bits <= BITS_PER_WORD);
    if num_bits == 0 {
        return;
    }
    debug_assert!(index + num_bits <= capacity_bits(bits));

    let word = index / BITS_PER_WORD;
    let pos = index % BITS_PER_WORD;
    let room = BITS_PER_WORD - pos;
    if num_bits <= room {
        words::set_bits(&mut bits[word], pos, src_value, num_bits);
    } else {
        words::set_bits(&mut bits[word], pos, src_value, room);
        words::set_bits(&mut bits[word + 1], 0, src_value >> room, num_bits - room);
    }
}

macro_rules! combine_ops {
    ($(#[$doc:meta])* $name:ident, $(#[$doc_within:meta])* $name_within:ident, $op:ty) => {
        $(#[$doc])*
        pub fn $name(
            dst: &mut [u64],
            dst_index: usize,
            src: &[u64],
            src_index: usize,
            num_bits: usize,
        ) {
            debug_assert!(dst_index + num_bits <= capacity_bits(dst));
            debug_assert!(src_index + num_bits <= capacity_bits(src));
            unsafe {
                mover::transfer::<$op>(dst.as_mut_ptr(), dst_index, src.as_ptr(), src_index, num_bits);
            }
        }

        $(#[$doc_within])*
        pub fn $name_within(bits: &mut [u64], dst_index: usize, src_index: usize, num_bits: usize) {
            debug_assert!(dst_index + num_bits <= capacity_bits(bits));
            debug_assert!(src_index + num_bits <= capacity_bits(bits));
            let ptr = bits.as_mut_ptr();
            unsafe {
                mover::transfer::<$op>(ptr, dst_index, ptr as *const u64, src_index, num_bits);
            }
        }
    };
}

combine_ops!(
    /// ANDs `num_bits` bits of `src` starting at `src_index` into `dst`
    /// starting at `dst_index`.
    and_assign,
    /// ANDs a range of `bits` into another range of the same buffer; the
    /// ranges may overlap in either direction.
    and_assign_within,
    And
);

combine_ops!(
    /// ORs `num_bits` bits of `src` starting at `src_index` into `dst`
    /// starting at `dst_index`.
    or_assign,
    /// ORs a range of `bits` into another range of the same buffer; the
    /// ranges may overlap in either direction.
    or_assign_within,
    Or
);

combine_ops!(
    /// XORs `num_bits` bits of `src` starting at `src_index` into `dst`
    /// starting at `dst_index`.
    xor_assign,
    /// XORs a range of `bits` into another range of the same buffer; the
    /// ranges may overlap in either direction.
    xor_assign_within,
    Xor
);

combine_ops!(
    /// Clears, in `dst` starting at `dst_index`, every bit that is set in
    /// the corresponding position of `src` starting at `src_index`
    /// (`dst &= !src`).
    minus_assign,
    /// The same subtraction between two ranges of one buffer; the ranges may
    /// overlap in either direction.
    minus_assign_within,
    AndNot
);

combine_ops!(
    /// Copies `num_bits` bits of `src` starting at `src_index` over `dst`
    /// starting at `dst_index`.
    copy,
    /// Copies one range of `bits` over another range of the same buffer.
    /// Overlap in either direction is handled, like `slice::copy_within`.
    copy_within,
    Assign
);

/// Copies `num_bits` bits of `src` starting at `src_index` over `dst`
/// starting at `dst_index`, traversing ascending unconditionally.
///
/// The caller guarantees that the destination range does not start inside
/// the source range (asserted in debug builds); prefer [`copy`] when the
/// overlap direction is not known.
pub fn copy_raw(dst: &mut [u64], dst_index: usize, src: &[u64], src_index: usize, num_bits: usize) {
    debug_assert!(dst_index + num_bits <= capacity_bits(dst));
    debug_assert!(src_index + num_bits <= capacity_bits(src));
    debug_assert!(mover::left_safe(
        dst.as_ptr(),
        dst_index,
        src.as_ptr(),
        src_index,
        num_bits
    ));
    unsafe {
        mover::left::<Assign>(dst.as_mut_ptr(), dst_index, src.as_ptr(), src_index, num_bits);
    }
}

/// Same-buffer form of [`copy_raw`]: the destination range must start at or
/// before the source range, or not overlap it.
pub fn copy_raw_within(bits: &mut [u64], dst_index: usize, src_index: usize, num_bits: usize) {
    debug_assert!(dst_index + num_bits <= capacity_bits(bits));
    debug_assert!(src_index + num_bits <= capacity_bits(bits));
    let ptr = bits.as_mut_ptr();
    debug_assert!(mover::left_safe(ptr, dst_index, ptr, src_index, num_bits));
    unsafe {
        mover::left::<Assign>(ptr, dst_index, ptr as *const u64, src_index, num_bits);
    }
}

/// Opens a gap of `num_bits` bits at `dst_index` in a bit string of
/// `initial_length` bits by shifting the tail `[dst_index, initial_length)`
/// up. The gap's contents are unspecified; the caller fills them.
///
/// The buffer must have capacity for `initial_length + num_bits` bits.
pub fn insert_raw(bits: &mut [u64], initial_length: usize, dst_index: usize, num_bits: usize) {
    debug_assert!(dst_index <= initial_length);
    if num_bits == 0 || dst_index == initial_length {
        return;
    }
    debug_assert!(initial_length + num_bits <= capacity_bits(bits));

    let ptr = bits.as_mut_ptr();
    // Destination starts above the source, so descending traversal is the
    // alias-safe direction.
    unsafe {
        mover::right::<Assign>(
            ptr,
            dst_index + num_bits,
            ptr as *const u64,
            dst_index,
            initial_length - dst_index,
        );
    }
}

/// Inserts `num_bits` copies of `value` at `index` in a bit string of
/// `initial_length` bits, shifting the tail up.
pub fn insert(bits: &mut [u64], initial_length: usize, index: usize, value: bool, num_bits: usize) {
    insert_raw(bits, initial_length, index, num_bits);
    assign(bits, index, value, num_bits);
}

/// Inserts `num_bits` 0 bits at `index`, shifting the tail up.
#[inline]
pub fn insert0(bits: &mut [u64], initial_length: usize, index: usize, num_bits: usize) {
    insert(bits, initial_length, index, false, num_bits);
}

/// Inserts `num_bits` 1 bits at `index`, shifting the tail up.
#[inline]
pub fn insert1(bits: &mut [u64], initial_length: usize, index: usize, num_bits: usize) {
    insert(bits, initial_length, index, true, num_bits);
}

/// Removes the `num_bits` bits at `index` from a bit string of `length`
/// bits by shifting `[index + num_bits, length)` down. The vacated bits at
/// the top keep their previous values.
pub fn remove(bits: &mut [u64], length: usize, index: usize, num_bits: usize) {
    debug_assert!(index + num_bits <= length);
    debug_assert!(length <= capacity_bits(bits));
    if num_bits == 0 {
        return;
    }
    let tail = length - index - num_bits;
    if tail == 0 {
        return;
    }

    let ptr = bits.as_mut_ptr();
    // Destination starts below the source, so ascending traversal is the
    // alias-safe direction.
    unsafe {
        mover::left::<Assign>(ptr, index, ptr as *const u64, index + num_bits, tail);
    }
}

/// Like [`remove`], then clears the vacated `num_bits` bits at the top so
/// the string's last `num_bits` bits are 0.
pub fn remove_and_fill0(bits: &mut [u64], length: usize, index: usize, num_bits: usize) {
    remove(bits, length, index, num_bits);
    assign(bits, length - num_bits, false, num_bits);
}

/// Like [`remove`], then sets the vacated `num_bits` bits at the top.
pub fn remove_and_fill1(bits: &mut [u64], length: usize, index: usize, num_bits: usize) {
    remove(bits, length, index, num_bits);
    assign(bits, length - num_bits, true, num_bits);
}

/// Exchanges `num_bits` bits between `s1` at `index1` and `s2` at `index2`.
///
/// Works without intermediate storage by repeatedly swapping the longest
/// chunk that crosses no word boundary on either side.
pub fn swap_raw(s1: &mut [u64], index1: usize, s2: &mut [u64], index2: usize, num_bits: usize) {
    debug_assert!(index1 + num_bits <= capacity_bits(s1));
    debug_assert!(index2 + num_bits <= capacity_bits(s2));

    let mut i1 = index1;
    let mut i2 = index2;
    let mut remaining = num_bits;
    while remaining > 0 {
        let pos1 = i1 % BITS_PER_WORD;
        let pos2 = i2 % BITS_PER_WORD;
        let chunk = remaining
            .min(BITS_PER_WORD - pos1)
            .min(BITS_PER_WORD - pos2);
        let mask = words::lt_mask(chunk);
        let v1 = (s1[i1 / BITS_PER_WORD] >> pos1) & mask;
        let v2 = (s2[i2 / BITS_PER_WORD] >> pos2) & mask;
        words::set_bits(&mut s1[i1 / BITS_PER_WORD], pos1, v2, chunk);
        words::set_bits(&mut s2[i2 / BITS_PER_WORD], pos2, v1, chunk);
        i1 += chunk;
        i2 += chunk;
        remaining -= chunk;
    }
}

/// Exchanges `num_bits` bits between two ranges of the same buffer.
///
/// The ranges must not overlap (asserted in debug builds); there is no
/// traversal direction that makes an in-place swap of overlapping ranges
/// meaningful.
pub fn swap_within(bits: &mut [u64], index1: usize, index2: usize, num_bits: usize) {
    debug_assert!(index1 + num_bits <= capacity_bits(bits));
    debug_assert!(index2 + num_bits <= capacity_bits(bits));
    debug_assert!(
        index1 + num_bits <= index2 || index2 + num_bits <= index1,
        "swapped ranges must not overlap"
    );

    let mut i1 = index1;
    let mut i2 = index2;
    let mut remaining = num_bits;
    while remaining > 0 {
        let pos1 = i1 % BITS_PER_WORD;
        let pos2 = i2 % BITS_PER_WORD;
        let chunk = remaining
            .min(BITS_PER_WORD - pos1)
            .min(BITS_PER_WORD - pos2);
        let mask = words::lt_mask(chunk);
        let v1 = (bits[i1 / BITS_PER_WORD] >> pos1) & mask;
        let v2 = (bits[i2 / BITS_PER_WORD] >> pos2) & mask;
        words::set_bits(&mut bits[i1 / BITS_PER_WORD], pos1, v2, chunk);
        words::set_bits(&mut bits[i2 / BITS_PER_WORD], pos2, v1, chunk);
        i1 += chunk;
        i2 += chunk;
        remaining -= chunk;
    }
}

/// Flips the `num_bits` bits of `bits` starting at `index`.
pub fn toggle(bits: &mut [u64], index: usize, num_bits: usize) {
    if num_bits == 0 {
        return;
    }
    debug_assert!(index + num_bits <= capacity_bits(bits));

    let mut word = index / BITS_PER_WORD;
    let pos = index % BITS_PER_WORD;
    let mut remaining = num_bits;

    if pos != 0 {
        let chunk = (BITS_PER_WORD - pos).min(remaining);
        bits[word] ^= words::one_mask(pos, chunk);
        remaining -= chunk;
        if remaining == 0 {
            return;
        }
        word += 1;
    }

    while remaining >= BITS_PER_WORD {
        bits[word] ^= u64::MAX;
        word += 1;
        remaining -= BITS_PER_WORD;
    }

    if remaining > 0 {
        bits[word] ^= words::lt_mask(remaining);
    }
}
