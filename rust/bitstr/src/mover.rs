//! Directional word-at-a-time range mover.
//!
//! The mover applies one bitwise combine operation, chosen at compile time
//! through the [`WordOp`] parameter, between a destination bit range and a
//! source bit range of equal length. Both ranges may start at arbitrary
//! in-word positions. [`left`] walks the ranges from the low-address end,
//! [`right`] from the high-address end; [`transfer`] measures the bit
//! distance between the two starts and picks the direction that never reads
//! a source bit after it has been overwritten, which makes it safe for
//! overlapping ranges in either direction.
//!
//! The core works on raw pointers because the overlapping case is, by
//! definition, two views of the same words; the safe wrappers in
//! [`crate::modify`] recover slice-level safety.

use bitstr_words as words;
use bitstr_words::BITS_PER_WORD;

use crate::bit_ptr::{BitPtr, BitPtrDiff};

/// One bitwise combine, in two forms that must agree: a masked sub-word
/// form and a whole-word specialization of it.
pub(crate) trait WordOp {
    /// Combines the low `num_bits` bits of `src` into `word` at `index`.
    fn apply_bits(word: &mut u64, index: usize, src: u64, num_bits: usize);

    /// Combines all 64 bits of `src` into `word`. Must produce the same
    /// result as `apply_bits(word, 0, src, 64)`.
    fn apply_word(word: &mut u64, src: u64);
}

macro_rules! word_op {
    ($name:ident, $bits_fn:path, $word_fn:path) => {
        pub(crate) struct $name;

        impl WordOp for $name {
            #[inline]
            fn apply_bits(word: &mut u64, index: usize, src: u64, num_bits: usize) {
                $bits_fn(word, index, src, num_bits)
            }

            #[inline]
            fn apply_word(word: &mut u64, src: u64) {
                $word_fn(word, src)
            }
        }
    };
}

word_op!(Assign, words::set_bits, words::set_word);
word_op!(And, words::and_bits, words::and_word);
word_op!(AndNot, words::and_not_bits, words::and_not_word);
word_op!(Or, words::or_bits, words::or_word);
word_op!(Xor, words::xor_bits, words::xor_word);

/// Applies `Op` between equal-length bit ranges, traversing from the
/// low-order end upward.
///
/// # Safety
///
/// `dst` and `src` must each point to arrays covering their respective
/// `index + num_bits` bits. If the ranges overlap, the destination range
/// must not start after the source range (ascending traversal would read
/// already-overwritten source words otherwise); use [`transfer`] when the
/// overlap direction is not known.
pub(crate) unsafe fn left<Op: WordOp>(
    dst: *mut u64,
    dst_index: usize,
    src: *const u64,
    src_index: usize,
    num_bits: usize,
) {
    // Checked before any pointer arithmetic: a zero-length operation must not
    // touch (or even form addresses into) either array.
    if num_bits == 0 {
        return;
    }

    unsafe {
        let mut dst = dst.add(dst_index / BITS_PER_WORD);
        let mut dst_pos = dst_index % BITS_PER_WORD;
        let mut src = src.add(src_index / BITS_PER_WORD);
        let src_pos = src_index % BITS_PER_WORD;
        let mut remaining = num_bits;

        // Consume the remainder of the source's leading partial word. The
        // write may itself span two destination words.
        if src_pos != 0 {
            let chunk = (BITS_PER_WORD - src_pos).min(remaining);
            let value = *src >> src_pos;
            let room = BITS_PER_WORD - dst_pos;
            if chunk <= room {
                Op::apply_bits(&mut *dst, dst_pos, value, chunk);
                dst_pos += chunk;
                if dst_pos == BITS_PER_WORD {
                    dst = dst.add(1);
                    dst_pos = 0;
                }
            } else {
                Op::apply_bits(&mut *dst, dst_pos, value, room);
                dst = dst.add(1);
                dst_pos = chunk - room;
                Op::apply_bits(&mut *dst, 0, value >> room, dst_pos);
            }
            remaining -= chunk;
            if remaining == 0 {
                return;
            }
            src = src.add(1);
        }

        // The source is now word-aligned.
        if dst_pos == 0 {
            while remaining >= BITS_PER_WORD {
                Op::apply_word(&mut *dst, *src);
                dst = dst.add(1);
                src = src.add(1);
                remaining -= BITS_PER_WORD;
            }
            if remaining > 0 {
                Op::apply_bits(&mut *dst, 0, *src, remaining);
            }
        } else {
            // Each full source word splits across two destination words.
            let room = BITS_PER_WORD - dst_pos;
            while remaining >= BITS_PER_WORD {
                let value = *src;
                Op::apply_bits(&mut *dst, dst_pos, value, room);
                dst = dst.add(1);
                Op::apply_bits(&mut *dst, 0, value >> room, dst_pos);
                src = src.add(1);
                remaining -= BITS_PER_WORD;
            }
            if remaining > 0 {
                let value = *src;
                let chunk = remaining.min(room);
                Op::apply_bits(&mut *dst, dst_pos, value, chunk);
                if remaining > chunk {
                    dst = dst.add(1);
                    Op::apply_bits(&mut *dst, 0, value >> room, remaining - chunk);
                }
            }
        }
    }
}

/// Applies `Op` between equal-length bit ranges, traversing from the
/// high-order end downward.
///
/// # Safety
///
/// `dst` and `src` must each point to arrays covering their respective
/// `index + num_bits` bits. If the ranges overlap, the destination range
/// must start after the source range; use [`transfer`] when the overlap
/// direction is not known.
pub(crate) unsafe fn right<Op: WordOp>(
    dst: *mut u64,
    dst_index: usize,
    src: *const u64,
    src_index: usize,
    num_bits: usize,
) {
    if num_bits == 0 {
        return;
    }

    unsafe {
        // Cursors sit one past the top bit of each range; `*_pos` is the
        // number of occupied bits in the current word, in [1, 64].
        let dst_top = dst_index + num_bits - 1;
        let src_top = src_index + num_bits - 1;
        let mut dst = dst.add(dst_top / BITS_PER_WORD);
        let mut dst_pos = dst_top % BITS_PER_WORD + 1;
        let mut src = src.add(src_top / BITS_PER_WORD);
        let src_pos = src_top % BITS_PER_WORD + 1;
        let mut remaining = num_bits;

        // Consume the source's trailing partial word down to its low edge.
        if src_pos != BITS_PER_WORD {
            let chunk = src_pos.min(remaining);
            let value = *src >> (src_pos - chunk);
            if chunk <= dst_pos {
                dst_pos -= chunk;
                Op::apply_bits(&mut *dst, dst_pos, value, chunk);
                if dst_pos == 0 {
                    dst = dst.sub(1);
                    dst_pos = BITS_PER_WORD;
                }
            } else {
                let spill = chunk - dst_pos;
                Op::apply_bits(&mut *dst, 0, value >> spill, dst_pos);
                dst = dst.sub(1);
                dst_pos = BITS_PER_WORD - spill;
                Op::apply_bits(&mut *dst, dst_pos, value, spill);
            }
            remaining -= chunk;
            if remaining == 0 {
                return;
            }
            src = src.sub(1);
        }

        // The source's unprocessed top edge is now word-aligned.
        if dst_pos == BITS_PER_WORD {
            loop {
                if remaining < BITS_PER_WORD {
                    if remaining > 0 {
                        let shift = BITS_PER_WORD - remaining;
                        Op::apply_bits(&mut *dst, shift, *src >> shift, remaining);
                    }
                    return;
                }
                Op::apply_word(&mut *dst, *src);
                remaining -= BITS_PER_WORD;
                if remaining == 0 {
                    return;
                }
                dst = dst.sub(1);
                src = src.sub(1);
            }
        }

        // Each full source word splits across two destination words.
        let spill = BITS_PER_WORD - dst_pos;
        while remaining >= BITS_PER_WORD {
            let value = *src;
            Op::apply_bits(&mut *dst, 0, value >> spill, dst_pos);
            dst = dst.sub(1);
            Op::apply_bits(&mut *dst, dst_pos, value, spill);
            remaining -= BITS_PER_WORD;
            if remaining == 0 {
                return;
            }
            src = src.sub(1);
        }

        // Final chunk at the low edge of both ranges.
        let value = *src >> (BITS_PER_WORD - remaining);
        if remaining <= dst_pos {
            Op::apply_bits(&mut *dst, dst_pos - remaining, value, remaining);
        } else {
            let spill = remaining - dst_pos;
            Op::apply_bits(&mut *dst, 0, value >> spill, dst_pos);
            dst = dst.sub(1);
            Op::apply_bits(&mut *dst, BITS_PER_WORD - spill, value, spill);
        }
    }
}

/// Applies `Op` between equal-length bit ranges, choosing the traversal
/// direction that is safe for the actual overlap of the two ranges.
///
/// This is the only entry point that tolerates overlap unconditionally: a
/// destination starting inside the source range is processed descending,
/// everything else ascending.
///
/// # Safety
///
/// `dst` and `src` must each point to arrays covering their respective
/// `index + num_bits` bits.
pub(crate) unsafe fn transfer<Op: WordOp>(
    dst: *mut u64,
    dst_index: usize,
    src: *const u64,
    src_index: usize,
    num_bits: usize,
) {
    if num_bits == 0 {
        return;
    }

    let diff = BitPtr::new(dst as *const u64, dst_index) - BitPtr::new(src, src_index);
    unsafe {
        if diff > BitPtrDiff::ZERO && diff < BitPtrDiff::from_num_bits(num_bits) {
            right::<Op>(dst, dst_index, src, src_index, num_bits);
        } else {
            left::<Op>(dst, dst_index, src, src_index, num_bits);
        }
    }
}

/// Returns true if an ascending traversal is safe for the given pair of
/// ranges: the destination starts at or before the source, or the ranges do
/// not overlap at all.
pub(crate) fn left_safe(
    dst: *const u64,
    dst_index: usize,
    src: *const u64,
    src_index: usize,
    num_bits: usize,
) -> bool {
    let diff = BitPtr::new(dst, dst_index) - BitPtr::new(src, src_index);
    diff <= BitPtrDiff::ZERO || diff >= BitPtrDiff::from_num_bits(num_bits)
}
