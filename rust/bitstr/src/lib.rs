//! Bit-string manipulation over `[u64]` storage.
//!
//! A *bit string* is a logical sequence of bits backed by a caller-owned
//! contiguous array of `u64` words. Bit index `i` lives in word `i / 64` at
//! in-word position `i % 64`, counting from the least significant bit, so the
//! layout is stable across persistence and transmission: bit `i` always
//! resolves to the same physical location.
//!
//! The crate exposes free functions that read, write, move, compare, search
//! and count ranges of bits at arbitrary (not necessarily word-aligned)
//! positions. Range-moving operations ([`copy_within`], the `*_assign_within`
//! combines) tolerate overlapping source and destination ranges by choosing
//! the traversal direction that never reads a bit after overwriting it.
//!
//! # Contracts
//!
//! Every operation treats `num_bits == 0` as a no-op. The caller owns the
//! word array and must size it to cover `index + num_bits` bits before any
//! call; bounds and overlap preconditions are enforced with `debug_assert!`
//! only, never with runtime error returns. There is no allocation and no
//! locking: concurrent mutation of overlapping memory requires external
//! synchronization.

mod bit_ptr;
pub mod modify;
mod mover;
pub mod print;
pub mod query;

#[cfg(test)]
mod tests;

pub use bitstr_words::BITS_PER_WORD;
pub use modify::{
    and_assign, and_assign_within, assign, assign0, assign1, assign_bit, assign_bits, copy,
    copy_raw, copy_raw_within, copy_within, insert, insert0, insert1, insert_raw, minus_assign,
    minus_assign_within, or_assign, or_assign_within, remove, remove_and_fill0, remove_and_fill1,
    swap_raw, swap_within, toggle, xor_assign, xor_assign_within,
};
pub use print::print;
pub use query::{
    are_equal, are_equal_at, bit, bits, find0_at_max_index, find0_at_max_index_within,
    find0_at_min_index, find0_at_min_index_within, find1_at_max_index, find1_at_max_index_within,
    find1_at_min_index, find1_at_min_index_within, is_any0, is_any1, num0, num1,
};
