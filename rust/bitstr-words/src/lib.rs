//! Single-word bit primitives for the `bitstr` engine.
//!
//! Everything in this crate operates on one `u64` word at a time: mask
//! construction, masked read-modify-write combines, population count and
//! in-word bit location. The multi-word traversal logic lives in `bitstr`;
//! this crate is the leaf it is built on.
//!
//! # Bit Order
//!
//! Bits are addressed LSB-first: index 0 is the least significant bit of a
//! word. A mask covering indexes `[3, 5)` is `0b11000`.

/// The number of bits in a storage word.
pub const BITS_PER_WORD: usize = 64;

/// Returns a mask with the bits at indexes `[0, index)` set.
///
/// `lt_mask(0)` is `0` and `lt_mask(64)` is `u64::MAX`.
///
/// # Panics
///
/// Panics in debug builds if `index > 64`.
#[inline]
pub fn lt_mask(index: usize) -> u64 {
    debug_assert!(index <= BITS_PER_WORD, "mask index {index} out of range");
    // A plain `(1 << index) - 1` would shift by 64 for a full-word mask.
    if index >= BITS_PER_WORD {
        u64::MAX
    } else {
        (1u64 << index) - 1
    }
}

/// Returns a mask with the bits at indexes `[index, 64)` set.
#[inline]
pub fn ge_mask(index: usize) -> u64 {
    !lt_mask(index)
}

/// Returns a mask with the bits at indexes `[index, index + num_bits)` set.
///
/// # Panics
///
/// Panics in debug builds if `index + num_bits > 64`.
#[inline]
pub fn one_mask(index: usize, num_bits: usize) -> u64 {
    debug_assert!(
        index + num_bits <= BITS_PER_WORD,
        "mask range {index}+{num_bits} out of range"
    );
    // `index` may be 64 when the range is empty; the shift below must not see it.
    if num_bits == 0 {
        0
    } else {
        lt_mask(num_bits) << index
    }
}

/// Returns a mask with the bits at indexes `[index, index + num_bits)` clear
/// and all other bits set.
#[inline]
pub fn zero_mask(index: usize, num_bits: usize) -> u64 {
    !one_mask(index, num_bits)
}

/// Writes the low `num_bits` bits of `src` into `word` at `index`.
///
/// Bits of `word` outside `[index, index + num_bits)` are preserved; bits of
/// `src` above `num_bits` are ignored.
///
/// # Panics
///
/// Panics in debug builds if `num_bits == 0` or `index + num_bits > 64`.
#[inline]
pub fn set_bits(word: &mut u64, index: usize, src: u64, num_bits: usize) {
    debug_assert!(num_bits >= 1 && index + num_bits <= BITS_PER_WORD);
    let mask = lt_mask(num_bits);
    *word = (*word & !(mask << index)) | ((src & mask) << index);
}

/// ANDs the low `num_bits` bits of `src` into `word` at `index`.
#[inline]
pub fn and_bits(word: &mut u64, index: usize, src: u64, num_bits: usize) {
    debug_assert!(num_bits >= 1 && index + num_bits <= BITS_PER_WORD);
    let mask = lt_mask(num_bits);
    *word &= ((src & mask) << index) | !(mask << index);
}

/// Clears, within `word` at `index`, every bit that is set in the low
/// `num_bits` bits of `src` (the "minus" combine: `dst &= !src`).
#[inline]
pub fn and_not_bits(word: &mut u64, index: usize, src: u64, num_bits: usize) {
    debug_assert!(num_bits >= 1 && index + num_bits <= BITS_PER_WORD);
    *word &= !((src & lt_mask(num_bits)) << index);
}

/// ORs the low `num_bits` bits of `src` into `word` at `index`.
#[inline]
pub fn or_bits(word: &mut u64, index: usize, src: u64, num_bits: usize) {
    debug_assert!(num_bits >= 1 && index + num_bits <= BITS_PER_WORD);
    *word |= (src & lt_mask(num_bits)) << index;
}

/// XORs the low `num_bits` bits of `src` into `word` at `index`.
#[inline]
pub fn xor_bits(word: &mut u64, index: usize, src: u64, num_bits: usize) {
    debug_assert!(num_bits >= 1 && index + num_bits <= BITS_PER_WORD);
    *word ^= (src & lt_mask(num_bits)) << index;
}

/// Whole-word specialization of [`set_bits`].
#[inline]
pub fn set_word(word: &mut u64, src: u64) {
    *word = src;
}

/// Whole-word specialization of [`and_bits`].
#[inline]
pub fn and_word(word: &mut u64, src: u64) {
    *word &= src;
}

/// Whole-word specialization of [`and_not_bits`].
#[inline]
pub fn and_not_word(word: &mut u64, src: u64) {
    *word &= !src;
}

/// Whole-word specialization of [`or_bits`].
#[inline]
pub fn or_word(word: &mut u64, src: u64) {
    *word |= src;
}

/// Whole-word specialization of [`xor_bits`].
#[inline]
pub fn xor_word(word: &mut u64, src: u64) {
    *word ^= src;
}

/// Returns the index of the lowest set bit of `word`, or 64 if `word == 0`.
#[inline]
pub fn find_bit_at_min_index(word: u64) -> usize {
    word.trailing_zeros() as usize
}

/// Returns the index of the highest set bit of `word`.
///
/// # Panics
///
/// Panics in debug builds if `word == 0`.
#[inline]
pub fn find_bit_at_max_index(word: u64) -> usize {
    debug_assert_ne!(word, 0, "no set bit to locate");
    BITS_PER_WORD - 1 - word.leading_zeros() as usize
}

/// Returns the number of set bits in `word`.
#[inline]
pub fn num_bits_set(word: u64) -> usize {
    word.count_ones() as usize
}
