mod modify_tests;

use bitstr_words::BITS_PER_WORD;

/// Brute-force single-bit read, deliberately independent of the code under
/// test.
pub(crate) fn get_bit(bits: &[u64], index: usize) -> bool {
    bits[index / BITS_PER_WORD] & (1u64 << (index % BITS_PER_WORD)) != 0
}

/// Brute-force single-bit write.
pub(crate) fn put_bit(bits: &mut [u64], index: usize, value: bool) {
    let mask = 1u64 << (index % BITS_PER_WORD);
    if value {
        bits[index / BITS_PER_WORD] |= mask;
    } else {
        bits[index / BITS_PER_WORD] &= !mask;
    }
}

/// Returns `count` words of pseudo-random bits from the shared seeded
/// generator.
pub(crate) fn random_words(count: usize) -> Vec<u64> {
    (0..count).map(|_| fastrand::u64(..)).collect()
}

/// Expands a bit range into booleans, low index first.
pub(crate) fn snapshot(bits: &[u64], index: usize, num_bits: usize) -> Vec<bool> {
    (index..index + num_bits).map(|i| get_bit(bits, i)).collect()
}
