use itertools::Itertools;

use crate::modify::{
    and_assign, assign, assign0, assign1, assign_bit, assign_bits, copy, copy_raw,
    copy_raw_within, copy_within, insert, insert0, insert1, insert_raw, minus_assign,
    minus_assign_within, or_assign, remove, remove_and_fill0, remove_and_fill1, swap_raw, swap_within,
    toggle, xor_assign, xor_assign_within,
};
use crate::query::{are_equal_at, bits, is_any0, is_any1, num1};

use super::{get_bit, put_bit, random_words, snapshot};

#[test]
fn assign_round_trip() {
    for index in (0..200usize).step_by(7) {
        for num_bits in [0usize, 1, 3, 33, 64, 65, 130] {
            let mut buf = vec![0u64; 6];
            assign(&mut buf, index, true, num_bits);
            assert_eq!(bits(&buf, index, num_bits.min(64)), bitstr_words::lt_mask(num_bits.min(64)));
            assert_eq!(num1(&buf, 0, 384), num_bits);

            assign(&mut buf, index, false, num_bits);
            assert_eq!(buf, vec![0u64; 6]);
        }
    }
}

#[test]
fn assign_is_idempotent() {
    fastrand::seed(0xa551_0001);
    for _ in 0..50 {
        let mut buf = random_words(4);
        let index = fastrand::usize(..200);
        let num_bits = fastrand::usize(..=256 - index);
        let value = fastrand::bool();

        assign(&mut buf, index, value, num_bits);
        let once = buf.clone();
        assign(&mut buf, index, value, num_bits);
        assert_eq!(buf, once);
    }
}

#[test]
fn assign_spanning_word_boundary() {
    // Bits 60..68: top nibble of word 0 plus bottom nibble of word 1.
    let mut buf = [0u64; 2];
    assign(&mut buf, 60, true, 8);
    assert_eq!(buf[0], 0xF000_0000_0000_0000);
    assert_eq!(buf[1], 0x0000_0000_0000_000F);
    assert_eq!(bits(&buf, 60, 8), 0xFF);
}

#[test]
fn assign_leaves_neighbors_alone() {
    let mut buf = [u64::MAX; 3];
    assign0(&mut buf, 64, 64);
    assert_eq!(buf, [u64::MAX, 0, u64::MAX]);

    let mut buf = [0u64; 3];
    assign1(&mut buf, 63, 2);
    assert_eq!(buf, [1u64 << 63, 1, 0]);
}

#[test]
fn assign_single_bit() {
    let mut buf = [0u64; 2];
    assign_bit(&mut buf, 0, true);
    assign_bit(&mut buf, 63, true);
    assign_bit(&mut buf, 64, true);
    assert_eq!(buf, [0x8000_0000_0000_0001, 1]);

    assign_bit(&mut buf, 63, false);
    assert_eq!(buf, [1, 1]);
}

#[test]
fn assign_bits_copies_low_bits_of_a_word() {
    let mut buf = [0u64; 2];
    assign_bits(&mut buf, 4, 0xDEAD_BEEF, 32);
    assert_eq!(bits(&buf, 4, 32), 0xDEAD_BEEF);
    assert_eq!(buf[0] & 0xF, 0);

    // Spanning two words; bits of the source above num_bits are ignored.
    let mut buf = [0u64; 2];
    assign_bits(&mut buf, 60, u64::MAX, 8);
    assert_eq!(buf[0], 0xF000_0000_0000_0000);
    assert_eq!(buf[1], 0xF);

    // Zero-length is a no-op.
    let mut buf = [u64::MAX; 2];
    assign_bits(&mut buf, 10, 0, 0);
    assert_eq!(buf, [u64::MAX; 2]);
}

/// Cross-checks one cross-buffer combine against its per-bit meaning.
fn check_combine(
    apply: impl Fn(&mut [u64], usize, &[u64], usize, usize),
    eval: impl Fn(bool, bool) -> bool,
) {
    fastrand::seed(0xc0b1_0001);
    let src = random_words(4);
    for (dst_index, src_index) in (0..3).flat_map(|_| {
        [
            (fastrand::usize(..130), fastrand::usize(..130)),
            (0, 0),
            (63, 1),
            (64, 64),
        ]
    }) {
        for n in [0usize, 1, 64, 100, 126] {
            let mut dst = random_words(4);
            let mut expected = dst.clone();
            for k in 0..n {
                let d = get_bit(&expected, dst_index + k);
                let s = get_bit(&src, src_index + k);
                put_bit(&mut expected, dst_index + k, eval(d, s));
            }
            apply(&mut dst, dst_index, &src, src_index, n);
            assert_eq!(dst, expected, "dst_index {dst_index} src_index {src_index} n {n}");
        }
    }
}

#[test]
fn logical_combines_match_per_bit_meaning() {
    check_combine(and_assign, |d, s| d & s);
    check_combine(or_assign, |d, s| d | s);
    check_combine(xor_assign, |d, s| d ^ s);
    check_combine(minus_assign, |d, s| d & !s);
    check_combine(copy, |_, s| s);
}

#[test]
fn combine_identities() {
    fastrand::seed(0xc0b1_0002);
    let words = random_words(3);

    for index in [0usize, 9, 63, 64, 120] {
        for n in [1usize, 5, 64, 70] {
            // A range XORed with itself is zero.
            let mut buf = words.clone();
            xor_assign_within(&mut buf, index, index, n);
            assert!(!is_any1(&buf, index, n));

            // AND with all ones and OR with all zeros are no-ops.
            let ones = vec![u64::MAX; 3];
            let zeros = vec![0u64; 3];
            let mut buf = words.clone();
            and_assign(&mut buf, index, &ones, 0, n);
            assert_eq!(buf, words);
            let mut buf = words.clone();
            or_assign(&mut buf, index, &zeros, 0, n);
            assert_eq!(buf, words);

            // Subtracting a range from itself clears it.
            let mut buf = words.clone();
            minus_assign_within(&mut buf, index, index, n);
            assert!(!is_any1(&buf, index, n));
        }
    }
}

#[test]
fn copy_within_is_equivalent_to_copy_via_scratch() {
    fastrand::seed(0xc0b1_0003);

    for dst_index in (0..130usize).step_by(3) {
        for src_index in [0usize, 1, 17, 62, 63, 64, 65, 129] {
            for n in [0usize, 1, 30, 63, 64, 65, 120] {
                let words = random_words(4);
                let mut got = words.clone();
                copy_within(&mut got, dst_index, src_index, n);

                let mut expected = words.clone();
                let scratch = snapshot(&words, src_index, n);
                for (k, &s) in scratch.iter().enumerate() {
                    put_bit(&mut expected, dst_index + k, s);
                }

                assert_eq!(got, expected, "dst {dst_index} src {src_index} n {n}");
            }
        }
    }
}

#[test]
fn copy_raw_when_destination_is_not_after_source() {
    fastrand::seed(0xc0b1_0004);
    let words = random_words(4);

    // Within one buffer: destination at or before source.
    for (dst_index, src_index, n) in [(0usize, 0usize, 100usize), (5, 70, 64), (63, 64, 65)] {
        let mut got = words.clone();
        copy_raw_within(&mut got, dst_index, src_index, n);
        let mut expected = words.clone();
        let scratch = snapshot(&words, src_index, n);
        for (k, &s) in scratch.iter().enumerate() {
            put_bit(&mut expected, dst_index + k, s);
        }
        assert_eq!(got, expected);
    }

    // Across buffers there is never overlap.
    let src = random_words(4);
    let mut dst = random_words(4);
    let mut expected = dst.clone();
    for k in 0..200 {
        put_bit(&mut expected, 30 + k, get_bit(&src, 11 + k));
    }
    copy_raw(&mut dst, 30, &src, 11, 200);
    assert_eq!(dst, expected);
}

#[test]
fn insert_then_remove_restores_the_tail() {
    fastrand::seed(0x1234_0001);

    for index in [0usize, 1, 37, 63, 64, 100] {
        for n in [0usize, 1, 10, 64, 65] {
            let length = 150usize;
            let words = random_words(4);
            let mut buf = words.clone();

            insert_raw(&mut buf, length, index, n);
            // The shifted tail must match the original tail.
            assert!(are_equal_at(&buf, index + n, &words, index, length - index));
            // The head below the gap is untouched.
            assert!(are_equal_at(&buf, 0, &words, 0, index));

            remove(&mut buf, length + n, index, n);
            assert!(are_equal_at(&buf, 0, &words, 0, length));
        }
    }
}

#[test]
fn insert_fills_the_gap() {
    let length = 100usize;
    let cases: [(bool, fn(&[u64], usize, usize) -> bool); 2] =
        [(false, is_any1), (true, is_any0)];
    for (value, probe) in cases {
        let mut buf = vec![u64::MAX; 3];
        insert(&mut buf, length, 20, value, 30);
        assert!(!probe(&buf, 20, 30));
        assert!(!is_any0(&buf, 0, 20));
        assert!(!is_any0(&buf, 50, 80));
    }

    // insert0/insert1 are the spelled-out forms.
    let mut buf = vec![u64::MAX; 3];
    insert0(&mut buf, 100, 64, 64);
    assert_eq!(buf[1], 0);
    let mut buf = vec![0u64; 3];
    insert1(&mut buf, 100, 64, 64);
    assert_eq!(buf[1], u64::MAX);

    // Inserting at the end of the string appends.
    let mut buf = vec![0u64; 2];
    insert1(&mut buf, 64, 64, 8);
    assert_eq!(buf[1], 0xFF);
}

#[test]
fn remove_and_fill() {
    let length = 128usize;
    let mut buf = vec![u64::MAX; 2];
    remove_and_fill0(&mut buf, length, 10, 28);
    assert!(!is_any0(&buf, 0, 100));
    assert!(!is_any1(&buf, 100, 28));

    let mut buf = vec![0u64; 2];
    remove_and_fill1(&mut buf, length, 0, 5);
    assert!(!is_any1(&buf, 0, 123));
    assert!(!is_any0(&buf, 123, 5));
}

#[test]
fn remove_at_the_end_is_a_no_op() {
    let words = random_words(2);
    let mut buf = words.clone();
    remove(&mut buf, 128, 128, 0);
    remove(&mut buf, 128, 100, 28);
    assert!(are_equal_at(&buf, 0, &words, 0, 100));
}

#[test]
fn swap_exchanges_and_is_an_involution() {
    fastrand::seed(0x5a5a_0001);

    for (i1, i2) in (0..64usize)
        .cartesian_product([70usize, 100, 128, 191])
        .step_by(7)
    {
        let n = 60usize.min(i2 - i1).min(256 - i2);
        let a0 = random_words(4);
        let b0 = random_words(4);

        // Across two buffers.
        let mut a = a0.clone();
        let mut b = b0.clone();
        swap_raw(&mut a, i1, &mut b, i2, n);
        assert!(are_equal_at(&a, i1, &b0, i2, n));
        assert!(are_equal_at(&b, i2, &a0, i1, n));
        swap_raw(&mut a, i1, &mut b, i2, n);
        assert_eq!(a, a0);
        assert_eq!(b, b0);

        // Two disjoint ranges of one buffer.
        let mut c = a0.clone();
        swap_within(&mut c, i1, i2, n);
        assert!(are_equal_at(&c, i1, &a0, i2, n));
        assert!(are_equal_at(&c, i2, &a0, i1, n));
        swap_within(&mut c, i1, i2, n);
        assert_eq!(c, a0);
    }
}

#[test]
fn toggle_flips_and_is_an_involution() {
    fastrand::seed(0x1066_0001);

    for index in [0usize, 3, 60, 64, 127] {
        for n in [0usize, 1, 4, 64, 65, 120] {
            let words = random_words(3);
            let mut buf = words.clone();

            toggle(&mut buf, index, n);
            for k in 0..n {
                assert_ne!(get_bit(&buf, index + k), get_bit(&words, index + k));
            }
            // Outside the range nothing changes.
            assert!(are_equal_at(&buf, 0, &words, 0, index));
            let end = index + n;
            assert!(are_equal_at(&buf, end, &words, end, 192 - end));

            toggle(&mut buf, index, n);
            assert_eq!(buf, words);
        }
    }
}
