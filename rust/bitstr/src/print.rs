//! Hexadecimal rendering of bit strings.

use std::fmt;

use bitstr_words as words;
use bitstr_words::BITS_PER_WORD;

/// Number of words rendered per line in multi-line mode.
const WORDS_PER_LINE: usize = 4;

/// Width of one word column: 16 hex digits plus a separating space.
const COLUMN_WIDTH: usize = 17;

/// Renders the first `num_bits` bits of `bits` to `out` as hexadecimal
/// words, most significant word first.
///
/// Every word prints as 16 lowercase hex digits except the most significant
/// one, which prints only the digits its occupied bits need (one digit per
/// four bits, rounded up) and is masked to `num_bits`.
///
/// `level` and `spaces_per_level` control layout:
///
/// - `spaces_per_level >= 0` produces multi-line output: `[` on its own
///   line, the words in groups of four per line, and `]` on its own line
///   with a trailing newline. Nesting level `n` indents by
///   `n * spaces_per_level`; the words sit one level deeper than the
///   brackets. A negative `level` suppresses the indentation of the first
///   line only. When the words span several lines they are right-aligned
///   into four fixed-width columns, filled from the least significant end.
/// - `spaces_per_level < 0` produces the whole value on a single line with
///   no trailing newline: `[ w ... w ]`.
pub fn print(
    out: &mut impl fmt::Write,
    bits: &[u64],
    num_bits: usize,
    level: i32,
    spaces_per_level: i32,
) -> fmt::Result {
    debug_assert!(num_bits <= bits.len() * BITS_PER_WORD);

    let num_words = num_bits.div_ceil(BITS_PER_WORD);
    let top_bits = if num_bits == 0 {
        0
    } else {
        (num_bits - 1) % BITS_PER_WORD + 1
    };
    let top_digits = top_bits.div_ceil(4);
    let abs_level = level.unsigned_abs() as usize;

    if spaces_per_level < 0 {
        // Compact: everything on one line, no trailing newline.
        let unit = spaces_per_level.unsigned_abs() as usize;
        if level > 0 {
            write_spaces(out, abs_level * unit)?;
        }
        out.write_char('[')?;
        for word_index in (0..num_words).rev() {
            if word_index + 1 == num_words {
                let top = bits[word_index] & words::lt_mask(top_bits);
                write!(out, " {top:0top_digits$x}")?;
            } else {
                write!(out, " {:016x}", bits[word_index])?;
            }
        }
        return out.write_str(" ]");
    }

    let unit = spaces_per_level as usize;
    if level > 0 {
        write_spaces(out, abs_level * unit)?;
    }
    out.write_str("[\n")?;

    if num_words > 0 {
        let lines = num_words.div_ceil(WORDS_PER_LINE);
        let top_line_words = num_words - WORDS_PER_LINE * (lines - 1);
        let mut word_index = num_words;

        for line in 0..lines {
            write_spaces(out, (abs_level + 1) * unit)?;
            let line_words = if line == 0 { top_line_words } else { WORDS_PER_LINE };
            if line == 0 && lines > 1 {
                // Right-align the short top line into the four columns.
                write_spaces(
                    out,
                    (WORDS_PER_LINE - top_line_words) * COLUMN_WIDTH + (16 - top_digits),
                )?;
            }
            for column in 0..line_words {
                word_index -= 1;
                if column > 0 {
                    out.write_char(' ')?;
                }
                if word_index + 1 == num_words {
                    let top = bits[word_index] & words::lt_mask(top_bits);
                    write!(out, "{top:0top_digits$x}")?;
                } else {
                    write!(out, "{:016x}", bits[word_index])?;
                }
            }
            out.write_char('\n')?;
        }
    }

    write_spaces(out, abs_level * unit)?;
    out.write_str("]\n")
}

fn write_spaces(out: &mut impl fmt::Write, count: usize) -> fmt::Result {
    for _ in 0..count {
        out.write_char(' ')?;
    }
    Ok(())
}
