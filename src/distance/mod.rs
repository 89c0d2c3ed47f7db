//! Edit distance between byte sequences.
//!
//! The distance is the classic Levenshtein metric: insertions, deletions and
//! substitutions each cost 1, matching bytes cost 0. Transpositions are not a
//! primitive operation, and comparison is byte-wise, not per Unicode scalar.
//!
//! Two entry points are provided:
//! - [`distance`]: strips the common prefix and suffix, then runs the DP on
//!   the differing middle section
//! - [`two_row_distance`]: the bare two-row dynamic program, public for
//!   benchmarking and cross-validation

use smallvec::{smallvec, SmallVec};

mod sequence;

pub use sequence::Sequence;

/// Rows up to this many cells live on the stack.
const INLINE_ROW: usize = 64;

type Row = SmallVec<[usize; INLINE_ROW]>;

/// Compute the edit distance between `source` and `target`.
///
/// Total for all inputs: `distance(b"", t) == t.len()` and
/// `distance(s, b"") == s.len()`.
///
/// # Example
///
/// ```rust
/// use levenshtein::distance::distance;
///
/// assert_eq!(distance(b"kitten", b"sitting"), 3);
/// assert_eq!(distance(b"cat", b"cat"), 0);
/// assert_eq!(distance(b"", b"dog"), 3);
/// ```
pub fn distance(source: &[u8], target: &[u8]) -> usize {
    let (source, target) = strip_common_affixes(source, target);
    two_row_distance(source, target)
}

/// Compute the edit distance of two UTF-8 strings, compared byte by byte.
///
/// ```rust
/// use levenshtein::distance::str_distance;
///
/// assert_eq!(str_distance("saturday", "sunday"), 3);
/// // "é" is two bytes in UTF-8
/// assert_eq!(str_distance("cafe", "café"), 2);
/// ```
#[inline]
pub fn str_distance(source: &str, target: &str) -> usize {
    distance(source.as_bytes(), target.as_bytes())
}

/// Two-row dynamic program over the virtual `(n+1) x (m+1)` cost matrix.
///
/// Only the previous and current rows (each `m + 1` cells, `m` being the
/// target length) are kept. After each source byte the rows trade places
/// with `std::mem::swap`, so auxiliary space is `O(m)` regardless of the
/// source length.
pub fn two_row_distance(source: &[u8], target: &[u8]) -> usize {
    let n = target.len();

    if source.is_empty() {
        return n;
    }
    if n == 0 {
        return source.len();
    }

    // cost(0, j) = j for every j in 0..=n, including the last cell, which is
    // read as soon as the first source byte meets the last target byte.
    let mut prev_row: Row = (0..=n).collect();
    let mut curr_row: Row = smallvec![0; n + 1];

    for (i, &s) in source.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &t) in target.iter().enumerate() {
            let cost = usize::from(s != t);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Trim the longest common prefix, then the longest common suffix of what
/// remains. Neither changes the edit distance.
#[inline]
pub(crate) fn strip_common_affixes<'a>(a: &'a [u8], b: &'a [u8]) -> (&'a [u8], &'a [u8]) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);

    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}
