//! Property-based tests for distance metric mathematical properties.
//!
//! These tests verify that `distance` satisfies the requirements of a metric
//! over byte sequences:
//!
//! 1. **Identity**: d(x, x) = 0, and d(x, y) = 0 only when x = y
//! 2. **Symmetry**: d(x, y) = d(y, x)
//! 3. **Triangle inequality**: d(x, z) <= d(x, y) + d(y, z)
//! 4. **Length bounds**: |len(x) - len(y)| <= d(x, y) <= max(len(x), len(y))
//! 5. **Left/right invariance**: d(zx, zy) = d(x, y) = d(xz, yz)

use levenshtein::distance::{distance, two_row_distance};
use proptest::prelude::*;

// Sequence generators
fn arb_ascii() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'e', 0..20)
}

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..20)
}

/// Full-matrix reference used to cross-validate the two-row version.
fn full_matrix_distance(a: &[u8], b: &[u8]) -> usize {
    let mut cost = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in cost.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        cost[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            cost[i][j] = if a[i - 1] == b[j - 1] {
                cost[i - 1][j - 1]
            } else {
                1 + cost[i - 1][j].min(cost[i][j - 1]).min(cost[i - 1][j - 1])
            };
        }
    }
    cost[a.len()][b.len()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn distance_identity(a in arb_bytes()) {
        prop_assert_eq!(distance(&a, &a), 0, "Distance from a sequence to itself must be zero");
    }

    #[test]
    fn distance_indiscernible(a in arb_ascii(), b in arb_ascii()) {
        if distance(&a, &b) == 0 {
            prop_assert_eq!(&a, &b, "If distance is zero, sequences must be identical");
        }
    }

    #[test]
    fn distance_symmetric(a in arb_bytes(), b in arb_bytes()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a), "Distance must be symmetric");
    }

    #[test]
    fn distance_triangle_inequality(a in arb_ascii(), b in arb_ascii(), c in arb_ascii()) {
        let d_ac = distance(&a, &c);
        let d_ab = distance(&a, &b);
        let d_bc = distance(&b, &c);

        prop_assert!(
            d_ac <= d_ab + d_bc,
            "Triangle inequality violated: {} > {} + {}",
            d_ac, d_ab, d_bc
        );
    }

    #[test]
    fn distance_length_bounds(a in arb_bytes(), b in arb_bytes()) {
        let d = distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn distance_from_empty(a in arb_bytes()) {
        prop_assert_eq!(distance(&[], &a), a.len());
        prop_assert_eq!(distance(&a, &[]), a.len());
    }

    #[test]
    fn distance_left_invariance(x in arb_ascii(), y in arb_ascii(), z in arb_ascii()) {
        let zx = [z.as_slice(), x.as_slice()].concat();
        let zy = [z.as_slice(), y.as_slice()].concat();
        prop_assert_eq!(distance(&x, &y), distance(&zx, &zy));
    }

    #[test]
    fn distance_right_invariance(x in arb_ascii(), y in arb_ascii(), z in arb_ascii()) {
        let xz = [x.as_slice(), z.as_slice()].concat();
        let yz = [y.as_slice(), z.as_slice()].concat();
        prop_assert_eq!(distance(&x, &y), distance(&xz, &yz));
    }

    #[test]
    fn two_row_matches_full_matrix(a in arb_ascii(), b in arb_ascii()) {
        let expected = full_matrix_distance(&a, &b);
        prop_assert_eq!(two_row_distance(&a, &b), expected);
        prop_assert_eq!(distance(&a, &b), expected);
    }
}

#[test]
fn kitten_sitting() {
    assert_eq!(distance(b"kitten", b"sitting"), 3);
    assert_eq!(full_matrix_distance(b"kitten", b"sitting"), 3);
}
