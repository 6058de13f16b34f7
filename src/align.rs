//! Minimum-edit-distance alignment between two token sequences.
//!
//! Generic over the token type, so the same kernel serves word-level
//! (WER/MER/WIL/WIP) and character-level (CER) scoring. The full
//! `(N+1) x (M+1)` cost matrix is kept so the backtrack can recover the
//! hit/substitution/deletion/insertion split; callers that only need the
//! scalar distance could swap in a two-row or banded variant behind the
//! same signature.

use crate::model::AlignmentCounts;

/// Compute the optimal unit-cost alignment between `reference` and
/// `hypothesis`.
///
/// Ties between equal-cost paths are broken deterministically, preferring
/// match, then substitution, then deletion, then insertion, so repeated
/// runs over the same inputs always produce the same counts.
///
/// The returned counts satisfy
/// `hits + substitutions + deletions == reference.len()` and
/// `hits + substitutions + insertions == hypothesis.len()`.
#[must_use]
pub fn align<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> AlignmentCounts {
    let n = reference.len();
    let m = hypothesis.len();

    // Row-major (N+1) x (M+1) cost matrix. Row 0 / column 0 hold the
    // all-insertions / all-deletions base cases.
    let width = m + 1;
    let mut cost = vec![0usize; (n + 1) * width];
    for (j, cell) in cost.iter_mut().enumerate().take(width) {
        *cell = j;
    }
    for i in 1..=n {
        cost[i * width] = i;
    }

    for i in 1..=n {
        for j in 1..=m {
            let substitute =
                cost[(i - 1) * width + (j - 1)] + usize::from(reference[i - 1] != hypothesis[j - 1]);
            let delete = cost[(i - 1) * width + j] + 1;
            let insert = cost[i * width + (j - 1)] + 1;
            cost[i * width + j] = substitute.min(delete).min(insert);
        }
    }

    // Backtrack from the bottom-right corner. At each cell the first
    // applicable move in preference order is taken.
    let mut counts = AlignmentCounts::default();
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let here = cost[i * width + j];
            let diagonal = cost[(i - 1) * width + (j - 1)];
            if reference[i - 1] == hypothesis[j - 1] && here == diagonal {
                counts.hits += 1;
                i -= 1;
                j -= 1;
                continue;
            }
            if reference[i - 1] != hypothesis[j - 1] && here == diagonal + 1 {
                counts.substitutions += 1;
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && cost[i * width + j] == cost[(i - 1) * width + j] + 1 {
            counts.deletions += 1;
            i -= 1;
            continue;
        }
        // Only an insertion can remain; j > 0 is guaranteed here.
        counts.insertions += 1;
        j -= 1;
    }

    counts
}
