//! A comparator that reports every pair of identical lines between a submission and a variant,
//! where **line order does not matter**.
//!
//! Lines are trimmed before comparison and blank lines are ignored: they never match and they
//! never take up a line number. The result is exhaustive rather than an alignment, so one
//! submission line can match several variant lines and vice versa.

use crate::traits::comparator::LineComparator;
use crate::types::LineMatch;
use crate::utilities::lines::non_blank_lines;

pub struct ExactLineComparator;

impl LineComparator for ExactLineComparator {
    fn compare(&self, submission: &str, variant: &str) -> Vec<LineMatch> {
        find_similar_lines(submission, variant)
    }
}

/// Returns all `(i, j)` pairs where non-blank submission line `i` equals non-blank variant
/// line `j` after trimming.
///
/// Output is ordered by submission line, then by variant line.
pub fn find_similar_lines(submission: &str, variant: &str) -> Vec<LineMatch> {
    let submission_lines = non_blank_lines(submission);
    let variant_lines = non_blank_lines(variant);

    let mut matches = Vec::new();
    for (i, submission_line) in submission_lines.iter().enumerate() {
        for (j, variant_line) in variant_lines.iter().enumerate() {
            if submission_line == variant_line {
                matches.push(LineMatch::new(i + 1, j + 1, *submission_line));
            }
        }
    }
    matches
}
