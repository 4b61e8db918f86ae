use crate::types::LineMatch;

/// LineComparator is a strategy trait for matching lines of a submission against one variant.
///
/// Implementations decide which line pairs count as equivalent. Line numbers in the returned
/// matches are 1-based indices over non-blank lines of each text.
pub trait LineComparator: Send + Sync {
    /// Compare `submission` against `variant`, returning every matching line pair.
    fn compare(&self, submission: &str, variant: &str) -> Vec<LineMatch>;
}
