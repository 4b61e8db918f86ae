//! # Comparators
//!
//! Line comparison strategies. All comparators implement
//! [`LineComparator`](crate::traits::comparator::LineComparator) so the analysis orchestrator
//! can swap them.
//!
//! - [`exact_line_comparator`]: exhaustive exact matching of trimmed, non-blank lines.

pub mod exact_line_comparator;
