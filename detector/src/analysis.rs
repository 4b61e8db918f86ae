//! # Analysis Orchestrator
//!
//! Compares a submission against the three generated variants and produces a
//! [`SimilarityReport`].
//!
//! - **Mock mode** runs the local [`LineComparator`] once per variant.
//! - **Live mode** sends one judge prompt containing the question, the submission and all
//!   three variants, then extracts the report from the judge's reply. Unparseable replies
//!   degrade to [`SimilarityReport::parse_failure`] rather than an error.
//!
//! [`resolve_variants`] decides whether variants come from the caller or from a
//! [`VariantSource`].

use tracing::{error, info};

use crate::Mode;
use crate::comparators::exact_line_comparator::ExactLineComparator;
use crate::error::DetectorError;
use crate::parsers::report_parser::extract_report;
use crate::prompts::judge_prompt;
use crate::traits::comparator::LineComparator;
use crate::traits::variant_source::VariantSource;
use crate::types::{SimilarityReport, SourceText, Style, SuppliedVariants, VariantSet};

/// Stateless per-request service producing a [`SimilarityReport`].
pub struct AnalysisOrchestrator {
    mode: Mode,
    comparator: Box<dyn LineComparator>,
}

impl AnalysisOrchestrator {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            comparator: Box::new(ExactLineComparator),
        }
    }

    /// Set a custom comparator for mock-mode matching.
    pub fn with_comparator<C: LineComparator + 'static>(mut self, comparator: C) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Reports which lines of `submission` appear in each variant.
    ///
    /// # Errors
    ///
    /// Only the judge call itself can fail. Extraction failures are folded into the
    /// returned report.
    pub async fn analyze(
        &self,
        submission: &SourceText,
        question: &str,
        variants: &VariantSet,
        language: &str,
    ) -> Result<SimilarityReport, DetectorError> {
        info!(language, mock = self.mode.is_mock(), "Checking submission similarity");

        let backends = match &self.mode {
            Mode::Mock => return Ok(self.compare_locally(submission, variants)),
            Mode::Live(backends) => backends,
        };

        let prompt = judge_prompt(question, language, submission.normalized(), variants);
        let output = backends.judge.generate(&prompt).await.map_err(|e| {
            error!(error = %e, "Similarity judge call failed");
            e
        })?;

        match extract_report(&output) {
            Ok(report) => Ok(report),
            Err(e) => {
                error!(error = %e, "Could not find valid JSON structure in judge output");
                Ok(SimilarityReport::parse_failure(output))
            }
        }
    }

    fn compare_locally(&self, submission: &SourceText, variants: &VariantSet) -> SimilarityReport {
        let mut report = SimilarityReport::default();
        for style in Style::ALL {
            let matches = self
                .comparator
                .compare(submission.normalized(), variants.get(style).normalized());
            report.set_matches(style, matches);
        }
        report
    }
}

/// Returns the caller's variants if any were supplied, otherwise generates them.
///
/// Supplying even one non-empty variant means all three come from the caller, missing ones
/// as empty text, and `source` is never asked.
pub async fn resolve_variants(
    supplied: SuppliedVariants,
    source: &dyn VariantSource,
    question: &str,
    language: &str,
) -> Result<VariantSet, DetectorError> {
    if supplied.any() {
        return Ok(supplied.into_variant_set(language));
    }
    source.generate(question, language).await
}
