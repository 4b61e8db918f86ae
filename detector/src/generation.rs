//! # Generation Orchestrator
//!
//! Produces one code variant per [`Style`] for a question.
//!
//! - **Mock mode** returns a canned sample for every style: a Python sample when the language
//!   starts with `py`, a C-family sample otherwise. Output depends only on the language.
//! - **Live mode** sends one generation prompt per style concurrently and fence-strips each
//!   reply on the requested language. Any failing call fails the whole generation.

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::DetectorError;
use crate::prompts::generation_prompt;
use crate::traits::backend::CodeBackend;
use crate::traits::variant_source::VariantSource;
use crate::types::{SourceText, Style, VariantSet};
use crate::{Backends, Mode};

pub const MOCK_PYTHON_SAMPLE: &str = "def example(n):\n    # mock implementation\n    return n\n";
pub const MOCK_C_FAMILY_SAMPLE: &str = "int example(int n) {\n    return n;\n}\n";

/// Stateless per-request service generating a [`VariantSet`].
pub struct GenerationOrchestrator {
    mode: Mode,
}

impl GenerationOrchestrator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Generates the three variants for `question` in `language`.
    ///
    /// # Errors
    ///
    /// Returns the first [`DetectorError`] raised by any generator in live mode.
    pub async fn generate(
        &self,
        question: &str,
        language: &str,
    ) -> Result<VariantSet, DetectorError> {
        info!(language, mock = self.mode.is_mock(), "Generating code variants");

        match &self.mode {
            Mode::Mock => Ok(mock_variants(language)),
            Mode::Live(backends) => live_variants(backends, question, language).await,
        }
    }
}

#[async_trait]
impl VariantSource for GenerationOrchestrator {
    async fn generate(&self, question: &str, language: &str) -> Result<VariantSet, DetectorError> {
        GenerationOrchestrator::generate(self, question, language).await
    }
}

/// Deterministic variants used in mock mode.
pub fn mock_variants(language: &str) -> VariantSet {
    let sample = if language.to_lowercase().starts_with("py") {
        MOCK_PYTHON_SAMPLE
    } else {
        MOCK_C_FAMILY_SAMPLE
    };
    let source = || SourceText::verbatim(sample, language);
    VariantSet::new(source(), source(), source())
}

async fn live_variants(
    backends: &Backends,
    question: &str,
    language: &str,
) -> Result<VariantSet, DetectorError> {
    let (gemini, chatgpt, claude) = tokio::try_join!(
        generate_style(backends.generator(Style::Gemini).as_ref(), Style::Gemini, question, language),
        generate_style(backends.generator(Style::Chatgpt).as_ref(), Style::Chatgpt, question, language),
        generate_style(backends.generator(Style::Claude).as_ref(), Style::Claude, question, language),
    )?;
    Ok(VariantSet::new(gemini, chatgpt, claude))
}

async fn generate_style(
    backend: &dyn CodeBackend,
    style: Style,
    question: &str,
    language: &str,
) -> Result<SourceText, DetectorError> {
    let prompt = generation_prompt(style, question, language);
    match backend.generate(&prompt).await {
        Ok(raw) => Ok(SourceText::new(raw, language)),
        Err(e) => {
            error!(%style, error = %e, "Code generation failed");
            Err(e)
        }
    }
}
