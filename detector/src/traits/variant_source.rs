use async_trait::async_trait;

use crate::error::DetectorError;
use crate::types::VariantSet;

/// Produces one code variant per style for a question.
///
/// [`GenerationOrchestrator`](crate::generation::GenerationOrchestrator) is the production
/// implementation; analysis depends on this trait so callers can substitute their own.
#[async_trait]
pub trait VariantSource: Send + Sync {
    async fn generate(&self, question: &str, language: &str) -> Result<VariantSet, DetectorError>;
}
