//! Similarity Report Extraction
//!
//! Recovers a [`SimilarityReport`] from free-form judge output. Judges are unreliable about
//! strict JSON: they add narration, markdown fences and sometimes answer with a Python dict
//! literal. Extraction therefore runs an ordered chain of [`ParseStrategy`]s from a located
//! start position; the first strategy that yields an object wins.
//!
//! 1. [`ParseStrategy::StrictJson`]: a streaming JSON decoder reading the first complete value
//!    from the start position and ignoring whatever follows it.
//! 2. [`ParseStrategy::PythonLiteral`]: the text from the start position through the *last*
//!    closing brace, parsed with [`parse_literal`].
//!
//! If no opening brace exists, or every strategy fails, extraction fails with
//! [`DetectorError::Extraction`]. No structure is ever guessed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::DetectorError;
use crate::parsers::literal_parser::parse_literal;
use crate::types::{SimilarityReport, Style};

static KEYED_OBJECT_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{\s*["'](?:gemini_vs_user|chatgpt_vs_user|claude_vs_user)["']"#)
        .expect("report start pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    StrictJson,
    PythonLiteral,
}

impl ParseStrategy {
    pub const ORDER: [ParseStrategy; 2] = [ParseStrategy::StrictJson, ParseStrategy::PythonLiteral];

    /// Attempts to parse a value from `text`, beginning at byte offset `start`.
    pub fn attempt(self, text: &str, start: usize) -> Option<Value> {
        match self {
            ParseStrategy::StrictJson => serde_json::Deserializer::from_str(&text[start..])
                .into_iter::<Value>()
                .next()?
                .ok(),
            ParseStrategy::PythonLiteral => {
                let end = text.rfind('}')?;
                if end < start {
                    return None;
                }
                parse_literal(&text[start..=end]).ok()
            }
        }
    }
}

/// Byte offset of the most likely start of the report object.
///
/// Prefers a brace immediately followed by one of the comparison keys; falls back to the
/// first brace anywhere.
pub fn locate_report_start(text: &str) -> Option<usize> {
    KEYED_OBJECT_START
        .find(text)
        .map(|m| m.start())
        .or_else(|| text.find('{'))
}

/// Recovers the raw report object from `text`.
///
/// The object must contain at least one of the three comparison keys.
pub fn extract_report_object(text: &str) -> Result<Map<String, Value>, DetectorError> {
    let start = locate_report_start(text)
        .ok_or_else(|| DetectorError::Extraction("no opening brace in output".to_string()))?;

    for strategy in ParseStrategy::ORDER {
        match strategy.attempt(text, start) {
            Some(Value::Object(map)) if has_comparison_key(&map) => {
                debug!(?strategy, "Recovered similarity report object");
                return Ok(map);
            }
            Some(_) => debug!(?strategy, "Parsed value is not a similarity report"),
            None => debug!(?strategy, "Strategy could not parse output"),
        }
    }

    Err(DetectorError::Extraction(
        "no parse strategy recovered a report object".to_string(),
    ))
}

/// Recovers a typed [`SimilarityReport`] from `text`.
///
/// Missing comparison keys default to empty lists; unknown keys are ignored. Malformed match
/// entries are dropped one at a time, so only an unrecoverable object is an extraction failure.
pub fn extract_report(text: &str) -> Result<SimilarityReport, DetectorError> {
    let object = extract_report_object(text)?;
    serde_json::from_value(Value::Object(object))
        .map_err(|e| DetectorError::Extraction(format!("unexpected report shape: {e}")))
}

fn has_comparison_key(map: &Map<String, Value>) -> bool {
    Style::ALL
        .iter()
        .any(|style| map.contains_key(style.comparison_key()))
}
