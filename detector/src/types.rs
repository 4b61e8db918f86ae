//! # Types Module
//!
//! This module defines the core data structures passed between the stripper, matcher,
//! extractor and the two orchestrators.
//!
//! Wire names follow the public HTTP contract: style keys `gemini`, `chatgpt`, `claude`,
//! comparison keys `<style>_vs_user`, and match fields `user_line_number`,
//! `ai_line_number`, `line_content`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::utilities::fence::strip_code_fence;

/// Error code placed in a report whose judge output could not be parsed.
pub const PARSE_FAILURE: &str = "failed_to_parse_agent_output";

/// One of the three generation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Gemini,
    Chatgpt,
    Claude,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Gemini, Style::Chatgpt, Style::Claude];

    /// Canonical identifier used as the key in `generated_codes`.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Gemini => "gemini",
            Style::Chatgpt => "chatgpt",
            Style::Claude => "claude",
        }
    }

    /// Older deployments exposed the gemini variant as `code_generator`.
    pub fn legacy_alias(self) -> Option<&'static str> {
        match self {
            Style::Gemini => Some("code_generator"),
            _ => None,
        }
    }

    /// Key of this style's comparison inside a [`SimilarityReport`].
    pub fn comparison_key(self) -> &'static str {
        match self {
            Style::Gemini => "gemini_vs_user",
            Style::Chatgpt => "chatgpt_vs_user",
            Style::Claude => "claude_vs_user",
        }
    }

    /// Human-readable label used in judge prompts.
    pub fn label(self) -> &'static str {
        match self {
            Style::Gemini => "Gemini",
            Style::Chatgpt => "ChatGPT-style",
            Style::Claude => "Claude-style",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language-tagged block of code.
///
/// The normalized form is computed once, on construction, by stripping markdown fences for
/// the declared language and trimming the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    language: String,
    raw: String,
    normalized: String,
}

impl SourceText {
    pub fn new(raw: impl Into<String>, language: impl Into<String>) -> Self {
        let raw = raw.into();
        let language = language.into();
        let normalized = strip_code_fence(&raw, &language);
        Self {
            language,
            raw,
            normalized,
        }
    }

    /// Text that is already code; kept exactly as given.
    pub fn verbatim(text: impl Into<String>, language: impl Into<String>) -> Self {
        let raw = text.into();
        Self {
            language: language.into(),
            normalized: raw.clone(),
            raw,
        }
    }

    pub fn empty(language: impl Into<String>) -> Self {
        Self::new(String::new(), language)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Three code variants, one per [`Style`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    gemini: SourceText,
    chatgpt: SourceText,
    claude: SourceText,
}

impl VariantSet {
    pub fn new(gemini: SourceText, chatgpt: SourceText, claude: SourceText) -> Self {
        Self {
            gemini,
            chatgpt,
            claude,
        }
    }

    pub fn get(&self, style: Style) -> &SourceText {
        match style {
            Style::Gemini => &self.gemini,
            Style::Chatgpt => &self.chatgpt,
            Style::Claude => &self.claude,
        }
    }

    /// Normalized code keyed by style, as exposed in `generated_codes`.
    ///
    /// With `legacy_alias` set, styles that have an older name are mirrored under it too.
    pub fn codes(&self, legacy_alias: bool) -> BTreeMap<String, String> {
        let mut codes = BTreeMap::new();
        for style in Style::ALL {
            let code = self.get(style).normalized().to_string();
            if legacy_alias {
                if let Some(alias) = style.legacy_alias() {
                    codes.insert(alias.to_string(), code.clone());
                }
            }
            codes.insert(style.as_str().to_string(), code);
        }
        codes
    }
}

/// Variant codes supplied by a caller of `analyze`, any of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppliedVariants {
    pub gemini: Option<String>,
    pub chatgpt: Option<String>,
    pub claude: Option<String>,
}

impl SuppliedVariants {
    /// True when at least one variant carries non-empty code.
    pub fn any(&self) -> bool {
        [&self.gemini, &self.chatgpt, &self.claude]
            .into_iter()
            .any(|code| code.as_deref().is_some_and(|c| !c.is_empty()))
    }

    /// Builds a full set, with unsupplied entries as empty text.
    pub fn into_variant_set(self, language: &str) -> VariantSet {
        let source = |code: Option<String>| SourceText::new(code.unwrap_or_default(), language);
        VariantSet::new(
            source(self.gemini),
            source(self.chatgpt),
            source(self.claude),
        )
    }
}

/// One matched line pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    /// 1-based index into the submission's non-blank lines.
    #[serde(
        rename = "user_line_number",
        alias = "submissionLine",
        alias = "submission_line",
        deserialize_with = "line_number"
    )]
    pub submission_line: usize,
    /// 1-based index into the variant's non-blank lines.
    #[serde(
        rename = "ai_line_number",
        alias = "variantLine",
        alias = "variant_line",
        deserialize_with = "line_number"
    )]
    pub variant_line: usize,
    /// The matched line text, whitespace-trimmed.
    #[serde(rename = "line_content", alias = "content")]
    pub content: String,
}

impl LineMatch {
    pub fn new(submission_line: usize, variant_line: usize, content: impl Into<String>) -> Self {
        Self {
            submission_line,
            variant_line,
            content: content.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLineNumber {
    Integer(u64),
    Float(f64),
    Text(String),
}

// Judges occasionally quote line numbers or write them as `2.0`.
fn line_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let n = match RawLineNumber::deserialize(deserializer)? {
        RawLineNumber::Integer(n) => return usize::try_from(n).map_err(D::Error::custom),
        RawLineNumber::Float(f) => f,
        RawLineNumber::Text(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<usize>() {
                return Ok(n);
            }
            s.parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid line number {s:?}")))?
        }
    };
    whole_line_number(n)
        .ok_or_else(|| D::Error::custom(format!("line number {n} is not a whole number")))
}

fn whole_line_number(n: f64) -> Option<usize> {
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64).then_some(n as usize)
}

// One malformed entry costs that entry, not the report. `null` or a non-list is empty.
fn lenient_matches<'de, D>(deserializer: D) -> Result<Vec<LineMatch>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Null => return Ok(Vec::new()),
        other => {
            tracing::debug!(value = %other, "Comparison value is not a list; treating it as empty");
            return Ok(Vec::new());
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<LineMatch>(entry.clone()) {
            Ok(m) => Some(m),
            Err(e) => {
                tracing::debug!(entry = %entry, error = %e, "Skipping malformed line match");
                None
            }
        })
        .collect())
}

/// Line matches of the submission against each variant.
///
/// All three comparison keys are always serialized. When decoding, entries that are not
/// well-formed matches are dropped individually. A report built by
/// [`SimilarityReport::parse_failure`] additionally carries `error` and `raw_output`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityReport {
    #[serde(default, deserialize_with = "lenient_matches")]
    pub gemini_vs_user: Vec<LineMatch>,
    #[serde(default, deserialize_with = "lenient_matches")]
    pub chatgpt_vs_user: Vec<LineMatch>,
    #[serde(default, deserialize_with = "lenient_matches")]
    pub claude_vs_user: Vec<LineMatch>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

impl SimilarityReport {
    /// Degraded report for judge output that could not be parsed.
    pub fn parse_failure(raw_output: impl Into<String>) -> Self {
        Self {
            error: Some(PARSE_FAILURE.to_string()),
            raw_output: Some(raw_output.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, style: Style) -> &[LineMatch] {
        match style {
            Style::Gemini => &self.gemini_vs_user,
            Style::Chatgpt => &self.chatgpt_vs_user,
            Style::Claude => &self.claude_vs_user,
        }
    }

    pub fn set_matches(&mut self, style: Style, matches: Vec<LineMatch>) {
        match style {
            Style::Gemini => self.gemini_vs_user = matches,
            Style::Chatgpt => self.chatgpt_vs_user = matches,
            Style::Claude => self.claude_vs_user = matches,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
