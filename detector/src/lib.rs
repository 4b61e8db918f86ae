//! # Detector Library
//!
//! This crate holds the core logic for generating AI code variants for a programming question
//! and reporting which lines of a submitted solution also appear in those variants.
//!
//! ## Key Concepts
//! - **Fence stripping**: recovering plain source text from a backend's markdown-wrapped reply.
//! - **Line matching**: exhaustive, blank-line-insensitive comparison of two source texts.
//! - **Report extraction**: recovering a structured similarity report from free-form judge output.
//! - **Orchestrators**: [`generation::GenerationOrchestrator`] and [`analysis::AnalysisOrchestrator`],
//!   both driven by an explicit [`Mode`] (mock or live) resolved once at startup.

pub mod analysis;
pub mod backends;
pub mod comparators;
pub mod error;
pub mod generation;
pub mod parsers;
pub mod prompts;
pub mod traits;
pub mod types;
pub mod utilities;


use std::sync::Arc;

use crate::traits::backend::CodeBackend;
use crate::types::Style;

/// The set of live backends used by the orchestrators.
///
/// The three generators and the judge are independent instances of the same capability;
/// they differ only in the persona carried by each prompt.
#[derive(Clone)]
pub struct Backends {
    pub gemini: Arc<dyn CodeBackend>,
    pub chatgpt: Arc<dyn CodeBackend>,
    pub claude: Arc<dyn CodeBackend>,
    pub judge: Arc<dyn CodeBackend>,
}

impl Backends {
    /// Uses one backend for every role.
    pub fn shared(backend: Arc<dyn CodeBackend>) -> Self {
        Self {
            gemini: backend.clone(),
            chatgpt: backend.clone(),
            claude: backend.clone(),
            judge: backend,
        }
    }

    /// Returns the generator responsible for `style`.
    pub fn generator(&self, style: Style) -> &Arc<dyn CodeBackend> {
        match style {
            Style::Gemini => &self.gemini,
            Style::Chatgpt => &self.chatgpt,
            Style::Claude => &self.claude,
        }
    }
}

/// Operating mode shared by both orchestrators.
///
/// `Mock` never contacts a backend and produces deterministic output. `Live` carries the
/// backends to call.
#[derive(Clone)]
pub enum Mode {
    Mock,
    Live(Backends),
}

impl Mode {
    pub fn is_mock(&self) -> bool {
        matches!(self, Mode::Mock)
    }
}

impl std::fmt::Debug for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Mock => f.write_str("Mock"),
            Mode::Live(_) => f.write_str("Live"),
        }
    }
}
