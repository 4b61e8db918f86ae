//! # Prompts
//!
//! Builds the prompts sent to backends. A [`Prompt`] pairs a [`Persona`] (who the backend
//! should act as) with a task description and the expected output format.
//!
//! Both prompt kinds treat the question and code as data to work on. The generation prompt
//! asks for minimal, comment-free code; the judge prompt asks for line matches per variant
//! as a single JSON object keyed by the comparison identifiers.

use crate::types::{Style, VariantSet};

/// Role, goal and backstory given to a backend as its system instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl Persona {
    /// Persona of the code generator for `style`.
    pub fn generator(style: Style) -> Self {
        let role = match style {
            Style::Gemini => "Minimalist Code Generator".to_string(),
            other => format!("Minimalist Code Generator ({} output)", other.label()),
        };
        Self {
            role,
            goal: "generate simple, minimalist code".to_string(),
            backstory: "You are a code generator. You write simple, functional code. \
                        You NEVER add comments. You just write the code."
                .to_string(),
        }
    }

    /// Persona of the similarity judge.
    pub fn judge() -> Self {
        Self {
            role: "Code Diff Analyzer".to_string(),
            goal: "Perform a line-by-line comparison of code snippets and extract all matching \
                   or highly similar lines"
                .to_string(),
            backstory: "You are an expert in code analysis, similar to a 'diff' utility. You do \
                        not care about overall similarity or style. Your sole purpose is to read \
                        pieces of code and meticulously identify and list every single line that \
                        is identical or functionally identical. You output this list of matches \
                        with their corresponding line numbers."
                .to_string(),
        }
    }

    pub fn system_instruction(&self) -> String {
        format!(
            "You are {}.\nYour goal: {}.\n{}",
            self.role, self.goal, self.backstory
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub persona: Persona,
    pub task: String,
    pub expected_output: String,
}

impl Prompt {
    /// The user-facing text: task followed by the expected output format.
    pub fn render(&self) -> String {
        format!(
            "{}\n\nThis is the expected criteria for your final answer: {}\n\
             You MUST return the actual complete content as the final answer, not a summary.",
            self.task.trim(),
            self.expected_output.trim()
        )
    }
}

/// Prompt asking the `style` generator to solve `question` in `language`.
pub fn generation_prompt(style: Style, question: &str, language: &str) -> Prompt {
    let task = format!(
        "Generate {language} code for the following programming question:\n\n\
         Question: {question}\n\n\
         Requirements:\n\
         - Write a minimalist {language} code solution\n\
         - DO NOT include any comments\n\
         - Handle edge cases appropriately\n"
    );
    Prompt {
        persona: Persona::generator(style),
        task,
        expected_output: format!(
            "A single block of {language} code. Do not include markdown formatting or any \
             explanatory text."
        ),
    }
}

/// Prompt asking the judge to list lines of `submission` that also appear in each variant.
///
/// Each code block is fenced with the lowercased language tag. Line numbers are requested
/// over non-blank lines, starting at 1 in each block, so judged reports use the same
/// numbering as the local matcher.
pub fn judge_prompt(
    question: &str,
    language: &str,
    submission: &str,
    variants: &VariantSet,
) -> Prompt {
    let tag = language.to_lowercase();
    let mut task = format!(
        "Analyze the following code submissions for the programming question: \"{question}\"\n\n\
         ---\nUser-Submitted Code:\n```{tag}\n{submission}\n```\n"
    );
    for style in Style::ALL {
        task.push_str(&format!(
            "---\n{} Generated Code:\n```{tag}\n{}\n```\n",
            style.label(),
            variants.get(style).normalized()
        ));
    }
    task.push_str(
        "---\n\n\
         Your task is to perform three separate comparisons and identify all identical or \
         near-identical lines of code.\n\
         Do not calculate a percentage. Only list the matching lines.\n\
         Lines should be considered similar if they are identical or have only minor whitespace \
         differences.\n\
         Number lines starting from 1 in each code block, counting only non-blank lines.\n\n",
    );
    for (n, style) in Style::ALL.into_iter().enumerate() {
        task.push_str(&format!(
            "{}. Compare User Code vs. {label} Generated Code: list all similar lines. For each \
             match, provide the line number from the user's code and the line number from the \
             {label} code, along with the code content.\n",
            n + 1,
            label = style.label()
        ));
    }
    let keys = comparison_keys();
    task.push_str(&format!(
        "\nFormat your entire output as a single JSON object with exactly three keys: {keys}.\n\
         Each key should contain a list of objects, where each object represents a single line \
         match and has the keys: \"user_line_number\", \"ai_line_number\", and \"line_content\".\n\
         If no similarities are found for a comparison, return an empty list for that key.\n\
         Example for one match: {{\"user_line_number\": 5, \"ai_line_number\": 4, \
         \"line_content\": \"for i in range(n):\"}}\n"
    ));

    Prompt {
        persona: Persona::judge(),
        task,
        expected_output: format!(
            "STRICT JSON ONLY. No markdown blocks, no fluff, no conversational text.\n\
             Return a valid JSON object with exactly these keys: {keys}.\n\
             Example:\n\
             {{\n  \"gemini_vs_user\": [{{\"user_line_number\": 1, \"ai_line_number\": 2, \
             \"line_content\": \"print('hello')\"}}],\n  \"chatgpt_vs_user\": [],\n  \
             \"claude_vs_user\": []\n}}"
        ),
    }
}

fn comparison_keys() -> String {
    Style::ALL
        .iter()
        .map(|style| format!("\"{}\"", style.comparison_key()))
        .collect::<Vec<_>>()
        .join(", ")
}
