//! Classifier for string payloads.

use super::suggestion::ViewSuggestion;
use crate::registry::ViewType;
use log::trace;

/// Line prefixes that indicate source code.
const CODE_SIGNALS: &[&str] = &[
    "def ", "function ", "class ", "import ", "const ", "let ", "var ", "pub fn ",
];

/// Substrings that indicate markdown formatting.
const MARKDOWN_SIGNALS: &[&str] = &["# ", "## ", "**", "- ", "```"];

pub(crate) fn classify(text: &str) -> Vec<ViewSuggestion> {
    let trimmed = text.trim();
    let mut candidates = Vec::new();

    if CODE_SIGNALS.iter().any(|signal| starts_line(trimmed, signal)) {
        candidates.push(ViewSuggestion::new(
            ViewType::Code,
            0.65,
            "String contains code patterns",
        ));
    }

    if MARKDOWN_SIGNALS.iter().any(|signal| trimmed.contains(signal)) {
        candidates.push(ViewSuggestion::new(
            ViewType::Markdown,
            0.65,
            "String contains markdown formatting",
        ));
    }

    if candidates.is_empty() {
        candidates.push(ViewSuggestion::new(
            ViewType::Markdown,
            0.50,
            "Plain text, default to markdown",
        ));
    }

    trace!("string payload: {} candidate(s)", candidates.len());
    candidates
}

/// True when `signal` opens the text or any line after a newline.
fn starts_line(text: &str, signal: &str) -> bool {
    text.starts_with(signal) || text.contains(&format!("\n{}", signal))
}
