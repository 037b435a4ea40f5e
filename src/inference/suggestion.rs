//! The suggestion record produced by every classifier.

use crate::registry::ViewType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A suggested view type with a confidence score and a justification.
///
/// Suggestions are plain values. The `reason` text is meant for humans and is
/// not stable across releases, so callers should not match on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SuggestionRecord")]
pub struct ViewSuggestion {
    view: ViewType,
    confidence: f64,
    reason: String,
}

impl ViewSuggestion {
    /// Create a suggestion. Confidence is clamped to `[0, 1]`.
    pub fn new(view: ViewType, confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            view,
            confidence: confidence.clamp(0.0, 1.0),
            reason: reason.into(),
        }
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Wire form of a suggestion; deserialized values pass through
/// [`ViewSuggestion::new`] so the confidence bound holds.
#[derive(Deserialize)]
struct SuggestionRecord {
    view: ViewType,
    confidence: f64,
    reason: String,
}

impl From<SuggestionRecord> for ViewSuggestion {
    fn from(record: SuggestionRecord) -> Self {
        Self::new(record.view, record.confidence, record.reason)
    }
}

impl fmt::Display for ViewSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}): {}", self.view, self.confidence, self.reason)
    }
}
