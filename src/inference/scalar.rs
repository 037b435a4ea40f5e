//! Classifier for numbers and every remaining payload kind.

use super::suggestion::ViewSuggestion;
use crate::registry::ViewType;
use serde_json::Value;

pub(crate) fn classify(value: &Value) -> Vec<ViewSuggestion> {
    match value {
        Value::Number(_) => vec![ViewSuggestion::new(
            ViewType::Counter,
            0.65,
            "Numeric scalar value",
        )],
        _ => vec![ViewSuggestion::new(ViewType::Json, 0.50, "Unknown data type")],
    }
}
