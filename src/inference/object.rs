//! Classifier for key-value (object) payloads.
//!
//! Objects are classified through three tiers:
//!
//! 1. **Exact discriminator** - a string `type` field naming a known view wins
//!    outright with confidence 1.0 and nothing else is considered.
//! 2. **Signature fields** - field combinations unique to one view. Every
//!    matching probe contributes a candidate.
//! 3. **Structural fallbacks** - weaker patterns, consulted only when tier 2
//!    found nothing, always ending with a generic `json` candidate.
//!
//! Tiers 2 and 3 are ordered probe tables. Probes that look inside a nested
//! array only inspect its first element.

use super::suggestion::ViewSuggestion;
use crate::registry::ViewType;
use log::trace;
use serde_json::{Map, Value};

/// A single entry in a classification cascade.
struct Probe {
    view: ViewType,
    confidence: f64,
    reason: &'static str,
    matches: fn(&Map<String, Value>) -> bool,
}

impl Probe {
    fn evaluate(&self, obj: &Map<String, Value>) -> Option<ViewSuggestion> {
        (self.matches)(obj).then(|| ViewSuggestion::new(self.view, self.confidence, self.reason))
    }
}

const SIGNATURE_PROBES: &[Probe] = &[
    Probe {
        view: ViewType::Chart,
        confidence: 0.95,
        reason: "\"chartType\" field is unique to chart schema",
        matches: has_chart_type,
    },
    Probe {
        view: ViewType::Map,
        confidence: 0.95,
        reason: "\"layers\" + \"center\"/\"bounds\" are map-specific fields",
        matches: has_map_layers,
    },
    Probe {
        view: ViewType::DataTable,
        confidence: 0.95,
        reason: "\"columns\" + \"rows\" is the tabular data signature",
        matches: has_columns_and_rows,
    },
    Probe {
        view: ViewType::Form,
        confidence: 0.95,
        reason: "\"schema\" + \"submitTool\" are form-specific fields",
        matches: has_form_schema,
    },
    Probe {
        view: ViewType::Timeline,
        confidence: 0.90,
        reason: "\"events\" array with \"date\" fields",
        matches: has_dated_events,
    },
    Probe {
        view: ViewType::Gauge,
        confidence: 0.90,
        reason: "\"value\" + \"thresholds\" is the gauge signature",
        matches: has_value_and_thresholds,
    },
    Probe {
        view: ViewType::Progress,
        confidence: 0.85,
        reason: "\"tracks\" with \"bars\" is progress-specific",
        matches: has_tracks_with_bars,
    },
    Probe {
        view: ViewType::Log,
        confidence: 0.85,
        reason: "\"entries\" with \"level\" field",
        matches: has_leveled_entries,
    },
    Probe {
        view: ViewType::Tree,
        confidence: 0.85,
        reason: "\"nodes\" or \"children\" indicates hierarchical data",
        matches: has_nodes_or_children,
    },
    Probe {
        view: ViewType::Poll,
        confidence: 0.85,
        reason: "\"options\" with \"votes\" is polling data",
        matches: has_voted_options,
    },
];

const STRUCTURAL_PROBES: &[Probe] = &[
    Probe {
        view: ViewType::Detail,
        confidence: 0.70,
        reason: "\"title\" + \"fields\"/\"sections\" suggests single-record display",
        matches: has_title_with_fields,
    },
    Probe {
        view: ViewType::Counter,
        confidence: 0.65,
        reason: "\"value\" field with numeric type",
        matches: has_numeric_value,
    },
];

const FALLBACK_CONFIDENCE: f64 = 0.50;

/// Produce unranked candidates for an object payload.
pub(crate) fn classify(obj: &Map<String, Value>) -> Vec<ViewSuggestion> {
    if let Some(exact) = exact_type_match(obj) {
        trace!("object payload: exact discriminator match on '{}'", exact.view());
        return vec![exact];
    }

    let signatures: Vec<ViewSuggestion> = SIGNATURE_PROBES
        .iter()
        .filter_map(|probe| probe.evaluate(obj))
        .collect();
    if !signatures.is_empty() {
        trace!("object payload: {} signature probe(s) matched", signatures.len());
        return signatures;
    }

    let mut candidates: Vec<ViewSuggestion> = STRUCTURAL_PROBES
        .iter()
        .filter_map(|probe| probe.evaluate(obj))
        .collect();
    candidates.push(ViewSuggestion::new(
        ViewType::Json,
        FALLBACK_CONFIDENCE,
        "Generic object, fallback to JSON tree viewer",
    ));
    trace!("object payload: {} structural candidate(s)", candidates.len());
    candidates
}

fn exact_type_match(obj: &Map<String, Value>) -> Option<ViewSuggestion> {
    let name = obj.get("type")?.as_str()?;
    let view = ViewType::from_name(name)?;
    Some(ViewSuggestion::new(
        view,
        1.0,
        format!("Exact type field match: \"{}\"", name),
    ))
}

/// True when `obj[key]` is a non-empty array whose first element is an object
/// containing `field`.
fn first_element_has(obj: &Map<String, Value>, key: &str, field: &str) -> bool {
    obj.get(key)
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(Value::as_object)
        .is_some_and(|first| first.contains_key(field))
}

fn has_chart_type(obj: &Map<String, Value>) -> bool {
    obj.contains_key("chartType")
}

fn has_map_layers(obj: &Map<String, Value>) -> bool {
    obj.contains_key("layers") && (obj.contains_key("center") || obj.contains_key("bounds"))
}

fn has_columns_and_rows(obj: &Map<String, Value>) -> bool {
    obj.contains_key("columns") && obj.contains_key("rows")
}

fn has_form_schema(obj: &Map<String, Value>) -> bool {
    obj.contains_key("schema") && obj.contains_key("submitTool")
}

fn has_dated_events(obj: &Map<String, Value>) -> bool {
    first_element_has(obj, "events", "date")
}

fn has_value_and_thresholds(obj: &Map<String, Value>) -> bool {
    obj.contains_key("value") && obj.contains_key("thresholds")
}

fn has_tracks_with_bars(obj: &Map<String, Value>) -> bool {
    first_element_has(obj, "tracks", "bars")
}

fn has_leveled_entries(obj: &Map<String, Value>) -> bool {
    first_element_has(obj, "entries", "level")
}

fn has_nodes_or_children(obj: &Map<String, Value>) -> bool {
    obj.contains_key("nodes") || obj.contains_key("children")
}

fn has_voted_options(obj: &Map<String, Value>) -> bool {
    first_element_has(obj, "options", "votes")
}

fn has_title_with_fields(obj: &Map<String, Value>) -> bool {
    obj.contains_key("title") && (obj.contains_key("fields") || obj.contains_key("sections"))
}

fn has_numeric_value(obj: &Map<String, Value>) -> bool {
    obj.get("value").is_some_and(Value::is_number)
}
