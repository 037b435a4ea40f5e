//! Classifier for array payloads.
//!
//! Only a bounded prefix of the array is sampled; the remaining elements are
//! assumed to look like the sampled ones.

use super::suggestion::ViewSuggestion;
use crate::registry::ViewType;
use log::trace;
use serde_json::Value;
use std::collections::HashSet;

/// Keys that mark an object as carrying coordinates.
const GEO_FIELDS: &[&str] = &["lat", "lon", "lng", "latitude", "longitude"];

/// Produce unranked candidates for an array payload, sampling at most
/// `sample_size` leading elements.
pub(crate) fn classify(items: &[Value], sample_size: usize) -> Vec<ViewSuggestion> {
    if items.is_empty() {
        return vec![ViewSuggestion::new(ViewType::Json, 0.50, "Empty array")];
    }

    let sample = &items[..items.len().min(sample_size.max(1))];
    trace!("array payload: sampling {} of {} element(s)", sample.len(), items.len());

    if sample.iter().all(Value::is_object) {
        let keys: HashSet<&str> = sample
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|obj| obj.keys().map(String::as_str))
            .collect();

        let mut candidates = Vec::new();

        let geo_hits = GEO_FIELDS.iter().filter(|field| keys.contains(*field)).count();
        if geo_hits >= 2 {
            candidates.push(ViewSuggestion::new(
                ViewType::Map,
                0.80,
                "Array of objects with lat/lon fields",
            ));
        }

        if keys.contains("label") && keys.contains("value") {
            candidates.push(ViewSuggestion::new(
                ViewType::Chart,
                0.70,
                "Array of {label, value} pairs",
            ));
        }

        candidates.push(ViewSuggestion::new(
            ViewType::DataTable,
            0.50,
            "Array of objects, default table fallback",
        ));
        candidates
    } else if sample.iter().all(Value::is_number) {
        vec![ViewSuggestion::new(ViewType::Chart, 0.60, "Array of numbers")]
    } else {
        vec![ViewSuggestion::new(ViewType::Json, 0.50, "Mixed array")]
    }
}
