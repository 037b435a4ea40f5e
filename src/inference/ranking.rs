//! Merge, sort, deduplicate and truncate classifier output.

use super::suggestion::ViewSuggestion;
use crate::registry::ViewType;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Rank candidates by descending confidence, keeping only the first (highest
/// confidence) occurrence of each view and at most `limit` entries.
///
/// The sort is stable, so equal confidences keep cascade order.
pub(crate) fn rank(mut candidates: Vec<ViewSuggestion>, limit: usize) -> Vec<ViewSuggestion> {
    if limit == 0 {
        return Vec::new();
    }

    candidates.sort_by(|a, b| {
        b.confidence()
            .partial_cmp(&a.confidence())
            .unwrap_or(Ordering::Equal)
    });

    let mut seen: HashSet<ViewType> = HashSet::new();
    candidates
        .into_iter()
        .filter(|suggestion| seen.insert(suggestion.view()))
        .take(limit)
        .collect()
}
