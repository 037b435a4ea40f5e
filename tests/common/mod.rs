//! Shared test utilities
//!
//! - [`fixtures`] - Representative payloads for each view
//! - Assertion macros for suggestion lists

pub mod fixtures;

/// Assert the ranking invariants: at most `limit` entries, non-increasing
/// confidence, no repeated view.
#[macro_export]
macro_rules! assert_ranked {
    ($suggestions:expr, $limit:expr) => {{
        let suggestions = &$suggestions;
        assert!(
            suggestions.len() <= $limit,
            "Expected at most {} suggestions, got {}",
            $limit,
            suggestions.len()
        );
        for pair in suggestions.windows(2) {
            assert!(
                pair[0].confidence() >= pair[1].confidence(),
                "Suggestions out of order: {} before {}",
                pair[0],
                pair[1]
            );
        }
        let mut seen = std::collections::HashSet::new();
        for suggestion in suggestions.iter() {
            assert!(
                seen.insert(suggestion.view()),
                "Duplicate view in suggestions: {}",
                suggestion.view()
            );
        }
    }};
}

/// Assert the best suggestion for a payload names `view` with at least
/// `min_confidence`.
#[macro_export]
macro_rules! assert_best_view {
    ($payload:expr, $view:expr, $min_confidence:expr) => {{
        let best = view_inference::infer_view($payload);
        assert_eq!(
            best.view(),
            $view,
            "Unexpected best view for payload {}: {}",
            $payload,
            best
        );
        assert!(
            best.confidence() >= $min_confidence,
            "Confidence {} below {} for payload {}",
            best.confidence(),
            $min_confidence,
            $payload
        );
    }};
}
