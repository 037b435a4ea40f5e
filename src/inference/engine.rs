//! Configurable entry point for view inference.
//!
//! [`ViewInferrer`] dispatches a payload to the classifier for its root kind
//! and ranks the resulting candidates. The free functions
//! [`infer_view`](super::infer_view) and [`infer_views`](super::infer_views)
//! use a default-configured inferrer.

use super::suggestion::ViewSuggestion;
use super::{object, ranking, scalar, sequence, text};
use crate::error::{InferenceError, InferenceResult};
use crate::registry::ViewType;
use log::debug;
use serde_json::Value;

/// Number of suggestions returned by [`ViewInferrer::suggest`] by default.
pub const DEFAULT_LIMIT: usize = 3;

/// Number of leading array elements inspected by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Tunables for the inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Suggestion count used by [`ViewInferrer::suggest`].
    pub default_limit: usize,

    /// How many leading array elements are sampled when classifying arrays.
    /// Larger values change which views are suggested for heterogeneous
    /// arrays and make classification cost grow with the sample.
    pub sample_size: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl InferenceConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> InferenceResult<()> {
        if self.sample_size == 0 {
            return Err(InferenceError::invalid_config(
                "sample size must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Suggests view types for untyped JSON payloads.
///
/// Inference is pure and synchronous, so a single inferrer can be shared
/// freely between threads.
///
/// # Examples
///
/// ```rust
/// use view_inference::{ViewInferrer, ViewType};
/// use serde_json::json;
///
/// let inferrer = ViewInferrer::default();
/// let best = inferrer.infer_view(&json!({"columns": [], "rows": []}));
/// assert_eq!(best.view(), ViewType::DataTable);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewInferrer {
    config: InferenceConfig,
}

impl ViewInferrer {
    /// Create an inferrer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferrer from an explicit configuration.
    pub fn with_config(config: InferenceConfig) -> InferenceResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Start building a customized inferrer.
    pub fn builder() -> ViewInferrerBuilder {
        ViewInferrerBuilder::new()
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Return the single best-scoring suggestion for `data`.
    pub fn infer_view(&self, data: &Value) -> ViewSuggestion {
        self.infer_views(data, 1)
            .into_iter()
            .next()
            .unwrap_or_else(|| ViewSuggestion::new(ViewType::Json, 0.50, "Unknown data type"))
    }

    /// Return up to `limit` suggestions, sorted by descending confidence with
    /// no repeated view names. A `limit` of zero yields an empty list.
    pub fn infer_views(&self, data: &Value, limit: usize) -> Vec<ViewSuggestion> {
        let candidates = self.candidates(data);
        let ranked = ranking::rank(candidates, limit);
        debug!(
            "inferred {} suggestion(s) for {} payload, best: {}",
            ranked.len(),
            payload_kind(data),
            ranked
                .first()
                .map(|s| s.view().as_str())
                .unwrap_or("none")
        );
        ranked
    }

    /// Return up to the configured default number of suggestions.
    pub fn suggest(&self, data: &Value) -> Vec<ViewSuggestion> {
        self.infer_views(data, self.config.default_limit)
    }

    fn candidates(&self, data: &Value) -> Vec<ViewSuggestion> {
        match data {
            Value::Object(obj) => object::classify(obj),
            Value::Array(items) => sequence::classify(items, self.config.sample_size),
            Value::String(s) => text::classify(s),
            other => scalar::classify(other),
        }
    }
}

/// Name of the root kind of a JSON value.
pub(crate) fn payload_kind(data: &Value) -> &'static str {
    match data {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}

/// Builder for [`ViewInferrer`].
///
/// ```rust
/// use view_inference::ViewInferrer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let inferrer = ViewInferrer::builder()
///     .with_default_limit(5)
///     .with_sample_size(10)
///     .build()?;
/// assert_eq!(inferrer.config().default_limit, 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ViewInferrerBuilder {
    config: InferenceConfig,
}

impl ViewInferrerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of suggestions returned by [`ViewInferrer::suggest`].
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.config.default_limit = limit;
        self
    }

    /// Set how many leading array elements are sampled.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.config.sample_size = sample_size;
        self
    }

    /// Validate the configuration and build the inferrer.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::InvalidConfig`] if the sample size is zero.
    pub fn build(self) -> InferenceResult<ViewInferrer> {
        ViewInferrer::with_config(self.config)
    }
}
