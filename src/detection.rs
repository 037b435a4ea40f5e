//! Shape predicates for JSON payloads.
//!
//! These answer narrow structural questions (is this GeoJSON? is this a
//! uniform table?) without ranking anything. They are independent of the
//! inference cascade and never change its suggestions.

use crate::inference::payload_kind;
use serde::Serialize;
use serde_json::{Map, Value};

/// Key names treated as date or time identifiers.
const DATE_KEYS: &[&str] = &[
    "date",
    "time",
    "timestamp",
    "datetime",
    "created_at",
    "updated_at",
    "ts",
    "day",
    "month",
    "year",
];

/// Default minimum row count for [`is_tabular`].
pub const DEFAULT_TABULAR_MIN_ITEMS: usize = 3;

/// Check whether `data` is a GeoJSON `FeatureCollection` or `Feature`.
pub fn is_geojson(data: &Value) -> bool {
    let Some(obj) = data.as_object() else {
        return false;
    };
    match obj.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => obj.get("features").is_some_and(Value::is_array),
        Some("Feature") => obj.get("geometry").is_some_and(Value::is_object),
        _ => false,
    }
}

/// Check whether `data` is an array of at least `min_items` objects that all
/// share exactly the same key set.
pub fn is_tabular(data: &Value, min_items: usize) -> bool {
    let Some(rows) = object_rows(data) else {
        return false;
    };
    if rows.len() < min_items {
        return false;
    }
    let first = &rows[0];
    rows.iter()
        .all(|row| row.len() == first.len() && row.keys().all(|k| first.contains_key(k)))
}

/// [`is_tabular`] with [`DEFAULT_TABULAR_MIN_ITEMS`].
pub fn is_tabular_default(data: &Value) -> bool {
    is_tabular(data, DEFAULT_TABULAR_MIN_ITEMS)
}

/// Check whether `obj` has a key that names a date or time.
pub fn has_date_key(obj: &Map<String, Value>) -> bool {
    obj.keys().any(|key| is_date_key(key))
}

fn is_date_key(key: &str) -> bool {
    DATE_KEYS.iter().any(|candidate| candidate.eq_ignore_ascii_case(key))
}

/// Check whether `data` is an array of time-indexed objects: at least two
/// rows, a date key in the first row, and some other key of the first row
/// holding a number in every row.
pub fn is_time_series(data: &Value) -> bool {
    let Some(rows) = object_rows(data) else {
        return false;
    };
    if rows.len() < 2 || !has_date_key(rows[0]) {
        return false;
    }
    rows[0]
        .keys()
        .filter(|key| !is_date_key(key))
        .any(|key| rows.iter().all(|row| row.get(key).is_some_and(Value::is_number)))
}

/// Check whether `data` looks hierarchical: an object with a `children`
/// array, or an array of objects that each reference a `parent`/`parentId`.
pub fn is_hierarchical(data: &Value) -> bool {
    if let Some(obj) = data.as_object() {
        return obj.get("children").is_some_and(Value::is_array);
    }
    object_rows(data).is_some_and(|rows| {
        rows.iter()
            .all(|row| row.contains_key("parent") || row.contains_key("parentId"))
    })
}

/// Return true if more than half of all values across `rows` are numbers.
pub fn is_numeric_heavy<'a, I>(rows: I) -> bool
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    let (total, numeric) = rows
        .into_iter()
        .flat_map(|row| row.values())
        .fold((0usize, 0usize), |(total, numeric), value| {
            (total + 1, numeric + usize::from(value.is_number()))
        });
    total > 0 && numeric * 2 > total
}

/// Borrow `data` as a non-empty list of objects, or `None` if it is not one.
fn object_rows(data: &Value) -> Option<Vec<&Map<String, Value>>> {
    let items = data.as_array()?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(Value::as_object).collect()
}

/// Structural facts about a payload, gathered by the predicates above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeProfile {
    /// Root kind: `object`, `array`, `string`, `number`, `boolean` or `null`
    pub kind: &'static str,
    pub geojson: bool,
    pub tabular: bool,
    pub time_series: bool,
    pub hierarchical: bool,
    pub numeric_heavy: bool,
}

impl ShapeProfile {
    /// Profile a payload.
    pub fn of(data: &Value) -> Self {
        let numeric_heavy = match data {
            Value::Array(_) => object_rows(data).is_some_and(|rows| is_numeric_heavy(rows)),
            Value::Object(obj) => is_numeric_heavy([obj]),
            _ => false,
        };
        Self {
            kind: payload_kind(data),
            geojson: is_geojson(data),
            tabular: is_tabular_default(data),
            time_series: is_time_series(data),
            hierarchical: is_hierarchical(data),
            numeric_heavy,
        }
    }
}
