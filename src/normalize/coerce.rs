//! Total converters from raw JSON values to declared column types.
//!
//! Upstream feeds send numbers as strings, use `"-"` for unknown heights and
//! drop fields entirely. None of that is an error here: anything that does
//! not parse becomes the type's zero value.

use serde_json::{Map, Value};

#[must_use]
pub fn to_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[must_use]
pub fn to_i32(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .or_else(|| n.as_f64().and_then(integral_f64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[must_use]
pub fn to_f64(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[must_use]
pub fn to_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes"
        ),
        _ => false,
    }
}

/// Reads `outer.inner` as a string, e.g. `hTeam.teamId`.
///
/// A bare string in place of the sub-object is taken as the value itself.
#[must_use]
pub fn nested_string(row: &Map<String, Value>, outer: &str, inner: &str) -> String {
    match row.get(outer) {
        Some(Value::Object(sub)) => to_string(sub.get(inner)),
        other => to_string(other),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral_f64(v: f64) -> Option<i32> {
    if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
        Some(v as i32)
    } else {
        None
    }
}
