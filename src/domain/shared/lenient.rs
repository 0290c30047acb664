//! Field deserializers for loosely typed request bodies.
//!
//! Used with `#[serde(default, deserialize_with = "...")]`; a wrongly typed
//! field becomes absent instead of failing the whole body.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept strings, numbers and booleans as text; anything else is absent
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accept finite numbers and numeric strings; anything else is absent
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}
