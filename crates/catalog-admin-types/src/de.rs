//! Lenient field decoders for values the server may send in several shapes.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// `null` and missing strings both decode to an empty string.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Blank strings decode to `None`.
pub(crate) fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Accepts a JSON number, a numeric string, an empty string or `null`.
/// Anything that does not parse decodes to `None` so one bad record never
/// hides the rest of a collection.
pub(crate) fn number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s,
        _ => return Ok(None),
    };
    Ok(text.trim().parse::<T>().ok())
}

/// Specification maps arrive as objects, as JSON text, or as `null`.
/// Text that is not a JSON object decodes to an empty map; forms check the
/// object shape again before anything is written back.
pub(crate) fn json_object<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => map,
        Some(Value::String(text)) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        },
        _ => Map::new(),
    };
    Ok(map)
}
