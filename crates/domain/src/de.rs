//! Lenient deserialization helpers shared by the document types.

use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

/// Decodes `null` the same way as a missing field.
///
/// Postman exports write `null` for empty names, header lists and folders;
/// plain `#[serde(default)]` only covers the missing case.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outer shape of a JSON field kept as raw text.
pub(crate) enum Shape {
    /// A JSON string, unescaped
    Text(String),
    /// A JSON object, decoded for inspection
    Object(Map<String, Value>),
    /// Anything else
    Other,
}

/// Peeks at the first character of a raw value and decodes only the string
/// and object shapes. The raw text itself is left untouched.
pub(crate) fn classify(raw: &RawValue) -> Shape {
    let text = raw.get().trim_start();

    if text.starts_with('"')
        && let Ok(string) = serde_json::from_str(text)
    {
        return Shape::Text(string);
    }

    if text.starts_with('{')
        && let Ok(object) = serde_json::from_str(text)
    {
        return Shape::Object(object);
    }

    Shape::Other
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn raw(text: &str) -> Box<RawValue> {
        RawValue::from_string(text.to_string()).unwrap()
    }

    #[test]
    fn test_classify_shapes() {
        assert!(matches!(classify(&raw(r#""a\"b""#)), Shape::Text(s) if s == "a\"b"));
        assert!(matches!(classify(&raw(r#"{"raw": 1}"#)), Shape::Object(o) if o.len() == 1));
        assert!(matches!(classify(&raw("[1, 2]")), Shape::Other));
        assert!(matches!(classify(&raw("1e3")), Shape::Other));
        assert!(matches!(classify(&raw("true")), Shape::Other));
    }
}
