use serde_json::Value;

/// True when the text has at least one cased character and none of them are uppercase.
///
/// Text without any cased character ("", "123", "ˈ") is not lowercase.
/// Titlecase letters such as 'ǅ' count as not lowercase.
pub fn is_lowercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_uppercase() || is_titlecase(c) {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// Neither upper nor lower, yet changed by case mapping
fn is_titlecase(c: char) -> bool {
    !c.is_lowercase() && !c.is_uppercase() && !c.to_lowercase().eq(std::iter::once(c))
}

/// Truthiness of a JSON value: null, false, zero and empty containers are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
