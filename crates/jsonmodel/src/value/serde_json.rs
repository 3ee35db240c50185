use serde_json::Value;

use crate::JsonValue;

impl From<Value> for JsonValue {
    /// Classify a parsed JSON tree.
    ///
    /// Values without a variant of their own fall back to [`JsonValue::Null`].
    fn from(value: Value) -> Self {
        classify(value).unwrap_or(JsonValue::Null)
    }
}

/// Ordered type tests: object, integer, string, array, then `null`.
///
/// Returns `None` for anything the tests do not recognize.
fn classify(value: Value) -> Option<JsonValue> {
    match value {
        Value::Object(object) => Some(JsonValue::Object(object)),
        Value::Number(number) => number.as_i64().map(JsonValue::Number),
        Value::String(string) => Some(JsonValue::String(string.into_boxed_str())),
        Value::Array(items) => {
            let items: Vec<Option<JsonValue>> = items.into_iter().map(classify).collect();
            Some(JsonValue::Array(items.into_boxed_slice()))
        }
        Value::Null => Some(JsonValue::Null),
        Value::Bool(_) => None,
    }
}

fn is_unclassified(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Number(number) => !number.is_i64(),
        _ => false,
    }
}

impl From<&JsonValue> for Value {
    /// Absent array elements are rendered as `null`.
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| item.as_ref().map_or(Value::Null, Value::from))
                    .collect(),
            ),
            JsonValue::Object(object) => Value::Object(object.clone()),
            JsonValue::Null => Value::Null,
            JsonValue::Number(number) => Value::from(*number),
            JsonValue::String(string) => Value::String(string.to_string()),
        }
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Number(l), JsonValue::Number(r)) => l.as_i64() == Some(*r),
        (Value::String(l), JsonValue::String(r)) => l.as_str() == &**r,
        (Value::Object(l), JsonValue::Object(r)) => l == r,
        (Value::Array(l), JsonValue::Array(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (l, r) in l.iter().zip(r.iter()) {
                let matches = match r {
                    Some(r) => eq(l, r),
                    None => is_unclassified(l),
                };
                if !matches {
                    return false;
                }
            }
            true
        }
        _ => false,
    }
}
