//! Scalar cell values as they arrive from query results and host state.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single dataset cell or selection member.
///
/// Numbers are kept as `f64` (the host hands them over as JSON numbers).
/// Equality and hashing compare `f64` values bitwise so that values can be
/// deduplicated and selections compared deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Convert a JSON value into a scalar.
    ///
    /// Arrays and objects yield `None`; they can show up in stale host state
    /// and are dropped by the selection normalizer rather than failing.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(ScalarValue::Null),
            serde_json::Value::Bool(flag) => Some(ScalarValue::Bool(*flag)),
            serde_json::Value::Number(number) => number.as_f64().map(ScalarValue::Number),
            serde_json::Value::String(text) => Some(ScalarValue::Text(text.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ScalarValue::Null, ScalarValue::Null) => true,
            (ScalarValue::Bool(left), ScalarValue::Bool(right)) => left == right,
            (ScalarValue::Number(left), ScalarValue::Number(right)) => {
                left.to_bits() == right.to_bits()
            }
            (ScalarValue::Text(left), ScalarValue::Text(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for ScalarValue {}

impl Hash for ScalarValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ScalarValue::Null => 0u8.hash(state),
            ScalarValue::Bool(flag) => {
                1u8.hash(state);
                flag.hash(state);
            }
            ScalarValue::Number(number) => {
                2u8.hash(state);
                number.to_bits().hash(state);
            }
            ScalarValue::Text(text) => {
                3u8.hash(state);
                text.hash(state);
            }
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => Ok(()),
            ScalarValue::Bool(flag) => write!(f, "{flag}"),
            ScalarValue::Number(number) => write!(f, "{}", format_numeric(*number)),
            ScalarValue::Text(text) => f.write_str(text),
        }
    }
}

/// Render a float without a trailing `.0` when it is integral.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Number(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Number(value as f64)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_round_trip() {
        let values = vec![
            ScalarValue::Null,
            ScalarValue::Bool(true),
            ScalarValue::Number(3.5),
            ScalarValue::Text("active".to_string()),
        ];
        let json = serde_json::to_string(&values).expect("serialize scalars");
        assert_eq!(json, r#"[null,true,3.5,"active"]"#);
        let round: Vec<ScalarValue> = serde_json::from_str(&json).expect("deserialize scalars");
        assert_eq!(round, values);
    }

    #[test]
    fn from_json_drops_compound_values() {
        assert_eq!(
            ScalarValue::from_json(&serde_json::json!("x")),
            Some(ScalarValue::Text("x".to_string()))
        );
        assert_eq!(ScalarValue::from_json(&serde_json::json!([1, 2])), None);
        assert_eq!(ScalarValue::from_json(&serde_json::json!({"a": 1})), None);
    }

    #[test]
    fn numeric_display_trims_integral_floats() {
        assert_eq!(ScalarValue::Number(4.0).to_string(), "4");
        assert_eq!(ScalarValue::Number(4.25).to_string(), "4.25");
    }
}
