// ============================================================================
// JSON Schema Adapter
// Reads numeric constraints from JSON Schema nodes of either dialect
// ============================================================================
//
// Two representations of exclusive bounds exist in the wild:
// - draft-4: `"exclusiveMinimum": true` modifies `"minimum"`
// - draft-6 and later: `"exclusiveMinimum": 5` is itself the bound
//
// Both are folded into the single `NumericSchema` model here so that the
// emitter only ever sees one representation.

use super::errors::{SchemaError, SchemaResult};
use crate::domain::{NumericKind, NumericSchema};
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// Build a `NumericSchema` from a JSON Schema node.
///
/// When both an inclusive bound and a numeric exclusive bound are given, the
/// tighter one wins; on a tie the exclusive bound is kept.
///
/// # Errors
/// - `NotAnObject` if the node is not a JSON object
/// - `NotNumeric` if `type` names a non-numeric type
/// - `InvalidKeyword` if a constraint keyword has the wrong JSON type
/// - `Unrepresentable` if a number exceeds the decimal range
pub fn from_json(node: &Value) -> SchemaResult<NumericSchema> {
    let obj = node.as_object().ok_or(SchemaError::NotAnObject)?;

    let mut schema = NumericSchema::new(numeric_kind(obj)?);

    let minimum = number(obj, "minimum")?;
    let maximum = number(obj, "maximum")?;

    let (lower, lower_exclusive) =
        fold_bound(minimum, exclusive(obj, "exclusiveMinimum")?, |e, m| e >= m);
    let (upper, upper_exclusive) =
        fold_bound(maximum, exclusive(obj, "exclusiveMaximum")?, |e, m| e <= m);

    if let Some(v) = lower {
        schema = schema.with_minimum(v);
    }
    if let Some(v) = upper {
        schema = schema.with_maximum(v);
    }
    schema = schema
        .with_exclusive_minimum(lower_exclusive)
        .with_exclusive_maximum(upper_exclusive);

    if let Some(v) = number(obj, "multipleOf")? {
        schema = schema.with_multiple_of(v);
    }

    Ok(schema)
}

impl TryFrom<&Value> for NumericSchema {
    type Error = SchemaError;

    fn try_from(node: &Value) -> Result<Self, Self::Error> {
        from_json(node)
    }
}

/// Exclusive bound keyword in either dialect
enum Exclusive {
    Absent,
    Flag(bool),
    Bound(Decimal),
}

fn fold_bound(
    inclusive: Option<Decimal>,
    exclusive: Exclusive,
    tighter: impl Fn(Decimal, Decimal) -> bool,
) -> (Option<Decimal>, bool) {
    match (inclusive, exclusive) {
        (bound, Exclusive::Absent) => (bound, false),
        (bound, Exclusive::Flag(flag)) => (bound, flag),
        (Some(bound), Exclusive::Bound(excl)) if !tighter(excl, bound) => (Some(bound), false),
        (_, Exclusive::Bound(excl)) => (Some(excl), true),
    }
}

fn numeric_kind(obj: &Map<String, Value>) -> SchemaResult<NumericKind> {
    let ty = match obj.get("type") {
        None | Some(Value::Null) => return Ok(NumericKind::default()),
        Some(Value::String(ty)) => ty.as_str(),
        // Nullable types: ["integer", "null"]
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|ty| *ty != "null")
            .ok_or_else(|| SchemaError::NotNumeric("null".to_string()))?,
        Some(other) => {
            return Err(SchemaError::InvalidKeyword {
                keyword: "type",
                found: json_type(other),
            })
        }
    };
    let format = obj.get("format").and_then(Value::as_str);

    match (ty, format) {
        ("integer", Some("int64")) => Ok(NumericKind::Int64),
        ("integer", _) => Ok(NumericKind::Int32),
        ("number", Some("float")) => Ok(NumericKind::Float),
        ("number", Some("decimal")) => Ok(NumericKind::Decimal),
        ("number", _) => Ok(NumericKind::Double),
        (other, _) => Err(SchemaError::NotNumeric(other.to_string())),
    }
}

fn number(obj: &Map<String, Value>, keyword: &'static str) -> SchemaResult<Option<Decimal>> {
    match obj.get(keyword) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => to_decimal(n, keyword).map(Some),
        Some(other) => Err(SchemaError::InvalidKeyword {
            keyword,
            found: json_type(other),
        }),
    }
}

fn exclusive(obj: &Map<String, Value>, keyword: &'static str) -> SchemaResult<Exclusive> {
    match obj.get(keyword) {
        None | Some(Value::Null) => Ok(Exclusive::Absent),
        Some(Value::Bool(flag)) => Ok(Exclusive::Flag(*flag)),
        Some(Value::Number(n)) => to_decimal(n, keyword).map(Exclusive::Bound),
        Some(other) => Err(SchemaError::InvalidKeyword {
            keyword,
            found: json_type(other),
        }),
    }
}

fn to_decimal(n: &Number, keyword: &'static str) -> SchemaResult<Decimal> {
    if let Some(i) = n.as_i64() {
        return Ok(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Decimal::from(u));
    }
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| SchemaError::Unrepresentable {
            keyword,
            value: text,
        })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn test_draft4_exclusive_flags() {
        let schema = from_json(&json!({
            "type": "integer",
            "minimum": 5,
            "exclusiveMinimum": true,
            "maximum": 10,
            "exclusiveMaximum": false
        }))
        .unwrap();

        assert_eq!(schema.kind(), NumericKind::Int32);
        assert_eq!(schema.minimum(), Some(d(5)));
        assert!(schema.exclusive_minimum());
        assert_eq!(schema.maximum(), Some(d(10)));
        assert!(!schema.exclusive_maximum());
    }

    #[test]
    fn test_draft6_numeric_exclusive_bounds() {
        let schema = from_json(&json!({
            "type": "number",
            "exclusiveMinimum": 0,
            "exclusiveMaximum": 1.5
        }))
        .unwrap();

        assert_eq!(schema.minimum(), Some(Decimal::ZERO));
        assert!(schema.exclusive_minimum());
        assert_eq!(schema.maximum(), Some(Decimal::new(15, 1)));
        assert!(schema.exclusive_maximum());
    }

    #[test]
    fn test_tighter_bound_wins() {
        // exclusive 3 is tighter than inclusive 1
        let schema = from_json(&json!({ "minimum": 1, "exclusiveMinimum": 3 })).unwrap();
        assert_eq!(schema.minimum(), Some(d(3)));
        assert!(schema.exclusive_minimum());

        // inclusive 8 is tighter than exclusive 2
        let schema = from_json(&json!({ "minimum": 8, "exclusiveMinimum": 2 })).unwrap();
        assert_eq!(schema.minimum(), Some(d(8)));
        assert!(!schema.exclusive_minimum());

        // inclusive 5 is tighter than exclusive 9 for an upper bound
        let schema = from_json(&json!({ "maximum": 5, "exclusiveMaximum": 9 })).unwrap();
        assert_eq!(schema.maximum(), Some(d(5)));
        assert!(!schema.exclusive_maximum());
    }

    #[test]
    fn test_tie_prefers_exclusive() {
        let schema = from_json(&json!({ "maximum": 4, "exclusiveMaximum": 4 })).unwrap();
        assert_eq!(schema.maximum(), Some(d(4)));
        assert!(schema.exclusive_maximum());
    }

    #[test]
    fn test_zero_values_are_kept() {
        let schema = from_json(&json!({ "minimum": 0, "maximum": 0, "multipleOf": 0 })).unwrap();
        assert_eq!(schema.minimum(), Some(Decimal::ZERO));
        assert_eq!(schema.maximum(), Some(Decimal::ZERO));
        assert_eq!(schema.multiple_of(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_kind_from_format() {
        let kind = |node: Value| from_json(&node).unwrap().kind();
        assert_eq!(kind(json!({ "type": "integer", "format": "int64" })), NumericKind::Int64);
        assert_eq!(kind(json!({ "type": "number", "format": "float" })), NumericKind::Float);
        assert_eq!(kind(json!({ "type": "number", "format": "decimal" })), NumericKind::Decimal);
        assert_eq!(kind(json!({ "type": "number" })), NumericKind::Double);
        assert_eq!(kind(json!({ "type": ["integer", "null"] })), NumericKind::Int32);
        assert_eq!(kind(json!({})), NumericKind::Double);
    }

    #[test]
    fn test_fractional_multiple_of() {
        let schema = from_json(&json!({ "multipleOf": 0.01 })).unwrap();
        assert_eq!(schema.multiple_of(), Some(Decimal::new(1, 2)));
    }

    #[test]
    fn test_errors() {
        assert_eq!(from_json(&json!(5)), Err(SchemaError::NotAnObject));
        assert_eq!(
            from_json(&json!({ "type": "string" })),
            Err(SchemaError::NotNumeric("string".to_string()))
        );
        assert_eq!(
            from_json(&json!({ "minimum": "5" })),
            Err(SchemaError::InvalidKeyword {
                keyword: "minimum",
                found: "string"
            })
        );
        assert_eq!(
            from_json(&json!({ "exclusiveMaximum": [] })),
            Err(SchemaError::InvalidKeyword {
                keyword: "exclusiveMaximum",
                found: "array"
            })
        );
        assert!(matches!(
            from_json(&json!({ "maximum": 1e300 })),
            Err(SchemaError::Unrepresentable { keyword: "maximum", .. })
        ));
    }

    #[test]
    fn test_try_from() {
        let node = json!({ "type": "integer", "minimum": 1 });
        let schema = NumericSchema::try_from(&node).unwrap();
        assert_eq!(schema.minimum(), Some(d(1)));
    }
}
