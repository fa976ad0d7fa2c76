use crate::registry::{InputSchema, PropertySchema, PropertyType, ToolRegistry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// JSON-RPC "Invalid params".
pub const INVALID_PARAMS: i32 = -32602;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field {field} must be of type {expected}")]
    WrongType {
        field: String,
        expected: PropertyType,
    },

    #[error("field {field} must be one of: {}", .allowed.join(", "))]
    NotInEnum { field: String, allowed: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: String,
    pub error: JsonRpcError,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl From<&ValidationError> for JsonRpcErrorResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            error: JsonRpcError {
                code: INVALID_PARAMS,
                message: err.to_string(),
            },
            result: None,
            method: None,
        }
    }
}

/// Checks `args` against the declared schema of `tool_name`.
///
/// Unknown tools and tools without declared properties always pass; the
/// dispatcher reports unknown tools itself.
pub fn validate_tool_input(
    tool_name: &str,
    args: Option<&Map<String, Value>>,
    registry: &ToolRegistry,
) -> Option<JsonRpcErrorResponse> {
    let schema = registry.get(tool_name)?.schema.as_ref()?;
    if !schema.has_properties() {
        return None;
    }

    let empty = Map::new();
    check_arguments(schema, args.unwrap_or(&empty))
        .err()
        .map(|err| JsonRpcErrorResponse::from(&err))
}

/// Required fields first, then each declared property in order. Extra fields are ignored.
pub fn check_arguments(schema: &InputSchema, args: &Map<String, Value>) -> Result<(), ValidationError> {
    // Presence is what counts: an explicit null satisfies `required`.
    if let Some(missing) = schema.required.iter().find(|name| !args.contains_key(*name)) {
        return Err(ValidationError::MissingField(missing.clone()));
    }

    for (name, property) in &schema.properties {
        match args.get(name) {
            None | Some(Value::Null) => continue,
            Some(value) => check_property(name, property, value)?,
        }
    }

    Ok(())
}

fn check_property(name: &str, property: &PropertySchema, value: &Value) -> Result<(), ValidationError> {
    if let Some(kind) = property.kind {
        if !matches_type(kind, value) {
            return Err(ValidationError::WrongType {
                field: name.to_string(),
                expected: kind,
            });
        }
    }

    if let Some(allowed) = &property.enum_values {
        let candidate = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if !allowed.iter().any(|member| *member == candidate) {
            return Err(ValidationError::NotInEnum {
                field: name.to_string(),
                allowed: allowed.clone(),
            });
        }
    }

    Ok(())
}

pub fn matches_type(kind: PropertyType, value: &Value) -> bool {
    match kind {
        PropertyType::String => value.is_string(),
        PropertyType::Integer => match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => true,
            Value::Number(n) => n
                .as_f64()
                .is_some_and(|f| f.is_finite() && f.fract() == 0.0),
            _ => false,
        },
        PropertyType::Number => value.is_number(),
        PropertyType::Boolean => value.is_boolean(),
        PropertyType::Array => value.is_array(),
        PropertyType::Object => value.is_object(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_accepts_whole_floats_only() {
        assert!(matches_type(PropertyType::Integer, &json!(42)));
        assert!(matches_type(PropertyType::Integer, &json!(5.0)));
        assert!(matches_type(PropertyType::Integer, &json!(-3)));
        assert!(!matches_type(PropertyType::Integer, &json!(1.5)));
        assert!(!matches_type(PropertyType::Integer, &json!(0.0001)));
        assert!(!matches_type(PropertyType::Integer, &json!("5")));
        assert!(!matches_type(PropertyType::Integer, &json!(true)));
    }

    #[test]
    fn test_number_and_boolean_are_strict() {
        assert!(matches_type(PropertyType::Number, &json!(1)));
        assert!(matches_type(PropertyType::Number, &json!(1.25)));
        assert!(!matches_type(PropertyType::Number, &json!(true)));
        assert!(!matches_type(PropertyType::Number, &json!("1")));
        assert!(matches_type(PropertyType::Boolean, &json!(false)));
        assert!(!matches_type(PropertyType::Boolean, &json!(1)));
        assert!(!matches_type(PropertyType::Boolean, &json!("true")));
    }

    #[test]
    fn test_array_and_object_are_distinct() {
        assert!(matches_type(PropertyType::Array, &json!([1, 2])));
        assert!(!matches_type(PropertyType::Array, &json!({"a": 1})));
        assert!(matches_type(PropertyType::Object, &json!({"a": 1})));
        assert!(!matches_type(PropertyType::Object, &json!([])));
        assert!(!matches_type(PropertyType::Object, &json!("x")));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingField("window".into()).to_string(),
            "missing required field: window"
        );
        assert_eq!(
            ValidationError::WrongType {
                field: "x".into(),
                expected: PropertyType::Number
            }
            .to_string(),
            "field x must be of type number"
        );
        assert_eq!(
            ValidationError::NotInEnum {
                field: "format".into(),
                allowed: vec!["png".into(), "jpeg".into()]
            }
            .to_string(),
            "field format must be one of: png, jpeg"
        );
    }
}
