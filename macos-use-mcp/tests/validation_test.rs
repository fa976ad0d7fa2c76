use macos_use_mcp::registry::{ToolDefinition, ToolRegistry};
use macos_use_mcp::validation::{validate_tool_input, INVALID_PARAMS};
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn error_message(tool: &str, args: Value) -> Option<String> {
    let registry = ToolRegistry::builtin();
    validate_tool_input(tool, Some(&object(args)), &registry).map(|response| {
        assert_eq!(response.jsonrpc, "2.0");
        assert_eq!(response.error.code, INVALID_PARAMS);
        response.error.message
    })
}

#[test]
fn test_missing_required_field() {
    assert_eq!(
        error_message("get_window", json!({})).as_deref(),
        Some("missing required field: name")
    );
}

#[test]
fn test_absent_argument_object_is_checked_as_empty() {
    let registry = ToolRegistry::builtin();
    let response = validate_tool_input("get_window", None, &registry).unwrap();
    assert_eq!(response.error.message, "missing required field: name");

    // Nothing required: no arguments at all is fine.
    assert!(validate_tool_input("list_displays", None, &registry).is_none());
}

#[test]
fn test_explicit_null_satisfies_required() {
    assert_eq!(error_message("get_window", json!({"name": null})), None);
}

#[test]
fn test_integer_fields_accept_whole_floats() {
    assert_eq!(error_message("list_windows", json!({"page_size": 5.0})), None);
    assert_eq!(error_message("list_windows", json!({"page_size": 5})), None);
    assert_eq!(
        error_message("list_windows", json!({"page_size": 1.5})).as_deref(),
        Some("field page_size must be of type integer")
    );
}

#[test]
fn test_wrong_type() {
    assert_eq!(
        error_message("click", json!({"x": "10", "y": 20})).as_deref(),
        Some("field x must be of type number")
    );
    assert_eq!(
        error_message("find_elements", json!({"selector": "AXButton"})).as_deref(),
        Some("field selector must be of type object")
    );
}

#[test]
fn test_enum_membership() {
    assert_eq!(error_message("click", json!({"x": 1, "y": 2, "button": "left"})), None);
    assert_eq!(
        error_message("click", json!({"x": 1, "y": 2, "button": "side"})).as_deref(),
        Some("field button must be one of: left, right, middle")
    );
}

#[test]
fn test_extra_fields_are_ignored() {
    assert_eq!(
        error_message("get_window", json!({"name": "applications/1/windows/2", "verbose": true})),
        None
    );
}

#[test]
fn test_unknown_tool_passes_validation() {
    assert_eq!(error_message("no_such_tool", json!({"anything": 1})), None);
}

#[test]
fn test_error_response_serializes_as_json_rpc() {
    let registry = ToolRegistry::builtin();
    let response = validate_tool_input("get_window", Some(&Map::new()), &registry).unwrap();
    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(
        wire,
        json!({
            "jsonrpc": "2.0",
            "error": {"code": -32602, "message": "missing required field: name"}
        })
    );
}

#[test]
fn test_tools_without_schema_accept_anything() {
    let registry = ToolRegistry::new(vec![
        ToolDefinition::without_schema("ping", "No arguments declared"),
        ToolDefinition::new(
            "loose",
            "Loosely typed schema",
            json!({
                "type": "object",
                "properties": {"mode": {"type": "string", "enum": ["a", 1, "b"]}},
                "required": ["mode", 7]
            }),
        ),
    ]);

    assert!(validate_tool_input("ping", Some(&object(json!({"x": [1, 2]}))), &registry).is_none());
    assert!(validate_tool_input("loose", Some(&object(json!({"mode": "b"}))), &registry).is_none());

    let response = validate_tool_input("loose", Some(&object(json!({"mode": "c"}))), &registry).unwrap();
    assert_eq!(response.error.message, "field mode must be one of: a, b");
}
